//! Deserializers for the hex strings used throughout transaction descriptions.
//! Every one of them accepts an optional `0x` prefix.

use hex::FromHex;

fn strip_prefix(text: &str) -> &str {
    text.strip_prefix("0x").unwrap_or(text)
}

fn invalid<E: serde::de::Error>(what: &str, text: &str, error: impl std::fmt::Display) -> E {
    E::custom(format!("invalid {what} {text:?}: {error}"))
}

pub(crate) fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    Vec::<u8>::from_hex(strip_prefix(text))
}

pub(crate) mod hex_string_to_bytes32 {
    use chia_protocol::Bytes32;
    use hex::FromHex;
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Bytes32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = <[u8; 32]>::from_hex(super::strip_prefix(&s))
            .map_err(|error| super::invalid::<D::Error>("hash", &s, error))?;
        Ok(Bytes32::new(bytes))
    }
}

pub(crate) mod hex_string_to_public_key {
    use chia_bls::PublicKey;
    use hex::FromHex;
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<PublicKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = <[u8; 48]>::from_hex(super::strip_prefix(&s))
            .map_err(|error| super::invalid::<D::Error>("pubkey", &s, error))?;
        PublicKey::from_bytes(&bytes).map_err(|error| super::invalid("pubkey", &s, error))
    }
}
