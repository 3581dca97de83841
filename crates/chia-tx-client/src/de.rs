pub(crate) mod hex_string_to_bytes32 {
    use chia_protocol::Bytes32;
    use hex::FromHex;
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Bytes32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = <[u8; 32]>::from_hex(s.strip_prefix("0x").unwrap_or(&s))
            .map_err(serde::de::Error::custom)?;
        Ok(Bytes32::new(bytes))
    }
}
