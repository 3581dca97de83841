use chia_traits::Streamable;
use chia_tx_types::SpendBundle;

use crate::DriverError;

/// Serializes a [`SpendBundle`] with the canonical streamable encoding.
pub fn encode_spend_bundle(spend_bundle: &SpendBundle) -> Result<Vec<u8>, DriverError> {
    spend_bundle
        .to_bytes()
        .map_err(|error| DriverError::MalformedBundle(error.to_string()))
}

/// Parses a [`SpendBundle`] from its canonical encoding.
/// The whole input has to be consumed, so trailing bytes are rejected as well.
pub fn decode_spend_bundle(bytes: &[u8]) -> Result<SpendBundle, DriverError> {
    SpendBundle::from_bytes(bytes).map_err(|error| DriverError::MalformedBundle(error.to_string()))
}

pub fn encode_spend_bundle_hex(spend_bundle: &SpendBundle) -> Result<String, DriverError> {
    Ok(hex::encode(encode_spend_bundle(spend_bundle)?))
}

/// Accepts the hex encoding with or without a `0x` prefix.
pub fn decode_spend_bundle_hex(text: &str) -> Result<SpendBundle, DriverError> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    let bytes =
        hex::decode(text).map_err(|error| DriverError::MalformedBundle(error.to_string()))?;
    decode_spend_bundle(&bytes)
}

#[cfg(test)]
mod tests {
    use chia_bls::{sign, SecretKey, Signature};
    use chia_protocol::{Bytes32, Coin, Program};
    use chia_tx_types::CoinSolution;
    use hex_literal::hex;
    use rstest::rstest;

    use super::*;

    fn bundle() -> SpendBundle {
        SpendBundle::unsigned(vec![CoinSolution::new(
            Coin::new(Bytes32::new([1; 32]), Bytes32::new([2; 32]), 1000),
            Program::new(hex!("ff01ff8080").to_vec().into()),
        )])
    }

    #[test]
    fn test_encoding_layout() -> anyhow::Result<()> {
        let bytes = encode_spend_bundle(&bundle())?;

        // Length prefix, coin, program, then the identity signature.
        assert_eq!(bytes.len(), 4 + 72 + 5 + 96);
        assert_eq!(bytes[..4], [0, 0, 0, 1]);
        assert_eq!(bytes[4..36], [1; 32]);
        assert_eq!(bytes[36..68], [2; 32]);
        assert_eq!(bytes[68..76], 1000_u64.to_be_bytes());
        assert_eq!(bytes[76..81], hex!("ff01ff8080"));
        assert_eq!(bytes[81], 0xc0);
        assert!(bytes[82..].iter().all(|&byte| byte == 0));

        Ok(())
    }

    #[test]
    fn test_round_trip() -> anyhow::Result<()> {
        let unsigned = bundle();
        let bytes = encode_spend_bundle(&unsigned)?;
        assert_eq!(decode_spend_bundle(&bytes)?, unsigned);

        let signature = sign(&SecretKey::from_seed(&[1; 32]), b"message");
        let signed = unsigned.with_signature(signature);
        assert_eq!(decode_spend_bundle(&encode_spend_bundle(&signed)?)?, signed);

        let empty = SpendBundle::unsigned(Vec::new());
        assert_eq!(
            encode_spend_bundle(&empty)?,
            [&[0, 0, 0, 0][..], &Signature::default().to_bytes()].concat()
        );
        assert_eq!(decode_spend_bundle(&encode_spend_bundle(&empty)?)?, empty);

        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> anyhow::Result<()> {
        let text = encode_spend_bundle_hex(&bundle())?;
        assert_eq!(decode_spend_bundle_hex(&text)?, bundle());
        assert_eq!(decode_spend_bundle_hex(&format!("0x{text}"))?, bundle());
        Ok(())
    }

    #[rstest]
    #[case::truncated_prefix(10)]
    #[case::missing_signature(81)]
    #[case::partial_signature(100)]
    fn test_truncated(#[case] len: usize) -> anyhow::Result<()> {
        let bytes = encode_spend_bundle(&bundle())?;
        assert!(matches!(
            decode_spend_bundle(&bytes[..len]),
            Err(DriverError::MalformedBundle(_))
        ));
        Ok(())
    }

    #[test]
    fn test_trailing_bytes() -> anyhow::Result<()> {
        let mut bytes = encode_spend_bundle(&bundle())?;
        bytes.push(0);
        assert!(matches!(
            decode_spend_bundle(&bytes),
            Err(DriverError::MalformedBundle(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_program() -> anyhow::Result<()> {
        let mut bytes = encode_spend_bundle(&bundle())?;
        // An unterminated pair instead of the serialized program.
        bytes[76..81].fill(0xff);
        assert!(matches!(
            decode_spend_bundle(&bytes),
            Err(DriverError::MalformedBundle(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_signature() -> anyhow::Result<()> {
        let mut bytes = encode_spend_bundle(&bundle())?;
        let len = bytes.len();
        bytes[len - 96..].fill(0xff);
        assert!(matches!(
            decode_spend_bundle(&bytes),
            Err(DriverError::MalformedBundle(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            decode_spend_bundle_hex("0xzz"),
            Err(DriverError::MalformedBundle(_))
        ));
    }
}
