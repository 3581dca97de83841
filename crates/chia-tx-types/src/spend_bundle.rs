use chia_bls::Signature;
use chia_streamable_macro::streamable;

use crate::CoinSolution;

/// A list of [`CoinSolution`] values authorized together by one aggregated signature.
///
/// Bundles that haven't been signed yet carry the identity element, which is what
/// [`Signature::default`] returns.
#[streamable]
pub struct SpendBundle {
    pub coin_solutions: Vec<CoinSolution>,
    pub aggregated_signature: Signature,
}

impl SpendBundle {
    pub fn unsigned(coin_solutions: Vec<CoinSolution>) -> Self {
        Self::new(coin_solutions, Signature::default())
    }

    pub fn is_unsigned(&self) -> bool {
        self.aggregated_signature == Signature::default()
    }

    /// Returns a copy of this bundle with the signature replaced.
    #[must_use]
    pub fn with_signature(&self, aggregated_signature: Signature) -> Self {
        Self::new(self.coin_solutions.clone(), aggregated_signature)
    }
}

#[cfg(test)]
mod tests {
    use chia_bls::{sign, SecretKey};
    use chia_protocol::{Bytes32, Coin, Program};

    use super::*;

    fn coin_solution(amount: u64) -> CoinSolution {
        CoinSolution::new(
            Coin::new(Bytes32::new([1; 32]), Bytes32::new([2; 32]), amount),
            Program::new(vec![0x80].into()),
        )
    }

    #[test]
    fn test_unsigned_bundle() {
        let bundle = SpendBundle::unsigned(vec![coin_solution(1)]);
        assert!(bundle.is_unsigned());
        assert_eq!(bundle.aggregated_signature, Signature::default());
    }

    #[test]
    fn test_with_signature_leaves_original() {
        let sk = SecretKey::from_seed(&[3; 32]);
        let signature = sign(&sk, b"message");

        let unsigned = SpendBundle::unsigned(vec![coin_solution(1)]);
        let signed = unsigned.with_signature(signature.clone());

        assert!(unsigned.is_unsigned());
        assert!(!signed.is_unsigned());
        assert_eq!(signed.coin_solutions, unsigned.coin_solutions);
        assert_eq!(signed.aggregated_signature, signature);
    }
}
