use std::future::Future;

use chia_tx_driver::{decode_spend_bundle_hex, encode_spend_bundle_hex};
use chia_tx_types::SpendBundle;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    check_success, ClientError, GetNextAddressResponse, GetSpendableCoinsResponse, PushTxResponse,
    SignSpendBundleResponse, SpendableCoin,
};

/// The wallet endpoints used to sign and submit spend bundles, and to find coins to spend.
///
/// Implementors only provide [`WalletRpcClient::make_post_request`]. Spend bundles are sent
/// and received as the hex encoding of their canonical serialization.
pub trait WalletRpcClient {
    fn base_url(&self) -> &str;

    fn make_post_request<R, B>(
        &self,
        endpoint: &str,
        body: B,
    ) -> impl Future<Output = Result<R, ClientError>>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send;

    /// Asks the wallet to sign every spend in the bundle it has the keys for.
    fn sign_spend_bundle(
        &self,
        spend_bundle: &SpendBundle,
    ) -> impl Future<Output = Result<SpendBundle, ClientError>> {
        let encoded = encode_spend_bundle_hex(spend_bundle);

        async move {
            let encoded = encoded?;
            let body = serde_json::json!({ "spend_bundle": encoded });
            let response: SignSpendBundleResponse =
                self.make_post_request("sign_spend_bundle", body).await?;
            check_success(response.success, response.error)?;

            let signed = response.spend_bundle.ok_or_else(|| {
                ClientError::MalformedResponse("missing signed spend bundle".to_string())
            })?;

            tracing::info!("wallet signed a spend bundle");
            Ok(decode_spend_bundle_hex(&signed)?)
        }
    }

    /// Submits a signed bundle to the network through the wallet.
    fn push_spend_bundle(
        &self,
        spend_bundle: &SpendBundle,
    ) -> impl Future<Output = Result<(), ClientError>> {
        let encoded = encode_spend_bundle_hex(spend_bundle);

        async move {
            let encoded = encoded?;
            let body = serde_json::json!({ "spend_bundle": encoded });
            let response: PushTxResponse = self.make_post_request("push_tx", body).await?;
            check_success(response.success, response.error)?;

            tracing::info!(
                "wallet accepted the spend bundle with status {}",
                response.status.as_deref().unwrap_or("unknown")
            );
            Ok(())
        }
    }

    fn get_spendable_coins(
        &self,
        wallet_id: u32,
    ) -> impl Future<Output = Result<Vec<SpendableCoin>, ClientError>> {
        async move {
            let response: GetSpendableCoinsResponse = self
                .make_post_request(
                    "get_spendable_coins",
                    serde_json::json!({ "wallet_id": wallet_id }),
                )
                .await?;
            check_success(response.success, response.error)?;

            Ok(response.coins.unwrap_or_default())
        }
    }

    fn get_next_address(
        &self,
        wallet_id: u32,
    ) -> impl Future<Output = Result<String, ClientError>> {
        async move {
            let response: GetNextAddressResponse = self
                .make_post_request(
                    "get_next_address",
                    serde_json::json!({ "wallet_id": wallet_id, "new_address": false }),
                )
                .await?;
            check_success(response.success, response.error)?;

            response
                .address
                .ok_or_else(|| ClientError::MalformedResponse("no address".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use chia_bls::{sign, SecretKey};
    use chia_protocol::{Bytes32, Coin, Program};
    use chia_tx_types::CoinSolution;

    use crate::MockWalletRpcClient;

    use super::*;

    fn bundle() -> SpendBundle {
        SpendBundle::unsigned(vec![CoinSolution::new(
            Coin::new(Bytes32::new([1; 32]), Bytes32::new([2; 32]), 3),
            Program::new(vec![0xff, 0x01, 0xff, 0x80, 0x80].into()),
        )])
    }

    #[tokio::test]
    async fn test_sign_spend_bundle() -> anyhow::Result<()> {
        let unsigned = bundle();
        let signed = unsigned.with_signature(sign(&SecretKey::from_seed(&[1; 32]), b"message"));

        let mut client = MockWalletRpcClient::new();
        client.mock_response(
            "http://api.example.com/sign_spend_bundle",
            &serde_json::json!({
                "success": true,
                "spend_bundle": encode_spend_bundle_hex(&signed)?,
            })
            .to_string(),
        );

        assert_eq!(client.sign_spend_bundle(&unsigned).await?, signed);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://api.example.com/sign_spend_bundle");
        assert_eq!(
            requests[0].1["spend_bundle"],
            encode_spend_bundle_hex(&unsigned)?
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_spend_bundle_malformed() {
        let mut client = MockWalletRpcClient::new();
        client.mock_response(
            "http://api.example.com/sign_spend_bundle",
            r#"{"success": true, "spend_bundle": "00"}"#,
        );

        assert!(matches!(
            client.sign_spend_bundle(&bundle()).await,
            Err(ClientError::Driver(_))
        ));
    }

    #[tokio::test]
    async fn test_push_spend_bundle_rejected() {
        let mut client = MockWalletRpcClient::new();
        client.mock_response(
            "http://api.example.com/push_tx",
            r#"{"success": false, "error": "double spend"}"#,
        );

        let Err(ClientError::Rejected(error)) = client.push_spend_bundle(&bundle()).await else {
            panic!("expected the push to be rejected");
        };
        assert_eq!(error, "double spend");
    }

    #[tokio::test]
    async fn test_push_spend_bundle() -> anyhow::Result<()> {
        let mut client = MockWalletRpcClient::new();
        client.mock_response(
            "http://api.example.com/push_tx",
            r#"{"success": true, "status": "SUCCESS"}"#,
        );

        client.push_spend_bundle(&bundle()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_get_spendable_coins() -> anyhow::Result<()> {
        let mut client = MockWalletRpcClient::new();
        let response = serde_json::json!({
            "success": true,
            "coins": [{
                "coin": {
                    "parent_coin_info": format!("0x{}", "11".repeat(32)),
                    "puzzle_hash": "22".repeat(32),
                    "amount": 42,
                },
                "puzzle": "0x01",
            }],
        });
        client.mock_response(
            "http://api.example.com/get_spendable_coins",
            &response.to_string(),
        );

        let coins = client.get_spendable_coins(1).await?;
        assert_eq!(coins.len(), 1);
        assert_eq!(
            Coin::from(coins[0].coin),
            Coin::new(Bytes32::new([0x11; 32]), Bytes32::new([0x22; 32]), 42)
        );
        assert_eq!(coins[0].puzzle.as_deref(), Some("0x01"));
        assert_eq!(client.get_requests()[0].1["wallet_id"], 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_next_address() -> anyhow::Result<()> {
        let mut client = MockWalletRpcClient::new();
        client.mock_response(
            "http://api.example.com/get_next_address",
            r#"{"success": true, "address": "xch1example"}"#,
        );

        assert_eq!(client.get_next_address(1).await?, "xch1example");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_mock_response() {
        let client = MockWalletRpcClient::new();
        assert!(client.get_next_address(1).await.is_err());
    }
}
