use std::time::Duration;

use solana_client::{
    client_error::ClientError, nonblocking::rpc_client::RpcClient,
    rpc_client::SerializableTransaction, rpc_config::RpcSendTransactionConfig,
    rpc_request::RpcError,
};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use tokio::time::sleep;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Send a transaction and wait until it lands or its blockhash expires.
pub(crate) trait SendAndConfirm {
    async fn send_and_confirm_transaction_with_config(
        &self,
        transaction: &impl SerializableTransaction,
        config: RpcSendTransactionConfig,
    ) -> Result<Signature, ClientError>;
}

impl SendAndConfirm for RpcClient {
    async fn send_and_confirm_transaction_with_config(
        &self,
        transaction: &impl SerializableTransaction,
        config: RpcSendTransactionConfig,
    ) -> Result<Signature, ClientError> {
        let signature = self
            .send_transaction_with_config(transaction, config)
            .await?;
        let recent_blockhash = *transaction.get_recent_blockhash();

        loop {
            match self.get_signature_status(&signature).await? {
                Some(Ok(())) => return Ok(signature),
                Some(Err(err)) => return Err(err.into()),
                None => {
                    if !self
                        .is_blockhash_valid(&recent_blockhash, CommitmentConfig::processed())
                        .await?
                    {
                        break;
                    }
                    tracing::trace!(%signature, "waiting for confirmation");
                    sleep(POLL_INTERVAL).await;
                }
            }
        }

        Err(RpcError::ForUser(
            "unable to confirm transaction: the blockhash expired before the transaction landed"
                .to_string(),
        )
        .into())
    }
}
