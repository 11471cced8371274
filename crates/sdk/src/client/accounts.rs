use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_config::RpcAccountInfoConfig, rpc_response::Response,
};
use solana_sdk::{account::Account, pubkey::Pubkey};
use waffle_programs::anchor_lang::AccountDeserialize;
use waffle_solana_utils::utils::WithSlot;

/// Base64 encoding, with the client's commitment unless the config sets one.
fn account_info_config(
    mut config: RpcAccountInfoConfig,
    client: &RpcClient,
) -> RpcAccountInfoConfig {
    config.encoding = Some(UiAccountEncoding::Base64);
    config.commitment.get_or_insert_with(|| client.commitment());
    config
}

/// Get account with context.
///
/// The value inside the context will be `None` if the account does not exist.
pub async fn get_account_with_context(
    client: &RpcClient,
    address: &Pubkey,
    config: RpcAccountInfoConfig,
) -> crate::Result<WithSlot<Option<Account>>> {
    let config = account_info_config(config, client);
    tracing::debug!(%address, ?config, "fetching account");
    let Response { context, value } = client.get_account_with_config(address, config).await?;
    Ok(WithSlot::new(context.slot, value))
}

/// Return the decoded account at the given address, along with context.
///
/// The value inside the context will be `None` if the account does not exist.
pub async fn account_with_context<T: AccountDeserialize>(
    client: &RpcClient,
    address: &Pubkey,
    config: RpcAccountInfoConfig,
) -> crate::Result<WithSlot<Option<T>>> {
    let account = get_account_with_context(client, address, config).await?;
    account
        .map(|account| {
            account
                .map(|account| T::try_deserialize(&mut account.data.as_slice()))
                .transpose()
        })
        .transpose()
        .map_err(crate::Error::from)
}

#[cfg(test)]
mod tests {
    use solana_sdk::commitment_config::CommitmentConfig;

    use super::*;

    #[test]
    fn accounts_are_fetched_as_base64() {
        let client = RpcClient::new_with_commitment(
            "http://127.0.0.1:8899".to_string(),
            CommitmentConfig::confirmed(),
        );

        let config = account_info_config(
            RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base58),
                ..Default::default()
            },
            &client,
        );
        assert_eq!(config.encoding, Some(UiAccountEncoding::Base64));
        assert_eq!(config.commitment, Some(CommitmentConfig::confirmed()));

        let config = account_info_config(
            RpcAccountInfoConfig {
                commitment: Some(CommitmentConfig::finalized()),
                ..Default::default()
            },
            &client,
        );
        assert_eq!(config.commitment, Some(CommitmentConfig::finalized()));
    }
}
