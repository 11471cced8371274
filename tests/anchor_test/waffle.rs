use solana_sdk::signature::Signature;
use waffle_programs::program_error::WaffleMakerError;
use waffle_sdk::{ops::WaffleOps, pda::find_waffle_address, Waffle};

use crate::anchor_test::setup::current_deployment;

#[tokio::test]
async fn create_waffle() -> eyre::Result<()> {
    let deployment = current_deployment().await?;

    let span = tracing::info_span!("create_waffle");
    let _enter = span.enter();

    let client = deployment.client()?;
    let name = "nom-nom";
    let (address, bump) = find_waffle_address(name, client.waffle_program_id())?;
    tracing::info!(%address, bump, "derived waffle address");

    let tx = client.create_waffle(name)?;
    assert_eq!(*tx.get_output(), address);
    let signature = tx.send().await?;
    assert_ne!(signature, Signature::default());
    tracing::info!(%signature, "created waffle `{name}`");

    let waffle = client.waffle(&address).await?;
    println!("{waffle}");
    assert_eq!(waffle.name, name);
    assert_eq!(waffle.author, client.payer());

    let account = client.rpc().get_account(&address).await?;
    assert_eq!(account.owner, *client.waffle_program_id());
    assert_eq!(account.data.len(), Waffle::space_for(name));

    Ok(())
}

#[tokio::test]
async fn create_waffle_twice() -> eyre::Result<()> {
    let deployment = current_deployment().await?;

    let span = tracing::info_span!("create_waffle_twice");
    let _enter = span.enter();

    let client = deployment.client()?;
    let name = deployment.random_name("twice").await;

    let signature = client.create_waffle(&name)?.send().await?;
    tracing::info!(%signature, "created waffle `{name}`");
    let first = client
        .waffle_by_name(&name)
        .await?
        .ok_or_else(|| eyre::eyre!("waffle `{name}` not found"))?;

    // A different compute unit price keeps the second transaction distinct.
    let signature = client
        .create_waffle(&name)?
        .send_with_options(false, Some(60_000), Default::default())
        .await?;
    tracing::info!(%signature, "created waffle `{name}` again");

    let second = client
        .waffle_by_name(&name)
        .await?
        .ok_or_else(|| eyre::eyre!("waffle `{name}` not found"))?;
    assert_eq!(second.name, first.name);
    assert_eq!(second.author, first.author);

    Ok(())
}

#[tokio::test]
async fn reject_invalid_names() -> eyre::Result<()> {
    let deployment = current_deployment().await?;

    let span = tracing::info_span!("reject_invalid_names");
    let _enter = span.enter();

    let client = deployment.client()?;

    let short = "a";
    assert!(client.create_waffle(short).is_err());
    let err = client
        .create_waffle_unchecked(short)?
        .send()
        .await
        .expect_err("should throw error when the name is too short");
    assert_eq!(
        waffle_sdk::Error::from(err).anchor_error_code(),
        Some(WaffleMakerError::NameEmpty.into())
    );
    assert!(client.waffle_by_name(short).await?.is_none());

    let long = "w".repeat(30);
    assert!(client.create_waffle(&long).is_err());
    let err = client
        .create_waffle_unchecked(&long)?
        .send()
        .await
        .expect_err("should throw error when the name is too long");
    assert_eq!(
        waffle_sdk::Error::from(err).anchor_error_code(),
        Some(WaffleMakerError::NameTooLong.into())
    );
    assert!(client.waffle_by_name(&long).await?.is_none());

    Ok(())
}
