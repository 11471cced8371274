use waffle_sdk::serde::StringPubkey;

/// Fetch a waffle by name or by address.
#[derive(Debug, clap::Args)]
pub struct Get {
    /// Name of the waffle.
    #[arg(required_unless_present = "address")]
    name: Option<String>,
    /// Address of the waffle account.
    #[arg(long, conflicts_with = "name")]
    address: Option<StringPubkey>,
}

impl super::Command for Get {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let address = match (&self.address, &self.name) {
            (Some(address), _) => **address,
            (None, Some(name)) => client.find_waffle_address(name)?,
            (None, None) => eyre::bail!("either a name or `--address` is required"),
        };
        let waffle = client.waffle(&address).await?;
        println!("{}", ctx.config().output().display_waffle(&address, &waffle)?);
        Ok(())
    }
}
