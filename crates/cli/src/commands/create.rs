use waffle_sdk::ops::WaffleOps;

/// Create a waffle.
#[derive(Debug, clap::Args)]
pub struct Create {
    /// Name of the waffle.
    name: String,
    /// Let the program check the name instead of checking it locally.
    #[arg(long)]
    unchecked: bool,
    /// Send without preflight simulation.
    #[arg(long)]
    skip_preflight: bool,
}

impl super::Command for Create {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let tx = if self.unchecked {
            client.create_waffle_unchecked(&self.name)?
        } else {
            client.create_waffle(&self.name)?
        };
        let address = *tx.get_output();
        let signature = if self.skip_preflight {
            tx.send_without_preflight().await?
        } else {
            tx.send().await?
        };
        tracing::info!(%signature, %address, "created waffle `{}`", self.name);
        println!("{signature}");

        let waffle = client.waffle(&address).await?;
        println!("{}", ctx.config().output().display_waffle(&address, &waffle)?);
        Ok(())
    }
}
