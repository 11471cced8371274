use waffle_sdk::pda::find_waffle_address;

/// Print the address of a waffle.
#[derive(Debug, clap::Args)]
pub struct Address {
    /// Name of the waffle.
    name: String,
}

impl super::Command for Address {
    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let (address, bump) = find_waffle_address(&self.name, ctx.config().waffle_program_id())?;
        tracing::debug!(%address, bump, "derived waffle address");
        println!("{address}");
        Ok(())
    }
}
