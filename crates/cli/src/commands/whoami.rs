/// Print the wallet address.
#[derive(Debug, clap::Args)]
pub struct Whoami {}

impl super::Command for Whoami {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let payer = ctx.client()?.payer();
        println!("{payer}");
        Ok(())
    }
}
