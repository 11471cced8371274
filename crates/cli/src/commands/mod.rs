use std::{ops::Deref, path::Path};

use address::Address;
use create::Create;
use enum_dispatch::enum_dispatch;
use eyre::OptionExt;
use get::Get;
use init_config::InitConfig;
use waffle_sdk::{solana_utils::signer::SignerRef, Client, ClientOptions};
use whoami::Whoami;

use crate::config::Config;

mod address;
mod create;
mod get;
mod init_config;
mod whoami;

/// Commands.
#[enum_dispatch]
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Initialize config file.
    InitConfig(InitConfig),
    /// Print the wallet address.
    Whoami(Whoami),
    /// Print the address of the waffle with the given name.
    Address(Address),
    /// Create a waffle.
    Create(Create),
    /// Fetch and print a waffle.
    Get(Get),
}

#[enum_dispatch(Commands)]
pub(crate) trait Command {
    fn is_client_required(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()>;
}

/// The client used by commands.
pub struct CommandClient(Client<SignerRef>);

impl CommandClient {
    pub(crate) fn new(config: &Config) -> eyre::Result<Self> {
        let payer = config.wallet()?;
        let client = Client::new_with_options(
            config.cluster(),
            payer,
            ClientOptions::builder()
                .waffle_program_id(Some(*config.waffle_program_id()))
                .commitment(config.commitment_config())
                .build(),
        )?;
        Ok(Self(client))
    }
}

impl Deref for CommandClient {
    type Target = Client<SignerRef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Execution context.
pub(crate) struct Context<'a> {
    config_path: &'a Path,
    config: &'a Config,
    client: Option<&'a CommandClient>,
}

impl<'a> Context<'a> {
    pub(super) fn new(
        config_path: &'a Path,
        config: &'a Config,
        client: Option<&'a CommandClient>,
    ) -> Self {
        Self {
            config_path,
            config,
            client,
        }
    }

    pub(crate) fn config_path(&self) -> &Path {
        self.config_path
    }

    pub(crate) fn config(&self) -> &Config {
        self.config
    }

    pub(crate) fn client(&self) -> eyre::Result<&CommandClient> {
        self.client.ok_or_eyre("client is not provided")
    }
}
