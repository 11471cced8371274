/// Configuration.
pub mod config;

/// Utils for wallet.
pub mod wallet;

/// Commands.
pub mod commands;

use std::{ops::Deref, path::PathBuf};

use clap::Parser;
use commands::{Command, CommandClient, Commands, Context};
use config::Config;
use eyre::OptionExt;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Provider,
};

const ENV_PREFIX: &str = "WAFFLE_";
const CONFIG_DIR: &str = "waffle";

/// We use `__` in the name of environment variable as an alias of `.`.
///
/// See [`Env`] for more infomation.
const DOT_ALIAS: &str = "__";

/// Command-line interface for the waffle maker.
#[derive(Debug)]
pub struct Cli(Inner);

impl Cli {
    /// Creates from the command line arguments.
    pub fn init() -> eyre::Result<Self> {
        let cli = Inner::parse();

        let config_path = cli.find_config()?;
        let Inner {
            config, command, ..
        } = cli;

        let config = layered_config(Toml::file(config_path.clone()), config)?;

        Ok(Self(Inner {
            config_path: Some(config_path),
            config,
            command,
        }))
    }
}

impl Deref for Cli {
    type Target = Inner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Merge the config file, the `WAFFLE_` environment and the command line,
/// later sources taking precedence.
fn layered_config(file: impl Provider, cli: Config) -> figment::Result<Config> {
    Figment::new()
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX).split(DOT_ALIAS))
        .merge(Serialized::defaults(cli))
        .extract()
}

/// Command-line interface for the waffle maker.
#[derive(Debug, Parser)]
#[command(name = "waffle", version)]
pub struct Inner {
    /// Path to the config file.
    #[clap(long = "config", short)]
    config_path: Option<PathBuf>,
    /// Config.
    #[command(flatten)]
    config: Config,
    /// Commands.
    #[command(subcommand)]
    command: Commands,
}

impl Inner {
    fn find_config(&self) -> eyre::Result<PathBuf> {
        use etcetera::{choose_base_strategy, BaseStrategy};

        match self.config_path.as_ref() {
            Some(path) => Ok(path.clone()),
            None => {
                let strategy = choose_base_strategy()?;
                Ok(strategy.config_dir().join(CONFIG_DIR).join("config.toml"))
            }
        }
    }

    /// Execute command.
    pub async fn execute(&self) -> eyre::Result<()> {
        let config_path = self
            .config_path
            .as_ref()
            .ok_or_eyre("config path is not set")?;
        let client = if self.command.is_client_required() {
            Some(CommandClient::new(&self.config)?)
        } else {
            None
        };
        self.command
            .execute(Context::new(config_path, &self.config, client.as_ref()))
            .await
    }
}
