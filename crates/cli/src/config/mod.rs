mod output;

use waffle_sdk::{
    programs::waffle_maker,
    serde::StringPubkey,
    solana_utils::{
        cluster::Cluster,
        signer::SignerRef,
        solana_sdk::{
            commitment_config::{CommitmentConfig, CommitmentLevel},
            pubkey::Pubkey,
        },
    },
};

pub use output::OutputFormat;

use crate::wallet::signer_from_source;

const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

/// Configuration.
///
/// Every field is optional so that unset command-line arguments do not
/// shadow values from the config file or the environment.
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Config {
    /// Path to the wallet. [default: ~/.config/solana/id.json]
    #[arg(long, short, env)]
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<String>,
    /// Cluster to connect to. [default: localnet]
    #[arg(long = "url", short = 'u', env)]
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster: Option<Cluster>,
    /// Commitment level. [default: confirmed]
    #[arg(long, env)]
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment: Option<CommitmentLevel>,
    /// Waffle maker program ID.
    #[arg(long = "program", env = "WAFFLE_PROGRAM")]
    #[serde(skip_serializing_if = "Option::is_none")]
    waffle_program: Option<StringPubkey>,
    /// Output format. [default: plain]
    #[arg(long, short, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet: Some(DEFAULT_WALLET.to_string()),
            cluster: Some(Cluster::Localnet),
            commitment: Some(CommitmentLevel::Confirmed),
            waffle_program: None,
            output: Some(OutputFormat::Plain),
        }
    }
}

impl Config {
    /// A config with nothing set.
    pub fn unset() -> Self {
        Self {
            wallet: None,
            cluster: None,
            commitment: None,
            waffle_program: None,
            output: None,
        }
    }

    /// Creates a wallet based on the config.
    pub fn wallet(&self) -> eyre::Result<SignerRef> {
        signer_from_source(self.wallet_source())
    }

    /// Returns the wallet source, a path or a URL.
    pub fn wallet_source(&self) -> &str {
        self.wallet.as_deref().unwrap_or(DEFAULT_WALLET)
    }

    /// Returns the cluster to connect to.
    pub fn cluster(&self) -> Cluster {
        self.cluster.clone().unwrap_or_default()
    }

    /// Returns the commitment level.
    pub fn commitment(&self) -> CommitmentLevel {
        self.commitment.unwrap_or(CommitmentLevel::Confirmed)
    }

    /// Returns the commitment config.
    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment(),
        }
    }

    /// Returns the program ID of the waffle maker program.
    pub fn waffle_program_id(&self) -> &Pubkey {
        self.waffle_program
            .as_deref()
            .unwrap_or(&waffle_maker::ID)
    }

    /// Returns the output format.
    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}
