use waffle_sdk::{serde::SerdeWaffle, solana_utils::solana_sdk::pubkey::Pubkey, Waffle};

/// Output format.
#[derive(
    clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Plain,
    /// JSON.
    Json,
}

impl OutputFormat {
    /// Display a waffle stored at `address`.
    pub fn display_waffle(&self, address: &Pubkey, waffle: &Waffle) -> eyre::Result<String> {
        match self {
            Self::Plain => Ok(format!("{address}: {waffle}")),
            Self::Json => Ok(serde_json::to_string_pretty(&SerdeWaffle::from_waffle(
                address, waffle,
            ))?),
        }
    }
}
