/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parse url error.
    #[error("parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    /// Parse cluster error.
    #[error("parse cluster: {0}")]
    ParseCluster(&'static str),
    /// Compile message error.
    #[error("compile message: {0}")]
    CompileMessage(#[from] solana_sdk::message::CompileError),
    /// Client error.
    #[cfg(client)]
    #[error("client: {0}")]
    Client(#[from] Box<solana_client::client_error::ClientError>),
    /// Signer error.
    #[error("signer: {0}")]
    Signer(#[from] solana_sdk::signer::SignerError),
}

impl Error {
    /// Returns the transaction error carried by this error, if any.
    ///
    /// Preflight simulation failures and failed confirmations are both covered.
    #[cfg(client)]
    pub fn transaction_error(&self) -> Option<solana_sdk::transaction::TransactionError> {
        match self {
            Self::Client(err) => err.get_transaction_error(),
            _ => None,
        }
    }

    /// Returns the custom program error code if the transaction failed
    /// with one, e.g. an Anchor `#[error_code]` value.
    #[cfg(client)]
    pub fn anchor_error_code(&self) -> Option<u32> {
        use solana_sdk::{instruction::InstructionError, transaction::TransactionError};

        match self.transaction_error()? {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
            _ => None,
        }
    }
}
