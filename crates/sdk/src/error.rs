pub(crate) use waffle_programs::anchor_lang::prelude::Error as AnchorLangError;

/// SDK Error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from [`waffle_solana_utils`].
    #[error("utils: {0}")]
    SolanaUtils(#[from] waffle_solana_utils::Error),
    /// Anchor Error.
    #[error("anchor: {0}")]
    Anchor(Box<AnchorLangError>),
    /// Error from [`waffle_programs`].
    #[error("programs: {0}")]
    Programs(#[from] waffle_programs::Error),
    /// The seeds cannot produce a program address.
    #[error("invalid seeds: {0}")]
    InvalidSeeds(String),
    /// Not found error.
    #[error("not found")]
    NotFound,
}

impl Error {
    /// Returns the custom program error code carried by a failed transaction.
    #[cfg(client)]
    pub fn anchor_error_code(&self) -> Option<u32> {
        match self {
            Self::SolanaUtils(err) => err.anchor_error_code(),
            _ => None,
        }
    }
}

impl From<AnchorLangError> for Error {
    fn from(value: AnchorLangError) -> Self {
        Self::Anchor(Box::new(value))
    }
}

#[cfg(client)]
impl From<solana_client::client_error::ClientError> for Error {
    fn from(value: solana_client::client_error::ClientError) -> Self {
        Self::SolanaUtils(Box::new(value).into())
    }
}
