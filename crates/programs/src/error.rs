use crate::program_error::WaffleMakerError;

/// General purpose error type for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name would be rejected by the program.
    #[error("invalid name: {0}")]
    InvalidName(WaffleMakerError),
}

impl Error {
    /// Returns the program error this error mirrors, if any.
    pub fn program_error(&self) -> Option<WaffleMakerError> {
        match self {
            Self::InvalidName(err) => Some(*err),
        }
    }
}
