/// Pubkey serialization.
pub mod string_pubkey;

/// Waffle serialization.
pub mod serde_waffle;

#[cfg(serde)]
pub use string_pubkey::pubkey;
pub use serde_waffle::SerdeWaffle;
pub use string_pubkey::StringPubkey;
