#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Waffle Solana Utils
//!
//! Building blocks for talking to a Solana cluster: a [`Cluster`] to connect
//! to, shared signers, a [`Program`] handle and a [`TransactionBuilder`] that
//! prepends compute budget instructions and sends with confirmation.
//!
//! ## Features
//! - `client`: RPC access, sending and confirming transactions.
//! - `anchor`: Anchor instruction data and account metas.
//! - `serde`: (de)serialize [`Cluster`] as a string.

/// Error type.
pub mod error;

/// Cluster.
pub mod cluster;

/// Shared signers.
pub mod signer;

/// Program handle.
pub mod program;

/// Compute budget.
pub mod compute_budget;

/// Transaction builder.
pub mod transaction_builder;

#[cfg(client)]
mod client;

/// Utils.
pub mod utils;

pub use crate::{
    cluster::Cluster,
    error::Error,
    program::Program,
    transaction_builder::{Config, TransactionBuilder},
};

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(anchor)]
pub use anchor_lang;
#[cfg(client)]
pub use solana_client;
pub use solana_sdk;
