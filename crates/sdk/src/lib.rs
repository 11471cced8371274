#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! # Waffle SDK
//!
//! Client-side helpers for the waffle maker program.

/// Error type.
pub mod error;

/// Functions for constructing Program Derived Addresses.
pub mod pda;

/// Serialization support.
pub mod serde;

pub use error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use waffle_programs as programs;
pub use waffle_solana_utils as solana_utils;

pub use waffle_programs::{constants, waffle_maker::accounts::Waffle};

cfg_if::cfg_if! {
    if #[cfg(client)] {
        /// Client support.
        pub mod client;

        pub use client::{ops, Client, ClientOptions};
    }
}
