#![cfg_attr(docsrs, feature(doc_auto_cfg))]

anchor_lang::declare_program!(waffle_maker);

/// Constants.
pub mod constants;

/// Utilities.
pub mod utils;

/// Error.
pub mod error;

/// Errors returned by the waffle maker program.
pub mod program_error;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use anchor_lang;
