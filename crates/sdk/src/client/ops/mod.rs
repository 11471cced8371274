/// Operations for waffle accounts.
pub mod waffle;

pub use waffle::WaffleOps;
