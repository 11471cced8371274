/// Seed prefix of the waffle PDA.
pub const WAFFLE_SEED: &[u8] = b"waffle";

/// A name must have more characters than this.
pub const MIN_NAME_CHARS: usize = 1;

/// A name must have fewer characters than this.
pub const MAX_NAME_CHARS: usize = 30;

/// Max length of a single PDA seed.
pub const MAX_SEED_LEN: usize = 32;
