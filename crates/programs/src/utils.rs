use std::fmt;

use crate::{
    constants::{MAX_NAME_CHARS, MIN_NAME_CHARS},
    program_error::WaffleMakerError,
    waffle_maker::accounts::Waffle,
};

/// Check a waffle name against the rules enforced by `create_waffle`.
///
/// The length is counted in characters, and the upper bound is checked
/// first, in the same order as the program does.
pub fn validate_name(name: &str) -> crate::Result<()> {
    let chars = name.chars().count();
    if chars >= MAX_NAME_CHARS {
        return Err(crate::Error::InvalidName(WaffleMakerError::NameTooLong));
    }
    if chars <= MIN_NAME_CHARS {
        return Err(crate::Error::InvalidName(WaffleMakerError::NameEmpty));
    }
    Ok(())
}

impl Waffle {
    /// Account size allocated for a waffle with the given name.
    pub fn space_for(name: &str) -> usize {
        8 + 32 + 4 + name.len()
    }
}

impl fmt::Display for Waffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Waffle {{ author: {}, name: {:?} }}",
            self.author, self.name
        )
    }
}
