use anchor_lang::prelude::*;

#[error_code]
pub enum WaffleMakerError {
    #[msg("Waffle name can be 30 characters long.")]
    NameTooLong,
    #[msg("You need to name the Waffle.")]
    NameEmpty,
}
