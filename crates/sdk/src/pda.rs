use solana_sdk::pubkey::Pubkey;

#[allow(unused_imports)]
use waffle_programs::waffle_maker::accounts as waffle_accounts;

use waffle_programs::constants::MAX_SEED_LEN;

/// Seed for [`Waffle`](waffle_accounts::Waffle).
pub use waffle_programs::constants::WAFFLE_SEED;

/// Find the PDA for [`Waffle`](waffle_accounts::Waffle) account.
///
/// Returns [`Error::InvalidSeeds`](crate::Error::InvalidSeeds) if the name
/// does not fit in a single seed.
pub fn find_waffle_address(name: &str, program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
    if name.len() > MAX_SEED_LEN {
        return Err(crate::Error::InvalidSeeds(format!(
            "the name takes {} bytes but a seed holds at most {MAX_SEED_LEN}",
            name.len()
        )));
    }
    Pubkey::try_find_program_address(&[WAFFLE_SEED, name.as_bytes()], program_id).ok_or_else(
        || crate::Error::InvalidSeeds(format!("no viable bump seed for waffle `{name}`")),
    )
}
