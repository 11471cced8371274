use std::ops::Deref;

use solana_sdk::{pubkey::Pubkey, signer::Signer, system_program};
use waffle_programs::{
    utils::validate_name,
    waffle_maker::client::{accounts, args},
};
use waffle_solana_utils::transaction_builder::TransactionBuilder;

/// Operations for waffle accounts.
pub trait WaffleOps<C> {
    /// Create a waffle with the given name.
    ///
    /// The name is checked against the program's rules first, so an invalid
    /// name fails without sending anything. The output of the returned
    /// builder is the address of the waffle account.
    fn create_waffle(&self, name: &str) -> crate::Result<TransactionBuilder<C, Pubkey>>;

    /// Create a waffle without checking the name.
    fn create_waffle_unchecked(&self, name: &str) -> crate::Result<TransactionBuilder<C, Pubkey>>;
}

impl<C: Deref<Target = impl Signer> + Clone> WaffleOps<C> for crate::Client<C> {
    fn create_waffle(&self, name: &str) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        validate_name(name)?;
        self.create_waffle_unchecked(name)
    }

    fn create_waffle_unchecked(&self, name: &str) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let waffle = self.find_waffle_address(name)?;
        Ok(self
            .waffle_transaction()
            .output(waffle)
            .anchor_accounts(accounts::CreateWaffle {
                waffle,
                author: self.payer(),
                system_program: system_program::ID,
            })
            .anchor_args(args::CreateWaffle {
                name: name.to_string(),
            }))
    }
}
