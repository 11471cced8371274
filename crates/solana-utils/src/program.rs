use std::ops::Deref;

use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::{
    cluster::Cluster,
    transaction_builder::{Config, TransactionBuilder},
};

/// A program id bound to the wallet config used to call it.
pub struct Program<C> {
    program_id: Pubkey,
    cfg: Config<C>,
}

impl<C> Program<C> {
    /// Create a new [`Program`].
    pub fn new(program_id: Pubkey, cfg: Config<C>) -> Self {
        Self { program_id, cfg }
    }

    /// Get the program id.
    pub fn id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Get the cluster the program is called on.
    pub fn cluster(&self) -> &Cluster {
        self.cfg.cluster()
    }
}

impl<C: Deref<Target = impl Signer>> Program<C> {
    /// Get the pubkey of the payer.
    pub fn payer(&self) -> Pubkey {
        self.cfg.payer()
    }
}

impl<C: Deref<Target = impl Signer> + Clone> Program<C> {
    /// Start a transaction calling this program, paid by the config's payer.
    pub fn transaction(&self) -> TransactionBuilder<C> {
        TransactionBuilder::new(self.program_id, &self.cfg)
    }
}
