/// Utilities for program accounts.
pub mod accounts;

/// Operations.
pub mod ops;

use std::{ops::Deref, sync::OnceLock};

use accounts::account_with_context;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcAccountInfoConfig};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signer::Signer};
use typed_builder::TypedBuilder;
use waffle_programs::anchor_lang::AccountDeserialize;
use waffle_solana_utils::{
    cluster::Cluster,
    program::Program,
    transaction_builder::{Config, TransactionBuilder},
    utils::WithSlot,
};

use crate::{pda, Waffle};

/// Options for [`Client`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientOptions {
    #[builder(default)]
    waffle_program_id: Option<Pubkey>,
    #[builder(default)]
    commitment: CommitmentConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for interacting with the waffle maker program.
pub struct Client<C> {
    cfg: Config<C>,
    waffle_program: Program<C>,
    rpc: OnceLock<RpcClient>,
}

impl<C: Clone + Deref<Target = impl Signer>> Client<C> {
    /// Create a new [`Client`] with the given options.
    pub fn new_with_options(
        cluster: Cluster,
        payer: C,
        options: ClientOptions,
    ) -> crate::Result<Self> {
        let ClientOptions {
            waffle_program_id,
            commitment,
        } = options;
        let cfg = Config::new(cluster, payer, commitment);
        Ok(Self {
            waffle_program: Program::new(
                waffle_program_id.unwrap_or(waffle_programs::waffle_maker::ID),
                cfg.clone(),
            ),
            cfg,
            rpc: Default::default(),
        })
    }

    /// Create a new [`Client`] with default options.
    pub fn new(cluster: Cluster, payer: C) -> crate::Result<Self> {
        Self::new_with_options(cluster, payer, ClientOptions::default())
    }

    /// Create a clone of this client with a new payer.
    pub fn try_clone_with_payer<C2: Clone + Deref<Target = impl Signer>>(
        &self,
        payer: C2,
    ) -> crate::Result<Client<C2>> {
        Client::new_with_options(
            self.cluster().clone(),
            payer,
            ClientOptions {
                waffle_program_id: Some(*self.waffle_program_id()),
                commitment: self.commitment(),
            },
        )
    }

    /// Get current cluster.
    pub fn cluster(&self) -> &Cluster {
        self.cfg.cluster()
    }

    /// Get current commitment config.
    pub fn commitment(&self) -> CommitmentConfig {
        *self.cfg.commitment()
    }

    /// Get current payer.
    pub fn payer(&self) -> Pubkey {
        self.cfg.payer()
    }

    /// Get [`RpcClient`].
    pub fn rpc(&self) -> &RpcClient {
        self.rpc.get_or_init(|| self.cfg.rpc())
    }

    /// Get waffle maker program.
    pub fn waffle_program(&self) -> &Program<C> {
        &self.waffle_program
    }

    /// Get the program id of the waffle maker program.
    pub fn waffle_program_id(&self) -> &Pubkey {
        self.waffle_program().id()
    }

    /// Create a [`TransactionBuilder`] for the waffle maker program.
    pub fn waffle_transaction(&self) -> TransactionBuilder<C> {
        self.waffle_program().transaction()
    }

    /// Find the address of the waffle with the given name.
    pub fn find_waffle_address(&self, name: &str) -> crate::Result<Pubkey> {
        Ok(pda::find_waffle_address(name, self.waffle_program_id())?.0)
    }

    /// Fetch account with the given address with config.
    ///
    /// The value inside the returned context will be `None` if the account does not exist.
    pub async fn account_with_config<T>(
        &self,
        address: &Pubkey,
        config: RpcAccountInfoConfig,
    ) -> crate::Result<WithSlot<Option<T>>>
    where
        T: AccountDeserialize,
    {
        account_with_context(self.rpc(), address, config).await
    }

    /// Fetch account with the given address.
    pub async fn account<T: AccountDeserialize>(
        &self,
        address: &Pubkey,
    ) -> crate::Result<Option<T>> {
        Ok(self
            .account_with_config(address, Default::default())
            .await?
            .into_value())
    }

    /// Fetch the [`Waffle`] account at the given address.
    pub async fn waffle(&self, address: &Pubkey) -> crate::Result<Waffle> {
        self.account(address).await?.ok_or(crate::Error::NotFound)
    }

    /// Fetch the [`Waffle`] account with the given name.
    pub async fn waffle_by_name(&self, name: &str) -> crate::Result<Option<Waffle>> {
        let address = self.find_waffle_address(name)?;
        self.account(&address).await
    }
}
