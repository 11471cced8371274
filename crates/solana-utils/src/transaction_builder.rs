use std::ops::Deref;

use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signer::Signer,
    transaction::VersionedTransaction,
};

#[cfg(anchor)]
use anchor_lang::{InstructionData, ToAccountMetas};

#[cfg(client)]
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};

#[cfg(client)]
use solana_sdk::signature::Signature;

#[cfg(client)]
use crate::client::SendAndConfirm;

use crate::{cluster::Cluster, compute_budget::ComputeBudget};

/// Wallet config: where to send, who pays, and at which commitment.
#[derive(Clone)]
pub struct Config<C> {
    cluster: Cluster,
    payer: C,
    commitment: CommitmentConfig,
}

impl<C> Config<C> {
    /// Create a new wallet config.
    pub fn new(cluster: Cluster, payer: C, commitment: CommitmentConfig) -> Self {
        Self {
            cluster,
            payer,
            commitment,
        }
    }

    /// Get cluster.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Get commitment config.
    pub fn commitment(&self) -> &CommitmentConfig {
        &self.commitment
    }

    /// Create a Solana RPC Client.
    #[cfg(client)]
    pub fn rpc(&self) -> RpcClient {
        self.cluster.rpc(self.commitment)
    }
}

impl<C: Deref<Target = impl Signer>> Config<C> {
    /// Get payer pubkey.
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }
}

/// A builder for a single-instruction transaction signed by the payer.
///
/// The transaction is made of the compute budget instructions, then the
/// pre-instructions, then the main instruction if its data has been set.
/// `T` is an output carried along with the builder, e.g. the address of the
/// account the transaction creates.
#[must_use = "transaction builder do nothing if not built"]
#[derive(Clone)]
pub struct TransactionBuilder<C, T = ()> {
    cfg: Config<C>,
    output: T,
    program_id: Pubkey,
    pre_instructions: Vec<Instruction>,
    accounts: Vec<AccountMeta>,
    data: Option<Vec<u8>>,
    compute_budget: ComputeBudget,
}

impl<C: Deref<Target = impl Signer> + Clone> TransactionBuilder<C> {
    /// Create a new transaction builder.
    pub fn new(program_id: Pubkey, cfg: &Config<C>) -> Self {
        Self {
            cfg: cfg.clone(),
            output: (),
            program_id,
            pre_instructions: vec![],
            accounts: vec![],
            data: None,
            compute_budget: ComputeBudget::default(),
        }
    }
}

impl<C: Deref<Target = impl Signer> + Clone, T> TransactionBuilder<C, T> {
    /// Get the pubkey of the payer.
    pub fn get_payer(&self) -> Pubkey {
        self.cfg.payer()
    }

    /// Append accounts for the main instruction.
    pub fn accounts(mut self, accounts: impl IntoIterator<Item = AccountMeta>) -> Self {
        self.accounts.extend(accounts);
        self
    }

    /// Append accounts for the main instruction.
    #[cfg(anchor)]
    pub fn anchor_accounts(self, accounts: impl ToAccountMetas) -> Self {
        self.accounts(accounts.to_account_metas(None))
    }

    /// Set the data of the main instruction.
    pub fn args(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the data of the main instruction.
    #[cfg(anchor)]
    pub fn anchor_args(self, args: impl InstructionData) -> Self {
        self.args(args.data())
    }

    /// Insert an instruction before the main instruction.
    ///
    /// It goes after the existing pre-instructions if `append` is set, and
    /// before them otherwise.
    pub fn pre_instruction(mut self, ix: Instruction, append: bool) -> Self {
        let at = if append { self.pre_instructions.len() } else { 0 };
        self.pre_instructions.insert(at, ix);
        self
    }

    /// Get the output.
    pub fn get_output(&self) -> &T {
        &self.output
    }

    /// Replace the output.
    pub fn output<U>(self, output: U) -> TransactionBuilder<C, U> {
        TransactionBuilder {
            cfg: self.cfg,
            output,
            program_id: self.program_id,
            pre_instructions: self.pre_instructions,
            accounts: self.accounts,
            data: self.data,
            compute_budget: self.compute_budget,
        }
    }

    /// Construct all instructions.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.instructions_with_options(false, None)
    }

    /// Construct all instructions with options.
    pub fn instructions_with_options(
        &self,
        without_compute_budget: bool,
        compute_unit_price_micro_lamports: Option<u64>,
    ) -> Vec<Instruction> {
        let budget = (!without_compute_budget)
            .then(|| {
                self.compute_budget
                    .compute_budget_instructions(compute_unit_price_micro_lamports)
            })
            .unwrap_or_default();
        let main = self.data.as_ref().map(|data| Instruction {
            program_id: self.program_id,
            accounts: self.accounts.clone(),
            data: data.clone(),
        });
        budget
            .into_iter()
            .chain(self.pre_instructions.iter().cloned())
            .chain(main)
            .collect()
    }

    /// Compile a v0 message with the given blockhash.
    pub fn message_with_blockhash_and_options(
        &self,
        latest_hash: Hash,
        without_compute_budget: bool,
        compute_unit_price_micro_lamports: Option<u64>,
    ) -> crate::Result<VersionedMessage> {
        let instructions = self
            .instructions_with_options(without_compute_budget, compute_unit_price_micro_lamports);
        let message = v0::Message::try_compile(&self.get_payer(), &instructions, &[], latest_hash)?;
        Ok(VersionedMessage::V0(message))
    }

    /// Compile and sign with the payer.
    pub fn signed_transaction_with_blockhash_and_options(
        &self,
        latest_hash: Hash,
        without_compute_budget: bool,
        compute_unit_price_micro_lamports: Option<u64>,
    ) -> crate::Result<VersionedTransaction> {
        let message = self.message_with_blockhash_and_options(
            latest_hash,
            without_compute_budget,
            compute_unit_price_micro_lamports,
        )?;
        Ok(VersionedTransaction::try_new(message, &[&*self.cfg.payer])?)
    }

    /// Sign and send the transaction with options, waiting for confirmation.
    #[cfg(client)]
    pub async fn send_with_options(
        &self,
        without_compute_budget: bool,
        compute_unit_price_micro_lamports: Option<u64>,
        mut config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        let client = self.cfg.rpc();
        let latest_hash = client.get_latest_blockhash().await.map_err(Box::new)?;

        let tx = self.signed_transaction_with_blockhash_and_options(
            latest_hash,
            without_compute_budget,
            compute_unit_price_micro_lamports,
        )?;

        config
            .preflight_commitment
            .get_or_insert(client.commitment().commitment);

        tracing::debug!(program_id = %self.program_id, ?config, "sending transaction");
        let signature = client
            .send_and_confirm_transaction_with_config(&tx, config)
            .await
            .map_err(Box::new)?;

        Ok(signature)
    }

    /// Send the transaction without preflight simulation.
    #[cfg(client)]
    pub async fn send_without_preflight(self) -> crate::Result<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: true,
            ..Default::default()
        };
        self.send_with_options(false, None, config).await
    }

    /// Send the transaction with default options.
    #[cfg(client)]
    pub async fn send(self) -> crate::Result<Signature> {
        self.send_with_options(false, None, Default::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::{signature::Keypair, system_instruction, system_program};

    use super::*;
    use crate::signer::shared_signer;

    #[test]
    fn instructions_are_ordered() {
        let payer = shared_signer(Keypair::new());
        let cfg = Config::new(Cluster::Localnet, payer.clone(), CommitmentConfig::confirmed());
        let program_id = Pubkey::new_unique();
        let to = Pubkey::new_unique();

        let builder = TransactionBuilder::new(program_id, &cfg)
            .output(to)
            .args(vec![1, 2, 3])
            .accounts([AccountMeta::new(payer.pubkey(), true)])
            .pre_instruction(system_instruction::transfer(&payer.pubkey(), &to, 1), true)
            .pre_instruction(system_instruction::transfer(&payer.pubkey(), &to, 2), false);

        assert_eq!(*builder.get_output(), to);
        assert_eq!(builder.get_payer(), payer.pubkey());

        let ixs = builder.instructions();
        assert_eq!(ixs.len(), 5);
        assert_eq!(
            ixs[2],
            system_instruction::transfer(&payer.pubkey(), &to, 2)
        );
        assert_eq!(ixs[3].program_id, system_program::ID);
        assert_eq!(ixs[4].program_id, program_id);
        assert_eq!(ixs[4].data, vec![1, 2, 3]);

        assert_eq!(builder.instructions_with_options(true, None).len(), 3);
    }

    #[test]
    fn no_main_instruction_without_data() {
        let payer = shared_signer(Keypair::new());
        let cfg = Config::new(Cluster::Localnet, payer, CommitmentConfig::confirmed());
        let builder = TransactionBuilder::new(Pubkey::new_unique(), &cfg);
        assert_eq!(builder.instructions_with_options(true, None).len(), 0);
    }

    #[test]
    fn signed_by_the_payer() {
        let payer = shared_signer(Keypair::new());
        let cfg = Config::new(Cluster::Localnet, payer.clone(), CommitmentConfig::confirmed());
        let tx = TransactionBuilder::new(Pubkey::new_unique(), &cfg)
            .args(vec![])
            .accounts([AccountMeta::new(payer.pubkey(), true)])
            .signed_transaction_with_blockhash_and_options(Hash::default(), false, None)
            .unwrap();
        assert_eq!(tx.signatures.len(), 1);
        assert_eq!(tx.message.static_account_keys()[0], payer.pubkey());
        assert!(tx.verify_with_results().into_iter().all(|ok| ok));
    }
}
