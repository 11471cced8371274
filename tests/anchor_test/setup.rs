use std::fmt;

use eyre::eyre;
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::Keypair,
    signer::EncodableKey,
};
use tokio::sync::{Mutex, OnceCell};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use waffle_sdk::{Client, ClientOptions};
use waffle_solana_utils::signer::{shared_signer, SignerRef};

const ENV_ANCHOR_PROVIDER: &str = "ANCHOR_PROVIDER_URL";
const ENV_ANCHOR_WALLET: &str = "ANCHOR_WALLET";
const ENV_WAFFLE_RNG: &str = "WAFFLE_RNG";
const ENV_WAFFLE_PROGRAM: &str = "WAFFLE_PROGRAM";

/// Deployment.
pub struct Deployment {
    rng: Mutex<StdRng>,
    payer: SignerRef,
    client: Client<SignerRef>,
}

impl fmt::Debug for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deployment")
            .field("cluster", self.client.cluster())
            .field("payer", &self.client.payer())
            .field("program", self.client.waffle_program_id())
            .finish_non_exhaustive()
    }
}

impl Deployment {
    /// Length of the random part of generated names.
    const NAME_SUFFIX_LEN: usize = 8;

    async fn init() -> eyre::Result<Self> {
        Self::init_tracing()?;

        let (client, payer) = Self::get_client()?;
        let deployment = Self {
            rng: Mutex::new(Self::get_rng()?),
            payer,
            client,
        };
        tracing::info!(?deployment, "connected");

        Ok(deployment)
    }

    fn get_client() -> eyre::Result<(Client<SignerRef>, SignerRef)> {
        use std::env;

        let endpoint = env::var(ENV_ANCHOR_PROVIDER)
            .map_err(|_| eyre!("env `{ENV_ANCHOR_PROVIDER}` is not set"))?;
        let wallet = env::var(ENV_ANCHOR_WALLET)
            .map_err(|_| eyre!("env `{ENV_ANCHOR_WALLET}` is not set"))?;
        let wallet = shellexpand::full(&wallet)?;
        let program_id = env::var(ENV_WAFFLE_PROGRAM)
            .ok()
            .map(|id| id.parse::<Pubkey>())
            .transpose()?;

        let payer = shared_signer(
            Keypair::read_from_file(&*wallet).map_err(|err| eyre::Error::msg(err.to_string()))?,
        );
        let client = Client::new_with_options(
            endpoint.parse().map_err(eyre::Error::msg)?,
            payer.clone(),
            ClientOptions::builder()
                .waffle_program_id(program_id)
                .commitment(CommitmentConfig::confirmed())
                .build(),
        )?;
        Ok((client, payer))
    }

    fn get_rng() -> eyre::Result<StdRng> {
        match std::env::var(ENV_WAFFLE_RNG) {
            Ok(value) => {
                let seed: u64 = value.parse()?;
                Ok(StdRng::seed_from_u64(seed))
            }
            Err(_) => Ok(StdRng::from_entropy()),
        }
    }

    fn init_tracing() -> eyre::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::ERROR.into())
                    .from_env_lossy(),
            )
            .try_init()
            .map_err(eyre::Error::msg)?;
        Ok(())
    }

    /// Create a client for the current test.
    ///
    /// The RPC client is created lazily on the runtime of the calling test.
    pub fn client(&self) -> eyre::Result<Client<SignerRef>> {
        Ok(self.client.try_clone_with_payer(self.payer.clone())?)
    }

    /// Generate a fresh waffle name with the given prefix.
    ///
    /// Runs against a long-lived validator would otherwise hit waffles
    /// created by earlier runs.
    pub async fn random_name(&self, prefix: &str) -> String {
        let mut rng = self.rng.lock().await;
        let suffix = (&mut *rng)
            .sample_iter(Alphanumeric)
            .take(Self::NAME_SUFFIX_LEN)
            .collect::<String>();
        format!("{prefix}-{suffix}")
    }
}

/// Get current deployment.
pub async fn current_deployment() -> eyre::Result<&'static Deployment> {
    static DEPLOYMENT: OnceCell<Deployment> = OnceCell::const_new();
    DEPLOYMENT.get_or_try_init(Deployment::init).await
}
