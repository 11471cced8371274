use std::sync::Arc;

use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
    signer::{Signer, SignerError},
};

/// A type-erased signer that can be shared across threads.
pub struct DynSigner(Box<dyn Signer + Send + Sync>);

impl Signer for DynSigner {
    fn pubkey(&self) -> Pubkey {
        self.0.pubkey()
    }

    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.0.try_pubkey()
    }

    fn sign_message(&self, message: &[u8]) -> Signature {
        self.0.sign_message(message)
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.0.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        self.0.is_interactive()
    }
}

/// Shared Signer.
pub type SignerRef = Arc<DynSigner>;

/// Wrap a signer so that clients and builders can share it.
pub fn shared_signer(signer: impl Signer + Send + Sync + 'static) -> SignerRef {
    Arc::new(DynSigner(Box::new(signer)))
}
