use solana_sdk::pubkey::Pubkey;

use crate::Waffle;

use super::StringPubkey;

/// Serializable version of [`Waffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct SerdeWaffle {
    /// Address of the waffle account.
    pub address: StringPubkey,
    /// The account that created the waffle.
    pub author: StringPubkey,
    /// Name of the waffle.
    pub name: String,
}

impl SerdeWaffle {
    /// Create from [`Waffle`] stored at `address`.
    pub fn from_waffle(address: &Pubkey, waffle: &Waffle) -> Self {
        Self {
            address: (*address).into(),
            author: waffle.author.into(),
            name: waffle.name.clone(),
        }
    }
}
