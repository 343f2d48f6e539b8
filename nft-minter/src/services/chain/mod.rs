pub mod solana;

use crate::interfaces::error::MintError;
use crate::interfaces::token::{MintedToken, TokenDescriptor};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use solana_sdk::{pubkey::Pubkey, signature::Signature};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenMinter {
    /// Public key of the signer; minted tokens are created and owned by it.
    fn identity(&self) -> Pubkey;

    async fn create_nft(&self, descriptor: &TokenDescriptor) -> Result<MintedToken, MintError>;

    async fn transfer_nft(&self, mint: &Pubkey, recipient: &Pubkey)
        -> Result<Signature, MintError>;
}
