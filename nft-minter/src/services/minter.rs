use crate::interfaces::asset::AssetFile;
use crate::interfaces::error::MintError;
use crate::interfaces::token::{MintedToken, TokenDescriptor};
use crate::services::chain::TokenMinter;
use crate::services::storage::AssetStorage;

use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MintRequest {
    pub image_path: PathBuf,
    pub name: String,
    pub symbol: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    pub asset_uri: String,
    pub token: MintedToken,
}

/// Runs the upload-then-mint pipeline against a storage backend and a minter.
pub struct MintManager<'a, S: AssetStorage, M: TokenMinter> {
    storage: &'a S,
    minter: &'a M,
}

impl<'a, S: AssetStorage, M: TokenMinter> MintManager<'a, S, M> {
    pub fn new(storage: &'a S, minter: &'a M) -> Self {
        Self { storage, minter }
    }

    /// Uploads the image, then mints one token whose metadata URI is the
    /// uploaded asset. Nothing is undone if the mint fails after the upload.
    pub async fn mint_from_file(&self, request: &MintRequest) -> Result<MintOutcome, MintError> {
        let file = AssetFile::load(&request.image_path).await?;

        let asset_uri = self.storage.upload(&file).await?;

        let descriptor = TokenDescriptor::new(
            &request.name,
            &request.symbol,
            &request.description,
            &asset_uri,
            self.minter.identity(),
        );
        debug!("Token descriptor: {:?}", descriptor);

        let token = self.minter.create_nft(&descriptor).await?;
        info!("Minted '{}' at {}", descriptor.name, token.mint);

        Ok(MintOutcome { asset_uri, token })
    }
}
