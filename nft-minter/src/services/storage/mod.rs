pub mod ipfs;

use crate::interfaces::asset::AssetFile;
use crate::interfaces::error::MintError;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Somewhere an asset can be uploaded to and later fetched from by URI.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetStorage {
    /// Uploads the file and returns the URI it can be retrieved from.
    async fn upload(&self, file: &AssetFile) -> Result<String, MintError>;
}
