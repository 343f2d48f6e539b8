use crate::interfaces::error::MintError;
use mime_guess::from_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A local file read into memory, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub path: PathBuf,
    pub name: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

impl AssetFile {
    pub async fn load(path: &Path) -> Result<Self, MintError> {
        let content = tokio::fs::read(path).await?;
        let file = Self::from_bytes(path, content);
        debug!(
            "Loaded '{}' ({} bytes, {})",
            file.path.display(),
            file.content.len(),
            file.content_type
        );
        Ok(file)
    }

    pub fn from_bytes(path: &Path, content: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "asset".to_string());

        let content_type = from_path(path).first_or_octet_stream().as_ref().to_string();

        Self {
            path: path.to_path_buf(),
            name,
            content,
            content_type,
        }
    }
}
