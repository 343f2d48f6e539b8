use crate::interfaces::asset::AssetFile;
use crate::interfaces::config::Config;
use crate::interfaces::error::MintError;
use crate::services::storage::AssetStorage;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// One line of the `/api/v0/add` reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AddResponse {
    name: Option<String>,
    hash: Option<String>,
    size: Option<String>,
}

/// An implementation of the AssetStorage trait that adds files to IPFS
/// through the node HTTP API and returns a gateway URL for the content.
pub struct IpfsFileManager {
    client: Client,
    api_url: String,
    api_token: Option<String>,
    gateway_uri: String,
}

#[async_trait]
impl AssetStorage for IpfsFileManager {
    async fn upload(&self, file: &AssetFile) -> Result<String, MintError> {
        info!(
            "Uploading '{}' ({} bytes) to IPFS...",
            file.name,
            file.content.len()
        );

        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let mut request = self.client.post(self.add_endpoint()).multipart(form);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Failed to upload '{}' to IPFS: {}", file.name, status);
            return Err(MintError::Storage(format!(
                "IPFS add returned {}: {}",
                status,
                body.trim()
            )));
        }

        let cid = parse_add_response(&body)?;
        let uri = gateway_uri_for(&self.gateway_uri, &cid);
        info!("Uploaded '{}' to IPFS: {}", file.name, uri);

        Ok(uri)
    }
}

impl IpfsFileManager {
    pub fn new(
        api_url: String,
        api_token: Option<String>,
        gateway_uri: String,
        timeout: Duration,
    ) -> Result<Self, MintError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_token,
            gateway_uri,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, MintError> {
        Self::new(
            config.ipfs_api_url.clone(),
            config.ipfs_api_token.clone(),
            config.ipfs_gateway_uri.clone(),
            config.storage_timeout(),
        )
    }

    fn add_endpoint(&self) -> String {
        format!("{}/api/v0/add?pin=true", self.api_url.trim_end_matches('/'))
    }
}

/// Extracts the CID from an `/api/v0/add` reply. The node may stream one
/// JSON object per line; the last one describes the added file.
pub fn parse_add_response(body: &str) -> Result<String, MintError> {
    let line = body
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| MintError::Storage("Empty response from IPFS".to_string()))?;

    let response: AddResponse = serde_json::from_str(line)
        .map_err(|e| MintError::Storage(format!("Unexpected IPFS response: {}", e)))?;

    debug!(
        "IPFS added {:?} ({:?} bytes)",
        response.name.as_deref().unwrap_or_default(),
        response.size
    );

    match response.hash {
        Some(hash) if !hash.is_empty() => Ok(hash),
        _ => Err(MintError::Storage(
            "IPFS response does not contain a hash".to_string(),
        )),
    }
}

pub fn gateway_uri_for(gateway_uri: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", gateway_uri.trim_end_matches('/'), cid)
}
