use crate::helpers::config::{
    default_commitment, default_ipfs_api_url, default_ipfs_gateway_uri, default_rpc_url,
    default_storage_timeout_in_sec, default_symbol,
};
use crate::interfaces::error::MintError;
use crate::services::credential::default_keypair_path;
use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentConfig;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_PREFIX: &str = "NFT_MINTER_";

/// Endpoints and defaults used by the upload and mint clients.
///
/// Every field can be set through an `NFT_MINTER_`-prefixed environment
/// variable, e.g. `NFT_MINTER_RPC_URL`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_commitment")]
    pub commitment: String,
    #[serde(default = "default_ipfs_api_url")]
    pub ipfs_api_url: String,
    #[serde(default)]
    pub ipfs_api_token: Option<String>,
    #[serde(default = "default_ipfs_gateway_uri")]
    pub ipfs_gateway_uri: String,
    #[serde(default = "default_storage_timeout_in_sec")]
    pub storage_timeout_in_sec: u64,
    #[serde(default)]
    pub keypair_path: Option<PathBuf>,
    #[serde(default = "default_symbol")]
    pub default_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: default_commitment(),
            ipfs_api_url: default_ipfs_api_url(),
            ipfs_api_token: None,
            ipfs_gateway_uri: default_ipfs_gateway_uri(),
            storage_timeout_in_sec: default_storage_timeout_in_sec(),
            keypair_path: None,
            default_symbol: default_symbol(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, MintError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_in_sec)
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig, MintError> {
        CommitmentConfig::from_str(&self.commitment)
            .map_err(|_| MintError::Config(format!("Invalid commitment: {}", self.commitment)))
    }

    /// The configured keypair path, or the Solana CLI default under `$HOME`.
    pub fn keypair_path(&self) -> Result<PathBuf, MintError> {
        match &self.keypair_path {
            Some(path) => Ok(path.clone()),
            None => default_keypair_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::commitment_config::CommitmentLevel;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn should_fall_back_to_defaults_when_nothing_is_set() {
        let config: Config = envy::prefixed(ENV_PREFIX).from_iter(vars(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.storage_timeout(), Duration::from_secs(120));
        assert_eq!(config.default_symbol, "MYNFT");
        assert!(config.ipfs_api_token.is_none());
    }

    #[test]
    fn should_read_prefixed_variables() {
        let config: Config = envy::prefixed(ENV_PREFIX)
            .from_iter(vars(&[
                ("NFT_MINTER_RPC_URL", "http://127.0.0.1:8899"),
                ("NFT_MINTER_IPFS_API_TOKEN", "secret"),
                ("NFT_MINTER_STORAGE_TIMEOUT_IN_SEC", "5"),
                ("NFT_MINTER_KEYPAIR_PATH", "/tmp/payer.json"),
                ("RPC_URL", "ignored"),
            ]))
            .unwrap();

        assert_eq!(config.rpc_url, "http://127.0.0.1:8899");
        assert_eq!(config.ipfs_api_token.as_deref(), Some("secret"));
        assert_eq!(config.storage_timeout(), Duration::from_secs(5));
        assert_eq!(
            config.keypair_path().unwrap(),
            PathBuf::from("/tmp/payer.json")
        );
    }

    #[test]
    fn should_parse_commitment() {
        let config = Config::default();
        assert_eq!(
            config.commitment_config().unwrap().commitment,
            CommitmentLevel::Confirmed
        );

        let config = Config {
            commitment: "eventually".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.commitment_config(),
            Err(MintError::Config(_))
        ));
    }
}
