use crate::helpers::config::KEYPAIR_RELATIVE_PATH;
use crate::interfaces::error::MintError;
use solana_sdk::signature::Keypair;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const KEYPAIR_LENGTH: usize = 64;

pub fn default_keypair_path() -> Result<PathBuf, MintError> {
    let home = env::var_os("HOME").ok_or_else(|| {
        MintError::Config("HOME is not set, pass the keypair path explicitly".to_string())
    })?;
    Ok(keypair_path_under(Path::new(&home)))
}

/// Where the Solana CLI keeps its keypair for a given home directory.
pub fn keypair_path_under(home: &Path) -> PathBuf {
    home.join(KEYPAIR_RELATIVE_PATH)
}

/// Reads a keypair stored the way the Solana CLI stores it: a JSON array of
/// the 64 secret key bytes.
pub fn load_keypair(path: &Path) -> Result<Keypair, MintError> {
    debug!("Loading keypair from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_keypair(&content)
}

pub fn parse_keypair(content: &str) -> Result<Keypair, MintError> {
    let bytes: Vec<u8> = serde_json::from_str(content)
        .map_err(|e| MintError::Credential(format!("expected a JSON array of bytes: {}", e)))?;

    if bytes.len() != KEYPAIR_LENGTH {
        return Err(MintError::Credential(format!(
            "expected {} bytes, found {}",
            KEYPAIR_LENGTH,
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| MintError::Credential(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use temp_dir::TempDir;

    #[test]
    fn should_load_keypair_written_by_solana_cli() {
        let keypair = Keypair::new();
        let dir = TempDir::new().unwrap();
        let path = dir.child("id.json");
        std::fs::write(
            &path,
            serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap(),
        )
        .unwrap();

        let loaded = load_keypair(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn should_fail_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_keypair(&dir.child("missing.json"));
        assert!(matches!(result, Err(MintError::Io(_))));
    }

    #[test]
    fn should_reject_non_array_json() {
        let result = parse_keypair(r#"{"secret": "abc"}"#);
        assert!(matches!(result, Err(MintError::Credential(_))));

        let result = parse_keypair("[1, 2, 300]");
        assert!(matches!(result, Err(MintError::Credential(_))));
    }

    #[test]
    fn should_reject_wrong_length() {
        let result = parse_keypair("[1, 2, 3]");
        match result {
            Err(MintError::Credential(message)) => assert!(message.contains("found 3")),
            _ => panic!("Expected a credential error"),
        }
    }

    #[test]
    fn should_resolve_keypair_path_under_home() {
        assert_eq!(
            keypair_path_under(Path::new("/home/alice")),
            PathBuf::from("/home/alice/.config/solana/id.json")
        );
        assert_eq!(
            keypair_path_under(Path::new("/home/alice/")),
            PathBuf::from("/home/alice/.config/solana/id.json")
        );
    }
}
