use solana_client::client_error::ClientError;
use solana_sdk::{program_error::ProgramError, pubkey::Pubkey};

/// Errors raised while uploading an asset or minting a token.
#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Credential error: {0}")]
    Credential(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Creator {creator} does not match signer {signer}")]
    CreatorMismatch { signer: Pubkey, creator: Pubkey },
    #[error("Instruction error: {0}")]
    Instruction(String),
}

impl From<ClientError> for MintError {
    fn from(e: ClientError) -> Self {
        MintError::Rpc(e.to_string())
    }
}

impl From<ProgramError> for MintError {
    fn from(e: ProgramError) -> Self {
        MintError::Instruction(e.to_string())
    }
}

impl From<envy::Error> for MintError {
    fn from(e: envy::Error) -> Self {
        MintError::Config(e.to_string())
    }
}
