// DEFINE THE DEFAULT CONFIGURATION WHEN NO ENV FILE IS PASSED
const RPC_URL: &str = "https://api.devnet.solana.com";
const COMMITMENT: &str = "confirmed";
const IPFS_API_URL: &str = "http://127.0.0.1:5001";
const IPFS_GATEWAY_URI: &str = "https://ipfs.io";
const STORAGE_TIMEOUT_IN_SEC: u64 = 120;
const SYMBOL: &str = "MYNFT";

/// Location of the Solana CLI keypair, relative to the home directory.
pub const KEYPAIR_RELATIVE_PATH: &str = ".config/solana/id.json";

pub fn default_rpc_url() -> String {
    RPC_URL.to_owned()
}

pub fn default_commitment() -> String {
    COMMITMENT.to_owned()
}

pub fn default_ipfs_api_url() -> String {
    IPFS_API_URL.to_owned()
}

pub fn default_ipfs_gateway_uri() -> String {
    IPFS_GATEWAY_URI.to_owned()
}

pub fn default_storage_timeout_in_sec() -> u64 {
    STORAGE_TIMEOUT_IN_SEC
}

pub fn default_symbol() -> String {
    SYMBOL.to_owned()
}
