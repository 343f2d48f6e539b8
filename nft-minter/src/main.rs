use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use nft_minter::interfaces::config::Config;
use nft_minter::interfaces::error::MintError;
use nft_minter::services::chain::solana::SolanaMinter;
use nft_minter::services::chain::TokenMinter;
use nft_minter::services::credential::load_keypair;
use nft_minter::services::minter::{MintManager, MintRequest};
use nft_minter::services::storage::ipfs::IpfsFileManager;
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(version, about = "Upload an image to IPFS and mint it as an NFT on Solana")]
struct Cli {
    /// Keypair file (JSON array of secret key bytes), overrides NFT_MINTER_KEYPAIR_PATH
    #[arg(long, global = true)]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload an image and mint it as a new NFT
    Mint {
        image: PathBuf,
        name: String,
        /// Defaults to NFT_MINTER_DEFAULT_SYMBOL
        symbol: Option<String>,
        #[arg(default_value = "")]
        description: String,
    },
    /// Transfer an NFT held by the keypair to another wallet
    Send { mint: String, recipient: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    ExitCode::from(exit_status(run(cli).await))
}

/// The single place a failed run is reported.
fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("❌ {:#}", e);
            1
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = cli.keypair {
        config.keypair_path = Some(path);
    }

    let keypair_path = config.keypair_path()?;
    let payer = load_keypair(&keypair_path)?;
    let minter = SolanaMinter::from_config(&config, payer)?;
    info!(
        "Using {} as payer on {}",
        minter.identity(),
        config.rpc_url
    );

    match cli.command {
        Command::Mint {
            image,
            name,
            symbol,
            description,
        } => {
            let storage = IpfsFileManager::from_config(&config)?;
            let request = MintRequest {
                image_path: image,
                name,
                symbol: symbol.unwrap_or_else(|| config.default_symbol.clone()),
                description,
            };

            let manager = MintManager::new(&storage, &minter);
            let outcome = manager.mint_from_file(&request).await?;

            println!("Image uploaded to: {}", outcome.asset_uri);
            println!("NFT created with address: {}", outcome.token.mint);
        }
        Command::Send { mint, recipient } => {
            let mint = parse_pubkey("mint", &mint)?;
            let recipient = parse_pubkey("recipient", &recipient)?;

            let signature = minter.transfer_nft(&mint, &recipient).await?;
            println!("NFT sent to {}: {}", recipient, signature);
        }
    }

    Ok(())
}

fn parse_pubkey(label: &str, value: &str) -> Result<Pubkey, MintError> {
    Pubkey::from_str(value)
        .map_err(|e| MintError::Config(format!("Invalid {} address '{}': {}", label, value, e)))
}

fn init_tracing() {
    // Initialize the LogTracer to convert `log` records to `tracing` events
    tracing_log::LogTracer::init().expect("Setting log tracer failed.");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // stdout is reserved for the result lines
    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default subscriber failed.");
}
