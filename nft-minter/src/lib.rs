//! Upload an image to IPFS and mint it as a Metaplex NFT on Solana.
//!
//! The binary in `main.rs` wires the pieces together; everything it needs
//! lives here so the pipeline can be driven against mocks in tests.

pub mod helpers;
pub mod interfaces;
pub mod services;
