use crate::interfaces::config::Config;
use crate::interfaces::error::MintError;
use crate::interfaces::token::{MintedToken, TokenDescriptor};
use crate::services::chain::TokenMinter;

use async_trait::async_trait;
use mpl_token_metadata::{
    accounts::{MasterEdition, Metadata},
    instructions::{CreateMasterEditionV3Builder, CreateMetadataAccountV3Builder},
    types::{Creator as MetadataCreator, DataV2},
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
    transaction::Transaction,
};
use spl_associated_token_account::{
    get_associated_token_address,
    instruction::{create_associated_token_account, create_associated_token_account_idempotent},
};
use spl_token::{instruction as token_instruction, state::Mint};
use tracing::{debug, info};

const NFT_DECIMALS: u8 = 0;
const NFT_SUPPLY: u64 = 1;

/// Mints Metaplex NFTs with the payer keypair as mint authority, update
/// authority and sole creator.
pub struct SolanaMinter {
    client: RpcClient,
    payer: Keypair,
}

#[async_trait]
impl TokenMinter for SolanaMinter {
    fn identity(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn create_nft(&self, descriptor: &TokenDescriptor) -> Result<MintedToken, MintError> {
        let payer = self.payer.pubkey();
        verify_creator(&payer, descriptor)?;

        let mint = Keypair::new();
        let mint_pubkey = mint.pubkey();
        debug!("Generated mint account {}", mint_pubkey);

        let mint_rent = self
            .client
            .get_minimum_balance_for_rent_exemption(Mint::LEN)
            .await?;

        let instructions =
            build_create_nft_instructions(&payer, &mint_pubkey, descriptor, mint_rent)?;

        info!(
            "Submitting mint transaction for '{}' ({} instructions)",
            descriptor.name,
            instructions.len()
        );
        let signature = self.send(&instructions, &[&self.payer, &mint]).await?;
        info!("Mint transaction confirmed: {}", signature);

        let (metadata, _) = Metadata::find_pda(&mint_pubkey);
        let (master_edition, _) = MasterEdition::find_pda(&mint_pubkey);

        Ok(MintedToken {
            mint: mint_pubkey,
            metadata,
            master_edition,
            token_account: get_associated_token_address(&payer, &mint_pubkey),
            signature,
        })
    }

    async fn transfer_nft(
        &self,
        mint: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<Signature, MintError> {
        let instructions = build_transfer_nft_instructions(&self.payer.pubkey(), mint, recipient)?;

        info!("Transferring {} to {}", mint, recipient);
        let signature = self.send(&instructions, &[&self.payer]).await?;
        info!("Transfer transaction confirmed: {}", signature);

        Ok(signature)
    }
}

impl SolanaMinter {
    pub fn new(rpc_url: String, commitment: CommitmentConfig, payer: Keypair) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url, commitment),
            payer,
        }
    }

    pub fn from_config(config: &Config, payer: Keypair) -> Result<Self, MintError> {
        Ok(Self::new(
            config.rpc_url.clone(),
            config.commitment_config()?,
            payer,
        ))
    }

    async fn send(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature, MintError> {
        let blockhash = self.client.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            signers,
            blockhash,
        );

        Ok(self
            .client
            .send_and_confirm_transaction(&transaction)
            .await?)
    }
}

/// The signer must be the one and only creator, otherwise the metadata
/// program would refuse to mark the creator verified.
pub fn verify_creator(signer: &Pubkey, descriptor: &TokenDescriptor) -> Result<(), MintError> {
    match descriptor.sole_creator() {
        Some(creator) if creator.address == *signer => Ok(()),
        Some(creator) => Err(MintError::CreatorMismatch {
            signer: *signer,
            creator: creator.address,
        }),
        None => Err(MintError::CreatorMismatch {
            signer: *signer,
            creator: Pubkey::default(),
        }),
    }
}

/// Instructions for a single-transaction NFT mint: mint account, token
/// account holding the one token, metadata and master edition.
pub fn build_create_nft_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    descriptor: &TokenDescriptor,
    mint_rent: u64,
) -> Result<Vec<Instruction>, MintError> {
    let token_program = spl_token::id();
    let token_account = get_associated_token_address(payer, mint);
    let (metadata, _) = Metadata::find_pda(mint);
    let (master_edition, _) = MasterEdition::find_pda(mint);

    let data = DataV2 {
        name: descriptor.name.clone(),
        symbol: descriptor.symbol.clone(),
        uri: descriptor.uri.clone(),
        seller_fee_basis_points: descriptor.seller_fee_basis_points,
        creators: Some(
            descriptor
                .creators
                .iter()
                .map(|creator| MetadataCreator {
                    address: creator.address,
                    verified: creator.verified,
                    share: creator.share,
                })
                .collect(),
        ),
        collection: None,
        uses: None,
    };

    Ok(vec![
        system_instruction::create_account(
            payer,
            mint,
            mint_rent,
            Mint::LEN as u64,
            &token_program,
        ),
        token_instruction::initialize_mint2(
            &token_program,
            mint,
            payer,
            Some(payer),
            NFT_DECIMALS,
        )?,
        create_associated_token_account(payer, payer, mint, &token_program),
        token_instruction::mint_to(&token_program, mint, &token_account, payer, &[], NFT_SUPPLY)?,
        CreateMetadataAccountV3Builder::new()
            .metadata(metadata)
            .mint(*mint)
            .mint_authority(*payer)
            .payer(*payer)
            .update_authority(*payer, true)
            .data(data)
            .is_mutable(true)
            .instruction(),
        CreateMasterEditionV3Builder::new()
            .edition(master_edition)
            .mint(*mint)
            .update_authority(*payer)
            .mint_authority(*payer)
            .payer(*payer)
            .metadata(metadata)
            .max_supply(0)
            .instruction(),
    ])
}

pub fn build_transfer_nft_instructions(
    owner: &Pubkey,
    mint: &Pubkey,
    recipient: &Pubkey,
) -> Result<Vec<Instruction>, MintError> {
    let token_program = spl_token::id();
    let source = get_associated_token_address(owner, mint);
    let destination = get_associated_token_address(recipient, mint);

    Ok(vec![
        create_associated_token_account_idempotent(owner, recipient, mint, &token_program),
        token_instruction::transfer_checked(
            &token_program,
            &source,
            mint,
            &destination,
            owner,
            &[],
            NFT_SUPPLY,
            NFT_DECIMALS,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::token::Creator;
    use solana_sdk::system_program;

    fn descriptor_for(creator: Pubkey) -> TokenDescriptor {
        TokenDescriptor::new(
            "Sunset",
            "MYNFT",
            "A sunset over the bay",
            "https://ipfs.io/ipfs/QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o",
            creator,
        )
    }

    #[test]
    fn should_accept_signer_as_sole_creator() {
        let signer = Pubkey::new_unique();
        assert!(verify_creator(&signer, &descriptor_for(signer)).is_ok());
    }

    #[test]
    fn should_reject_foreign_or_shared_creators() {
        let signer = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        match verify_creator(&signer, &descriptor_for(other)) {
            Err(MintError::CreatorMismatch { signer: s, creator }) => {
                assert_eq!(s, signer);
                assert_eq!(creator, other);
            }
            _ => panic!("Expected a creator mismatch"),
        }

        let mut shared = descriptor_for(signer);
        shared.creators.push(Creator {
            address: other,
            verified: false,
            share: 0,
        });
        assert!(matches!(
            verify_creator(&signer, &shared),
            Err(MintError::CreatorMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn should_reject_mismatched_creator_before_any_rpc_call() {
        // Nothing listens on this port; reaching the network would surface as an Rpc error.
        let minter = SolanaMinter::new(
            "http://127.0.0.1:1".to_string(),
            CommitmentConfig::confirmed(),
            Keypair::new(),
        );

        let result = minter
            .create_nft(&descriptor_for(Pubkey::new_unique()))
            .await;
        assert!(matches!(result, Err(MintError::CreatorMismatch { .. })));
    }

    #[test]
    fn should_build_mint_instructions_in_order() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let instructions =
            build_create_nft_instructions(&payer, &mint, &descriptor_for(payer), 1_461_600)
                .unwrap();

        let programs: Vec<Pubkey> = instructions.iter().map(|ix| ix.program_id).collect();
        assert_eq!(
            programs,
            vec![
                system_program::id(),
                spl_token::id(),
                spl_associated_token_account::id(),
                spl_token::id(),
                mpl_token_metadata::ID,
                mpl_token_metadata::ID,
            ]
        );

        let (metadata, _) = Metadata::find_pda(&mint);
        let (master_edition, _) = MasterEdition::find_pda(&mint);
        assert_eq!(instructions[4].accounts[0].pubkey, metadata);
        assert_eq!(instructions[5].accounts[0].pubkey, master_edition);

        let token_account = get_associated_token_address(&payer, &mint);
        assert!(instructions[3]
            .accounts
            .iter()
            .any(|account| account.pubkey == token_account));
    }

    #[test]
    fn should_build_transfer_instructions() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let instructions = build_transfer_nft_instructions(&owner, &mint, &recipient).unwrap();
        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[0].program_id, spl_associated_token_account::id());
        assert_eq!(instructions[1].program_id, spl_token::id());

        let destination = get_associated_token_address(&recipient, &mint);
        assert!(instructions[1]
            .accounts
            .iter()
            .any(|account| account.pubkey == destination));
    }
}
