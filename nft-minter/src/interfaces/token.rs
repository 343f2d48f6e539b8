use solana_sdk::{pubkey::Pubkey, signature::Signature};

/// Royalty charged on secondary sales, in basis points (5%).
pub const SELLER_FEE_BASIS_POINTS: u16 = 500;
pub const CREATOR_SHARE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    pub share: u8,
}

/// Everything the token metadata program needs to create a new NFT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
}

impl TokenDescriptor {
    /// Builds a descriptor whose only creator is `creator`, holding the full
    /// share and marked verified. Strings are taken as-is.
    pub fn new(name: &str, symbol: &str, description: &str, uri: &str, creator: Pubkey) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: description.to_string(),
            uri: uri.to_string(),
            seller_fee_basis_points: SELLER_FEE_BASIS_POINTS,
            creators: vec![Creator {
                address: creator,
                verified: true,
                share: CREATOR_SHARE,
            }],
        }
    }

    /// The sole creator, if the descriptor has exactly one.
    pub fn sole_creator(&self) -> Option<&Creator> {
        match self.creators.as_slice() {
            [creator] => Some(creator),
            _ => None,
        }
    }
}

/// Accounts created by a successful mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedToken {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub master_edition: Pubkey,
    pub token_account: Pubkey,
    pub signature: Signature,
}
