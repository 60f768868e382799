use anchor_lang::prelude::*;
use crate::constants::MAX_SERVICE_METADATA;
use crate::errors::MarketplaceError;
use crate::utils::payment::{require_funds, ResaleSplit};
use crate::utils::{validate_price, validate_rate};

#[account]
pub struct ServiceNft {
    pub vendor: Pubkey,            // 32 bytes - minting vendor, receives resale royalties
    pub metadata: String,          // 4 + len bytes
    pub price: u64,                // 8 bytes - mint price
    pub is_soulbound: bool,        // 1 byte
    pub royalty_rate: u8,          // 1 byte - vendor percent of every resale
    pub owner: Pubkey,             // 32 bytes - current economic owner
}

impl ServiceNft {
    pub fn space(metadata: &str) -> usize {
        8 + 32 + 4 + metadata.len() + 8 + 1 + 1 + 32
    }

    pub fn validate_mint(metadata: &str, price: u64, royalty_rate: u8) -> Result<()> {
        require!(
            metadata.len() <= MAX_SERVICE_METADATA,
            MarketplaceError::MetadataTooLong
        );
        validate_price(price)?;
        validate_rate(royalty_rate)
    }

    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, MarketplaceError::Unauthorized);
        Ok(())
    }

    pub fn assert_transferable(&self) -> Result<()> {
        require!(!self.is_soulbound, MarketplaceError::SoulboundImmutable);
        Ok(())
    }

    /// Checks the parties named for a resale. Soulbound is checked first so
    /// that no choice of accounts can mask it.
    pub fn assert_resale_parties(&self, seller: &Pubkey, vendor: &Pubkey) -> Result<()> {
        self.assert_transferable()?;
        self.assert_owner(seller)?;
        require_keys_eq!(*vendor, self.vendor, MarketplaceError::Unauthorized);
        Ok(())
    }

    /// Hands the asset to `new_owner` without any payment.
    ///
    /// Soulbound assets are rejected before the caller is even looked at, so
    /// a soulbound asset reports `SoulboundImmutable` to everyone.
    pub fn transfer_to(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.assert_transferable()?;
        self.assert_owner(caller)?;
        self.owner = new_owner;
        Ok(())
    }

    /// Checks a resale and moves ownership to `buyer`, returning how the
    /// buyer's payment is to be split. Nothing is written unless every check
    /// passes.
    pub fn resell(
        &mut self,
        seller: &Pubkey,
        buyer: Pubkey,
        resell_price: u64,
        base_royalty_rate: u8,
        buyer_balance: u64,
    ) -> Result<ResaleSplit> {
        self.assert_transferable()?;
        self.assert_owner(seller)?;
        validate_price(resell_price)?;
        let split = ResaleSplit::compute(resell_price, base_royalty_rate, self.royalty_rate)?;
        require_funds(buyer_balance, resell_price)?;

        self.owner = buyer;
        Ok(split)
    }
}
