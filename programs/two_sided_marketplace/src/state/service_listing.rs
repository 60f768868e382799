use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;
use crate::state::ServiceNft;
use crate::utils::payment::require_funds;
use crate::utils::validate_price;

#[account]
#[derive(Debug)]
pub struct ServiceListing {
    pub service_nft: Pubkey,       // 32 bytes - listed asset
    pub vendor: Pubkey,            // 32 bytes - owner at listing time
    pub price: u64,                // 8 bytes - asking price
    pub payment_mint: Pubkey,      // 32 bytes - only mint accepted as payment
    pub is_active: bool,           // 1 byte - available for purchase
    pub bump: u8,                  // 1 byte
}

impl ServiceListing {
    pub const SIZE: usize = 32 + 32 + 8 + 32 + 1 + 1;

    /// Loads a listing from its PDA. An address that was never listed reads
    /// as an inactive listing.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(MarketplaceError::ListingInactive);
        }
        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data[..];
        Self::try_deserialize(&mut slice).map_err(|_| error!(MarketplaceError::ListingInactive))
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// A listing is live while it is active and its lister still owns the
    /// asset. Once ownership moves on, the old listing is dead weight.
    pub fn is_live(&self, service_nft: &ServiceNft) -> bool {
        self.is_active && self.vendor == service_nft.owner
    }

    /// Opens (or reopens) the listing. A freshly created listing account is
    /// zeroed and therefore inactive; a stale one may be taken over by the
    /// asset's current owner.
    pub fn activate(
        &mut self,
        service_nft_key: Pubkey,
        service_nft: &ServiceNft,
        price: u64,
        payment_mint: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_live(service_nft), MarketplaceError::AlreadyListed);
        validate_price(price)?;

        self.service_nft = service_nft_key;
        self.vendor = service_nft.owner;
        self.price = price;
        self.payment_mint = payment_mint;
        self.is_active = true;
        self.bump = bump;
        Ok(())
    }

    pub fn assert_purchasable(&self, service_nft: &ServiceNft) -> Result<()> {
        require!(self.is_live(service_nft), MarketplaceError::ListingInactive);
        Ok(())
    }

    /// Sells the listed asset to `buyer`: closes the listing and moves
    /// ownership. Returns the amount the buyer owes the seller. Nothing is
    /// written unless every check passes.
    pub fn settle(
        &mut self,
        service_nft: &mut ServiceNft,
        buyer: Pubkey,
        buyer_mint: &Pubkey,
        buyer_balance: u64,
    ) -> Result<u64> {
        self.assert_purchasable(service_nft)?;
        require_keys_eq!(
            *buyer_mint,
            self.payment_mint,
            MarketplaceError::InvalidTokenAccount
        );
        require_funds(buyer_balance, self.price)?;

        service_nft.owner = buyer;
        self.is_active = false;
        Ok(self.price)
    }
}
