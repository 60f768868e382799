use anchor_lang::prelude::*;
use crate::constants::{MAX_VENDOR_DESCRIPTION, MAX_VENDOR_NAME};
use crate::errors::MarketplaceError;

#[account]
pub struct Vendor {
    pub owner: Pubkey,             // 32 bytes
    pub name: String,              // 4 + len bytes
    pub description: String,       // 4 + len bytes
    pub active: bool,              // 1 byte
}

impl Vendor {
    /// Account space (discriminator included) for the given profile strings.
    pub fn space(name: &str, description: &str) -> usize {
        8 + 32 + 4 + name.len() + 4 + description.len() + 1
    }

    pub fn validate_profile(name: &str, description: &str) -> Result<()> {
        require!(name.len() <= MAX_VENDOR_NAME, MarketplaceError::NameTooLong);
        require!(
            description.len() <= MAX_VENDOR_DESCRIPTION,
            MarketplaceError::DescriptionTooLong
        );
        Ok(())
    }
}
