use anchor_lang::prelude::*;
use crate::constants::SERVICE_LISTING_SEED;

/// Derive the listing PDA for a service NFT. One address per asset.
pub fn find_service_listing_address(service_nft: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SERVICE_LISTING_SEED, service_nft.as_ref()],
        &crate::ID,
    )
}
