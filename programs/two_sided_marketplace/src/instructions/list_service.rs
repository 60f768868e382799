use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::SERVICE_LISTING_SEED;
use crate::errors::MarketplaceError;
use crate::state::{ServiceListing, ServiceNft};

#[derive(Accounts)]
pub struct ListService<'info> {
    #[account(
        constraint = service_nft.owner == vendor.key() @ MarketplaceError::Unauthorized,
    )]
    pub service_nft: Account<'info, ServiceNft>,

    // Reused after a sale so the new owner can list the same asset again
    #[account(
        init_if_needed,
        payer = vendor,
        seeds = [SERVICE_LISTING_SEED, service_nft.key().as_ref()],
        bump,
        space = 8 + ServiceListing::SIZE,
    )]
    pub service_listing: Account<'info, ServiceListing>,

    /// Currency the vendor accepts for this listing
    pub payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub vendor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn list_service(ctx: Context<ListService>, price: u64) -> Result<()> {
    let service_nft = ctx.accounts.service_nft.key();
    let vendor = ctx.accounts.vendor.key();
    let payment_mint = ctx.accounts.payment_mint.key();

    let service_listing = &mut ctx.accounts.service_listing;
    service_listing.activate(
        service_nft,
        &ctx.accounts.service_nft,
        price,
        payment_mint,
        ctx.bumps.service_listing,
    )?;

    emit!(ServiceListed {
        listing: service_listing.key(),
        service_nft,
        vendor,
        price,
        payment_mint,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Service {} listed at price {}", service_nft, price);

    Ok(())
}

#[event]
pub struct ServiceListed {
    pub listing: Pubkey,
    pub service_nft: Pubkey,
    pub vendor: Pubkey,
    pub price: u64,
    pub payment_mint: Pubkey,
    pub timestamp: i64,
}
