use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::SERVICE_LISTING_SEED;
use crate::errors::MarketplaceError;
use crate::state::{ServiceListing, ServiceNft};
use crate::utils::authority::require_token_account;
use crate::utils::payment::transfer_tokens;

#[derive(Accounts)]
pub struct PurchaseService<'info> {
    #[account(mut)]
    pub service_nft: Account<'info, ServiceNft>,

    /// CHECK: Address pinned by the seeds; contents loaded by the handler so
    /// that a never-listed asset reports an inactive listing
    #[account(
        mut,
        seeds = [SERVICE_LISTING_SEED, service_nft.key().as_ref()],
        bump,
    )]
    pub service_listing: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: Seller receives payment, must be the current owner
    #[account(
        constraint = seller.key() == service_nft.owner @ MarketplaceError::Unauthorized,
    )]
    pub seller: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn purchase_service(ctx: Context<PurchaseService>) -> Result<()> {
    let accounts = ctx.accounts;
    let buyer = accounts.buyer.key();
    let seller = accounts.seller.key();
    let listing_info = accounts.service_listing.to_account_info();

    let mut listing = ServiceListing::load(&listing_info)?;
    require_keys_eq!(
        listing.service_nft,
        accounts.service_nft.key(),
        MarketplaceError::ListingInactive
    );
    listing.assert_purchasable(&accounts.service_nft)?;

    // Payment must be in the mint the seller listed for
    require_token_account(
        &accounts.buyer_token_account.owner,
        &accounts.buyer_token_account.mint,
        &buyer,
        &listing.payment_mint,
    )?;
    require_token_account(
        &accounts.seller_token_account.owner,
        &accounts.seller_token_account.mint,
        &seller,
        &listing.payment_mint,
    )?;

    let buyer_mint = accounts.buyer_token_account.mint;
    let buyer_balance = accounts.buyer_token_account.amount;
    let price = listing.settle(&mut accounts.service_nft, buyer, &buyer_mint, buyer_balance)?;
    listing.store(&listing_info)?;

    // Single transfer of the full price; rolls back the state above on failure
    transfer_tokens(
        accounts.token_program.to_account_info(),
        accounts.buyer_token_account.to_account_info(),
        accounts.seller_token_account.to_account_info(),
        accounts.buyer.to_account_info(),
        price,
    )?;

    emit!(ServicePurchased {
        listing: *listing_info.key,
        service_nft: accounts.service_nft.key(),
        buyer,
        seller,
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Service {} sold to {} for {}", accounts.service_nft.key(), buyer, price);

    Ok(())
}

#[event]
pub struct ServicePurchased {
    pub listing: Pubkey,
    pub service_nft: Pubkey,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}
