use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{Marketplace, ServiceNft};
use crate::utils::authority::require_token_account;
use crate::utils::payment::transfer_tokens;

#[derive(Accounts)]
pub struct ResellServiceNft<'info> {
    #[account(mut)]
    pub service_nft: Account<'info, ServiceNft>,

    pub marketplace: Account<'info, Marketplace>,

    pub current_owner: Signer<'info>,

    pub buyer: Signer<'info>,

    /// CHECK: Original minting vendor, matched against the NFT in the handler
    pub vendor: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub marketplace_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vendor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn resell_service_nft(ctx: Context<ResellServiceNft>, resell_price: u64) -> Result<()> {
    let accounts = ctx.accounts;
    let seller = accounts.current_owner.key();
    let buyer = accounts.buyer.key();

    accounts
        .service_nft
        .assert_resale_parties(&seller, &accounts.vendor.key())?;

    // Both parties sign, so the buyer's mint is the agreed currency
    let payment_mint = accounts.buyer_token_account.mint;
    require_token_account(
        &accounts.buyer_token_account.owner,
        &accounts.buyer_token_account.mint,
        &buyer,
        &payment_mint,
    )?;
    require_token_account(
        &accounts.seller_token_account.owner,
        &accounts.seller_token_account.mint,
        &seller,
        &payment_mint,
    )?;
    require_token_account(
        &accounts.marketplace_token_account.owner,
        &accounts.marketplace_token_account.mint,
        &accounts.marketplace.admin,
        &payment_mint,
    )?;
    require_token_account(
        &accounts.vendor_token_account.owner,
        &accounts.vendor_token_account.mint,
        &accounts.service_nft.vendor,
        &payment_mint,
    )?;

    let buyer_balance = accounts.buyer_token_account.amount;
    let base_royalty_rate = accounts.marketplace.base_royalty_rate;
    let split = accounts.service_nft.resell(
        &seller,
        buyer,
        resell_price,
        base_royalty_rate,
        buyer_balance,
    )?;

    // The three shares add up to resell_price, debited from the buyer
    transfer_tokens(
        accounts.token_program.to_account_info(),
        accounts.buyer_token_account.to_account_info(),
        accounts.marketplace_token_account.to_account_info(),
        accounts.buyer.to_account_info(),
        split.base_royalty,
    )?;
    transfer_tokens(
        accounts.token_program.to_account_info(),
        accounts.buyer_token_account.to_account_info(),
        accounts.vendor_token_account.to_account_info(),
        accounts.buyer.to_account_info(),
        split.vendor_royalty,
    )?;
    transfer_tokens(
        accounts.token_program.to_account_info(),
        accounts.buyer_token_account.to_account_info(),
        accounts.seller_token_account.to_account_info(),
        accounts.buyer.to_account_info(),
        split.seller_proceeds,
    )?;

    emit!(ServiceNftResold {
        service_nft: accounts.service_nft.key(),
        seller,
        buyer,
        vendor: accounts.service_nft.vendor,
        resell_price,
        base_royalty: split.base_royalty,
        vendor_royalty: split.vendor_royalty,
        seller_proceeds: split.seller_proceeds,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Service NFT {} resold for {} (marketplace {}, vendor {}, seller {})",
        accounts.service_nft.key(),
        resell_price,
        split.base_royalty,
        split.vendor_royalty,
        split.seller_proceeds
    );

    Ok(())
}

#[event]
pub struct ServiceNftResold {
    pub service_nft: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub vendor: Pubkey,
    pub resell_price: u64,
    pub base_royalty: u64,
    pub vendor_royalty: u64,
    pub seller_proceeds: u64,
    pub timestamp: i64,
}
