use anchor_lang::prelude::*;
use crate::state::Marketplace;
use crate::utils::validate_rate;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Marketplace::SIZE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(
    ctx: Context<InitializeMarketplace>,
    base_royalty_rate: u8,
) -> Result<()> {
    validate_rate(base_royalty_rate)?;

    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.admin = ctx.accounts.admin.key();
    marketplace.base_royalty_rate = base_royalty_rate;

    emit!(MarketplaceInitialized {
        marketplace: marketplace.key(),
        admin: marketplace.admin,
        base_royalty_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace initialized with {}% base royalty", base_royalty_rate);

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub admin: Pubkey,
    pub base_royalty_rate: u8,
    pub timestamp: i64,
}
