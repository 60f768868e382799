use anchor_lang::prelude::*;
use crate::state::ServiceNft;

#[derive(Accounts)]
#[instruction(metadata: String)]
pub struct MintServiceNft<'info> {
    #[account(
        init,
        payer = vendor,
        space = ServiceNft::space(&metadata),
    )]
    pub service_nft: Account<'info, ServiceNft>,

    #[account(mut)]
    pub vendor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn mint_service_nft(
    ctx: Context<MintServiceNft>,
    metadata: String,
    price: u64,
    is_soulbound: bool,
    royalty_rate: u8,
) -> Result<()> {
    ServiceNft::validate_mint(&metadata, price, royalty_rate)?;

    let vendor = ctx.accounts.vendor.key();
    let service_nft = &mut ctx.accounts.service_nft;
    service_nft.vendor = vendor;
    service_nft.metadata = metadata;
    service_nft.price = price;
    service_nft.is_soulbound = is_soulbound;
    service_nft.royalty_rate = royalty_rate;
    service_nft.owner = vendor;

    emit!(ServiceNftMinted {
        service_nft: service_nft.key(),
        vendor,
        price,
        is_soulbound,
        royalty_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Service NFT {} minted by {} (soulbound: {})",
        service_nft.key(),
        vendor,
        is_soulbound
    );

    Ok(())
}

#[event]
pub struct ServiceNftMinted {
    pub service_nft: Pubkey,
    pub vendor: Pubkey,
    pub price: u64,
    pub is_soulbound: bool,
    pub royalty_rate: u8,
    pub timestamp: i64,
}
