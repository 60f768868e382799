use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("C2WWzi5iPzhVrzh3k7YqFWhLD1au2QbR7NNcsBL5d43f");

#[program]
pub mod two_sided_marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        base_royalty_rate: u8,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx, base_royalty_rate)
    }

    pub fn register_vendor(
        ctx: Context<RegisterVendor>,
        name: String,
        description: String,
    ) -> Result<()> {
        instructions::register_vendor::register_vendor(ctx, name, description)
    }

    pub fn mint_service_nft(
        ctx: Context<MintServiceNft>,
        metadata: String,
        price: u64,
        is_soulbound: bool,
        royalty_rate: u8,
    ) -> Result<()> {
        instructions::mint_service_nft::mint_service_nft(
            ctx,
            metadata,
            price,
            is_soulbound,
            royalty_rate,
        )
    }

    pub fn list_service(ctx: Context<ListService>, price: u64) -> Result<()> {
        instructions::list_service::list_service(ctx, price)
    }

    pub fn purchase_service(ctx: Context<PurchaseService>) -> Result<()> {
        instructions::purchase_service::purchase_service(ctx)
    }

    pub fn transfer_service_nft(ctx: Context<TransferServiceNft>) -> Result<()> {
        instructions::transfer_service_nft::transfer_service_nft(ctx)
    }

    pub fn resell_service_nft(ctx: Context<ResellServiceNft>, resell_price: u64) -> Result<()> {
        instructions::resell_service_nft::resell_service_nft(ctx, resell_price)
    }
}
