use anchor_lang::prelude::*;
use crate::state::ServiceNft;

#[derive(Accounts)]
pub struct TransferServiceNft<'info> {
    #[account(mut)]
    pub service_nft: Account<'info, ServiceNft>,

    pub current_owner: Signer<'info>,

    /// CHECK: Any wallet may receive the NFT
    pub new_owner: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn transfer_service_nft(ctx: Context<TransferServiceNft>) -> Result<()> {
    let from = ctx.accounts.current_owner.key();
    let to = ctx.accounts.new_owner.key();

    let service_nft = &mut ctx.accounts.service_nft;
    service_nft.transfer_to(&from, to)?;

    emit!(ServiceNftTransferred {
        service_nft: service_nft.key(),
        from,
        to,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Service NFT {} transferred from {} to {}", service_nft.key(), from, to);

    Ok(())
}

#[event]
pub struct ServiceNftTransferred {
    pub service_nft: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub timestamp: i64,
}
