use anchor_lang::prelude::*;
use crate::state::Vendor;

#[derive(Accounts)]
#[instruction(name: String, description: String)]
pub struct RegisterVendor<'info> {
    #[account(
        init,
        payer = owner,
        space = Vendor::space(&name, &description),
    )]
    pub vendor: Account<'info, Vendor>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn register_vendor(
    ctx: Context<RegisterVendor>,
    name: String,
    description: String,
) -> Result<()> {
    Vendor::validate_profile(&name, &description)?;

    let vendor = &mut ctx.accounts.vendor;
    vendor.owner = ctx.accounts.owner.key();
    vendor.name = name;
    vendor.description = description;
    vendor.active = true;

    emit!(VendorRegistered {
        vendor: vendor.key(),
        owner: vendor.owner,
        name: vendor.name.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Vendor '{}' registered", vendor.name);

    Ok(())
}

#[event]
pub struct VendorRegistered {
    pub vendor: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub timestamp: i64,
}
