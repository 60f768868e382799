use anchor_lang::prelude::*;

#[account]
pub struct Marketplace {
    pub admin: Pubkey,             // 32 bytes
    pub base_royalty_rate: u8,     // 1 byte - percent of every resale
}

impl Marketplace {
    pub const SIZE: usize = 32 + 1;
}
