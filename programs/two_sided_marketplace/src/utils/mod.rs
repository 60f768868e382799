pub mod address;
pub mod authority;
pub mod payment;

use anchor_lang::prelude::*;
use crate::constants::MAX_ROYALTY_RATE;
use crate::errors::MarketplaceError;

pub fn validate_rate(rate: u8) -> Result<()> {
    require!(rate <= MAX_ROYALTY_RATE, MarketplaceError::InvalidRate);
    Ok(())
}

pub fn validate_price(price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);
    Ok(())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(MarketplaceError::MathOverflow.into())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MarketplaceError::MathOverflow.into())
}
