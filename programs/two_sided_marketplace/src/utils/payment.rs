use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};
use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::MarketplaceError;
use crate::utils::{safe_add, safe_sub, validate_rate};

/// Payment shares of a resale. Seller proceeds are the remainder, so the
/// three shares always add up to the resale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResaleSplit {
    pub base_royalty: u64,
    pub vendor_royalty: u64,
    pub seller_proceeds: u64,
}

impl ResaleSplit {
    pub fn compute(
        resell_price: u64,
        base_royalty_rate: u8,
        vendor_royalty_rate: u8,
    ) -> Result<Self> {
        validate_rate(base_royalty_rate)?;
        validate_rate(vendor_royalty_rate)?;

        let base_royalty = royalty_amount(resell_price, base_royalty_rate)?;
        let vendor_royalty = royalty_amount(resell_price, vendor_royalty_rate)?;

        // Rates above 100% combined would take more than the price
        let royalties = safe_add(base_royalty, vendor_royalty)?;
        require!(royalties <= resell_price, MarketplaceError::InvalidRate);

        Ok(Self {
            base_royalty,
            vendor_royalty,
            seller_proceeds: safe_sub(resell_price, royalties)?,
        })
    }

    pub fn total(&self) -> Result<u64> {
        safe_add(safe_add(self.base_royalty, self.vendor_royalty)?, self.seller_proceeds)
    }
}

/// floor(price * rate / 100)
pub fn royalty_amount(price: u64, rate: u8) -> Result<u64> {
    let amount = (price as u128)
        .checked_mul(rate as u128)
        .ok_or(MarketplaceError::MathOverflow)?
        .checked_div(PERCENT_DENOMINATOR as u128)
        .ok_or(MarketplaceError::MathOverflow)?;
    amount.try_into().map_err(|_| MarketplaceError::MathOverflow.into())
}

pub fn require_funds(balance: u64, amount: u64) -> Result<()> {
    require!(balance >= amount, MarketplaceError::InsufficientFunds);
    Ok(())
}

/// Move `amount` tokens signed for by `authority`. Zero amounts are skipped.
pub fn transfer_tokens<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new(token_program, Transfer { from, to, authority }),
        amount,
    )
}
