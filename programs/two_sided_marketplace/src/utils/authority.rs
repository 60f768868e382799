use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;

/// A token account may only stand in for `expected_owner` if that party owns
/// it and it holds the payment mint.
pub fn require_token_account(
    account_owner: &Pubkey,
    account_mint: &Pubkey,
    expected_owner: &Pubkey,
    payment_mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(
        *account_owner,
        *expected_owner,
        MarketplaceError::InvalidTokenAccount
    );
    require_keys_eq!(
        *account_mint,
        *payment_mint,
        MarketplaceError::InvalidTokenAccount
    );
    Ok(())
}
