use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Royalty rate must be between 0 and 100")]
    InvalidRate,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Service is already listed")]
    AlreadyListed,

    #[msg("Listing is not active")]
    ListingInactive,

    #[msg("Soulbound NFTs cannot be transferred")]
    SoulboundImmutable,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Name must be 50 characters or less")]
    NameTooLong,

    #[msg("Description must be 100 characters or less")]
    DescriptionTooLong,

    #[msg("Metadata must be 200 characters or less")]
    MetadataTooLong,

    #[msg("Token account does not belong to the expected party")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
