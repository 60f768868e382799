// Seeds
pub const SERVICE_LISTING_SEED: &[u8] = b"service_listing";

// String limits (bytes)
pub const MAX_VENDOR_NAME: usize = 50;
pub const MAX_VENDOR_DESCRIPTION: usize = 100;
pub const MAX_SERVICE_METADATA: usize = 200;

// Royalty rates are whole percentages
pub const MAX_ROYALTY_RATE: u8 = 100;
pub const PERCENT_DENOMINATOR: u64 = 100;
