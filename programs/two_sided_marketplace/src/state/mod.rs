pub mod marketplace;
pub mod service_listing;
pub mod service_nft;
pub mod vendor;

pub use marketplace::*;
pub use service_listing::*;
pub use service_nft::*;
pub use vendor::*;
