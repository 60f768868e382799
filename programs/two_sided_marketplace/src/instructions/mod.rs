pub mod initialize_marketplace;
pub mod register_vendor;
pub mod mint_service_nft;
pub mod list_service;
pub mod purchase_service;
pub mod transfer_service_nft;
pub mod resell_service_nft;

pub use initialize_marketplace::*;
pub use register_vendor::*;
pub use mint_service_nft::*;
pub use list_service::*;
pub use purchase_service::*;
pub use transfer_service_nft::*;
pub use resell_service_nft::*;
