//! Instruction handlers for the Turtle redemption vault.

pub mod admin;
pub mod deposit_nfts;
pub mod initialize;
pub mod purchase_nfts;
pub mod swap_nfts;
pub mod withdraw_native;

pub use admin::*;
pub use deposit_nfts::*;
pub use initialize::*;
pub use purchase_nfts::*;
pub use swap_nfts::*;
pub use withdraw_native::*;
