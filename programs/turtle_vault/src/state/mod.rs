//! State structures for the Turtle redemption vault.

pub mod nft_set;
pub mod redemption_pool;

pub use nft_set::*;
pub use redemption_pool::*;
