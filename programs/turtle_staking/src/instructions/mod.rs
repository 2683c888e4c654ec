//! Instruction handlers for the Turtle staking program.

pub mod admin;
pub mod claim;
pub mod fund_rewards;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use claim::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
