//! Program constants for the Turtle staking program.
//!
//! TURTLE amounts are expressed in base units of a 9-decimal mint; native
//! amounts are lamports.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving per-owner stake position PDAs
pub const STAKE_POSITION_SEED: &[u8] = b"stake_position";

/// Seed for deriving the pool vault PDA
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed prefix of Metaplex metadata PDAs
pub const METADATA_SEED: &[u8] = b"metadata";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Decimals of the TURTLE mint; the token constants below assume this scale
pub const TURTLE_DECIMALS: u8 = 9;

/// One whole TURTLE in base units
pub const ONE_TURTLE: u64 = 1_000_000_000;

/// Initial collateral requirement per staked NFT (35,000 TURTLE)
pub const TURTLE_PER_NFT: u64 = 35_000 * ONE_TURTLE;

/// Floor for the collateral requirement (10,000 TURTLE)
pub const MIN_REQUIRED_TURTLE: u64 = 10_000 * ONE_TURTLE;

/// Initial reward per NFT per elapsed day (10 TURTLE)
pub const DAILY_EARNING_RATE: u64 = 10 * ONE_TURTLE;

/// Ceiling for the daily earning rate (10 TURTLE)
pub const MAX_DAILY_RATE: u64 = 10 * ONE_TURTLE;

/// Withdrawal fee when unstaking within the first 24 hours
pub const FIRST_24H_FEE: u64 = 10 * LAMPORTS_PER_SOL;

/// Withdrawal fee when unstaking between 24 and 72 hours
pub const FIRST_72H_FEE: u64 = 5 * LAMPORTS_PER_SOL;

/// Number of accounts that prove custody of one collection NFT:
/// `[mint, metadata, token_account]`
pub const NFT_PROOF_ACCOUNTS: usize = 3;
