//! Program constants for the Turtle redemption vault.
//!
//! TURTLE amounts are expressed in base units of a 9-decimal mint; native
//! amounts are lamports.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed for deriving the redemption pool PDA
pub const REDEMPTION_POOL_SEED: &[u8] = b"redemption_pool";

/// Seed for deriving the pool's TURTLE vault PDA
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving the native treasury PDA
pub const NATIVE_TREASURY_SEED: &[u8] = b"native_treasury";

/// Seed prefix of Metaplex metadata PDAs
pub const METADATA_SEED: &[u8] = b"metadata";

/// Decimals of the TURTLE mint; the token constants below assume this scale
pub const TURTLE_DECIMALS: u8 = 9;

/// One whole TURTLE in base units
pub const ONE_TURTLE: u64 = 1_000_000_000;

/// Largest batch accepted by deposit, swap and purchase
pub const MAX_BATCH_SIZE: usize = 20;

/// Capacity of the held-NFT set; pool account space is fixed at creation
pub const MAX_POOL_SIZE: usize = 100;

/// Default TURTLE fee per swapped unit (100 TURTLE)
pub const DEFAULT_SWAP_FEE_TURTLE: u64 = 100 * ONE_TURTLE;

/// Default native fee per purchased unit
pub const DEFAULT_PURCHASE_FEE_NATIVE: u64 = 10 * LAMPORTS_PER_SOL;

/// Accounts per deposited NFT: `[mint, metadata, depositor_nft, vault_nft]`
pub const DEPOSIT_GROUP_ACCOUNTS: usize = 4;

/// Accounts per swapped pair:
/// `[user_mint, user_metadata, user_src, vault_dst, vault_mint, vault_src, user_dst]`
pub const SWAP_GROUP_ACCOUNTS: usize = 7;

/// Accounts per purchased NFT: `[mint, vault_src, buyer_dst]`
pub const PURCHASE_GROUP_ACCOUNTS: usize = 3;
