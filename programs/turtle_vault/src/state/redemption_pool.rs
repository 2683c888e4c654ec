use anchor_lang::prelude::*;

use crate::constants::MAX_POOL_SIZE;
use crate::state::NftSet;

#[account]
pub struct RedemptionPool {
    pub authority: Pubkey,
    pub collection_mint: Pubkey,
    pub turtle_mint: Pubkey,
    pub turtle_vault: Pubkey,
    pub native_treasury: Pubkey,

    pub swap_fee_turtle: u64,
    pub purchase_fee_native: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub vault_bump: u8,
    pub treasury_bump: u8,
    pub bump: u8,

    /// NFTs currently backing the pool price.
    pub held: NftSet,
}

impl RedemptionPool {
    pub const LEN: usize = 8
        + (32 * 5)
        + (8 * 2)
        + (8 * 2)
        + 3
        + NftSet::space(MAX_POOL_SIZE);
}
