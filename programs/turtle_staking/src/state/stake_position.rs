use anchor_lang::prelude::*;

/// Per-owner stake record. Active while `nft_count > 0`; zeroed on full
/// unstake so a later restake starts a fresh position.
#[account]
pub struct StakePosition {
    pub owner: Pubkey,
    pub pool: Pubkey,

    pub nft_count: u64,
    pub staked_at: i64,
    pub last_claim_at: i64,

    pub bump: u8,
}

impl StakePosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    pub fn is_active(&self) -> bool {
        self.nft_count > 0
    }

    pub fn clear(&mut self) {
        self.nft_count = 0;
        self.staked_at = 0;
        self.last_claim_at = 0;
    }
}
