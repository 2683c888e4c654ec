use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

#[account]
pub struct StakePool {
    pub authority: Pubkey,
    pub collection_mint: Pubkey,
    pub turtle_mint: Pubkey,
    pub turtle_vault: Pubkey,
    /// Fee sink for native withdrawal fees.
    pub vault_address: Pubkey,

    pub required_turtle_per_nft: u64,
    pub daily_earning_rate: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 5)
        + (8 * 2)
        + (8 * 2)
        + 2;

    /// Lowers the collateral requirement. Increases are rejected so existing
    /// stakers never face a retroactive cost hike; the protocol floor holds.
    pub fn lower_required_turtle(&mut self, new_value: u64) -> Result<()> {
        require!(
            new_value >= MIN_REQUIRED_TURTLE,
            StakingError::BelowMinimumRequirement
        );
        require!(
            new_value <= self.required_turtle_per_nft,
            StakingError::RateIncreaseForbidden
        );
        self.required_turtle_per_nft = new_value;
        Ok(())
    }

    /// Lowers the daily earning rate. Increases are rejected; the protocol
    /// ceiling holds.
    pub fn lower_daily_rate(&mut self, new_value: u64) -> Result<()> {
        require!(new_value <= MAX_DAILY_RATE, StakingError::AboveMaximumRate);
        require!(
            new_value <= self.daily_earning_rate,
            StakingError::RateIncreaseForbidden
        );
        self.daily_earning_rate = new_value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> StakePool {
        StakePool {
            authority: Pubkey::default(),
            collection_mint: Pubkey::default(),
            turtle_mint: Pubkey::default(),
            turtle_vault: Pubkey::default(),
            vault_address: Pubkey::default(),
            required_turtle_per_nft: TURTLE_PER_NFT,
            daily_earning_rate: DAILY_EARNING_RATE,
            created_at: 0,
            last_updated: 0,
            vault_bump: 0,
            bump: 0,
        }
    }

    #[test]
    fn required_turtle_can_only_decrease() {
        let mut p = pool();
        p.lower_required_turtle(30_000 * ONE_TURTLE).unwrap();
        assert_eq!(p.required_turtle_per_nft, 30_000 * ONE_TURTLE);

        assert!(p.lower_required_turtle(31_000 * ONE_TURTLE).is_err());
        assert_eq!(p.required_turtle_per_nft, 30_000 * ONE_TURTLE);
    }

    #[test]
    fn required_turtle_floor_enforced() {
        let mut p = pool();
        p.lower_required_turtle(MIN_REQUIRED_TURTLE).unwrap();
        assert_eq!(p.required_turtle_per_nft, MIN_REQUIRED_TURTLE);

        assert!(p.lower_required_turtle(MIN_REQUIRED_TURTLE - 1).is_err());
    }

    #[test]
    fn setting_current_value_is_allowed() {
        let mut p = pool();
        p.lower_required_turtle(TURTLE_PER_NFT).unwrap();
        p.lower_daily_rate(DAILY_EARNING_RATE).unwrap();
    }

    #[test]
    fn daily_rate_can_only_decrease() {
        let mut p = pool();
        p.lower_daily_rate(8 * ONE_TURTLE).unwrap();
        assert_eq!(p.daily_earning_rate, 8 * ONE_TURTLE);

        assert!(p.lower_daily_rate(9 * ONE_TURTLE).is_err());

        p.lower_daily_rate(0).unwrap();
        assert_eq!(p.daily_earning_rate, 0);
    }

    #[test]
    fn daily_rate_ceiling_enforced() {
        let mut p = pool();
        assert!(p.lower_daily_rate(MAX_DAILY_RATE + 1).is_err());
    }
}
