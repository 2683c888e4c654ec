//! # Turtle Staking Program
//!
//! Stakers commit their full current holdings of a verified NFT collection,
//! lock TURTLE collateral proportional to the committed count, and accrue a
//! daily TURTLE reward per NFT. The NFTs never leave the wallet; earnings
//! accrue on `min(committed, currently held)`, so transferring collateralized
//! NFTs away stops their accrual without touching the escrow.
//!
//! ## Features
//! - Daily linear reward accrual with whole-day flooring
//! - Claim without unstaking; restaking settles accrued earnings first
//! - Tiered native-currency withdrawal fee that steps down with stake age
//! - Collateral requirement and earning rate can only be lowered
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("2FQ7mR2832Ea9V9wyaCbiSMCXzp9nAMFW3PQgD4z8Bdh");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod turtle_staking {
    use super::*;

    /// Initializes the staking pool for a collection with default parameters.
    ///
    /// # Errors
    /// Returns an error if the TURTLE mint does not use 9 decimals.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Stakes the caller's current collection holdings, pulling collateral
    /// for any newly committed NFTs. Remaining accounts carry one
    /// `[mint, metadata, token_account]` triple per held NFT.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller holds no collection NFTs
    /// - The caller presents fewer NFTs than already staked
    /// - The caller's TURTLE balance cannot cover the full collateral
    pub fn stake<'info>(ctx: Context<'_, '_, 'info, 'info, Stake<'info>>) -> Result<()> {
        instructions::stake::handler(ctx)
    }

    /// Claims accrued earnings without unstaking. Remaining accounts carry
    /// the caller's current holdings as triples.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No active stake position exists
    /// - Less than one full day of earnings has accrued
    /// - The pool vault cannot cover the payout
    pub fn claim<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Unstakes the full position: returns collateral plus settled earnings
    /// in one transfer and charges the scheduled native withdrawal fee.
    ///
    /// # Arguments
    /// * `fee_limit` - Lamports the caller authorizes for the fee; only the
    ///   scheduled amount is taken
    ///
    /// # Errors
    /// Returns an error if:
    /// - No active stake position exists
    /// - Current holdings are below the staked count
    /// - `fee_limit` is below the scheduled fee
    pub fn unstake<'info>(
        ctx: Context<'_, '_, 'info, 'info, Unstake<'info>>,
        fee_limit: u64,
    ) -> Result<()> {
        instructions::unstake::handler(ctx, fee_limit)
    }

    /// Funds the reward pool with TURTLE. Permissionless.
    ///
    /// # Errors
    /// Returns an error if the amount is zero.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Admin: lower the collateral requirement per staked NFT.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority, the value is
    /// below the floor, or the value exceeds the current setting.
    pub fn adjust_required_turtle(ctx: Context<AdminControl>, new_value: u64) -> Result<()> {
        instructions::admin::adjust_required_turtle_handler(ctx, new_value)
    }

    /// Admin: lower the daily earning rate.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority, the value is
    /// above the ceiling, or the value exceeds the current setting.
    pub fn adjust_daily_earning_rate(ctx: Context<AdminControl>, new_value: u64) -> Result<()> {
        instructions::admin::adjust_daily_earning_rate_handler(ctx, new_value)
    }

    /// Admin: point withdrawal fees at a new sink address.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority.
    pub fn set_vault_address(ctx: Context<AdminControl>, new_vault: Pubkey) -> Result<()> {
        instructions::admin::set_vault_address_handler(ctx, new_vault)
    }

    /// Admin: transfer pool authority to a new address.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or the new
    /// authority is the default pubkey.
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }
}
