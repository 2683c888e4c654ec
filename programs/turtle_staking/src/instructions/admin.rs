//! Admin instruction handlers.
//!
//! All setters require the pool authority. Rate parameters only move
//! downwards so existing stakers never face retroactive cost hikes.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakePool;

#[event]
pub struct VaultAddressUpdated {
    pub vault_address: Pubkey,
}

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The pool authority.
    #[account(
        mut,
        constraint = authority.key() == stake_pool.authority @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.collection_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Lower the collateral requirement per staked NFT.
///
/// Rejects values below `MIN_REQUIRED_TURTLE` and any increase over the
/// current setting.
pub fn adjust_required_turtle_handler(ctx: Context<AdminControl>, new_value: u64) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_value = stake_pool.required_turtle_per_nft;
    stake_pool.lower_required_turtle(new_value)?;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Required TURTLE per NFT: {} -> {}", old_value, new_value);

    Ok(())
}

/// Lower the daily earning rate.
///
/// Rejects values above `MAX_DAILY_RATE` and any increase over the current
/// setting.
pub fn adjust_daily_earning_rate_handler(
    ctx: Context<AdminControl>,
    new_value: u64,
) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_value = stake_pool.daily_earning_rate;
    stake_pool.lower_daily_rate(new_value)?;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Daily earning rate: {} -> {}", old_value, new_value);

    Ok(())
}

/// Point withdrawal fees at a new sink address.
pub fn set_vault_address_handler(ctx: Context<AdminControl>, new_vault: Pubkey) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    stake_pool.vault_address = new_vault;
    stake_pool.last_updated = clock.unix_timestamp;

    emit!(VaultAddressUpdated {
        vault_address: new_vault,
    });
    msg!("Vault address set to {}", new_vault);

    Ok(())
}

/// Transfer pool authority to a new address.
pub fn transfer_authority_handler(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        StakingError::InvalidAuthority
    );

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_authority = stake_pool.authority;
    stake_pool.authority = new_authority;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
