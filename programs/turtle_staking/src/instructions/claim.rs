//! Claim instruction handler.
//!
//! Pays accrued earnings without touching the staked count or collateral.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::instructions::stake::{calculate_earnings, count_collection_holdings};
use crate::state::{StakePool, StakePosition};

/// Accounts required for claiming earnings.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The user claiming earnings.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.collection_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = turtle_vault,
        has_one = turtle_mint
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake position.
    #[account(
        mut,
        seeds = [STAKE_POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_position.bump,
        constraint = stake_position.owner == user.key() @ StakingError::Unauthorized,
        constraint = stake_position.pool == stake_pool.key()
    )]
    pub stake_position: Account<'info, StakePosition>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// User's TURTLE token account receiving the earnings.
    #[account(
        mut,
        constraint = user_turtle_account.mint == turtle_mint.key() @ StakingError::MintMismatch,
        constraint = user_turtle_account.owner == user.key() @ StakingError::NotTokenOwner
    )]
    pub user_turtle_account: Account<'info, TokenAccount>,

    /// Pool vault holding collateral and reward funds.
    #[account(
        mut,
        constraint = turtle_vault.key() == stake_pool.turtle_vault
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accrued earnings.
///
/// Remaining accounts: one `[mint, metadata, token_account]` triple per
/// currently held NFT; earnings pay out on `min(staked, held)`.
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let position = &ctx.accounts.stake_position;
    let stake_pool = &ctx.accounts.stake_pool;

    require!(position.is_active(), StakingError::NoStakedNfts);

    let holdings = count_collection_holdings(
        &ctx.accounts.user.key(),
        &stake_pool.collection_mint,
        ctx.remaining_accounts,
    )?;

    let earned = calculate_earnings(
        position,
        holdings,
        stake_pool.daily_earning_rate,
        clock.unix_timestamp,
    )?;
    require!(earned > 0, StakingError::NothingToClaim);

    require!(
        ctx.accounts.turtle_vault.amount >= earned,
        StakingError::InsufficientPoolFunds
    );

    let collection_mint_key = stake_pool.collection_mint;
    let seeds = &[
        STAKE_POOL_SEED,
        collection_mint_key.as_ref(),
        &[stake_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.turtle_vault.to_account_info(),
        to: ctx.accounts.user_turtle_account.to_account_info(),
        authority: ctx.accounts.stake_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, earned)?;

    let position = &mut ctx.accounts.stake_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    position.last_claim_at = clock.unix_timestamp;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Claimed {} TURTLE of earnings", earned);

    Ok(())
}
