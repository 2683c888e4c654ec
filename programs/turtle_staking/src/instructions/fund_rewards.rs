//! Fund rewards instruction handler.
//!
//! Tops up the pool vault's reward funds. Permissionless: anyone may fund.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakePool;

/// Accounts required for funding the reward pool.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    /// The funder.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.collection_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = turtle_vault,
        has_one = turtle_mint @ StakingError::MintMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// Funder's TURTLE token account.
    #[account(
        mut,
        constraint = funder_turtle_account.mint == turtle_mint.key() @ StakingError::MintMismatch,
        constraint = funder_turtle_account.owner == funder.key() @ StakingError::NotTokenOwner
    )]
    pub funder_turtle_account: Account<'info, TokenAccount>,

    /// Pool vault receiving the funds.
    #[account(
        mut,
        constraint = turtle_vault.key() == stake_pool.turtle_vault
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward pool with TURTLE.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `amount` - Amount of TURTLE base units to fund
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_turtle_account.to_account_info(),
        to: ctx.accounts.turtle_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;
    stake_pool.last_updated = clock.unix_timestamp;

    ctx.accounts.turtle_vault.reload()?;
    msg!("Reward pool funded with {} TURTLE", amount);
    msg!("New vault balance: {}", ctx.accounts.turtle_vault.amount);

    Ok(())
}
