//! Initialize instruction handler.
//!
//! Creates the stake pool for a collection with parameter defaults from the
//! protocol constants. The vault token account is a PDA owned by the pool,
//! so collateral and reward funds can only leave through pool instructions.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakePool;

/// Accounts required for pool initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The authority that will control the pool.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The stake pool account, one per collection.
    #[account(
        init,
        payer = authority,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, collection_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The verified collection mint the pool stakes against.
    pub collection_mint: Account<'info, Mint>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// The vault holding collateral and reward funds; authority is the pool.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = turtle_mint,
        token::authority = stake_pool
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a staking pool for a collection.
///
/// The collateral requirement and daily earning rate start at their protocol
/// defaults and can only be lowered afterwards. The fee sink starts unset and
/// must be configured through `set_vault_address` before unstakes charge
/// fees anywhere meaningful.
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // Token constants assume the TURTLE scale.
    require!(
        ctx.accounts.turtle_mint.decimals == TURTLE_DECIMALS,
        StakingError::InvalidMintDecimals
    );

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    stake_pool.authority = ctx.accounts.authority.key();
    stake_pool.collection_mint = ctx.accounts.collection_mint.key();
    stake_pool.turtle_mint = ctx.accounts.turtle_mint.key();
    stake_pool.turtle_vault = ctx.accounts.turtle_vault.key();
    stake_pool.vault_address = ctx.accounts.authority.key();
    stake_pool.required_turtle_per_nft = TURTLE_PER_NFT;
    stake_pool.daily_earning_rate = DAILY_EARNING_RATE;
    stake_pool.created_at = clock.unix_timestamp;
    stake_pool.last_updated = clock.unix_timestamp;
    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.vault_bump = ctx.bumps.turtle_vault;

    msg!("Turtle staking pool initialized");
    msg!("Authority: {}", ctx.accounts.authority.key());
    msg!("Collection: {}", ctx.accounts.collection_mint.key());
    msg!(
        "Required TURTLE per NFT: {}, daily rate: {}",
        TURTLE_PER_NFT,
        DAILY_EARNING_RATE
    );

    Ok(())
}
