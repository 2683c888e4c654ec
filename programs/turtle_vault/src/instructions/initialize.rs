//! Initialize instruction handler.
//!
//! Creates the redemption pool for a collection with the default fees. The
//! TURTLE vault is a PDA token account owned by the pool; the native
//! treasury is a system-owned PDA that accepts lamports from anyone.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::VaultError;
use crate::state::{NftSet, RedemptionPool};

/// Accounts required for pool initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The authority that will control the vault.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The redemption pool account, one per collection.
    #[account(
        init,
        payer = authority,
        space = RedemptionPool::LEN,
        seeds = [REDEMPTION_POOL_SEED, collection_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, RedemptionPool>,

    /// The verified collection mint the vault redeems against.
    pub collection_mint: Account<'info, Mint>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// The vault holding the backing TURTLE balance; authority is the pool.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = turtle_mint,
        token::authority = pool
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// Native treasury PDA; receives purchase fees and any unsolicited
    /// lamport transfers without program involvement.
    #[account(
        seeds = [NATIVE_TREASURY_SEED, pool.key().as_ref()],
        bump
    )]
    pub native_treasury: SystemAccount<'info>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a redemption pool for a collection.
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // Token constants assume the TURTLE scale.
    require!(
        ctx.accounts.turtle_mint.decimals == TURTLE_DECIMALS,
        VaultError::InvalidMintDecimals
    );

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    pool.authority = ctx.accounts.authority.key();
    pool.collection_mint = ctx.accounts.collection_mint.key();
    pool.turtle_mint = ctx.accounts.turtle_mint.key();
    pool.turtle_vault = ctx.accounts.turtle_vault.key();
    pool.native_treasury = ctx.accounts.native_treasury.key();
    pool.swap_fee_turtle = DEFAULT_SWAP_FEE_TURTLE;
    pool.purchase_fee_native = DEFAULT_PURCHASE_FEE_NATIVE;
    pool.created_at = clock.unix_timestamp;
    pool.last_updated = clock.unix_timestamp;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.turtle_vault;
    pool.treasury_bump = ctx.bumps.native_treasury;
    pool.held = NftSet::default();

    msg!("Turtle redemption vault initialized");
    msg!("Authority: {}", ctx.accounts.authority.key());
    msg!("Collection: {}", ctx.accounts.collection_mint.key());
    msg!(
        "Swap fee: {} TURTLE, purchase fee: {} lamports",
        DEFAULT_SWAP_FEE_TURTLE,
        DEFAULT_PURCHASE_FEE_NATIVE
    );

    Ok(())
}
