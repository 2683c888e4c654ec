//! Admin instruction handlers.
//!
//! Fee setters carry no monotonic constraint; every change is logged with
//! the old and new values.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::VaultError;
use crate::state::RedemptionPool;

#[event]
pub struct SwapFeeChanged {
    pub old: u64,
    pub new: u64,
}

#[event]
pub struct PurchaseFeeChanged {
    pub old: u64,
    pub new: u64,
}

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct VaultAdmin<'info> {
    /// The vault authority.
    #[account(
        mut,
        constraint = authority.key() == pool.authority @ VaultError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The redemption pool to modify.
    #[account(
        mut,
        seeds = [REDEMPTION_POOL_SEED, pool.collection_mint.as_ref()],
        bump = pool.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub pool: Account<'info, RedemptionPool>,
}

/// Set the TURTLE fee charged per swapped unit.
pub fn set_swap_fee_handler(ctx: Context<VaultAdmin>, new_fee: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    let old = pool.swap_fee_turtle;
    pool.swap_fee_turtle = new_fee;
    pool.last_updated = clock.unix_timestamp;

    emit!(SwapFeeChanged { old, new: new_fee });
    msg!("Swap fee: {} -> {}", old, new_fee);

    Ok(())
}

/// Set the native fee charged per purchased unit.
pub fn set_purchase_fee_handler(ctx: Context<VaultAdmin>, new_fee: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    let old = pool.purchase_fee_native;
    pool.purchase_fee_native = new_fee;
    pool.last_updated = clock.unix_timestamp;

    emit!(PurchaseFeeChanged { old, new: new_fee });
    msg!("Purchase fee: {} -> {}", old, new_fee);

    Ok(())
}

/// Transfer vault authority to a new address.
pub fn transfer_authority_handler(ctx: Context<VaultAdmin>, new_authority: Pubkey) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        VaultError::InvalidAuthority
    );

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    let old_authority = pool.authority;
    pool.authority = new_authority;
    pool.last_updated = clock.unix_timestamp;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
