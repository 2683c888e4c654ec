//! Withdraw instruction handler.
//!
//! Sweeps the native treasury to the authority. The treasury also accepts
//! unsolicited lamport transfers, so the swept amount may exceed what
//! purchases collected.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::VaultError;
use crate::state::RedemptionPool;

#[event]
pub struct NativeWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
}

/// Accounts required for withdrawing the native balance.
#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    /// The vault authority.
    #[account(
        mut,
        constraint = authority.key() == pool.authority @ VaultError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The redemption pool.
    #[account(
        seeds = [REDEMPTION_POOL_SEED, pool.collection_mint.as_ref()],
        bump = pool.bump,
        has_one = authority @ VaultError::Unauthorized,
        has_one = native_treasury
    )]
    pub pool: Account<'info, RedemptionPool>,

    /// Native treasury PDA being drained.
    #[account(
        mut,
        seeds = [NATIVE_TREASURY_SEED, pool.key().as_ref()],
        bump = pool.treasury_bump
    )]
    pub native_treasury: SystemAccount<'info>,

    /// System program for the lamport transfer.
    pub system_program: Program<'info, System>,
}

/// Withdraw the entire native treasury balance to the authority.
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<WithdrawNative>) -> Result<()> {
    let amount = ctx.accounts.native_treasury.lamports();
    require!(amount > 0, VaultError::NoBalance);

    let pool_key = ctx.accounts.pool.key();
    let seeds = &[
        NATIVE_TREASURY_SEED,
        pool_key.as_ref(),
        &[ctx.accounts.pool.treasury_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.native_treasury.to_account_info(),
            to: ctx.accounts.authority.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(cpi_ctx, amount)?;

    emit!(NativeWithdrawn {
        to: ctx.accounts.authority.key(),
        amount,
    });
    msg!("Withdrew {} lamports to {}", amount, ctx.accounts.authority.key());

    Ok(())
}
