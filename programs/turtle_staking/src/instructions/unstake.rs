//! Unstake instruction handler.
//!
//! Releases the full collateral plus settled earnings in one transfer,
//! charging a native-currency fee that steps down with staking duration.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::instructions::stake::{calculate_earnings, count_collection_holdings};
use crate::state::{StakePool, StakePosition};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The user unstaking.
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

    /// User's TURTLE token account receiving collateral and earnings.
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

    /// Native fee sink configured on the pool.
    /// CHECK: Validated against stake_pool.vault_address; receives lamports only.
    #[account(
        mut,
        constraint = fee_sink.key() == stake_pool.vault_address @ StakingError::VaultAddressMismatch
    )]
    pub fee_sink: UncheckedAccount<'info>,

    /// System program for the native fee transfer.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Unstake the full position.
///
/// Remaining accounts: one `[mint, metadata, token_account]` triple per
/// currently held NFT; unstaking requires holdings to cover the staked count.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
/// * `fee_limit` - Lamports the caller authorizes for the withdrawal fee;
///   only the scheduled fee is actually taken
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Unstake<'info>>,
    fee_limit: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let position = &ctx.accounts.stake_position;
    let stake_pool = &ctx.accounts.stake_pool;

    require!(position.is_active(), StakingError::NoStakedNfts);

    // Collateral only comes back while the backing NFTs are still held.
    let holdings = count_collection_holdings(
        &ctx.accounts.user.key(),
        &stake_pool.collection_mint,
        ctx.remaining_accounts,
    )?;
    require!(
        holdings >= position.nft_count,
        StakingError::InsufficientNftBalance
    );

    let earned = calculate_earnings(
        position,
        holdings,
        stake_pool.daily_earning_rate,
        clock.unix_timestamp,
    )?;

    let elapsed = clock.unix_timestamp.saturating_sub(position.staked_at);
    let fee = calculate_withdrawal_fee(elapsed);
    require!(fee_limit >= fee, StakingError::InsufficientFee);

    let collateral = stake_pool
        .required_turtle_per_nft
        .checked_mul(position.nft_count)
        .ok_or(StakingError::MathOverflow)?;
    let payout = collateral
        .checked_add(earned)
        .ok_or(StakingError::MathOverflow)?;
    require!(
        ctx.accounts.turtle_vault.amount >= payout,
        StakingError::InsufficientPoolFunds
    );

    // Exactly the scheduled fee moves; anything offered above it stays with
    // the caller.
    if fee > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.fee_sink.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, fee)?;
    }

    // Collateral plus settled earnings in a single transfer.
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
    token::transfer(cpi_ctx, payout)?;

    let position = &mut ctx.accounts.stake_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    position.clear();
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Unstaked: returned {} TURTLE ({} collateral + {} earnings)", payout, collateral, earned);
    msg!("Withdrawal fee: {} lamports", fee);

    Ok(())
}

/// Withdrawal fee for a stake of the given age.
///
/// Tiers are protocol-fixed: under 24 hours pays `FIRST_24H_FEE`, from 24 to
/// 72 hours pays `FIRST_72H_FEE`, from 72 hours on the exit is free. Both
/// boundaries belong to the later tier.
pub fn calculate_withdrawal_fee(elapsed: i64) -> u64 {
    if elapsed < SECONDS_PER_DAY {
        FIRST_24H_FEE
    } else if elapsed < 3 * SECONDS_PER_DAY {
        FIRST_72H_FEE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_tiers() {
        assert_eq!(calculate_withdrawal_fee(0), FIRST_24H_FEE);
        assert_eq!(calculate_withdrawal_fee(SECONDS_PER_DAY - 500), FIRST_24H_FEE);
        assert_eq!(calculate_withdrawal_fee(2 * SECONDS_PER_DAY), FIRST_72H_FEE);
        assert_eq!(
            calculate_withdrawal_fee(3 * SECONDS_PER_DAY - 500),
            FIRST_72H_FEE
        );
        assert_eq!(calculate_withdrawal_fee(4 * SECONDS_PER_DAY), 0);
    }

    #[test]
    fn fee_boundaries_belong_to_the_later_tier() {
        assert_eq!(calculate_withdrawal_fee(SECONDS_PER_DAY), FIRST_72H_FEE);
        assert_eq!(calculate_withdrawal_fee(3 * SECONDS_PER_DAY), 0);
    }

    #[test]
    fn negative_elapsed_pays_the_top_fee() {
        assert_eq!(calculate_withdrawal_fee(-1), FIRST_24H_FEE);
    }
}
