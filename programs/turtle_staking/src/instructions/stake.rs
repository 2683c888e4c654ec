//! Stake instruction handler.
//!
//! Commits the caller's full current collection holdings, locking TURTLE
//! collateral proportional to the committed count. Custody of each NFT is
//! proven by a `[mint, metadata, token_account]` triple passed in the
//! instruction's remaining accounts; the NFTs themselves stay in the wallet.

use std::collections::BTreeSet;

use anchor_lang::prelude::*;
use anchor_spl::metadata::{mpl_token_metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{StakePool, StakePosition};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user committing their holdings.
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

    /// User's stake position (created on first stake).
    #[account(
        init_if_needed,
        payer = user,
        space = StakePosition::LEN,
        seeds = [STAKE_POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_position: Account<'info, StakePosition>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// User's TURTLE token account; collateral source and reward destination.
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

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Stake the caller's current collection holdings.
///
/// Remaining accounts: one `[mint, metadata, token_account]` triple per held
/// NFT. The committed count becomes the number of valid triples.
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, Stake<'info>>) -> Result<()> {
    let clock = Clock::get()?;

    let holdings = count_collection_holdings(
        &ctx.accounts.user.key(),
        &ctx.accounts.stake_pool.collection_mint,
        ctx.remaining_accounts,
    )?;
    require!(holdings > 0, StakingError::NoNftsOwned);

    let position = &ctx.accounts.stake_position;
    let stake_pool = &ctx.accounts.stake_pool;

    // An existing position may only grow; collateral is released through
    // unstake, never through a smaller restake.
    if position.is_active() {
        require!(
            holdings >= position.nft_count,
            StakingError::CannotReduceStake
        );
    }

    // Balance must cover the collateral for the full committed count, even
    // though only the delta is pulled below.
    let required_total = stake_pool
        .required_turtle_per_nft
        .checked_mul(holdings)
        .ok_or(StakingError::MathOverflow)?;
    require!(
        ctx.accounts.user_turtle_account.amount >= required_total,
        StakingError::InsufficientTurtleTokens
    );

    // Settle accrual on the old count before the position changes.
    let earned = calculate_earnings(
        position,
        holdings,
        stake_pool.daily_earning_rate,
        clock.unix_timestamp,
    )?;
    if earned > 0 {
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
    }

    // Pull additional collateral for the newly committed NFTs only.
    let added = holdings
        .checked_sub(ctx.accounts.stake_position.nft_count)
        .ok_or(StakingError::MathOverflow)?;
    let collateral_delta = ctx
        .accounts
        .stake_pool
        .required_turtle_per_nft
        .checked_mul(added)
        .ok_or(StakingError::MathOverflow)?;
    if collateral_delta > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.user_turtle_account.to_account_info(),
            to: ctx.accounts.turtle_vault.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, collateral_delta)?;
    }

    let position = &mut ctx.accounts.stake_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    if !position.is_active() {
        position.owner = ctx.accounts.user.key();
        position.pool = stake_pool.key();
        position.staked_at = clock.unix_timestamp;
        position.bump = ctx.bumps.stake_position;
    }
    position.nft_count = holdings;
    position.last_claim_at = clock.unix_timestamp;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Staked {} NFTs", holdings);
    msg!("Collateral pulled: {}", collateral_delta);
    if earned > 0 {
        msg!("Settled {} TURTLE of accrued earnings", earned);
    }

    Ok(())
}

/// Count the distinct collection NFTs the owner currently holds, from
/// `[mint, metadata, token_account]` triples in `accounts`.
///
/// Each triple must carry a supply-1 zero-decimal mint, the mint's canonical
/// metadata PDA with a verified membership in `collection_mint`, and a token
/// account for that mint holding amount 1 for `owner`. Duplicated mints are
/// rejected. The result is the port of the registry's per-owner balance.
pub fn count_collection_holdings<'info>(
    owner: &Pubkey,
    collection_mint: &Pubkey,
    accounts: &'info [AccountInfo<'info>],
) -> Result<u64> {
    require!(
        accounts.len() % NFT_PROOF_ACCOUNTS == 0,
        StakingError::InvalidNftProof
    );

    let mut seen: BTreeSet<Pubkey> = BTreeSet::new();

    for proof in accounts.chunks(NFT_PROOF_ACCOUNTS) {
        let mint_info = &proof[0];
        let metadata_info = &proof[1];
        let token_info = &proof[2];

        let mint = Account::<Mint>::try_from(mint_info)?;
        require!(
            mint.supply == 1 && mint.decimals == 0,
            StakingError::NotCollectible
        );
        let fresh = seen.insert(mint.key());
        require!(fresh, StakingError::DuplicateNft);

        verify_collection_member(&mint.key(), metadata_info, collection_mint)?;

        let token_account = Account::<TokenAccount>::try_from(token_info)?;
        require!(
            token_account.mint == mint.key(),
            StakingError::MintMismatch
        );
        require!(
            token_account.owner == *owner && token_account.amount == 1,
            StakingError::NotTokenOwner
        );
    }

    Ok(seen.len() as u64)
}

/// Check that `metadata_info` is the canonical metadata PDA for `mint` and
/// records a verified membership in `collection_mint`.
pub fn verify_collection_member<'info>(
    mint: &Pubkey,
    metadata_info: &'info AccountInfo<'info>,
    collection_mint: &Pubkey,
) -> Result<()> {
    let (expected, _) = Pubkey::find_program_address(
        &[
            METADATA_SEED,
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    );
    require!(metadata_info.key() == expected, StakingError::InvalidMetadata);

    let metadata = Account::<MetadataAccount>::try_from(metadata_info)?;
    match &metadata.collection {
        Some(collection) if collection.verified && collection.key == *collection_mint => Ok(()),
        _ => err!(StakingError::CollectionMismatch),
    }
}

/// Calculate accrued earnings for a stake position.
///
/// `effective = min(position.nft_count, current_nft_balance)`: an owner who
/// transferred away collateralized NFTs earns only on the NFTs still held.
/// Earnings accrue per whole elapsed day since the last claim.
///
/// # Arguments
/// * `position` - The owner's stake position
/// * `current_nft_balance` - Collection NFTs the owner holds right now
/// * `daily_rate` - Reward per NFT per day, in TURTLE base units
/// * `now` - Current Unix timestamp
///
/// # Returns
/// Accrued earnings in TURTLE base units; 0 for an inactive position or when
/// less than one full day has elapsed.
pub fn calculate_earnings(
    position: &StakePosition,
    current_nft_balance: u64,
    daily_rate: u64,
    now: i64,
) -> Result<u64> {
    if !position.is_active() {
        return Ok(0);
    }

    let effective = position.nft_count.min(current_nft_balance);
    if effective == 0 {
        return Ok(0);
    }

    let elapsed = now.saturating_sub(position.last_claim_at).max(0);
    let elapsed_days = (elapsed / SECONDS_PER_DAY) as u128;
    if elapsed_days == 0 {
        return Ok(0);
    }

    let earned = (effective as u128)
        .checked_mul(daily_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed_days)
        .ok_or(StakingError::MathOverflow)?;

    let earned_u64 = u64::try_from(earned).map_err(|_| StakingError::MathOverflow)?;

    Ok(earned_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(nft_count: u64, last_claim_at: i64) -> StakePosition {
        StakePosition {
            owner: Pubkey::default(),
            pool: Pubkey::default(),
            nft_count,
            staked_at: last_claim_at,
            last_claim_at,
            bump: 0,
        }
    }

    #[test]
    fn earnings_accrue_per_whole_day() {
        let pos = position(3, 0);

        // 3 NFTs at 10 TURTLE/day over 2 days = 60 TURTLE.
        let earned =
            calculate_earnings(&pos, 3, DAILY_EARNING_RATE, 2 * SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 60 * ONE_TURTLE);

        // Partial days floor to zero.
        let earned =
            calculate_earnings(&pos, 3, DAILY_EARNING_RATE, SECONDS_PER_DAY - 1).unwrap();
        assert_eq!(earned, 0);

        // A day plus change still pays one day.
        let earned =
            calculate_earnings(&pos, 3, DAILY_EARNING_RATE, SECONDS_PER_DAY + 500).unwrap();
        assert_eq!(earned, 30 * ONE_TURTLE);
    }

    #[test]
    fn earnings_use_effective_count() {
        // Staked 3 but only 1 still held: earns on 1.
        let pos = position(3, 0);
        let earned = calculate_earnings(&pos, 1, DAILY_EARNING_RATE, SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 10 * ONE_TURTLE);

        // Holding more than staked never earns on the excess.
        let earned = calculate_earnings(&pos, 5, DAILY_EARNING_RATE, SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 30 * ONE_TURTLE);

        // All NFTs transferred away: nothing accrues.
        let earned = calculate_earnings(&pos, 0, DAILY_EARNING_RATE, SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 0);
    }

    #[test]
    fn inactive_position_earns_nothing() {
        let pos = position(0, 0);
        let earned =
            calculate_earnings(&pos, 3, DAILY_EARNING_RATE, 10 * SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 0);
    }

    #[test]
    fn clock_going_backwards_earns_nothing() {
        let pos = position(3, 1_000_000);
        let earned = calculate_earnings(&pos, 3, DAILY_EARNING_RATE, 999_999).unwrap();
        assert_eq!(earned, 0);
    }

    #[test]
    fn zero_rate_earns_nothing() {
        let pos = position(3, 0);
        let earned = calculate_earnings(&pos, 3, 0, 5 * SECONDS_PER_DAY).unwrap();
        assert_eq!(earned, 0);
    }
}
