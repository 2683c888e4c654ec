//! Deposit instruction handler.
//!
//! Takes a batch of collection NFTs into the pool and pays the depositor the
//! current per-unit price in TURTLE, priced once for the whole batch before
//! any id is appended.

use anchor_lang::prelude::*;
use anchor_spl::metadata::{mpl_token_metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::VaultError;
use crate::state::RedemptionPool;

#[event]
pub struct NftDepositedBatch {
    pub depositor: Pubkey,
    pub ids: Vec<Pubkey>,
    pub unit_price: u64,
}

/// Accounts required for depositing NFTs.
#[derive(Accounts)]
pub struct DepositNfts<'info> {
    /// The depositor handing NFTs to the pool.
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// The redemption pool.
    #[account(
        mut,
        seeds = [REDEMPTION_POOL_SEED, pool.collection_mint.as_ref()],
        bump = pool.bump,
        has_one = turtle_vault,
        has_one = turtle_mint
    )]
    pub pool: Account<'info, RedemptionPool>,

    /// The TURTLE mint.
    pub turtle_mint: Account<'info, Mint>,

    /// Depositor's TURTLE token account receiving the payout.
    #[account(
        mut,
        constraint = depositor_turtle_account.mint == turtle_mint.key() @ VaultError::MintMismatch,
        constraint = depositor_turtle_account.owner == depositor.key() @ VaultError::NotTokenOwner
    )]
    pub depositor_turtle_account: Account<'info, TokenAccount>,

    /// Pool's TURTLE vault backing the price.
    #[account(
        mut,
        constraint = turtle_vault.key() == pool.turtle_vault
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit a batch of NFTs into the pool.
///
/// Remaining accounts: one `[mint, metadata, depositor_nft, vault_nft]`
/// group per id, in id order. The depositor is paid
/// `turtle_per_unit() * ids.len()` from the pool's TURTLE balance, priced
/// before any append so every unit in the batch prices identically.
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DepositNfts<'info>>,
    ids: Vec<Pubkey>,
) -> Result<()> {
    validate_batch(&ids, VaultError::DuplicateToken)?;

    // Deposits only open once a backing balance seeds the pool; the first
    // depositor cannot set the price from nothing.
    require!(ctx.accounts.turtle_vault.amount > 0, VaultError::PoolEmpty);

    let pool_size = ctx.accounts.pool.held.len();
    require!(
        pool_size + ids.len() <= MAX_POOL_SIZE,
        VaultError::PoolCapacityExceeded
    );
    require!(
        ctx.remaining_accounts.len() == ids.len() * DEPOSIT_GROUP_ACCOUNTS,
        VaultError::InvalidNftProof
    );

    // Flat per-batch price from the pre-deposit balance and size.
    let unit_price = turtle_per_unit(ctx.accounts.turtle_vault.amount, pool_size as u64);
    let payout = unit_price
        .checked_mul(ids.len() as u64)
        .ok_or(VaultError::MathOverflow)?;
    require!(
        ctx.accounts.turtle_vault.amount >= payout,
        VaultError::InsufficientPoolFunds
    );

    let pool_key = ctx.accounts.pool.key();
    let collection_mint = ctx.accounts.pool.collection_mint;

    for (i, group) in ctx
        .remaining_accounts
        .chunks(DEPOSIT_GROUP_ACCOUNTS)
        .enumerate()
    {
        let mint_info = &group[0];
        let metadata_info = &group[1];
        let depositor_nft_info = &group[2];
        let vault_nft_info = &group[3];

        require!(mint_info.key() == ids[i], VaultError::InvalidNftProof);
        expect_collectible_mint(mint_info)?;
        verify_collection_member(&ids[i], metadata_info, &collection_mint)?;

        let depositor_nft = Account::<TokenAccount>::try_from(depositor_nft_info)?;
        require!(depositor_nft.mint == ids[i], VaultError::MintMismatch);
        require!(
            depositor_nft.owner == ctx.accounts.depositor.key() && depositor_nft.amount == 1,
            VaultError::NotTokenOwner
        );

        let vault_nft = Account::<TokenAccount>::try_from(vault_nft_info)?;
        require!(vault_nft.mint == ids[i], VaultError::MintMismatch);
        require!(
            vault_nft.owner == pool_key,
            VaultError::InvalidCustodyAccount
        );

        let cpi_accounts = Transfer {
            from: depositor_nft_info.clone(),
            to: vault_nft_info.clone(),
            authority: ctx.accounts.depositor.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, 1)?;

        let appended = ctx.accounts.pool.held.insert(ids[i]);
        require!(appended, VaultError::DuplicateToken);
    }

    if payout > 0 {
        let collection_mint_key = ctx.accounts.pool.collection_mint;
        let seeds = &[
            REDEMPTION_POOL_SEED,
            collection_mint_key.as_ref(),
            &[ctx.accounts.pool.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.turtle_vault.to_account_info(),
            to: ctx.accounts.depositor_turtle_account.to_account_info(),
            authority: ctx.accounts.pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, payout)?;
    }

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;
    pool.last_updated = clock.unix_timestamp;

    emit!(NftDepositedBatch {
        depositor: ctx.accounts.depositor.key(),
        ids: ids.clone(),
        unit_price,
    });
    msg!(
        "Deposited {} NFTs at {} TURTLE per unit",
        ids.len(),
        unit_price
    );

    Ok(())
}

/// Price per pooled NFT: the backing TURTLE balance split evenly over the
/// pool, floored. The division remainder stays in the vault.
pub fn turtle_per_unit(vault_balance: u64, pool_size: u64) -> u64 {
    if pool_size == 0 {
        0
    } else {
        vault_balance / pool_size
    }
}

/// Common batch checks: size between 1 and `MAX_BATCH_SIZE`, no repeats.
pub fn validate_batch(ids: &[Pubkey], duplicate_error: VaultError) -> Result<()> {
    if ids.is_empty() || ids.len() > MAX_BATCH_SIZE {
        return err!(VaultError::InvalidBatchSize);
    }
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(duplicate_error.into());
        }
    }
    Ok(())
}

/// Check that `mint_info` is a supply-1, zero-decimal collectible mint.
pub fn expect_collectible_mint<'info>(mint_info: &'info AccountInfo<'info>) -> Result<()> {
    let mint = Account::<Mint>::try_from(mint_info)?;
    require!(
        mint.supply == 1 && mint.decimals == 0,
        VaultError::NotCollectible
    );
    Ok(())
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
    require!(metadata_info.key() == expected, VaultError::InvalidMetadata);

    let metadata = Account::<MetadataAccount>::try_from(metadata_info)?;
    match &metadata.collection {
        Some(collection) if collection.verified && collection.key == *collection_mint => Ok(()),
        _ => err!(VaultError::CollectionMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_zero_for_an_empty_pool() {
        assert_eq!(turtle_per_unit(10_625 * ONE_TURTLE, 0), 0);
        assert_eq!(turtle_per_unit(0, 0), 0);
    }

    #[test]
    fn price_is_the_floored_share_of_the_backing_balance() {
        // 10,625 TURTLE over 3 NFTs, remainder discarded.
        assert_eq!(
            turtle_per_unit(10_625 * ONE_TURTLE, 3),
            3_541_666_666_666
        );
        assert_eq!(turtle_per_unit(300 * ONE_TURTLE, 3), 100 * ONE_TURTLE);
        assert_eq!(turtle_per_unit(2, 3), 0);
    }

    #[test]
    fn batch_size_bounds() {
        let one = vec![Pubkey::new_unique()];
        assert!(validate_batch(&one, VaultError::DuplicateToken).is_ok());

        let empty: Vec<Pubkey> = vec![];
        assert!(validate_batch(&empty, VaultError::DuplicateToken).is_err());

        let max: Vec<Pubkey> = (0..MAX_BATCH_SIZE).map(|_| Pubkey::new_unique()).collect();
        assert!(validate_batch(&max, VaultError::DuplicateToken).is_ok());

        let too_many: Vec<Pubkey> = (0..MAX_BATCH_SIZE + 1)
            .map(|_| Pubkey::new_unique())
            .collect();
        assert!(validate_batch(&too_many, VaultError::DuplicateToken).is_err());
    }

    #[test]
    fn batch_rejects_repeats() {
        let id = Pubkey::new_unique();
        let ids = vec![id, Pubkey::new_unique(), id];
        assert!(validate_batch(&ids, VaultError::DuplicateToken).is_err());
    }
}
