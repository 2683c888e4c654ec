//! Swap instruction handler.
//!
//! A true exchange: the caller's NFTs move into the pool and an equal number
//! of pooled NFTs move out, for a fixed TURTLE fee per unit. Pool size never
//! changes.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::VaultError;
use crate::instructions::deposit_nfts::{
    expect_collectible_mint, validate_batch, verify_collection_member,
};
use crate::state::RedemptionPool;

#[event]
pub struct NftSwapped {
    pub caller: Pubkey,
    pub new_ids: Vec<Pubkey>,
    pub old_ids: Vec<Pubkey>,
    pub fee_paid: u64,
    /// Same value as `fee_paid`; kept for consumers of the legacy event shape.
    pub fee: u64,
}

/// Accounts required for swapping NFTs against the pool.
#[derive(Accounts)]
pub struct SwapNfts<'info> {
    /// The caller exchanging NFTs.
    #[account(mut)]
    pub caller: Signer<'info>,

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

    /// Caller's TURTLE token account paying the swap fee.
    #[account(
        mut,
        constraint = caller_turtle_account.mint == turtle_mint.key() @ VaultError::MintMismatch,
        constraint = caller_turtle_account.owner == caller.key() @ VaultError::NotTokenOwner
    )]
    pub caller_turtle_account: Account<'info, TokenAccount>,

    /// Pool's TURTLE vault collecting the fee.
    #[account(
        mut,
        constraint = turtle_vault.key() == pool.turtle_vault
    )]
    pub turtle_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Swap caller NFTs for pooled NFTs, pairwise.
///
/// Remaining accounts: one
/// `[user_mint, user_metadata, user_src, vault_dst, vault_mint, vault_src, user_dst]`
/// group per pair, in id order. The total fee is pulled once before any NFT
/// moves; each pair then replaces the outgoing pool id with the incoming one
/// in place, so the pool's id-to-slot map stays bijective at every step.
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SwapNfts<'info>>,
    user_ids: Vec<Pubkey>,
    vault_ids: Vec<Pubkey>,
) -> Result<()> {
    validate_batch(&user_ids, VaultError::DuplicateToken)?;
    validate_batch(&vault_ids, VaultError::DuplicateVaultToken)?;
    require!(
        user_ids.len() == vault_ids.len(),
        VaultError::LengthMismatch
    );
    require!(
        ctx.remaining_accounts.len() == user_ids.len() * SWAP_GROUP_ACCOUNTS,
        VaultError::InvalidNftProof
    );

    // Membership is checked up front so a bad request fails before any
    // tokens move.
    for id in &vault_ids {
        require!(ctx.accounts.pool.held.contains(id), VaultError::NotInVault);
    }

    let fee = ctx
        .accounts
        .pool
        .swap_fee_turtle
        .checked_mul(user_ids.len() as u64)
        .ok_or(VaultError::MathOverflow)?;

    // Fee first, in one pull; the ledger rejects the whole call if the
    // caller cannot cover it.
    if fee > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.caller_turtle_account.to_account_info(),
            to: ctx.accounts.turtle_vault.to_account_info(),
            authority: ctx.accounts.caller.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, fee)?;
    }

    let pool_key = ctx.accounts.pool.key();
    let collection_mint = ctx.accounts.pool.collection_mint;
    let caller_key = ctx.accounts.caller.key();

    let seeds = &[
        REDEMPTION_POOL_SEED,
        collection_mint.as_ref(),
        &[ctx.accounts.pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    for (i, group) in ctx
        .remaining_accounts
        .chunks(SWAP_GROUP_ACCOUNTS)
        .enumerate()
    {
        let user_mint_info = &group[0];
        let user_metadata_info = &group[1];
        let user_src_info = &group[2];
        let vault_dst_info = &group[3];
        let vault_mint_info = &group[4];
        let vault_src_info = &group[5];
        let user_dst_info = &group[6];

        // Incoming side: caller must own a verified collection member.
        require!(
            user_mint_info.key() == user_ids[i],
            VaultError::InvalidNftProof
        );
        expect_collectible_mint(user_mint_info)?;
        verify_collection_member(&user_ids[i], user_metadata_info, &collection_mint)?;

        let user_src = Account::<TokenAccount>::try_from(user_src_info)?;
        require!(user_src.mint == user_ids[i], VaultError::MintMismatch);
        require!(
            user_src.owner == caller_key && user_src.amount == 1,
            VaultError::NotTokenOwner
        );

        let vault_dst = Account::<TokenAccount>::try_from(vault_dst_info)?;
        require!(vault_dst.mint == user_ids[i], VaultError::MintMismatch);
        require!(
            vault_dst.owner == pool_key,
            VaultError::InvalidCustodyAccount
        );

        // Outgoing side: the pool must actually hold the requested id.
        require!(
            vault_mint_info.key() == vault_ids[i],
            VaultError::InvalidNftProof
        );
        require!(
            ctx.accounts.pool.held.contains(&vault_ids[i]),
            VaultError::NotInVault
        );

        let vault_src = Account::<TokenAccount>::try_from(vault_src_info)?;
        require!(vault_src.mint == vault_ids[i], VaultError::MintMismatch);
        require!(
            vault_src.owner == pool_key && vault_src.amount == 1,
            VaultError::InvalidCustodyAccount
        );

        let user_dst = Account::<TokenAccount>::try_from(user_dst_info)?;
        require!(user_dst.mint == vault_ids[i], VaultError::MintMismatch);
        require!(user_dst.owner == caller_key, VaultError::NotTokenOwner);

        // Caller's NFT moves in.
        let cpi_accounts = Transfer {
            from: user_src_info.clone(),
            to: vault_dst_info.clone(),
            authority: ctx.accounts.caller.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, 1)?;

        // Pool's NFT moves out.
        let cpi_accounts = Transfer {
            from: vault_src_info.clone(),
            to: user_dst_info.clone(),
            authority: ctx.accounts.pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, 1)?;

        // The incoming id takes the outgoing id's slot.
        let replaced = ctx.accounts.pool.held.replace(&vault_ids[i], user_ids[i]);
        require!(replaced, VaultError::NotInVault);
    }

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;
    pool.last_updated = clock.unix_timestamp;

    emit!(NftSwapped {
        caller: caller_key,
        new_ids: user_ids.clone(),
        old_ids: vault_ids.clone(),
        fee_paid: fee,
        fee,
    });
    msg!(
        "Swapped {} NFTs for a fee of {} TURTLE",
        user_ids.len(),
        fee
    );

    Ok(())
}
