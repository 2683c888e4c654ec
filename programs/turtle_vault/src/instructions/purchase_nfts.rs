//! Purchase instruction handler.
//!
//! Sells pooled NFTs for a fixed native fee per unit. The fee accumulates in
//! the pool's native treasury until the authority withdraws it.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::VaultError;
use crate::instructions::deposit_nfts::validate_batch;
use crate::state::RedemptionPool;

#[event]
pub struct NftPurchased {
    pub caller: Pubkey,
    pub ids: Vec<Pubkey>,
    pub total_paid: u64,
}

/// Accounts required for purchasing NFTs.
#[derive(Accounts)]
pub struct PurchaseNfts<'info> {
    /// The buyer.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The redemption pool.
    #[account(
        mut,
        seeds = [REDEMPTION_POOL_SEED, pool.collection_mint.as_ref()],
        bump = pool.bump,
        has_one = native_treasury
    )]
    pub pool: Account<'info, RedemptionPool>,

    /// Native treasury PDA collecting purchase fees.
    #[account(
        mut,
        seeds = [NATIVE_TREASURY_SEED, pool.key().as_ref()],
        bump = pool.treasury_bump
    )]
    pub native_treasury: SystemAccount<'info>,

    /// System program for the native payment.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Purchase a batch of pooled NFTs with native currency.
///
/// Remaining accounts: one `[mint, vault_src, buyer_dst]` group per id, in
/// id order. Exactly `purchase_fee_native * ids.len()` lamports move from
/// the buyer; anything offered above that never leaves the buyer's account.
///
/// # Arguments
/// * `ctx` - PurchaseNfts accounts context
/// * `ids` - Pool-held NFT mints to buy
/// * `payment` - Lamports the buyer authorizes; must cover the total
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, PurchaseNfts<'info>>,
    ids: Vec<Pubkey>,
    payment: u64,
) -> Result<()> {
    validate_batch(&ids, VaultError::DuplicateToken)?;
    require!(
        ctx.remaining_accounts.len() == ids.len() * PURCHASE_GROUP_ACCOUNTS,
        VaultError::InvalidNftProof
    );

    let required = ctx
        .accounts
        .pool
        .purchase_fee_native
        .checked_mul(ids.len() as u64)
        .ok_or(VaultError::MathOverflow)?;
    require!(payment >= required, VaultError::InsufficientPayment);

    // Pull exactly the purchase total; the excess stays with the buyer.
    if required > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.native_treasury.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, required)?;
    }

    let pool_key = ctx.accounts.pool.key();
    let buyer_key = ctx.accounts.buyer.key();

    let collection_mint_key = ctx.accounts.pool.collection_mint;
    let seeds = &[
        REDEMPTION_POOL_SEED,
        collection_mint_key.as_ref(),
        &[ctx.accounts.pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    for (i, group) in ctx
        .remaining_accounts
        .chunks(PURCHASE_GROUP_ACCOUNTS)
        .enumerate()
    {
        let mint_info = &group[0];
        let vault_src_info = &group[1];
        let buyer_dst_info = &group[2];

        require!(mint_info.key() == ids[i], VaultError::InvalidNftProof);
        require!(
            ctx.accounts.pool.held.contains(&ids[i]),
            VaultError::NotInVault
        );

        let vault_src = Account::<TokenAccount>::try_from(vault_src_info)?;
        require!(vault_src.mint == ids[i], VaultError::MintMismatch);
        require!(
            vault_src.owner == pool_key && vault_src.amount == 1,
            VaultError::InvalidCustodyAccount
        );

        let buyer_dst = Account::<TokenAccount>::try_from(buyer_dst_info)?;
        require!(buyer_dst.mint == ids[i], VaultError::MintMismatch);
        require!(buyer_dst.owner == buyer_key, VaultError::NotTokenOwner);

        let cpi_accounts = Transfer {
            from: vault_src_info.clone(),
            to: buyer_dst_info.clone(),
            authority: ctx.accounts.pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, 1)?;

        let removed = ctx.accounts.pool.held.swap_remove(&ids[i]);
        require!(removed, VaultError::NotInVault);
    }

    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;
    pool.last_updated = clock.unix_timestamp;

    emit!(NftPurchased {
        caller: buyer_key,
        ids: ids.clone(),
        total_paid: required,
    });
    msg!(
        "Purchased {} NFTs for {} lamports",
        ids.len(),
        required
    );

    Ok(())
}
