//! # Turtle Redemption Vault
//!
//! Holds a pool of collection NFTs and prices each unit dynamically from the
//! TURTLE balance backing the pool: `floor(balance / pool size)`, zero while
//! the pool holds nothing. Participants can deposit NFTs for the per-unit
//! price, swap their NFTs one-for-one against pooled ones for a fixed TURTLE
//! fee, or buy pooled NFTs outright for a fixed native fee.
//!
//! ## Features
//! - Flat per-batch deposit pricing, computed before any id is appended
//! - Swap-with-last removable id set; membership and removal without scans
//! - Native purchase fees accumulate in a treasury PDA until withdrawn
//! - Unsolicited NFT and lamport transfers are absorbed without state impact

use anchor_lang::prelude::*;

declare_id!("4UivJrceRSa4Zk5zgMCMGaumARF1XeAywLhsPLmAikfY");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod turtle_vault {
    use super::*;

    /// Initializes the redemption pool for a collection with default fees.
    ///
    /// # Errors
    /// Returns an error if the TURTLE mint does not use 9 decimals.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Deposits a batch of NFTs into the pool for the current per-unit
    /// price. Remaining accounts carry one
    /// `[mint, metadata, depositor_nft, vault_nft]` group per id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The batch is empty, oversized or contains repeats
    /// - The pool has no backing TURTLE balance yet
    /// - The caller does not own every deposited NFT
    pub fn deposit_nfts<'info>(
        ctx: Context<'_, '_, 'info, 'info, DepositNfts<'info>>,
        ids: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::deposit_nfts::handler(ctx, ids)
    }

    /// Swaps caller NFTs for pooled NFTs, pairwise, for a fixed TURTLE fee
    /// per unit. Remaining accounts carry one seven-account group per pair.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either batch is empty, oversized or contains repeats
    /// - The id lists differ in length
    /// - The caller does not own every offered NFT
    /// - Any requested id is not held by the pool
    pub fn swap_nfts<'info>(
        ctx: Context<'_, '_, 'info, 'info, SwapNfts<'info>>,
        user_ids: Vec<Pubkey>,
        vault_ids: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::swap_nfts::handler(ctx, user_ids, vault_ids)
    }

    /// Purchases pooled NFTs for a fixed native fee per unit. Remaining
    /// accounts carry one `[mint, vault_src, buyer_dst]` group per id.
    ///
    /// # Arguments
    /// * `payment` - Lamports the buyer authorizes; only the purchase total
    ///   is taken
    ///
    /// # Errors
    /// Returns an error if:
    /// - The batch is empty, oversized or contains repeats
    /// - Any requested id is not held by the pool
    /// - `payment` is below the purchase total
    pub fn purchase_nfts<'info>(
        ctx: Context<'_, '_, 'info, 'info, PurchaseNfts<'info>>,
        ids: Vec<Pubkey>,
        payment: u64,
    ) -> Result<()> {
        instructions::purchase_nfts::handler(ctx, ids, payment)
    }

    /// Admin: withdraw the entire native treasury balance.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or the treasury
    /// is empty.
    pub fn withdraw_native(ctx: Context<WithdrawNative>) -> Result<()> {
        instructions::withdraw_native::handler(ctx)
    }

    /// Admin: set the TURTLE fee per swapped unit.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority.
    pub fn set_swap_fee(ctx: Context<VaultAdmin>, new_fee: u64) -> Result<()> {
        instructions::admin::set_swap_fee_handler(ctx, new_fee)
    }

    /// Admin: set the native fee per purchased unit.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority.
    pub fn set_purchase_fee(ctx: Context<VaultAdmin>, new_fee: u64) -> Result<()> {
        instructions::admin::set_purchase_fee_handler(ctx, new_fee)
    }

    /// Admin: transfer vault authority to a new address.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or the new
    /// authority is the default pubkey.
    pub fn transfer_authority(ctx: Context<VaultAdmin>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }
}
