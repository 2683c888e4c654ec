//! Error types for the Turtle redemption vault.
//!
//! ## Error Code Ranges
//! - 6000-6009: Batch/holdings validation errors
//! - 6010-6019: Pool state errors
//! - 6020-6029: Funds errors
//! - 6030-6039: Math errors
//! - 6040-6049: Authorization errors

use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    // ========== Batch/Holdings Validation Errors (6000-6009) ==========

    /// [6000] Batches must contain between 1 and 20 NFTs.
    #[msg("Invalid amount: 1-20 NFTs only")]
    InvalidBatchSize,

    /// [6001] Swap requires equally sized user and vault id lists.
    #[msg("User and vault id lists must have the same length")]
    LengthMismatch,

    /// [6002] The same id appears twice in a batch.
    #[msg("Duplicate token")]
    DuplicateToken,

    /// [6003] The same vault id appears twice in a swap batch.
    #[msg("Duplicate vault token")]
    DuplicateVaultToken,

    /// [6004] Remaining accounts do not line up with the id list.
    #[msg("NFT accounts do not match the id list")]
    InvalidNftProof,

    /// [6005] A token account does not hold the expected mint.
    #[msg("Token account mint does not match the expected NFT mint")]
    MintMismatch,

    /// [6006] A presented mint is not a supply-1, zero-decimal collectible.
    #[msg("Presented mint is not a collectible")]
    NotCollectible,

    /// [6007] Metadata account is not the canonical PDA for the mint.
    #[msg("Metadata account does not match the presented mint")]
    InvalidMetadata,

    /// [6008] The NFT is not a verified member of the vault's collection.
    #[msg("NFT is not a verified member of the collection")]
    CollectionMismatch,

    /// [6009] The TURTLE mint must use the expected number of decimals.
    #[msg("TURTLE mint must have 9 decimals")]
    InvalidMintDecimals,

    // ========== Pool State Errors (6010-6019) ==========

    /// [6010] Deposits are only accepted once a backing TURTLE balance
    /// seeds the pool.
    #[msg("Pool empty")]
    PoolEmpty,

    /// [6011] The requested id is not held by the vault.
    #[msg("NFT not in vault")]
    NotInVault,

    /// [6012] A presented token account is not owned by the caller.
    #[msg("Not token owner")]
    NotTokenOwner,

    /// [6013] A custody token account is not owned by the pool.
    #[msg("Custody account is not owned by the vault")]
    InvalidCustodyAccount,

    /// [6014] The pool cannot hold more NFTs than its fixed capacity.
    #[msg("Pool is at capacity")]
    PoolCapacityExceeded,

    // ========== Funds Errors (6020-6029) ==========

    /// [6020] Offered native payment is below the required purchase total.
    #[msg("Insufficient native payment")]
    InsufficientPayment,

    /// [6021] The native treasury holds nothing to withdraw.
    #[msg("No native balance to withdraw")]
    NoBalance,

    /// [6022] The pool's TURTLE balance cannot cover the deposit payout.
    #[msg("Insufficient pool funds for deposit payout")]
    InsufficientPoolFunds,

    // ========== Math Errors (6030-6039) ==========

    /// [6030] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6040-6049) ==========

    /// [6040] Unauthorized - caller is not the pool authority.
    #[msg("Unauthorized: caller is not the vault authority")]
    Unauthorized,

    /// [6041] New authority must be a valid non-default pubkey.
    #[msg("New authority cannot be the default pubkey")]
    InvalidAuthority,
}
