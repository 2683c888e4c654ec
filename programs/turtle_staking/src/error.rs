//! Error types for the Turtle staking program.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input/holdings validation errors
//! - 6010-6019: State errors
//! - 6020-6029: Funds errors
//! - 6030-6039: Policy errors
//! - 6040-6049: Math errors
//! - 6050-6059: Authorization errors

use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // ========== Input/Holdings Validation Errors (6000-6009) ==========

    /// [6000] NFT holdings must be passed as `[mint, metadata, token_account]` triples.
    #[msg("NFT holdings must be passed as mint, metadata, token account triples")]
    InvalidNftProof,

    /// [6001] The same NFT mint was presented more than once.
    #[msg("Duplicate NFT in presented holdings")]
    DuplicateNft,

    /// [6002] A presented token account does not hold the presented mint.
    #[msg("Token account mint does not match the presented NFT mint")]
    MintMismatch,

    /// [6003] A presented mint is not a supply-1, zero-decimal collectible.
    #[msg("Presented mint is not a collectible")]
    NotCollectible,

    /// [6004] Metadata account is not the canonical PDA for the mint.
    #[msg("Metadata account does not match the presented mint")]
    InvalidMetadata,

    /// [6005] The NFT is not a verified member of the staking collection.
    #[msg("NFT is not a verified member of the collection")]
    CollectionMismatch,

    /// [6006] A presented token account is not owned by the caller.
    #[msg("Presented token account is not owned by the caller")]
    NotTokenOwner,

    /// [6007] The TURTLE mint must use the expected number of decimals.
    #[msg("TURTLE mint must have 9 decimals")]
    InvalidMintDecimals,

    /// [6008] Cannot fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // ========== State Errors (6010-6019) ==========

    /// [6010] Staking requires holding at least one collection NFT.
    #[msg("Must have at least one NFT")]
    NoNftsOwned,

    /// [6011] No active stake position for this owner.
    #[msg("No staked NFTs")]
    NoStakedNfts,

    /// [6012] Less than one full day of earnings has accrued.
    #[msg("No earnings to claim")]
    NothingToClaim,

    /// [6013] Restaking with fewer NFTs than already staked is rejected;
    /// collateral is only released through unstake.
    #[msg("Can only stake more NFTs")]
    CannotReduceStake,

    /// [6014] Current NFT holdings are below the staked count.
    #[msg("Insufficient NFT balance")]
    InsufficientNftBalance,

    // ========== Funds Errors (6020-6029) ==========

    /// [6020] Caller's TURTLE balance does not cover the full collateral.
    #[msg("Insufficient Turtle tokens")]
    InsufficientTurtleTokens,

    /// [6021] Offered native fee is below the scheduled withdrawal fee.
    #[msg("Offered fee is below the required withdrawal fee")]
    InsufficientFee,

    /// [6022] The pool vault cannot cover the payout.
    #[msg("Insufficient pool funds for payout")]
    InsufficientPoolFunds,

    // ========== Policy Errors (6030-6039) ==========

    /// [6030] Collateral requirement cannot go below the protocol floor.
    #[msg("Minimum 10000 tokens required")]
    BelowMinimumRequirement,

    /// [6031] Daily earning rate cannot exceed the protocol ceiling.
    #[msg("Rate cannot exceed 10")]
    AboveMaximumRate,

    /// [6032] Parameters may only be decreased from their current value.
    #[msg("Parameter can only be decreased")]
    RateIncreaseForbidden,

    // ========== Math Errors (6040-6049) ==========

    /// [6040] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6050-6059) ==========

    /// [6050] Unauthorized - caller is not the pool authority.
    #[msg("Unauthorized: caller is not the pool authority")]
    Unauthorized,

    /// [6051] New authority must be a valid non-default pubkey.
    #[msg("New authority cannot be the default pubkey")]
    InvalidAuthority,

    /// [6052] The supplied fee sink does not match the configured vault address.
    #[msg("Fee sink does not match the configured vault address")]
    VaultAddressMismatch,
}
