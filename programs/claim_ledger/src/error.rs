use anchor_lang::prelude::*;

#[error_code]
pub enum ClaimLedgerError {
    // Access control errors
    #[msg("Only the administrator can perform this action")]
    Unauthorized,
    #[msg("Caller is not a whitelisted issuer")]
    NotWhitelisted,
    #[msg("Administrator cannot be the default public key")]
    InvalidAdmin,
    #[msg("Whitelist is full")]
    WhitelistFull,

    // Input validation errors
    #[msg("Beneficiary and amount arrays differ in length")]
    InvalidArrayLength,
    #[msg("Too many entries in a single call")]
    TooManyEntries,
    #[msg("Epoch tag is too long")]
    EpochTagTooLong,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Claim state errors
    #[msg("Claim has not been approved")]
    ClaimNotApproved,
    #[msg("Claim account does not match the requested claim")]
    ClaimAccountMismatch,

    // Payout errors
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Token mint does not match the vault's token mint")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
