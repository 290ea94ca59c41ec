use anchor_lang::prelude::*;

/// Event emitted when a new ledger is initialized
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerInitialized {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Account that created the ledger (part of the PDA seeds)
    pub creator: Pubkey,
    /// Initial administrator
    pub admin: Pubkey,
}

/// Event emitted when an issuer's whitelist status is set
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistChanged {
    /// Issuer whose status changed
    pub issuer: Pubkey,
    /// New whitelist status
    pub whitelisted: bool,
}

/// Event emitted when the administrator role is handed over
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminTransferred {
    /// Administrator before the transfer
    pub previous_admin: Pubkey,
    /// Administrator after the transfer
    pub new_admin: Pubkey,
}

/// Event emitted when tokens are deposited into a ledger vault
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFunded {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Token mint of the vault
    pub token: Pubkey,
    /// Account that deposited the tokens
    pub funder: Pubkey,
    /// Amount deposited
    pub amount: u64,
}

/// Event emitted when the administrator takes tokens out of a ledger vault
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultWithdrawn {
    /// Token mint of the vault
    pub token: Pubkey,
    /// Administrator receiving the tokens
    pub admin: Pubkey,
    /// Amount withdrawn
    pub amount: u64,
}

/// Event emitted once per created claim
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimAdded {
    /// Token mint the claim is denominated in
    pub token: Pubkey,
    /// Account entitled to the claim
    pub beneficiary: Pubkey,
    /// Claimable amount
    pub amount: u64,
    /// Sequential claim identifier
    pub claim_id: u64,
    /// Off-ledger epoch the creation call belongs to
    pub epoch: u64,
    /// Free-text bookkeeping tag of the creation call
    pub tag: String,
}

/// Event emitted once per approval target
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimApproved {
    pub beneficiary: Pubkey,
    pub claim_id: u64,
    /// Approval flag after the call
    pub approved: bool,
}

/// Event emitted once per removal target
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRemoved {
    pub beneficiary: Pubkey,
    pub claim_id: u64,
    /// Outstanding amount that was cancelled (0 when nothing was left)
    pub amount_removed: u64,
}

/// Event emitted for every claim that paid out
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claimed {
    /// Token mint that was paid
    pub token: Pubkey,
    /// Account that received the tokens
    pub beneficiary: Pubkey,
    pub claim_id: u64,
    /// Amount transferred
    pub amount: u64,
}
