pub mod access_registry;
pub mod claim_ledger;
pub mod claim_store;
pub mod payout_accounting;

pub use access_registry::*;
pub use claim_ledger::*;
pub use claim_store::*;
pub use payout_accounting::*;
