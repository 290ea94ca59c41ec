pub mod initialize_ledger;
pub mod set_whitelisted;
pub mod transfer_admin;
pub mod fund_vault;
pub mod withdraw_from_vault;
pub mod add_to_claims;
pub mod approve_claims;
pub mod remove_claims;
pub mod claim;
pub mod queries;

pub use initialize_ledger::*;
pub use set_whitelisted::*;
pub use transfer_admin::*;
pub use fund_vault::*;
pub use withdraw_from_vault::*;
pub use add_to_claims::*;
pub use approve_claims::*;
pub use remove_claims::*;
pub use claim::*;
pub use queries::*;
