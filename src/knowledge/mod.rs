pub mod contradiction;
pub use contradiction::*;

pub mod ledger;
pub use ledger::*;

pub mod store;
pub use store::*;
