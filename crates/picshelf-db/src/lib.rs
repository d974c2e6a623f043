//! picshelf persistence
//!
//! The only persistent index is the ledger: a JSON array of upload records,
//! newest first, rewritten whole on every upload batch.

pub mod ledger;

pub use ledger::{LedgerError, LedgerRepository, LedgerResult};
