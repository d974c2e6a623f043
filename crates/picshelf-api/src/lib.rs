//! picshelf HTTP service
//!
//! Accepts image uploads, stores a bounded full-size copy plus a square
//! thumbnail per image, and lists everything recorded in the ledger.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

pub use state::AppState;
