//! Core types shared by every picshelf crate: configuration, the error
//! taxonomy, and the upload record models.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
