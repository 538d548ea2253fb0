//! Core components of the `holdings-export` crate.
//!
//! - The [`ExportClient`] and its builder.
//! - The crate-wide [`ExportError`].
//! - The explicit [`ServiceConfig`] handed to the client at startup.
//! - Internal JSON fetch/submit helpers.

/// The client (`ExportClient`), builder, and endpoint defaults.
pub mod client;
/// Service configuration (`ServiceConfig`).
pub mod config;
/// The primary error type (`ExportError`) for the crate.
pub mod error;

pub(crate) mod net;

pub use client::{ExportClient, ExportClientBuilder};
pub use config::ServiceConfig;
pub use error::ExportError;
