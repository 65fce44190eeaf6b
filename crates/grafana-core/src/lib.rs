//! # grafana-core
//!
//! Shared building blocks for the Grafana SDK crates.
//!
//! ## Modules
//!
//! - [`error`] - Error type covering model decoding and HTTP failures
//! - [`config`] - Connection settings for a Grafana instance
//! - [`client`] - HTTP client timeouts and pool settings
//! - [`query`] - Query parameter builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
