//! # grafana-client
//!
//! Thin asynchronous client for Grafana's dashboard HTTP API, returning the
//! typed model from `grafana-board`.
//!
//! ## Modules
//!
//! - [`client`] - Client builder and dashboard operations
//! - [`models`] - Request parameters and response metadata

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;

pub use client::{GrafanaClient, GrafanaClientBuilder};
pub use models::{
    BoardProperties, FoundBoard, SearchParams, SearchType, SetDashboardParams, StatusMessage,
};

/// Convenient result alias matching the shared Grafana error type.
pub type Result<T> = grafana_core::Result<T>;
