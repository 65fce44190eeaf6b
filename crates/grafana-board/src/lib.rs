//! # grafana-board
//!
//! Typed model of Grafana dashboard JSON that round-trips documents written
//! by Grafana 2.x through 8.x.
//!
//! ## Modules
//!
//! - [`board`] - The dashboard document, builders and the raw escape hatch
//! - [`panel`] - Panels, dispatched on their `type` string
//! - [`row`] - Rows of the legacy rows schema
//! - [`target`] - Panel queries
//! - [`templating`] - Template variables, annotations and time settings
//! - [`scalar`] - Values that arrive as different JSON literal kinds
//! - [`extension`] - Ordered storage for unrecognized keys
//!
//! ## Example
//!
//! ```
//! use grafana_board::{Board, Panel, Target};
//!
//! let mut board = Board::from_slice(br#"{"title": "Hosts", "panels": []}"#).unwrap();
//! let mut graph = Panel::graph("Load");
//! graph.add_target(Target::new("A").with_expr("node_load1"));
//! board.add_panel(graph).unwrap();
//!
//! let bytes = board.to_vec().unwrap();
//! assert_eq!(Board::from_slice(&bytes).unwrap(), board);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
mod decode;
pub mod extension;
pub mod panel;
pub mod row;
pub mod scalar;
pub mod target;
pub mod templating;

pub use board::{Board, BoardFactory, RawBoard};
pub use extension::ExtensionBag;
pub use panel::{CommonPanel, CustomPanel, Panel, PanelKind};
pub use row::{Row, RowEditor};
pub use scalar::{BoolInt, BoolString, FloatOrString, FloatString, IntString, StringSliceString};
pub use target::{next_ref_id, DatasourceRef, Target, MIXED_SOURCE};

/// Result alias that reuses the shared Grafana error type.
pub type Result<T> = grafana_core::Result<T>;
