//! The `row` pseudo-panel of the flat panels schema.

use crate::decode::panel_vec;
use crate::panel::Panel;
use serde::{Deserialize, Serialize};

/// Row container in the flat schema (5.x and later).
///
/// An expanded row keeps its panels in the board's flat list; a collapsed
/// row carries them here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowPanel {
    /// Panels hidden inside a collapsed row
    #[serde(deserialize_with = "panel_vec")]
    pub panels: Vec<Panel>,
    /// Collapsed state
    pub collapsed: bool,
}
