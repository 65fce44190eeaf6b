//! The `table` panel.

use crate::decode::{located_vec, null_as_default};
use crate::extension::ExtensionBag;
use crate::scalar::IntString;
use crate::target::Target;
use serde::{Deserialize, Serialize};

/// Table of query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePanel {
    /// Columns shown in `timeseries_aggregations` mode
    #[serde(deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
    /// Sort state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<TableSort>,
    /// Column styles
    #[serde(deserialize_with = "null_as_default")]
    pub styles: Vec<ColumnStyle>,
    /// Data transform (`timeseries_to_rows`, `table`, ...)
    pub transform: String,
    /// Queries
    #[serde(deserialize_with = "located_vec", skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
    /// Scroll instead of growing (3.x)
    pub scroll: bool,
}

/// Table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Header text
    pub text: String,
    /// Aggregation (`avg`, `current`, ...)
    pub value: String,
}

/// Sort state of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSort {
    /// Column index; `null` when unsorted
    pub col: Option<u32>,
    /// Descending order
    pub desc: bool,
}

/// Formatting rule for columns matching a pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStyle {
    /// Header override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Date format for `date` columns
    #[serde(rename = "dateFormat", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// Column name or `/regex/`
    pub pattern: String,
    /// `date`, `number`, `string` or `hidden`
    #[serde(rename = "type")]
    pub style_type: String,
    /// `cell`, `value` or `row`
    #[serde(rename = "colorMode", skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<String>,
    /// Threshold colors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Value precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<IntString>,
    /// Threshold values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<String>>,
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}
