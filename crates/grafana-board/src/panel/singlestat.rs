//! The `singlestat` panel.

use crate::decode::{located_vec, null_as_default};
use crate::scalar::{number, IntString};
use crate::target::Target;
use serde::{Deserialize, Serialize};

/// A single reduced value with optional sparkline and gauge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinglestatPanel {
    /// Threshold colors
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    /// Color the value
    #[serde(rename = "colorValue")]
    pub color_value: bool,
    /// Color the background
    #[serde(rename = "colorBackground")]
    pub color_background: bool,
    /// Value precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<IntString>,
    /// Unit
    pub format: String,
    /// Maximum data points requested
    #[serde(rename = "maxDataPoints", skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<i64>,
    /// Null point mode
    #[serde(rename = "nullPointMode")]
    pub null_point_mode: String,
    /// Text after the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    /// Text before the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Postfix font size
    #[serde(rename = "postfixFontSize", skip_serializing_if = "Option::is_none")]
    pub postfix_font_size: Option<String>,
    /// Prefix font size
    #[serde(rename = "prefixFontSize", skip_serializing_if = "Option::is_none")]
    pub prefix_font_size: Option<String>,
    /// Sparkline options
    pub sparkline: Sparkline,
    /// Value font size
    #[serde(rename = "valueFontSize")]
    pub value_font_size: String,
    /// Value to text mappings
    #[serde(rename = "valueMaps", deserialize_with = "null_as_default")]
    pub value_maps: Vec<ValueMap>,
    /// Reduction (`avg`, `current`, ...)
    #[serde(rename = "valueName")]
    pub value_name: String,
    /// Queries
    #[serde(deserialize_with = "located_vec", skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
    /// Comma separated thresholds
    pub thresholds: String,
    /// Gauge options
    pub gauge: Gauge,
}

/// Sparkline under a singlestat value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sparkline {
    /// Fill color
    #[serde(rename = "fillColor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Full height
    pub full: bool,
    /// Line color
    #[serde(rename = "lineColor", skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    /// Show the sparkline
    pub show: bool,
}

/// Gauge around a singlestat value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gauge {
    /// Upper bound
    #[serde(rename = "maxValue", serialize_with = "number")]
    pub max_value: f64,
    /// Lower bound
    #[serde(rename = "minValue", serialize_with = "number")]
    pub min_value: f64,
    /// Show the gauge
    pub show: bool,
    /// Label thresholds
    #[serde(rename = "thresholdLabels")]
    pub threshold_labels: bool,
    /// Mark thresholds
    #[serde(rename = "thresholdMarkers")]
    pub threshold_markers: bool,
}

/// Maps a value to display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMap {
    /// Comparison operator (`=`)
    pub op: String,
    /// Display text
    pub text: String,
    /// Matched value
    pub value: String,
}
