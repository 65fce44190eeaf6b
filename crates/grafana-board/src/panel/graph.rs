//! The `graph` panel.

use crate::decode::{is_false, located_vec, null_as_default};
use crate::extension::ExtensionBag;
use crate::scalar::{number, BoolString, FloatString, IntString};
use crate::target::Target;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Time series graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPanel {
    /// Series alias to color overrides
    #[serde(rename = "aliasColors", skip_serializing_if = "Option::is_none")]
    pub alias_colors: Option<Value>,
    /// Draw bars
    pub bars: bool,
    /// Area fill, 0 to 10
    pub fill: i64,
    /// Legend options
    pub legend: Legend,
    /// Left Y axis label (before 4.x)
    #[serde(rename = "leftYAxisLabel", skip_serializing_if = "Option::is_none")]
    pub left_y_axis_label: Option<String>,
    /// Right Y axis label (before 4.x)
    #[serde(rename = "rightYAxisLabel", skip_serializing_if = "Option::is_none")]
    pub right_y_axis_label: Option<String>,
    /// Draw lines
    pub lines: bool,
    /// Line width
    pub linewidth: u32,
    /// `connected`, `null` or `null as zero`
    #[serde(rename = "nullPointMode")]
    pub null_point_mode: String,
    /// Stack as percentages
    pub percentage: bool,
    /// Point radius
    #[serde(serialize_with = "number")]
    pub pointradius: f64,
    /// Draw points
    pub points: bool,
    /// Per-series overrides
    #[serde(
        rename = "seriesOverrides",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub series_overrides: Vec<SeriesOverride>,
    /// Stack series
    pub stack: bool,
    /// Stepped lines
    #[serde(rename = "steppedLine")]
    pub stepped_line: bool,
    /// Queries
    #[serde(deserialize_with = "located_vec", skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
    /// Relative time override
    #[serde(rename = "timeFrom", skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    /// Time shift
    #[serde(rename = "timeShift", skip_serializing_if = "Option::is_none")]
    pub time_shift: Option<String>,
    /// Tooltip options
    pub tooltip: Tooltip,
    /// Show the X axis (before 4.x)
    #[serde(rename = "x-axis", skip_serializing_if = "is_false")]
    pub x_axis: bool,
    /// Show the Y axis (before 4.x)
    #[serde(rename = "y-axis", skip_serializing_if = "is_false")]
    pub y_axis: bool,
    /// Y axis units (before 4.x)
    #[serde(rename = "y_formats", deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub y_formats: Vec<String>,
    /// X axis (4.x and later)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<XAxis>,
    /// Left and right Y axes (4.x and later)
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub yaxes: Vec<Axis>,
    /// Value precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<IntString>,
}

/// Graph legend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    /// Render as a table
    #[serde(rename = "alignAsTable")]
    pub align_as_table: bool,
    /// Show average
    pub avg: bool,
    /// Show current value
    pub current: bool,
    /// Hide series with only nulls
    #[serde(rename = "hideEmpty")]
    pub hide_empty: bool,
    /// Hide series with only zeros
    #[serde(rename = "hideZero")]
    pub hide_zero: bool,
    /// Show maximum
    pub max: bool,
    /// Show minimum
    pub min: bool,
    /// Place on the right side
    #[serde(rename = "rightSide")]
    pub right_side: bool,
    /// Show the legend
    pub show: bool,
    /// Show total
    pub total: bool,
    /// Show values
    pub values: bool,
    /// Width when on the right side
    #[serde(rename = "sideWidth", skip_serializing_if = "Option::is_none")]
    pub side_width: Option<u32>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Graph tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tooltip {
    /// Show all series in one tooltip
    pub shared: bool,
    /// `cumulative` or `individual`
    pub value_type: String,
    /// Millisecond resolution (3.x)
    #[serde(rename = "msResolution", skip_serializing_if = "Option::is_none")]
    pub ms_resolution: Option<bool>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// A Y axis.
///
/// `min` and `max` arrive as numbers, numeric strings or `null` depending on
/// the Grafana version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    /// Unit
    pub format: String,
    /// Axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Logarithmic base, 1 for linear
    #[serde(rename = "logBase")]
    pub log_base: i64,
    /// Upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<FloatString>,
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<FloatString>,
    /// Show the axis
    pub show: bool,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// The X axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XAxis {
    /// `time`, `series` or `histogram`
    pub mode: String,
    /// Axis name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Show the axis
    pub show: bool,
    /// Reduction used in series mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Overrides applied to series whose alias matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOverride {
    /// Series alias or `/regex/`
    pub alias: String,
    /// Draw bars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<bool>,
    /// Series color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Area fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<i64>,
    /// Fill down to another series
    #[serde(rename = "fillBelowTo", skip_serializing_if = "Option::is_none")]
    pub fill_below_to: Option<String>,
    /// Show in legend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<bool>,
    /// Draw lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    /// Stack flag or stack group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<BoolString>,
    /// `negative-Y` or `constant`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    /// Y axis index, 1 or 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<i64>,
    /// Z index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zindex: Option<i64>,
    /// Null point mode for this series
    #[serde(rename = "nullPointMode", skip_serializing_if = "Option::is_none")]
    pub null_point_mode: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}
