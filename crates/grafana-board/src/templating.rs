//! Template variables, annotations and the time settings of a board.

use crate::decode::{is_false, located_vec, null_as_default};
use crate::extension::ExtensionBag;
use crate::scalar::{BoolInt, StringSliceString};
use crate::target::DatasourceRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variable is shown with its label.
pub const TEMPLATING_HIDE_NONE: u8 = 0;
/// Variable is shown without its label.
pub const TEMPLATING_HIDE_LABEL: u8 = 1;
/// Variable is hidden.
pub const TEMPLATING_HIDE_VARIABLE: u8 = 2;

/// The `templating` section of a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templating {
    /// Variables in display order
    #[serde(deserialize_with = "located_vec")]
    pub list: Vec<TemplateVar>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// A template variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateVar {
    /// Variable name, referenced as `$name`
    pub name: String,
    /// `query`, `custom`, `interval`, `datasource`, ...
    #[serde(rename = "type")]
    pub var_type: String,
    /// Automatic interval
    #[serde(skip_serializing_if = "is_false")]
    pub auto: bool,
    /// Number of automatic intervals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_count: Option<i64>,
    /// Minimum automatic interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_min: Option<String>,
    /// Datasource queried for values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DatasourceRef>,
    /// When to refresh: a flag in old versions, 0/1/2 in newer ones
    pub refresh: BoolInt,
    /// Known values
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<TemplateOption>,
    /// Offer an `All` option
    #[serde(rename = "includeAll")]
    pub include_all: bool,
    /// Format of the `All` value (old versions)
    #[serde(rename = "allFormat", skip_serializing_if = "Option::is_none")]
    pub all_format: Option<String>,
    /// Custom `All` value
    #[serde(rename = "allValue", skip_serializing_if = "Option::is_none")]
    pub all_value: Option<String>,
    /// Allow several values
    pub multi: bool,
    /// Format of multiple values (old versions)
    #[serde(rename = "multiFormat", skip_serializing_if = "Option::is_none")]
    pub multi_format: Option<String>,
    /// Variable query; a string or an object depending on the datasource
    #[serde(skip_serializing_if = "Value::is_null")]
    pub query: Value,
    /// Value filter
    #[serde(deserialize_with = "null_as_default")]
    pub regex: String,
    /// Current selection
    pub current: Current,
    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// One of the `TEMPLATING_HIDE_*` constants
    pub hide: u8,
    /// Sort order of values
    pub sort: i64,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// One value of a template variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOption {
    /// Display text
    pub text: String,
    /// Value
    pub value: String,
    /// Selection flag
    pub selected: bool,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Current selection of a template variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Current {
    /// Selected tags
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Selected text, one string or several
    pub text: StringSliceString,
    /// Selected value, one string or several
    pub value: Value,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// The `annotations` section of a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// Annotation queries
    #[serde(deserialize_with = "located_vec")]
    pub list: Vec<Annotation>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// An annotation query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    /// Display name
    pub name: String,
    /// Datasource queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DatasourceRef>,
    /// Draw a vertical line
    #[serde(rename = "showLine", skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    /// Icon color
    #[serde(rename = "iconColor", skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// Line color
    #[serde(rename = "lineColor", skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    /// Icon size
    #[serde(rename = "iconSize", skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
    /// Query enabled
    pub enable: bool,
    /// Datasource query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Field holding the text
    #[serde(rename = "textField", skip_serializing_if = "Option::is_none")]
    pub text_field: Option<String>,
    /// Field holding the tags
    #[serde(rename = "tagsField", skip_serializing_if = "Option::is_none")]
    pub tags_field: Option<String>,
    /// Tag filter
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Annotation type (`dashboard`, `tags`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Default time range of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    /// Start, e.g. `now-6h`
    pub from: String,
    /// End, e.g. `now`
    pub to: String,
}

/// Time picker settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timepicker {
    /// Offered refresh intervals
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub refresh_intervals: Vec<String>,
    /// Offered relative ranges
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub time_options: Vec<String>,
    /// Range ends now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now: Option<bool>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}
