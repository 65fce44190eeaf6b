//! Panel query targets.
//!
//! Fields shared by the common time-series datasources are modeled. Anything
//! specific to other datasources (for example elasticsearch `bucketAggs`)
//! stays in the target's [`ExtensionBag`] and is re-emitted verbatim.

use crate::decode::{decode_object, into_error};
use crate::extension::ExtensionBag;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Datasource name Grafana uses for panels mixing several datasources.
pub const MIXED_SOURCE: &str = "-- Mixed --";

/// Reference to a datasource.
///
/// Older dashboards store the datasource name; newer ones store an object
/// with `type` and `uid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasourceRef {
    /// Datasource name
    Name(String),
    /// Structured reference
    Ref(DatasourceObject),
}

/// Structured datasource reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasourceObject {
    /// Datasource plugin type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Datasource uid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

impl DatasourceRef {
    /// Build a structured reference.
    #[must_use]
    pub fn with_uid(kind: impl Into<String>, uid: impl Into<String>) -> Self {
        Self::Ref(DatasourceObject {
            kind: Some(kind.into()),
            uid: Some(uid.into()),
            extra: ExtensionBag::new(),
        })
    }

    /// The datasource name, for name references.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Ref(_) => None,
        }
    }

    /// The uid, for structured references.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        match self {
            Self::Ref(object) => object.uid.as_deref(),
            Self::Name(_) => None,
        }
    }

    /// Returns true for the mixed pseudo-datasource.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.name() == Some(MIXED_SOURCE)
    }
}

impl From<&str> for DatasourceRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for DatasourceRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A query attached to a panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Reference id, usually a single letter
    #[serde(rename = "refId")]
    pub ref_id: String,

    /// Datasource override for this query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DatasourceRef>,

    /// Whether the query is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,

    /// Prometheus expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,

    /// Minimum step interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Resolution factor
    #[serde(rename = "intervalFactor", skip_serializing_if = "Option::is_none")]
    pub interval_factor: Option<i64>,

    /// Query step in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,

    /// Legend template
    #[serde(rename = "legendFormat", skip_serializing_if = "Option::is_none")]
    pub legend_format: Option<String>,

    /// Instant query flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<bool>,

    /// Result format (`time_series`, `table`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Graphite query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Datasource-specific keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

impl Target {
    /// Create a target with the given reference id.
    #[must_use]
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            ..Self::default()
        }
    }

    /// Set the datasource.
    #[must_use]
    pub fn with_datasource(mut self, datasource: impl Into<DatasourceRef>) -> Self {
        self.datasource = Some(datasource.into());
        self
    }

    /// Set the Prometheus expression.
    #[must_use]
    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    /// Set the legend template.
    #[must_use]
    pub fn with_legend_format(mut self, legend: impl Into<String>) -> Self {
        self.legend_format = Some(legend.into());
        self
    }

    /// Raw value of a datasource-specific key.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Set a datasource-specific key.
    pub fn set_extension(&mut self, key: impl Into<String>, value: Value) {
        self.extra.insert(key, value);
    }

    /// All datasource-specific keys in input order.
    #[must_use]
    pub const fn extensions(&self) -> &ExtensionBag {
        &self.extra
    }

    /// Decode a target from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`grafana_core::Error::FieldTypeMismatch`] naming the field
    /// that could not be decoded.
    pub fn from_value(value: &Value) -> Result<Self> {
        decode_object(value).map_err(|msg| into_error(&msg))
    }
}

/// Returns the reference id following `ref_id`.
///
/// Only the first character counts: its code point is incremented, so `"A"`
/// becomes `"B"` and `"Z"` becomes `"["`. An empty id yields `"A"`.
#[must_use]
pub fn next_ref_id(ref_id: &str) -> String {
    let Some(first) = ref_id.chars().next() else {
        return "A".to_string();
    };
    char::from_u32(u32::from(first) + 1)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}
