//! List panels: `dashlist`, `pluginlist` and `alertlist`.

use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};

/// List of dashboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashlistPanel {
    /// `starred` or `search` (before 4.x)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Maximum number of entries
    pub limit: u32,
    /// Search query
    pub query: String,
    /// Tag filter
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Show headings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<bool>,
    /// Show recently viewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent: Option<bool>,
    /// Show search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    /// Show starred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

/// List of installed plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginlistPanel {
    /// Maximum number of entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// List of legacy alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertlistPanel {
    /// Only alerts of the current dashboard
    #[serde(rename = "onlyAlertsOnDashboard")]
    pub only_alerts_on_dashboard: bool,
    /// `current` or `changes`
    pub show: String,
    /// Sort order
    #[serde(rename = "sortOrder")]
    pub sort_order: i64,
    /// Maximum number of entries
    pub limit: u32,
    /// States to include
    #[serde(rename = "stateFilter", deserialize_with = "null_as_default")]
    pub state_filter: Vec<String>,
    /// Dashboard tag filter
    #[serde(rename = "dashboardTags", deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub dashboard_tags: Vec<String>,
}
