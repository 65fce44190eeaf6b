//! Request and response types of the dashboard endpoints.

use chrono::{DateTime, Utc};
use grafana_core::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata Grafana returns next to a dashboard (`meta` in the response).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardProperties {
    /// Dashboard type, usually `db`
    #[serde(rename = "type")]
    pub board_type: String,
    /// Starred by the current user
    pub is_starred: bool,
    /// The org's home dashboard
    pub is_home: bool,
    /// Served from a snapshot
    pub is_snapshot: bool,
    /// Current user may save
    pub can_save: bool,
    /// Current user may edit
    pub can_edit: bool,
    /// Current user may star
    pub can_star: bool,
    /// Current user may change permissions
    pub can_admin: bool,
    /// URL slug
    pub slug: String,
    /// Relative URL
    pub url: String,
    /// Snapshot expiry
    pub expires: Option<DateTime<Utc>>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Last update time
    pub updated: Option<DateTime<Utc>>,
    /// Login of the last editor
    pub updated_by: String,
    /// Login of the creator
    pub created_by: String,
    /// Stored version
    pub version: i64,
    /// Managed by file provisioning
    pub provisioned: bool,
    /// Containing folder id, 0 for General
    pub folder_id: i64,
    /// Containing folder uid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    /// Containing folder title
    pub folder_title: String,
    /// Containing folder URL
    pub folder_url: String,
}

/// Generic acknowledgement returned by write endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessage {
    /// Dashboard id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Dashboard uid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Human readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Relative URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Stored version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// `success` or an error status such as `version-mismatch`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Deleted dashboard title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundBoard {
    /// Dashboard or folder id
    pub id: u64,
    /// Dashboard or folder uid
    pub uid: String,
    /// Title
    pub title: String,
    /// Legacy `db/<slug>` URI
    pub uri: String,
    /// Relative URL
    pub url: String,
    /// URL slug
    pub slug: String,
    /// `dash-db` or `dash-folder`
    #[serde(rename = "type")]
    pub hit_type: String,
    /// Tags
    pub tags: Vec<String>,
    /// Starred by the current user
    pub is_starred: bool,
    /// Containing folder id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// Containing folder uid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    /// Containing folder title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
    /// Containing folder URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_url: Option<String>,
}

/// Options for saving a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDashboardParams {
    /// Target folder id, 0 for General
    pub folder_id: i64,
    /// Target folder uid; takes precedence over the id on newer servers
    pub folder_uid: Option<String>,
    /// Replace an existing dashboard with the same uid or title
    pub overwrite: bool,
    /// Commit message stored with the version
    pub message: Option<String>,
}

impl SetDashboardParams {
    /// Save into the General folder without overwriting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace an existing dashboard.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Save into the folder with this id.
    #[must_use]
    pub const fn with_folder_id(mut self, folder_id: i64) -> Self {
        self.folder_id = folder_id;
        self
    }

    /// Save into the folder with this uid.
    #[must_use]
    pub fn with_folder_uid(mut self, folder_uid: impl Into<String>) -> Self {
        self.folder_uid = Some(folder_uid.into());
        self
    }

    /// Attach a version message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Kind of search hit to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// Dashboards only
    #[serde(rename = "dash-db")]
    Dashboard,
    /// Folders only
    #[serde(rename = "dash-folder")]
    Folder,
}

impl SearchType {
    /// Query string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dash-db",
            Self::Folder => "dash-folder",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `/api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Title substring
    pub query: Option<String>,
    /// Tags; a hit must carry all of them
    pub tags: Vec<String>,
    /// Only starred dashboards
    pub starred: Option<bool>,
    /// Dashboards or folders
    pub search_type: Option<SearchType>,
    /// Restrict to these dashboard ids
    pub dashboard_ids: Vec<u64>,
    /// Restrict to these folder ids
    pub folder_ids: Vec<i64>,
    /// Page size; 0 leaves the server default
    pub limit: u32,
    /// Page number starting at 1; 0 leaves the server default
    pub page: u32,
}

impl SearchParams {
    /// Search dashboards whose title contains `query`.
    #[must_use]
    pub fn dashboards(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            search_type: Some(SearchType::Dashboard),
            ..Self::default()
        }
    }

    /// Add a required tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Only return starred dashboards.
    #[must_use]
    pub const fn with_starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    /// Limit the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Convert the filters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("query", self.query.as_deref());
        params.push_all("tag", &self.tags);
        params.push_opt("starred", self.starred);
        params.push_opt("type", self.search_type);
        params.push_all("dashboardIds", &self.dashboard_ids);
        params.push_all("folderIds", &self.folder_ids);
        params.push_opt("limit", (self.limit > 0).then_some(self.limit));
        params.push_opt("page", (self.page > 0).then_some(self.page));
        params.into_pairs()
    }
}
