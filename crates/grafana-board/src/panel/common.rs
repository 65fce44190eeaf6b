//! Fields shared by every panel type, plus records used by them.

use crate::decode::{is_false, null_as_default};
use crate::extension::ExtensionBag;
use crate::scalar::{number_list, optional_number, FloatOrString};
use crate::target::DatasourceRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields present on every panel regardless of its type.
///
/// The `type` discriminator is not stored here; it follows from
/// [`PanelKind`](super::PanelKind).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonPanel {
    /// Panel id, unique within a board
    pub id: u32,

    /// Panel title
    pub title: String,

    /// Position in the 24-column grid (flat schema)
    #[serde(rename = "gridPos", skip_serializing_if = "Option::is_none")]
    pub grid_pos: Option<GridPos>,

    /// Panel datasource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DatasourceRef>,

    /// Width in 12ths of a row (rows schema)
    #[serde(serialize_with = "optional_number", skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,

    /// Height, as pixels or a CSS string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<FloatOrString>,

    /// Panel links
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    /// Renderer (`flot` or `png`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,

    /// Template variable to repeat the panel for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,

    /// Repeat direction (`h` or `v`)
    #[serde(rename = "repeatDirection", skip_serializing_if = "Option::is_none")]
    pub repeat_direction: Option<String>,

    /// Source panel of a repeated copy
    #[serde(rename = "repeatPanelId", skip_serializing_if = "Option::is_none")]
    pub repeat_panel_id: Option<u32>,

    /// Variable values bound to a repeated copy
    #[serde(rename = "scopedVars", skip_serializing_if = "Option::is_none")]
    pub scoped_vars: Option<BTreeMap<String, ScopedVar>>,

    /// Transparent background
    #[serde(skip_serializing_if = "is_false")]
    pub transparent: bool,

    /// Minimum span when repeated
    #[serde(
        rename = "minSpan",
        serialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_span: Option<f64>,

    /// Error flag saved by old versions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,

    /// Panel has never been saved
    #[serde(rename = "isNew", skip_serializing_if = "is_false")]
    pub is_new: bool,

    /// Panel is editable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,

    /// Hide the time override info
    #[serde(rename = "hideTimeOverride", skip_serializing_if = "Option::is_none")]
    pub hide_time_override: Option<bool>,

    /// Panel description (markdown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Legacy alert rule attached to the panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,

    /// Keys the document carried with values that encode to nothing
    /// (`null`, `false`, `[]`). Replayed while their field stays unset.
    #[serde(skip)]
    pub(crate) elided: ExtensionBag,
}

impl CommonPanel {
    /// Remembers the consumed keys of `raw` that plain encoding would drop.
    ///
    /// Keys still present in `remainder` belong to the panel case.
    pub(crate) fn keep_elided(
        &mut self,
        raw: Map<String, Value>,
        remainder: &ExtensionBag,
    ) -> Result<(), serde_json::Error> {
        let encoded = self.encode_fields()?;
        self.elided = raw
            .into_iter()
            .filter(|(key, _)| !remainder.contains_key(key) && !encoded.contains_key(key))
            .collect();
        Ok(())
    }

    /// Encodes the fields, replaying elided keys that are still unset.
    pub(crate) fn encode_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = self.encode_fields()?;
        for (key, value) in self.elided.iter() {
            if !map.contains_key(key) {
                map.insert(key.to_string(), value.clone());
            }
        }
        Ok(map)
    }

    fn encode_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

/// Grid position of a panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPos {
    /// Height in grid units
    pub h: u32,
    /// Width in grid units
    pub w: u32,
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

/// Link to another dashboard or an external URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Link text
    pub title: String,
    /// `dashboards` or `link`
    #[serde(rename = "type")]
    pub link_type: String,
    /// Show matching dashboards as a dropdown
    #[serde(rename = "asDropdown", skip_serializing_if = "Option::is_none")]
    pub as_dropdown: Option<bool>,
    /// Linked dashboard URI (old versions)
    #[serde(rename = "dashUri", skip_serializing_if = "Option::is_none")]
    pub dash_uri: Option<String>,
    /// Linked dashboard title (old versions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Forward template variables
    #[serde(rename = "includeVars")]
    pub include_vars: bool,
    /// Forward the time range
    #[serde(rename = "keepTime", skip_serializing_if = "Option::is_none")]
    pub keep_time: Option<bool>,
    /// Extra query string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    /// Tags selecting linked dashboards
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Open in a new tab
    #[serde(rename = "targetBlank", skip_serializing_if = "Option::is_none")]
    pub target_blank: Option<bool>,
    /// Hover text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// External URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Variable value bound to a repeated panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopedVar {
    /// Selection flag
    pub selected: bool,
    /// Display text
    pub text: String,
    /// Variable value
    pub value: String,
}

/// Legacy (pre-unified alerting) alert rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    /// Conditions, all evaluated
    #[serde(deserialize_with = "null_as_default")]
    pub conditions: Vec<AlertCondition>,
    /// State on execution error
    #[serde(rename = "executionErrorState")]
    pub execution_error_state: String,
    /// Evaluation interval (`60s`)
    pub frequency: String,
    /// Handler id
    pub handler: i64,
    /// Rule name
    pub name: String,
    /// State when no data is returned
    #[serde(rename = "noDataState")]
    pub no_data_state: String,
    /// Notification channels
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<AlertNotification>,
    /// Notification message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Pending period
    #[serde(rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_duration: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// One condition of an alert rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertCondition {
    /// Threshold check
    pub evaluator: AlertEvaluator,
    /// How this condition joins the previous one
    pub operator: AlertOperator,
    /// Query reference and time range
    pub query: AlertQuery,
    /// Series reduction
    pub reducer: AlertReducer,
    /// Condition type (`query`)
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub condition_type: String,
}

/// Threshold check of an alert condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertEvaluator {
    /// Threshold values
    #[serde(
        deserialize_with = "null_as_default",
        serialize_with = "number_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub params: Vec<f64>,
    /// `gt`, `lt`, `within_range`, ...
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub evaluator_type: String,
}

/// Boolean operator of an alert condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOperator {
    /// `and` or `or`
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub operator_type: String,
}

/// Query part of an alert condition: `[refId, from, to]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertQuery {
    /// Positional parameters
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

/// Series reducer of an alert condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertReducer {
    /// Reducer parameters
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
    /// `avg`, `max`, `last`, ...
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub reducer_type: String,
}

/// Notification channel of an alert rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertNotification {
    /// Channel id (old versions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Channel uid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}
