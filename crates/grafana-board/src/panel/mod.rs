//! Dashboard panels.
//!
//! A panel is a JSON object whose `type` string selects the shape of the rest
//! of the object. Decoding runs in two passes: the fields every panel shares
//! are read first, then the remainder is decoded into the structure named by
//! `type`. Keys that structure does not model are kept in the panel's
//! [`ExtensionBag`]. Types this crate does not know become
//! [`PanelKind::Custom`] and keep every remaining key verbatim.
//!
//! Encoding writes the common fields, then `type`, then the case fields, then
//! the unrecognized keys in their original order.

mod common;
mod graph;
mod lists;
mod row;
mod singlestat;
mod table;
mod text;

pub use common::{
    Alert, AlertCondition, AlertEvaluator, AlertNotification, AlertOperator, AlertQuery,
    AlertReducer, CommonPanel, GridPos, Link, ScopedVar,
};
pub use graph::{Axis, GraphPanel, Legend, SeriesOverride, Tooltip, XAxis};
pub use lists::{AlertlistPanel, DashlistPanel, PluginlistPanel};
pub use row::RowPanel;
pub use singlestat::{Gauge, SinglestatPanel, Sparkline, ValueMap};
pub use table::{Column, ColumnStyle, TablePanel, TableSort};
pub use text::TextPanel;

use crate::decode::{decode_object, into_error, nest, parse_document, Extended};
use crate::extension::ExtensionBag;
use crate::target::{next_ref_id, DatasourceRef, Target};
use crate::Result;
use grafana_core::Error;
use serde::de::{self, DeserializeOwned};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Discriminator of graph panels.
pub const GRAPH_TYPE: &str = "graph";
/// Discriminator of table panels.
pub const TABLE_TYPE: &str = "table";
/// Discriminator of text panels.
pub const TEXT_TYPE: &str = "text";
/// Discriminator of singlestat panels.
pub const SINGLESTAT_TYPE: &str = "singlestat";
/// Discriminator of dashboard list panels.
pub const DASHLIST_TYPE: &str = "dashlist";
/// Discriminator of plugin list panels.
pub const PLUGINLIST_TYPE: &str = "pluginlist";
/// Discriminator of alert list panels.
pub const ALERTLIST_TYPE: &str = "alertlist";
/// Discriminator of row pseudo-panels.
pub const ROW_TYPE: &str = "row";

const TYPE_KEY: &str = "type";
const DEFAULT_TITLE: &str = "Panel Title";
const DEFAULT_RENDERER: &str = "flot";

/// A dashboard panel: the shared fields plus exactly one type-specific case.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Fields shared by all panel types
    pub common: CommonPanel,
    /// Type-specific fields
    pub kind: PanelKind,
    /// Keys neither the common fields nor the case model
    pub extra: ExtensionBag,
}

/// The type-specific part of a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelKind {
    /// `graph`
    Graph(GraphPanel),
    /// `table`
    Table(TablePanel),
    /// `text`
    Text(TextPanel),
    /// `singlestat`
    Singlestat(SinglestatPanel),
    /// `dashlist`
    Dashlist(DashlistPanel),
    /// `pluginlist`
    Pluginlist(PluginlistPanel),
    /// `alertlist`
    Alertlist(AlertlistPanel),
    /// `row`
    Row(RowPanel),
    /// Any other type, kept as raw JSON
    Custom(CustomPanel),
}

/// A panel of a type this crate does not model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPanel {
    /// The `type` string as found in the document
    pub type_name: String,
    /// Every key except the common fields, in input order
    pub fields: ExtensionBag,
}

impl PanelKind {
    /// The `type` string this case encodes with.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Graph(_) => GRAPH_TYPE,
            Self::Table(_) => TABLE_TYPE,
            Self::Text(_) => TEXT_TYPE,
            Self::Singlestat(_) => SINGLESTAT_TYPE,
            Self::Dashlist(_) => DASHLIST_TYPE,
            Self::Pluginlist(_) => PLUGINLIST_TYPE,
            Self::Alertlist(_) => ALERTLIST_TYPE,
            Self::Row(_) => ROW_TYPE,
            Self::Custom(custom) => &custom.type_name,
        }
    }
}

impl Panel {
    fn with_kind(title: String, kind: PanelKind) -> Self {
        let title = if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };
        Self {
            common: CommonPanel {
                title,
                renderer: Some(DEFAULT_RENDERER.to_string()),
                is_new: true,
                ..CommonPanel::default()
            },
            kind,
            extra: ExtensionBag::new(),
        }
    }

    /// New graph panel with Grafana's defaults.
    #[must_use]
    pub fn graph(title: impl Into<String>) -> Self {
        let mut panel = Self::with_kind(
            title.into(),
            PanelKind::Graph(GraphPanel {
                null_point_mode: "connected".to_string(),
                pointradius: 5.0,
                x_axis: true,
                y_axis: true,
                ..GraphPanel::default()
            }),
        );
        panel.common.span = Some(12.0);
        panel
    }

    /// New table panel.
    #[must_use]
    pub fn table(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Table(TablePanel::default()))
    }

    /// New text panel.
    #[must_use]
    pub fn text(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Text(TextPanel::default()))
    }

    /// New singlestat panel.
    #[must_use]
    pub fn singlestat(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Singlestat(SinglestatPanel::default()))
    }

    /// New dashboard list panel.
    #[must_use]
    pub fn dashlist(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Dashlist(DashlistPanel::default()))
    }

    /// New plugin list panel.
    #[must_use]
    pub fn pluginlist(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Pluginlist(PluginlistPanel::default()))
    }

    /// New alert list panel.
    #[must_use]
    pub fn alertlist(title: impl Into<String>) -> Self {
        Self::with_kind(title.into(), PanelKind::Alertlist(AlertlistPanel::default()))
    }

    /// New expanded row pseudo-panel.
    #[must_use]
    pub fn row(title: impl Into<String>) -> Self {
        Self {
            common: CommonPanel {
                title: title.into(),
                ..CommonPanel::default()
            },
            kind: PanelKind::Row(RowPanel::default()),
            extra: ExtensionBag::new(),
        }
    }

    /// New panel of a type this crate does not model.
    ///
    /// Passing a known type name produces a panel that decodes back into
    /// that type's case.
    #[must_use]
    pub fn custom(title: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_kind(
            title.into(),
            PanelKind::Custom(CustomPanel {
                type_name: type_name.into(),
                fields: ExtensionBag::new(),
            }),
        )
    }

    /// The `type` string of this panel.
    #[must_use]
    pub fn panel_type(&self) -> &str {
        self.kind.type_name()
    }

    /// Returns true if the panel's type is not modeled.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self.kind, PanelKind::Custom(_))
    }

    /// Raw value of an unmodeled key.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        match &self.kind {
            PanelKind::Custom(custom) => custom.fields.get(key).or_else(|| self.extra.get(key)),
            _ => self.extra.get(key),
        }
    }

    /// The panel's queries, for types that have them.
    #[must_use]
    pub fn targets(&self) -> Option<&[Target]> {
        match &self.kind {
            PanelKind::Graph(graph) => Some(&graph.targets),
            PanelKind::Table(table) => Some(&table.targets),
            PanelKind::Singlestat(singlestat) => Some(&singlestat.targets),
            _ => None,
        }
    }

    /// Mutable access to the panel's queries, for types that have them.
    pub fn targets_mut(&mut self) -> Option<&mut Vec<Target>> {
        match &mut self.kind {
            PanelKind::Graph(graph) => Some(&mut graph.targets),
            PanelKind::Table(table) => Some(&mut table.targets),
            PanelKind::Singlestat(singlestat) => Some(&mut singlestat.targets),
            _ => None,
        }
    }

    /// Removes every query.
    pub fn reset_targets(&mut self) {
        if let Some(targets) = self.targets_mut() {
            targets.clear();
        }
    }

    /// Appends a query as is.
    ///
    /// The reference id is not checked, so two queries may share one.
    pub fn add_target(&mut self, target: Target) {
        if let Some(targets) = self.targets_mut() {
            targets.push(target);
        }
    }

    /// Replaces the first query with the same reference id, or appends.
    pub fn set_target(&mut self, target: Target) {
        let Some(targets) = self.targets_mut() else {
            return;
        };
        match targets.iter_mut().find(|t| t.ref_id == target.ref_id) {
            Some(existing) => *existing = target,
            None => targets.push(target),
        }
    }

    /// Replaces the queries with one copy of each query per datasource.
    ///
    /// Copies are ordered by query, then by datasource, and renumbered
    /// starting at `A`.
    pub fn repeat_datasources_for_each_target<S: AsRef<str>>(&mut self, names: &[S]) {
        let Some(targets) = self.targets_mut() else {
            return;
        };
        let originals = std::mem::take(targets);
        targets.reserve(originals.len() * names.len());
        let mut ref_id = "A".to_string();
        for target in &originals {
            for name in names {
                let next = next_ref_id(&ref_id);
                let mut repeated = target.clone();
                repeated.ref_id = std::mem::replace(&mut ref_id, next);
                repeated.datasource = Some(DatasourceRef::from(name.as_ref()));
                targets.push(repeated);
            }
        }
    }

    /// Points the existing queries at the given datasources, one each.
    ///
    /// Existing queries are updated in place by position. When there are
    /// more datasources than queries, the query at `index % count` is copied
    /// with the next reference id. Does nothing for a panel without queries.
    pub fn repeat_targets_for_datasources<S: AsRef<str>>(&mut self, names: &[S]) {
        let Some(targets) = self.targets_mut() else {
            return;
        };
        let existing = targets.len();
        if existing == 0 {
            return;
        }
        let mut last_ref_id = String::new();
        for (index, name) in names.iter().enumerate() {
            let datasource = DatasourceRef::from(name.as_ref());
            if index < existing {
                let target = &mut targets[index];
                target.datasource = Some(datasource);
                last_ref_id.clone_from(&target.ref_id);
            } else {
                let mut repeated = targets[index % existing].clone();
                last_ref_id = next_ref_id(&last_ref_id);
                repeated.ref_id.clone_from(&last_ref_id);
                repeated.datasource = Some(datasource);
                targets.push(repeated);
            }
        }
    }

    /// Decode a panel from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] for invalid JSON and
    /// [`Error::FieldTypeMismatch`] when a modeled field has the wrong shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = parse_document(bytes).map_err(|e| Error::MalformedDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode a panel from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldTypeMismatch`] when a modeled field has the
    /// wrong shape.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::decode_value(value).map_err(|msg| into_error(&msg))
    }

    /// Encode the panel as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::EncodeFailure(e.to_string()))
    }

    /// Encode the panel as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| Error::EncodeFailure(e.to_string()))
    }

    pub(crate) fn decode_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Object(raw) => Self::decode_map(raw),
            other => Err(Map::<String, Value>::deserialize(other)
                .err()
                .map_or_else(|| "expected a panel object".to_string(), |e| e.to_string())),
        }
    }

    fn decode_map(raw: Map<String, Value>) -> std::result::Result<Self, String> {
        let raw = Value::Object(raw);
        let Extended {
            inner: mut common,
            extra: mut remainder,
        } = decode_object::<Extended<CommonPanel>>(&raw)?;
        if let Value::Object(raw) = raw {
            common
                .keep_elided(raw, &remainder)
                .map_err(|e| e.to_string())?;
        }

        let panel_type = match remainder.remove(TYPE_KEY) {
            None | Some(Value::Null) => String::new(),
            Some(value) => String::deserialize(value).map_err(|e| nest(TYPE_KEY, &e.to_string()))?,
        };
        trace!(panel_type = %panel_type, id = common.id, "decoding panel case");

        let (kind, extra) = match panel_type.as_str() {
            GRAPH_TYPE => decode_case(remainder, PanelKind::Graph)?,
            TABLE_TYPE => decode_case(remainder, PanelKind::Table)?,
            TEXT_TYPE => decode_case(remainder, PanelKind::Text)?,
            SINGLESTAT_TYPE => decode_case(remainder, PanelKind::Singlestat)?,
            DASHLIST_TYPE => decode_case(remainder, PanelKind::Dashlist)?,
            PLUGINLIST_TYPE => decode_case(remainder, PanelKind::Pluginlist)?,
            ALERTLIST_TYPE => decode_case(remainder, PanelKind::Alertlist)?,
            ROW_TYPE => decode_case(remainder, PanelKind::Row)?,
            _ => {
                debug!(
                    panel_type = %panel_type,
                    id = common.id,
                    "unknown panel type, keeping raw fields"
                );
                let custom = CustomPanel {
                    type_name: panel_type,
                    fields: remainder,
                };
                (PanelKind::Custom(custom), ExtensionBag::new())
            }
        };

        Ok(Self {
            common,
            kind,
            extra,
        })
    }

    fn encoded<'a, T: Serialize>(
        &'a self,
        common: Map<String, Value>,
        case: &'a T,
    ) -> Encoded<'a, T> {
        Encoded {
            common,
            panel_type: self.panel_type(),
            case,
            extra: &self.extra,
        }
    }
}

fn decode_case<T, F>(
    remainder: ExtensionBag,
    wrap: F,
) -> std::result::Result<(PanelKind, ExtensionBag), String>
where
    T: DeserializeOwned,
    F: FnOnce(T) -> PanelKind,
{
    let Extended { inner, extra } =
        decode_object::<Extended<T>>(&Value::Object(remainder.into_map()))?;
    Ok((wrap(inner), extra))
}

#[derive(Serialize)]
struct Encoded<'a, T: Serialize> {
    #[serde(flatten)]
    common: Map<String, Value>,
    #[serde(rename = "type")]
    panel_type: &'a str,
    #[serde(flatten)]
    case: &'a T,
    #[serde(flatten)]
    extra: &'a ExtensionBag,
}

impl Serialize for Panel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let common = self.common.encode_map().map_err(ser::Error::custom)?;
        match &self.kind {
            PanelKind::Graph(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Table(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Text(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Singlestat(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Dashlist(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Pluginlist(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Alertlist(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Row(case) => self.encoded(common, case).serialize(serializer),
            PanelKind::Custom(case) => self.encoded(common, &case.fields).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Panel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode_value(value).map_err(de::Error::custom)
    }
}
