//! The dashboard document.
//!
//! A board holds either the flat `panels` list (Grafana 5 and later, with
//! `row` pseudo-panels) or the legacy `rows` list. Decoding fills whichever
//! the document uses and never converts between them.

use crate::decode::{
    decode_object, into_error, is_false, located_vec, null_as_default, panel_vec, parse_document,
};
use crate::extension::ExtensionBag;
use crate::panel::{Link, Panel, PanelKind};
use crate::row::{Row, RowEditor};
use crate::scalar::{BoolString, FloatOrString};
use crate::templating::{Annotations, Templating, Time, Timepicker};
use crate::Result;
use grafana_core::Error;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use tracing::debug;

const DEFAULT_ROW_TITLE: &str = "New row";
const DEFAULT_ROW_HEIGHT: &str = "250px";

/// A Grafana dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    /// Numeric id, assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Stable identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// URL slug (old versions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Title
    pub title: String,

    /// Title before the last rename (old versions)
    #[serde(rename = "originalTitle", skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,

    /// Tags
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// `dark` or `light`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    /// `browser`, `utc` or a zone name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,

    /// Board is editable
    pub editable: bool,

    /// Hide the controls row
    #[serde(rename = "hideControls", skip_serializing_if = "is_false")]
    pub hide_controls: bool,

    /// Shared crosshair (before 4.x)
    #[serde(rename = "sharedCrosshair", skip_serializing_if = "is_false")]
    pub shared_crosshair: bool,

    /// 0 default, 1 shared crosshair, 2 shared tooltip
    #[serde(rename = "graphTooltip", skip_serializing_if = "Option::is_none")]
    pub graph_tooltip: Option<i64>,

    /// Flat panel list (5.x and later)
    #[serde(deserialize_with = "panel_vec", skip_serializing_if = "Vec::is_empty")]
    pub panels: Vec<Panel>,

    /// Rows (before 5.x)
    #[serde(deserialize_with = "located_vec", skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,

    /// Template variables
    pub templating: Templating,

    /// Annotation queries
    pub annotations: Annotations,

    /// Auto refresh interval, or `false`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<BoolString>,

    /// Dashboard schema version
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,

    /// Save counter
    pub version: u32,

    /// Dashboard links
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,

    /// Default time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,

    /// Time picker settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timepicker: Option<Timepicker>,

    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

impl Board {
    /// Decode a board from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] for invalid JSON and
    /// [`Error::FieldTypeMismatch`] naming the first field with an
    /// unsupported shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = parse_document(bytes).map_err(|e| Error::MalformedDocument(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode a board from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldTypeMismatch`] naming the first field with an
    /// unsupported shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        let board: Self = decode_object(value).map_err(|msg| into_error(&msg))?;
        debug!(
            uid = board.uid.as_deref().unwrap_or_default(),
            panels = board.panels.len(),
            rows = board.rows.len(),
            "decoded board"
        );
        Ok(board)
    }

    /// Encode the board as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::EncodeFailure(e.to_string()))
    }

    /// Encode the board as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| Error::EncodeFailure(e.to_string()))
    }

    /// Returns true if the board uses the legacy rows schema.
    #[must_use]
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Adds tags not already present, keeping their order.
    pub fn add_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            let tag = tag.as_ref();
            if !self.has_tag(tag) {
                self.tags.push(tag.to_string());
            }
        }
    }

    /// Removes the first occurrence of each tag.
    ///
    /// A removed tag is swapped with the last one before truncating, so the
    /// remaining tags may change order.
    pub fn remove_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            if let Some(index) = self.tags.iter().position(|t| t == tag.as_ref()) {
                self.tags.swap_remove(index);
            }
        }
    }

    /// Returns true if the board carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Highest panel id in use, including panels inside rows.
    #[must_use]
    pub fn max_panel_id(&self) -> u32 {
        fn max_in(panels: &[Panel]) -> u32 {
            panels
                .iter()
                .map(|panel| match &panel.kind {
                    PanelKind::Row(row) => panel.common.id.max(max_in(&row.panels)),
                    _ => panel.common.id,
                })
                .max()
                .unwrap_or(0)
        }

        let in_rows = self.rows.iter().map(|row| max_in(&row.panels)).max().unwrap_or(0);
        max_in(&self.panels).max(in_rows)
    }

    /// Id the next added panel receives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when a panel already holds the
    /// largest possible id.
    pub fn next_panel_id(&self) -> Result<u32> {
        id_after(self.max_panel_id())
    }

    /// Appends a panel to the flat list and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Same as [`Board::next_panel_id`]; the board is left unchanged.
    pub fn add_panel(&mut self, mut panel: Panel) -> Result<u32> {
        let id = self.next_panel_id()?;
        panel.common.id = id;
        self.panels.push(panel);
        Ok(id)
    }

    /// Appends a legacy row and returns an editor for it.
    pub fn add_row(&mut self, title: impl Into<String>) -> RowEditor<'_> {
        let title = title.into();
        let last_panel_id = self.max_panel_id();
        self.rows.push(Row {
            title: if title.is_empty() {
                DEFAULT_ROW_TITLE.to_string()
            } else {
                title
            },
            editable: true,
            height: Some(FloatOrString::from(DEFAULT_ROW_HEIGHT)),
            ..Row::default()
        });
        let index = self.rows.len() - 1;
        RowEditor::new(&mut self.rows[index], last_panel_id)
    }

    /// Editor for an existing legacy row.
    pub fn row_mut(&mut self, index: usize) -> Option<RowEditor<'_>> {
        let last_panel_id = self.max_panel_id();
        self.rows
            .get_mut(index)
            .map(|row| RowEditor::new(row, last_panel_id))
    }

    /// Recomputes the slug from the title and returns it.
    pub fn update_slug(&mut self) -> &str {
        self.slug.insert(slugify(&self.title))
    }
}

/// Lowercases `title` and joins its ASCII alphanumeric runs with `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Creates boards with sequential ids.
///
/// Each factory owns its counter; share one behind a lock if several threads
/// build boards.
#[derive(Debug, Clone, Default)]
pub struct BoardFactory {
    last_board_id: u64,
}

impl BoardFactory {
    /// Factory whose first board gets id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_board_id: 0 }
    }

    /// Factory whose first board gets `last_board_id + 1`.
    #[must_use]
    pub const fn starting_after(last_board_id: u64) -> Self {
        Self { last_board_id }
    }

    /// New empty, editable board with a dark style and browser timezone.
    pub fn new_board(&mut self, title: impl Into<String>) -> Board {
        self.last_board_id += 1;
        Board {
            id: Some(self.last_board_id),
            title: title.into(),
            style: "dark".to_string(),
            timezone: "browser".to_string(),
            editable: true,
            ..Board::default()
        }
    }
}

/// The panel id following `last`.
pub(crate) fn id_after(last: u32) -> Result<u32> {
    last.checked_add(1)
        .ok_or_else(|| Error::InvalidRequest(format!("no panel id left after {last}")))
}

/// An undecoded dashboard document.
///
/// Forwarded byte for byte, for documents the model should not touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBoard(Box<RawValue>);

impl RawBoard {
    /// Wrap JSON bytes after checking they are valid JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] for invalid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut json = serde_json::Deserializer::from_slice(bytes);
        json.disable_recursion_limit();
        Box::<RawValue>::deserialize(&mut json)
            .and_then(|raw| json.end().map(|()| Self(raw)))
            .map_err(|e| Error::MalformedDocument(e.to_string()))
    }

    /// Capture the encoding of a decoded board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if serialization fails.
    pub fn from_board(board: &Board) -> Result<Self> {
        serde_json::value::to_raw_value(board)
            .map(Self)
            .map_err(|e| Error::EncodeFailure(e.to_string()))
    }

    /// The JSON text.
    #[must_use]
    pub fn get(&self) -> &str {
        self.0.get()
    }

    /// Decode into a [`Board`].
    ///
    /// # Errors
    ///
    /// Same as [`Board::from_slice`].
    pub fn decode(&self) -> Result<Board> {
        Board::from_slice(self.get().as_bytes())
    }
}
