//! Rows of the legacy rows schema (before Grafana 5).

use crate::board::id_after;
use crate::decode::panel_vec;
use crate::extension::ExtensionBag;
use crate::panel::{
    CustomPanel, DashlistPanel, GraphPanel, Panel, PanelKind, SinglestatPanel, TablePanel,
    TextPanel,
};
use crate::scalar::FloatOrString;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A row holding its own panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    /// Row title
    pub title: String,
    /// Show the title
    #[serde(rename = "showTitle")]
    pub show_title: bool,
    /// Collapsed state
    pub collapse: bool,
    /// Row is editable
    pub editable: bool,
    /// Height, as pixels or a CSS string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<FloatOrString>,
    /// Panels of the row
    #[serde(deserialize_with = "panel_vec")]
    pub panels: Vec<Panel>,
    /// Template variable to repeat the row for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Adds panels to a row, numbering them after the board's highest panel id.
///
/// Obtained from [`Board::add_row`](crate::Board::add_row) or
/// [`Board::row_mut`](crate::Board::row_mut).
#[derive(Debug)]
pub struct RowEditor<'a> {
    row: &'a mut Row,
    last_panel_id: u32,
}

impl<'a> RowEditor<'a> {
    pub(crate) fn new(row: &'a mut Row, last_panel_id: u32) -> Self {
        Self { row, last_panel_id }
    }

    /// The row being edited.
    #[must_use]
    pub fn row(&mut self) -> &mut Row {
        &mut *self.row
    }

    /// Appends a panel and returns the id assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`](grafana_core::Error::InvalidRequest)
    /// when panel ids are exhausted; the row is left unchanged.
    pub fn add(&mut self, mut panel: Panel) -> Result<u32> {
        let id = id_after(self.last_panel_id)?;
        panel.common.id = id;
        self.row.panels.push(panel);
        self.last_panel_id = id;
        Ok(id)
    }

    fn add_kind(&mut self, mut panel: Panel, kind: PanelKind) -> Result<u32> {
        panel.kind = kind;
        self.add(panel)
    }

    /// Appends a graph panel built from `data`.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_graph(&mut self, data: GraphPanel) -> Result<u32> {
        self.add_kind(Panel::graph(""), PanelKind::Graph(data))
    }

    /// Appends a table panel built from `data`.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_table(&mut self, data: TablePanel) -> Result<u32> {
        self.add_kind(Panel::table(""), PanelKind::Table(data))
    }

    /// Appends a text panel built from `data`.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_text(&mut self, data: TextPanel) -> Result<u32> {
        self.add_kind(Panel::text(""), PanelKind::Text(data))
    }

    /// Appends a singlestat panel built from `data`.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_singlestat(&mut self, data: SinglestatPanel) -> Result<u32> {
        self.add_kind(Panel::singlestat(""), PanelKind::Singlestat(data))
    }

    /// Appends a dashboard list panel built from `data`.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_dashlist(&mut self, data: DashlistPanel) -> Result<u32> {
        self.add_kind(Panel::dashlist(""), PanelKind::Dashlist(data))
    }

    /// Appends a panel of an unmodeled type.
    ///
    /// # Errors
    ///
    /// Same as [`RowEditor::add`].
    pub fn add_custom(&mut self, data: CustomPanel) -> Result<u32> {
        self.add_kind(Panel::custom("", ""), PanelKind::Custom(data))
    }
}
