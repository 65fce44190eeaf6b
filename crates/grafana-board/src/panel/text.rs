//! The `text` panel.

use serde::{Deserialize, Serialize};

/// Static markdown, HTML or text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPanel {
    /// Panel body
    pub content: String,
    /// `markdown`, `html` or `text`
    pub mode: String,
}
