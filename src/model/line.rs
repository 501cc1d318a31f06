//! Output of the line classifier.

use serde::Serialize;

use super::ElementType;

/// One raw input line after classification.
///
/// Immutable once produced. `text` is the visible text with the marker
/// stripped, normalized, or re-prefixed according to the rule that
/// matched; `marker` is the originating marker token, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedLine {
    /// 1-based source line number
    pub line_no: usize,

    /// Element classification
    pub element: ElementType,

    /// Visible text (marker handling already applied)
    pub text: String,

    /// Marker token that triggered the classification
    pub marker: Option<String>,

    /// Informational notes (marker normalization, glyph substitution)
    pub notes: Vec<String>,

    /// Non-fatal warnings (e.g. unsupported constructs)
    pub warnings: Vec<String>,
}

impl ClassifiedLine {
    /// Create a classified line with no marker and no diagnostics.
    pub fn new(line_no: usize, element: ElementType, text: impl Into<String>) -> Self {
        Self {
            line_no,
            element,
            text: text.into(),
            marker: None,
            notes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Attach the originating marker token.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Attach an informational note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a non-fatal warning.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}
