//! Paragraph records and styled runs.

use serde::Serialize;

use super::{ElementType, StyleId};

/// Emphasis requested for a run.
///
/// The three faces are mutually exclusive: code wins over bold, bold
/// over italic. A run therefore carries one variant, never flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunEmphasis {
    /// No inline formatting
    #[default]
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
}

/// A contiguous span of text sharing one resolved character style.
///
/// An ordered sequence of runs forms one paragraph's content;
/// concatenating the `text` fields reproduces the classifier-stripped
/// visible text of the source line.
#[derive(Debug, Clone, Serialize)]
pub struct StyledRun {
    /// The text fragment
    pub text: String,

    /// Requested emphasis
    pub emphasis: RunEmphasis,

    /// Resolved character style id
    pub char_style: StyleId,
}

impl StyledRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>, char_style: StyleId) -> Self {
        Self {
            text: text.into(),
            emphasis: RunEmphasis::Plain,
            char_style,
        }
    }

    /// Create a run with the given emphasis.
    pub fn styled(text: impl Into<String>, emphasis: RunEmphasis, char_style: StyleId) -> Self {
        Self {
            text: text.into(),
            emphasis,
            char_style,
        }
    }

    /// Check if this run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One body paragraph: element classification, resolved paragraph
/// style, and the ordered runs that make up its content.
///
/// Built by the assembler, consumed exactly once by the package writer.
/// Blank input lines never produce a record.
#[derive(Debug, Clone, Serialize)]
pub struct ParagraphRecord {
    /// Element classification of the source line
    pub element: ElementType,

    /// Resolved paragraph style id
    pub para_style: StyleId,

    /// Ordered styled runs
    pub runs: Vec<StyledRun>,
}

impl ParagraphRecord {
    /// Create a new paragraph record.
    pub fn new(element: ElementType, para_style: StyleId, runs: Vec<StyledRun>) -> Self {
        Self {
            element,
            para_style,
            runs,
        }
    }

    /// Concatenated text of all runs, delimiters already consumed.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
