//! Line-level element classification.

use serde::{Deserialize, Serialize};

/// Classification of a single input line.
///
/// This is a closed set: every line of the input dialect maps to exactly
/// one variant, and anything that matches no marker is a [`Paragraph`].
/// The Markdown subset (headings, lists) and the report-dialect markers
/// (`<주제목>`, `□`, `◦`, indented `-`/`*`, `<강조>`) are both covered.
///
/// [`Paragraph`]: ElementType::Paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    /// `# ` heading
    Heading1,
    /// `## ` heading
    Heading2,
    /// `### ` heading
    Heading3,
    /// Plain body paragraph (the catch-all)
    Paragraph,
    /// Top-level `- ` list item
    BulletList,
    /// Indented (2- or 4-space) `- ` list item
    NestedList,
    /// `1. ` numbered list item
    OrderedList,
    /// `<주제목>` document main title
    MainTitle,
    /// `□ ` section sub-title
    SubTitle,
    /// `◦ ` body bullet
    BodyBullet,
    /// 3-space-indented `- ` description line
    DashDescription,
    /// 4-space-indented `* ` description line
    StarDescription,
    /// `<강조>` emphasis callout
    Emphasis,
    /// Pipe-delimited table row (detected, never rendered)
    Table,
    /// Whitespace-only line
    Blank,
}

impl ElementType {
    /// Returns true for whitespace-only lines.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Stable name used in audit reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading1 => "heading-1",
            Self::Heading2 => "heading-2",
            Self::Heading3 => "heading-3",
            Self::Paragraph => "paragraph",
            Self::BulletList => "bullet-list",
            Self::NestedList => "nested-list",
            Self::OrderedList => "ordered-list",
            Self::MainTitle => "main-title",
            Self::SubTitle => "sub-title",
            Self::BodyBullet => "body-bullet",
            Self::DashDescription => "dash-description",
            Self::StarDescription => "star-description",
            Self::Emphasis => "emphasis",
            Self::Table => "table",
            Self::Blank => "blank",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(ElementType::Blank.is_blank());
        assert!(!ElementType::Paragraph.is_blank());
    }

    #[test]
    fn test_labels_are_kebab_case() {
        assert_eq!(ElementType::MainTitle.label(), "main-title");
        assert_eq!(ElementType::DashDescription.label(), "dash-description");
    }
}
