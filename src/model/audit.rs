//! Per-line audit trail.

use serde::Serialize;

use super::{ClassifiedLine, ElementType, StyleId};

/// Diagnostic record for one input line.
///
/// Exactly one entry exists per input line, blanks included, in original
/// line order. The audit trail is deliberately more complete than the
/// emitted document body: blank lines appear here with null style ids
/// but produce no paragraph element.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// 1-based source line number
    pub line_no: usize,

    /// Element classification
    pub element: ElementType,

    /// Original raw line text
    pub text: String,

    /// Marker token that triggered the classification
    pub marker: Option<String>,

    /// Resolved character style id (None for blanks)
    pub char_style: Option<StyleId>,

    /// Resolved paragraph style id (None for blanks)
    pub para_style: Option<StyleId>,

    /// Informational notes
    pub notes: Vec<String>,

    /// Non-fatal warnings (unsupported constructs, style fallbacks)
    pub warnings: Vec<String>,
}

impl AuditEntry {
    /// Entry for a blank line: no styles resolved.
    pub fn blank(line_no: usize, raw: &str) -> Self {
        Self {
            line_no,
            element: ElementType::Blank,
            text: raw.to_string(),
            marker: None,
            char_style: None,
            para_style: None,
            notes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Entry for a classified, style-resolved line.
    pub fn resolved(
        line: &ClassifiedLine,
        raw: &str,
        char_style: StyleId,
        para_style: StyleId,
    ) -> Self {
        Self {
            line_no: line.line_no,
            element: line.element,
            text: raw.to_string(),
            marker: line.marker.clone(),
            char_style: Some(char_style),
            para_style: Some(para_style),
            notes: line.notes.clone(),
            warnings: line.warnings.clone(),
        }
    }

    /// Check whether this entry carries any warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entry_has_no_styles() {
        let entry = AuditEntry::blank(4, "   ");
        assert_eq!(entry.element, ElementType::Blank);
        assert_eq!(entry.char_style, None);
        assert_eq!(entry.para_style, None);
        assert_eq!(entry.text, "   ");
    }

    #[test]
    fn test_resolved_entry_copies_diagnostics() {
        let line = ClassifiedLine::new(7, ElementType::Table, "| a | b |")
            .with_warning("table rendering unsupported");
        let entry = AuditEntry::resolved(&line, "| a | b |", 18, 25);

        assert_eq!(entry.line_no, 7);
        assert!(entry.has_warnings());
        assert_eq!(entry.char_style, Some(18));
    }
}
