//! Line classification for the report-dialect Markdown input.
//!
//! The classifier is deterministic and stateless: it examines one line
//! at a time with no lookback or lookahead. Patterns are checked in a
//! fixed precedence order; reordering them changes output, so the order
//! below is a contract, not an implementation detail.

mod inline;

pub use inline::{RunSplitter, RunStyleIds};

use regex::Regex;

use crate::model::{ClassifiedLine, ElementType};

/// Warning text recorded on detected-but-unsupported table rows.
pub const WARN_TABLE_UNSUPPORTED: &str = "table rendering unsupported";

/// Visible glyph substituted for the `<강조>` marker.
const EMPHASIS_GLYPH: &str = "※";

/// Classifies raw input lines into document elements.
pub struct LineClassifier {
    ordered_re: Regex,
}

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            ordered_re: Regex::new(r"^\d+\. ").unwrap(),
        }
    }

    /// Classify one raw line.
    ///
    /// Precedence, first match wins:
    /// 1. blank, 2. `<주제목>`, 3. `□ `, 4. `◦ `, 5. 3-space `- `,
    /// 6. 4-space `* `, 7. `<강조>`, 8. `|…|` table row, 9. headings
    /// (`###` before `##` before `#`), 10. list markers (longest indent
    /// first), 11. plain paragraph.
    pub fn classify(&self, line_no: usize, raw: &str) -> ClassifiedLine {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            return ClassifiedLine::new(line_no, ElementType::Blank, "");
        }

        if let Some(rest) = line.strip_prefix("<주제목>") {
            return ClassifiedLine::new(line_no, ElementType::MainTitle, rest.trim())
                .with_marker("<주제목>")
                .with_note("main-title marker stripped");
        }

        if let Some(rest) = line.strip_prefix("□ ") {
            return ClassifiedLine::new(line_no, ElementType::SubTitle, format!("□ {rest}"))
                .with_marker("□")
                .with_note("sub-title marker retained");
        }

        if let Some(rest) = line.trim_start().strip_prefix("◦ ") {
            return ClassifiedLine::new(line_no, ElementType::BodyBullet, format!("◦ {rest}"))
                .with_marker("◦")
                .with_note("body-bullet marker retained");
        }

        // Exactly three spaces: a fourth space fails the prefix match
        // and the line falls through to the list rules below.
        if let Some(rest) = line.strip_prefix("   - ") {
            return ClassifiedLine::new(line_no, ElementType::DashDescription, format!("   - {rest}"))
                .with_marker("-")
                .with_note("dash-description indent normalized");
        }

        if let Some(rest) = line.strip_prefix("    * ") {
            return ClassifiedLine::new(line_no, ElementType::StarDescription, format!("    * {rest}"))
                .with_marker("*")
                .with_note("star-description indent normalized");
        }

        if let Some(rest) = line.strip_prefix("<강조>") {
            return ClassifiedLine::new(
                line_no,
                ElementType::Emphasis,
                format!("{EMPHASIS_GLYPH} {}", rest.trim()),
            )
            .with_marker("<강조>")
            .with_note(format!("emphasis marker replaced with {EMPHASIS_GLYPH}"));
        }

        let trimmed = line.trim();
        if trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|') {
            return ClassifiedLine::new(line_no, ElementType::Table, line)
                .with_marker("|")
                .with_warning(WARN_TABLE_UNSUPPORTED);
        }

        if let Some(rest) = line.strip_prefix("### ") {
            return ClassifiedLine::new(line_no, ElementType::Heading3, rest).with_marker("###");
        }
        if let Some(rest) = line.strip_prefix("## ") {
            return ClassifiedLine::new(line_no, ElementType::Heading2, rest).with_marker("##");
        }
        if let Some(rest) = line.strip_prefix("# ") {
            return ClassifiedLine::new(line_no, ElementType::Heading1, rest).with_marker("#");
        }

        if let Some(rest) = line.strip_prefix("    - ") {
            return ClassifiedLine::new(line_no, ElementType::NestedList, rest).with_marker("-");
        }
        if let Some(rest) = line.strip_prefix("  - ") {
            return ClassifiedLine::new(line_no, ElementType::NestedList, rest).with_marker("-");
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return ClassifiedLine::new(line_no, ElementType::BulletList, rest).with_marker("-");
        }
        if let Some(m) = self.ordered_re.find(line) {
            return ClassifiedLine::new(line_no, ElementType::OrderedList, &line[m.end()..])
                .with_marker(line[..m.end()].trim_end());
        }

        ClassifiedLine::new(line_no, ElementType::Paragraph, line)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> ClassifiedLine {
        LineClassifier::new().classify(1, raw)
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify("").element, ElementType::Blank);
        assert_eq!(classify("   \t ").element, ElementType::Blank);
    }

    #[test]
    fn test_main_title_strips_marker() {
        let line = classify("<주제목>2025년 업무 계획");
        assert_eq!(line.element, ElementType::MainTitle);
        assert_eq!(line.text, "2025년 업무 계획");
        assert_eq!(line.marker.as_deref(), Some("<주제목>"));
    }

    #[test]
    fn test_sub_title_retains_marker() {
        let line = classify("□ 추진 배경");
        assert_eq!(line.element, ElementType::SubTitle);
        assert_eq!(line.text, "□ 추진 배경");
    }

    #[test]
    fn test_body_bullet_allows_leading_whitespace() {
        let line = classify("  ◦ 세부 내용");
        assert_eq!(line.element, ElementType::BodyBullet);
        assert_eq!(line.text, "◦ 세부 내용");
    }

    #[test]
    fn test_dash_description_needs_exactly_three_spaces() {
        assert_eq!(classify("   - 설명").element, ElementType::DashDescription);
        assert_eq!(classify("   - 설명").text, "   - 설명");
        // Four spaces is a nested list, not a description.
        assert_eq!(classify("    - 항목").element, ElementType::NestedList);
    }

    #[test]
    fn test_star_description_needs_exactly_four_spaces() {
        assert_eq!(classify("    * 근거").element, ElementType::StarDescription);
        assert_eq!(classify("     * 근거").element, ElementType::Paragraph);
    }

    #[test]
    fn test_emphasis_substitutes_glyph() {
        let line = classify("<강조>기한 엄수");
        assert_eq!(line.element, ElementType::Emphasis);
        assert_eq!(line.text, "※ 기한 엄수");
    }

    #[test]
    fn test_table_row_warns() {
        let line = classify("| 구분 | 내용 |");
        assert_eq!(line.element, ElementType::Table);
        assert_eq!(line.text, "| 구분 | 내용 |");
        assert_eq!(line.warnings, vec![WARN_TABLE_UNSUPPORTED.to_string()]);
    }

    #[test]
    fn test_heading_precedence_longest_first() {
        assert_eq!(classify("### 셋").element, ElementType::Heading3);
        assert_eq!(classify("## 둘").element, ElementType::Heading2);
        assert_eq!(classify("# 하나").element, ElementType::Heading1);
        // No space after the marker: plain paragraph.
        assert_eq!(classify("#hash").element, ElementType::Paragraph);
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(classify("- item").element, ElementType::BulletList);
        assert_eq!(classify("  - item").element, ElementType::NestedList);
        assert_eq!(classify("    - item").element, ElementType::NestedList);
        let line = classify("12. item");
        assert_eq!(line.element, ElementType::OrderedList);
        assert_eq!(line.text, "item");
        assert_eq!(line.marker.as_deref(), Some("12."));
    }

    #[test]
    fn test_total_coverage_falls_back_to_paragraph() {
        let line = classify("그냥 본문입니다.");
        assert_eq!(line.element, ElementType::Paragraph);
        assert_eq!(line.text, "그냥 본문입니다.");
        assert!(line.marker.is_none());
    }

    #[test]
    fn test_trailing_newline_stripped() {
        let line = classify("# 제목\n");
        assert_eq!(line.element, ElementType::Heading1);
        assert_eq!(line.text, "제목");
    }
}
