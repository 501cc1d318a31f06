//! Human-readable reports: the line-by-line audit trail and the
//! header-usage cross-reference.

use std::collections::BTreeMap;

use regex::Regex;

use crate::model::{AuditEntry, ParagraphRecord, StyleId};
use crate::package::HeaderSource;

/// Render the audit trail as a line-by-line report.
///
/// One block per input line, in original order, blanks included.
pub fn audit_report(audit: &[AuditEntry]) -> String {
    let mut out = String::from("# Conversion Audit\n\n");
    for entry in audit {
        out.push_str(&format!("line {}: {}", entry.line_no, entry.element.label()));
        if let Some(marker) = &entry.marker {
            out.push_str(&format!(" marker='{marker}'"));
        }
        match (entry.char_style, entry.para_style) {
            (Some(c), Some(p)) => out.push_str(&format!(" char={c} para={p}")),
            _ => out.push_str(" (no styles)"),
        }
        out.push('\n');
        for note in &entry.notes {
            out.push_str(&format!("  note: {note}\n"));
        }
        for warning in &entry.warnings {
            out.push_str(&format!("  warning: {warning}\n"));
        }
    }

    let warnings: usize = audit.iter().map(|e| e.warnings.len()).sum();
    out.push_str(&format!(
        "\n{} lines, {} warnings\n",
        audit.len(),
        warnings
    ));
    out
}

/// Cross-reference the style ids the conversion actually uses against
/// the ids the active header defines.
///
/// In template mode the defined sets are recovered by scanning the
/// header bytes for id attributes; the template is otherwise opaque.
pub fn header_report(records: &[ParagraphRecord], header: &HeaderSource) -> String {
    let mut char_use: BTreeMap<StyleId, usize> = BTreeMap::new();
    let mut para_use: BTreeMap<StyleId, usize> = BTreeMap::new();
    for record in records {
        *para_use.entry(record.para_style).or_insert(0) += 1;
        for run in &record.runs {
            *char_use.entry(run.char_style).or_insert(0) += 1;
        }
    }

    let (defined_chars, defined_paras) = match header {
        HeaderSource::Synthesized(catalog) => (
            catalog.char_styles.iter().map(|s| s.id).collect::<Vec<_>>(),
            catalog.para_styles.iter().map(|s| s.id).collect::<Vec<_>>(),
        ),
        HeaderSource::Template(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            (
                scan_ids(&text, r#"charPr[^>]*\bid="(\d+)""#),
                scan_ids(&text, r#"paraPr[^>]*\bid="(\d+)""#),
            )
        }
    };

    let mut out = String::from("# Header Usage Report\n\n## Character styles\n");
    for (id, count) in &char_use {
        let status = if defined_chars.contains(id) {
            "defined"
        } else {
            "UNDEFINED"
        };
        out.push_str(&format!("- id {id}: {status}, used in {count} runs\n"));
    }

    out.push_str("\n## Paragraph styles\n");
    for (id, count) in &para_use {
        let status = if defined_paras.contains(id) {
            "defined"
        } else {
            "UNDEFINED"
        };
        out.push_str(&format!("- id {id}: {status}, used in {count} paragraphs\n"));
    }

    let unused_chars: Vec<StyleId> = defined_chars
        .iter()
        .filter(|id| !char_use.contains_key(id))
        .copied()
        .collect();
    let unused_paras: Vec<StyleId> = defined_paras
        .iter()
        .filter(|id| !para_use.contains_key(id))
        .copied()
        .collect();

    out.push_str("\n## Defined but unused\n");
    out.push_str(&format!(
        "- character: {}\n- paragraph: {}\n",
        format_ids(&unused_chars),
        format_ids(&unused_paras)
    ));
    out
}

fn scan_ids(text: &str, pattern: &str) -> Vec<StyleId> {
    let re = Regex::new(pattern).unwrap();
    let mut ids: Vec<StyleId> = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn format_ids(ids: &[StyleId]) -> String {
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
