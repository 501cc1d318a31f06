//! Document assembly: drives classification, run splitting, and style
//! resolution over a whole input document.

use std::path::PathBuf;

use crate::model::{AuditEntry, ParagraphRecord, StyleId};
use crate::package::PackagingMode;
use crate::parser::{LineClassifier, RunSplitter, RunStyleIds};
use crate::rulebook::Rulebook;

/// Warning recorded when an element falls back to the plain-paragraph
/// binding because the rulebook carries no binding for it.
pub const WARN_STYLE_FALLBACK: &str = "style-fallback-paragraph";

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// External style catalog JSON path (built-in catalog when absent)
    pub styles_path: Option<PathBuf>,

    /// External style description path
    pub style_guide_path: Option<PathBuf>,

    /// Template container whose style header is reused verbatim
    pub template_path: Option<PathBuf>,

    /// Shape of the content descriptor part
    pub packaging: PackagingMode,

    /// Force all text onto one named font face
    pub force_font: Option<String>,
}

impl ConvertOptions {
    /// Create default conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an external style catalog.
    pub fn with_styles(mut self, path: impl Into<PathBuf>) -> Self {
        self.styles_path = Some(path.into());
        self
    }

    /// Use an external style description.
    pub fn with_style_guide(mut self, path: impl Into<PathBuf>) -> Self {
        self.style_guide_path = Some(path.into());
        self
    }

    /// Reuse the style header of an existing container.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Select the content-descriptor packaging mode.
    pub fn with_packaging(mut self, mode: PackagingMode) -> Self {
        self.packaging = mode;
        self
    }

    /// Force one font face for all text.
    pub fn with_font(mut self, face: impl Into<String>) -> Self {
        self.force_font = Some(face.into());
        self
    }
}

/// Result of assembling one document.
///
/// `audit` always has exactly one entry per input line, blanks
/// included; `records` omits blanks. The asymmetry is intentional:
/// the audit trail is the complete line-indexed record, the body must
/// not contain empty paragraph elements.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Ordered body paragraphs
    pub records: Vec<ParagraphRecord>,

    /// Ordered per-line audit trail
    pub audit: Vec<AuditEntry>,
}

impl Conversion {
    /// Number of emitted body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.records.len()
    }

    /// Number of input lines (audit entries).
    pub fn line_count(&self) -> usize {
        self.audit.len()
    }

    /// Total warnings accumulated across all lines.
    pub fn warning_count(&self) -> usize {
        self.audit.iter().map(|e| e.warnings.len()).sum()
    }
}

/// Converts document text into paragraph records plus an audit trail.
pub struct Assembler {
    rulebook: Rulebook,
    classifier: LineClassifier,
    splitter: RunSplitter,
}

impl Assembler {
    /// Create an assembler over a loaded rulebook.
    pub fn new(rulebook: Rulebook) -> Self {
        Self {
            rulebook,
            classifier: LineClassifier::new(),
            splitter: RunSplitter::new(),
        }
    }

    /// The rulebook this assembler resolves styles against.
    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    /// Convert a whole document.
    ///
    /// Per-line anomalies never abort the conversion; they accumulate
    /// as warnings on the affected line's audit entry.
    pub fn convert(&self, text: &str) -> Conversion {
        let mut records = Vec::new();
        let mut audit = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let mut line = self.classifier.classify(idx + 1, raw);

            if line.element.is_blank() {
                audit.push(AuditEntry::blank(line.line_no, raw));
                continue;
            }

            let binding = match self.rulebook.resolve(line.element) {
                Some(binding) => binding,
                None => {
                    line.warnings.push(WARN_STYLE_FALLBACK.to_string());
                    self.rulebook.fallback()
                }
            };

            let runs = self.splitter.split(
                &line.text,
                &RunStyleIds {
                    base: binding.char_style,
                    bold: binding.bold_style,
                    italic: binding.italic_style,
                    code: self.rulebook.code_style(),
                },
            );

            audit.push(AuditEntry::resolved(
                &line,
                raw,
                binding.char_style,
                binding.para_style,
            ));
            records.push(ParagraphRecord::new(
                line.element,
                binding.para_style,
                runs,
            ));
        }

        log::debug!(
            "assembled {} paragraphs from {} lines",
            records.len(),
            audit.len()
        );

        Conversion { records, audit }
    }
}

/// Collect the distinct character style ids referenced by any run.
pub fn used_char_styles(records: &[ParagraphRecord]) -> Vec<StyleId> {
    let mut ids: Vec<StyleId> = records
        .iter()
        .flat_map(|r| r.runs.iter().map(|run| run.char_style))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Collect the distinct paragraph style ids referenced by any record.
pub fn used_para_styles(records: &[ParagraphRecord]) -> Vec<StyleId> {
    let mut ids: Vec<StyleId> = records.iter().map(|r| r.para_style).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
