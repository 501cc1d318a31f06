//! # mdhwpx
//!
//! Converts report-style Markdown into HWPX (Hangul word processor)
//! documents.
//!
//! The input dialect is a constrained Markdown subset (headings, lists,
//! inline bold/italic/code) extended with Korean report markers
//! (`<주제목>`, `□`, `◦`, indented `-`/`*` descriptions, `<강조>`).
//! Each line is classified, split into styled runs, resolved against a
//! style rulebook, and packaged into the fixed set of cross-referencing
//! XML parts an HWPX container requires.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdhwpx::{convert_file, ConvertOptions};
//!
//! fn main() -> mdhwpx::Result<()> {
//!     let result = convert_file("report.md", "report.hwpx", &ConvertOptions::default())?;
//!     println!("{} paragraphs", result.paragraph_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rulebook-based styling**: built-in style catalog, external JSON
//!   catalogs, and a six-category style description format
//! - **Template reuse**: lift the style header of an existing HWPX
//!   byte-for-byte instead of synthesizing one
//! - **Audit trail**: one diagnostic entry per input line, blanks
//!   included, with per-line warnings that never abort a conversion
//! - **Two packaging modes**: direct-reference and indexed-package
//!   content descriptors

pub mod convert;
pub mod error;
pub mod model;
pub mod package;
pub mod parser;
pub mod report;
pub mod rulebook;

// Re-export commonly used types
pub use convert::{Assembler, Conversion, ConvertOptions, WARN_STYLE_FALLBACK};
pub use error::{Error, Result};
pub use model::{
    AuditEntry, ClassifiedLine, ElementType, ParagraphRecord, RunEmphasis, StyleId, StyledRun,
};
pub use package::{HeaderSource, PackagingMode};
pub use parser::{LineClassifier, RunSplitter};
pub use rulebook::{Rulebook, StyleBinding, StyleCatalog, StyleGuide};

use std::fs;
use std::path::Path;

/// Built-in sample document used by the self-test.
pub const SAMPLE_DOCUMENT: &str = "\
<주제목>2025년 업무 추진 계획

# 개요

이 문서는 **변환기**의 *자체 점검*용 `샘플`입니다.

□ 추진 배경
◦ 행정 문서 서식의 일관성 확보
   - 수작업 변환에서 생기는 오류를 줄인다
    * 세부 근거는 별도 보고서 참조
<강조>기한 내 제출 필수

## 주요 항목

- 첫 번째 항목
  - 중첩 항목
1. 순번 항목
2. 순번 항목

| 구분 | 내용 |

일반 단락도 포함되어 있습니다.
";

/// Result of one conversion: the assembled document, the active header
/// source, and the complete container bytes.
#[derive(Debug)]
pub struct ConvertResult {
    /// Paragraph records and audit trail
    pub conversion: Conversion,

    /// Header the container was written with
    pub header: HeaderSource,

    /// Complete container bytes
    pub bytes: Vec<u8>,
}

impl ConvertResult {
    /// Number of emitted body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.conversion.paragraph_count()
    }

    /// Number of input lines.
    pub fn line_count(&self) -> usize {
        self.conversion.line_count()
    }

    /// Total per-line warnings.
    pub fn warning_count(&self) -> usize {
        self.conversion.warning_count()
    }
}

/// Assemble document text without packaging it.
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<Conversion> {
    let rulebook = build_rulebook(options)?;
    Ok(Assembler::new(rulebook).convert(text))
}

/// Assemble and package document text into container bytes.
pub fn convert_to_bytes(text: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    let rulebook = build_rulebook(options)?;
    let conversion = Assembler::new(rulebook.clone()).convert(text);

    let header = match &options.template_path {
        Some(path) => HeaderSource::Template(package::extract_template_header(path)?),
        None => HeaderSource::Synthesized(rulebook.catalog().clone()),
    };

    let bytes = package::write(&conversion.records, &header, options.packaging)?;
    Ok(ConvertResult {
        conversion,
        header,
        bytes,
    })
}

/// Convert an input file and write the container to `output`.
///
/// The complete byte set is built in memory, written to a temporary
/// sibling path and renamed into place, so a failure mid-construction
/// never leaves a partially written container behind.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let input = input.as_ref();
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let text = fs::read_to_string(input)?;
    let result = convert_to_bytes(&text, options)?;

    let output = output.as_ref();
    let tmp = output.with_extension("hwpx.tmp");
    fs::write(&tmp, &result.bytes)?;
    fs::rename(&tmp, output)?;
    log::info!(
        "wrote {} ({} paragraphs, {} warnings)",
        output.display(),
        result.paragraph_count(),
        result.warning_count()
    );

    Ok(result)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use mdhwpx::{Mdhwpx, PackagingMode};
///
/// let result = Mdhwpx::new()
///     .with_font("바탕")
///     .with_packaging(PackagingMode::Indexed)
///     .convert_file("report.md", "report.hwpx")?;
/// # Ok::<(), mdhwpx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mdhwpx {
    options: ConvertOptions,
}

impl Mdhwpx {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an external style catalog JSON file.
    pub fn with_styles(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_styles(path);
        self
    }

    /// Use an external style description file.
    pub fn with_style_guide(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_style_guide(path);
        self
    }

    /// Reuse the style header of an existing container.
    pub fn with_template(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_template(path);
        self
    }

    /// Select the packaging mode.
    pub fn with_packaging(mut self, mode: PackagingMode) -> Self {
        self.options = self.options.with_packaging(mode);
        self
    }

    /// Force one font face for all text.
    pub fn with_font(mut self, face: impl Into<String>) -> Self {
        self.options = self.options.with_font(face);
        self
    }

    /// The accumulated options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Assemble document text without packaging.
    pub fn convert_str(&self, text: &str) -> Result<Conversion> {
        convert_str(text, &self.options)
    }

    /// Assemble and package document text.
    pub fn convert_to_bytes(&self, text: &str) -> Result<ConvertResult> {
        convert_to_bytes(text, &self.options)
    }

    /// Convert an input file to an output container.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConvertResult> {
        convert_file(input, output, &self.options)
    }
}

/// Convert the built-in sample document and verify the pipeline's
/// invariants, returning a short summary on success.
pub fn self_test() -> Result<String> {
    let options = ConvertOptions::default();
    let result = convert_to_bytes(SAMPLE_DOCUMENT, &options)?;
    let conversion = &result.conversion;

    let line_count = SAMPLE_DOCUMENT.lines().count();
    if conversion.line_count() != line_count {
        return Err(Error::Other(format!(
            "self-test: {} audit entries for {} input lines",
            conversion.line_count(),
            line_count
        )));
    }

    let blanks = conversion
        .audit
        .iter()
        .filter(|e| e.element.is_blank())
        .count();
    if conversion.paragraph_count() + blanks != line_count {
        return Err(Error::Other(
            "self-test: paragraph/blank split does not cover all lines".into(),
        ));
    }

    if result.bytes.len() < 4 || &result.bytes[..4] != b"PK\x03\x04" {
        return Err(Error::Other("self-test: output is not a container".into()));
    }

    Ok(format!(
        "self-test passed: {} lines, {} paragraphs, {} warnings, {} container bytes",
        conversion.line_count(),
        conversion.paragraph_count(),
        conversion.warning_count(),
        result.bytes.len()
    ))
}

fn build_rulebook(options: &ConvertOptions) -> Result<Rulebook> {
    let mut catalog = match &options.styles_path {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("cannot read style catalog {}: {e}", path.display()))
            })?;
            StyleCatalog::from_json(&source)?
        }
        None => StyleCatalog::builtin(),
    };

    if let Some(path) = &options.style_guide_path {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read style description {}: {e}",
                path.display()
            ))
        })?;
        StyleGuide::parse(&text).apply(&mut catalog);
    }

    // Force-font wins over both the catalog and any guide override.
    if let Some(face) = &options.force_font {
        catalog.force_font(face);
    }

    Rulebook::load(catalog, None)
}
