//! Container packaging: serializes paragraph records and the style
//! header into the fixed set of interdependent ZIP parts.

pub mod parts;
mod template;

pub use template::extract_template_header;

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::convert::{used_char_styles, used_para_styles};
use crate::error::{Error, Result};
use crate::model::ParagraphRecord;
use crate::rulebook::StyleCatalog;

/// Container-type marker entry: always the first entry, uncompressed,
/// so the consuming application can identify the container before
/// reading anything else.
pub const MIMETYPE_PATH: &str = "mimetype";
/// Fixed content of the marker entry.
pub const MIMETYPE_CONTENT: &[u8] = b"application/hwp+zip";

/// Path of the style header part inside the container.
pub const HEADER_PATH: &str = "Contents/header.xml";
/// Path of the body section part inside the container.
pub const SECTION_PATH: &str = "Contents/section0.xml";

/// Shape of the content-descriptor part.
///
/// Selected by caller configuration, never inferred. Both modes
/// resolve to the same logical document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingMode {
    /// Header/body part paths listed directly
    #[default]
    Direct,
    /// Metadata-table manifest with an explicit reading order
    Indexed,
}

/// Source of the style header part.
///
/// A template header always takes precedence over synthesis; the two
/// are never merged.
#[derive(Debug, Clone)]
pub enum HeaderSource {
    /// Header synthesized from a style catalog
    Synthesized(StyleCatalog),
    /// Header bytes lifted verbatim from a template container
    Template(Vec<u8>),
}

/// Serialize the document into complete container bytes.
///
/// In synthesized mode, fails with a packaging error when any record
/// references a style id the catalog does not define. In template mode
/// the check is skipped: the template author owns that guarantee, and
/// the bypass is a documented risk.
pub fn write(
    records: &[ParagraphRecord],
    header: &HeaderSource,
    mode: PackagingMode,
) -> Result<Vec<u8>> {
    let header_bytes = match header {
        HeaderSource::Synthesized(catalog) => {
            validate_references(records, catalog)?;
            parts::header_xml(catalog).into_bytes()
        }
        HeaderSource::Template(bytes) => {
            log::debug!("template header in use, style reference check bypassed");
            bytes.clone()
        }
    };

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // The marker entry must be written first and uncompressed.
    zip.start_file(MIMETYPE_PATH, stored)?;
    zip.write_all(MIMETYPE_CONTENT)?;

    let xml_parts: [(&str, String); 6] = [
        ("version.xml", parts::version_xml()),
        ("META-INF/container.xml", parts::container_xml()),
        ("META-INF/manifest.xml", parts::manifest_xml()),
        ("META-INF/container.rdf", parts::container_rdf()),
        ("Contents/content.hpf", parts::content_hpf(mode)),
        ("settings.xml", parts::settings_xml()),
    ];
    for (path, content) in xml_parts {
        zip.start_file(path, deflated)?;
        zip.write_all(content.as_bytes())?;
    }

    zip.start_file(HEADER_PATH, deflated)?;
    zip.write_all(&header_bytes)?;

    zip.start_file(SECTION_PATH, deflated)?;
    zip.write_all(parts::section_xml(records).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Enforce the central cross-file invariant: every style id referenced
/// by any record or run must be defined by the catalog that backs the
/// synthesized header.
fn validate_references(records: &[ParagraphRecord], catalog: &StyleCatalog) -> Result<()> {
    for id in used_para_styles(records) {
        if !catalog.has_para_style(id) {
            return Err(Error::Packaging(format!(
                "paragraph style {id} is referenced but not defined in the catalog"
            )));
        }
    }
    for id in used_char_styles(records) {
        if !catalog.has_char_style(id) {
            return Err(Error::Packaging(format!(
                "character style {id} is referenced but not defined in the catalog"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementType, StyledRun};
    use crate::rulebook::ids;

    fn sample_records() -> Vec<ParagraphRecord> {
        vec![ParagraphRecord::new(
            ElementType::Paragraph,
            ids::PARA_BODY,
            vec![StyledRun::plain("본문", ids::CHAR_BODY)],
        )]
    }

    #[test]
    fn test_write_synthesized_produces_container() {
        let header = HeaderSource::Synthesized(StyleCatalog::builtin());
        let bytes = write(&sample_records(), &header, PackagingMode::Direct).unwrap();
        // ZIP local file header magic.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_undefined_para_style_is_a_packaging_error() {
        let records = vec![ParagraphRecord::new(
            ElementType::Paragraph,
            999,
            vec![StyledRun::plain("x", ids::CHAR_BODY)],
        )];
        let header = HeaderSource::Synthesized(StyleCatalog::builtin());
        let err = write(&records, &header, PackagingMode::Direct).unwrap_err();
        assert!(matches!(err, Error::Packaging(_)));
    }

    #[test]
    fn test_undefined_char_style_is_a_packaging_error() {
        let records = vec![ParagraphRecord::new(
            ElementType::Paragraph,
            ids::PARA_BODY,
            vec![StyledRun::plain("x", 999)],
        )];
        let header = HeaderSource::Synthesized(StyleCatalog::builtin());
        let err = write(&records, &header, PackagingMode::Direct).unwrap_err();
        assert!(matches!(err, Error::Packaging(_)));
    }

    #[test]
    fn test_template_mode_bypasses_reference_check() {
        let records = vec![ParagraphRecord::new(
            ElementType::Paragraph,
            999,
            vec![StyledRun::plain("x", 998)],
        )];
        let header = HeaderSource::Template(b"<hh:head/>".to_vec());
        assert!(write(&records, &header, PackagingMode::Direct).is_ok());
    }
}
