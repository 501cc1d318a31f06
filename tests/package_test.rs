//! Integration tests for container packaging.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use mdhwpx::package::{self, HEADER_PATH, MIMETYPE_CONTENT, MIMETYPE_PATH, SECTION_PATH};
use mdhwpx::{
    convert_file, convert_to_bytes, Assembler, ConvertOptions, HeaderSource, PackagingMode,
    Rulebook, StyleCatalog,
};

fn sample_bytes(mode: PackagingMode) -> Vec<u8> {
    let conversion = Assembler::new(Rulebook::builtin()).convert("# 제목\n\n본문 **굵게**\n");
    package::write(
        &conversion.records,
        &HeaderSource::Synthesized(StyleCatalog::builtin()),
        mode,
    )
    .unwrap()
}

fn archive(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut entry = archive.by_name(name).unwrap();
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn test_mimetype_is_first_and_uncompressed() {
    let mut archive = archive(sample_bytes(PackagingMode::Direct));

    let mut first = archive.by_index(0).unwrap();
    assert_eq!(first.name(), MIMETYPE_PATH);
    assert_eq!(first.compression(), CompressionMethod::Stored);

    let mut content = Vec::new();
    first.read_to_end(&mut content).unwrap();
    assert_eq!(content, MIMETYPE_CONTENT);
}

#[test]
fn test_all_required_parts_present() {
    let mut archive = archive(sample_bytes(PackagingMode::Direct));
    for name in [
        MIMETYPE_PATH,
        "version.xml",
        "META-INF/container.xml",
        "META-INF/manifest.xml",
        "META-INF/container.rdf",
        "Contents/content.hpf",
        "settings.xml",
        HEADER_PATH,
        SECTION_PATH,
    ] {
        assert!(archive.by_name(name).is_ok(), "missing part {name}");
    }
}

#[test]
fn test_non_marker_parts_are_deflated() {
    let mut archive = archive(sample_bytes(PackagingMode::Direct));
    let section = archive.by_name(SECTION_PATH).unwrap();
    assert_eq!(section.compression(), CompressionMethod::Deflated);
}

#[test]
fn test_section_references_only_header_defined_styles() {
    let mut archive = archive(sample_bytes(PackagingMode::Direct));
    let header = read_entry(&mut archive, HEADER_PATH);
    let section = read_entry(&mut archive, SECTION_PATH);

    let id_attr = regex::Regex::new(r#"(charPrIDRef|paraPrIDRef)="(\d+)""#).unwrap();
    for caps in id_attr.captures_iter(&section) {
        let id = &caps[2];
        let defining = if &caps[1] == "charPrIDRef" {
            format!("<hh:charPr id=\"{id}\"")
        } else {
            format!("<hh:paraPr id=\"{id}\"")
        };
        assert!(header.contains(&defining), "style {id} missing from header");
    }
}

#[test]
fn test_packaging_modes_shape_the_content_descriptor() {
    let mut direct = archive(sample_bytes(PackagingMode::Direct));
    let hpf = read_entry(&mut direct, "Contents/content.hpf");
    assert!(hpf.contains("<hpf:HwpDoc"));
    assert!(hpf.contains("<hpf:Section name=\"section0.xml\"/>"));

    let mut indexed = archive(sample_bytes(PackagingMode::Indexed));
    let hpf = read_entry(&mut indexed, "Contents/content.hpf");
    assert!(hpf.contains("<opf:package"));
    assert!(hpf.contains("<opf:itemref idref=\"section0\"/>"));
}

#[test]
fn test_text_nodes_never_contain_reserved_characters() {
    let conversion =
        Assembler::new(Rulebook::builtin()).convert("특수문자 <a> & \"b\" 'c'\n");
    let bytes = package::write(
        &conversion.records,
        &HeaderSource::Synthesized(StyleCatalog::builtin()),
        PackagingMode::Direct,
    )
    .unwrap();

    let mut archive = archive(bytes);
    let section = read_entry(&mut archive, SECTION_PATH);
    let text_node = regex::Regex::new(r"<hp:t>(.*)</hp:t>").unwrap();
    for caps in text_node.captures_iter(&section) {
        let text = &caps[1];
        assert!(!text.contains('<'), "unescaped < in {text}");
        assert!(!text.contains('"'), "unescaped quote in {text}");
        assert!(!text.contains('\''), "unescaped apostrophe in {text}");
        // Ampersands only as part of entities.
        for (i, _) in text.match_indices('&') {
            assert!(
                text[i..].starts_with("&amp;")
                    || text[i..].starts_with("&lt;")
                    || text[i..].starts_with("&gt;")
                    || text[i..].starts_with("&quot;")
                    || text[i..].starts_with("&apos;"),
                "bare & in {text}"
            );
        }
    }
    assert!(section.contains("&lt;a&gt;"));
}

#[test]
fn test_template_header_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.hwpx");
    let custom_header = b"<hh:head>template-owned</hh:head>";
    {
        let file = std::fs::File::create(&template_path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file(MIMETYPE_PATH, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(MIMETYPE_CONTENT).unwrap();
        zip.start_file(HEADER_PATH, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(custom_header).unwrap();
        zip.finish().unwrap();
    }

    let input_path = dir.path().join("input.md");
    std::fs::write(&input_path, "# 제목\n본문\n").unwrap();
    let output_path = dir.path().join("out.hwpx");

    let options = ConvertOptions::new().with_template(&template_path);
    let result = convert_file(&input_path, &output_path, &options).unwrap();
    assert!(matches!(result.header, HeaderSource::Template(_)));

    let bytes = std::fs::read(&output_path).unwrap();
    let mut archive = archive(bytes);
    let header = read_entry(&mut archive, HEADER_PATH);
    assert_eq!(header.as_bytes(), custom_header);
}

#[test]
fn test_convert_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    std::fs::write(&input_path, mdhwpx::SAMPLE_DOCUMENT).unwrap();
    let output_path = dir.path().join("sample.hwpx");

    let result = convert_file(&input_path, &output_path, &ConvertOptions::default()).unwrap();
    assert!(output_path.is_file());
    assert_eq!(
        std::fs::read(&output_path).unwrap().len(),
        result.bytes.len()
    );
    // No temporary file left behind.
    assert!(!dir.path().join("sample.hwpx.tmp").exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("never.hwpx");

    let err = convert_file(
        dir.path().join("absent.md"),
        &output_path,
        &ConvertOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, mdhwpx::Error::InputNotFound(_)));
    assert!(!output_path.exists());
}

#[test]
fn test_force_font_lands_in_header() {
    let options = ConvertOptions::new().with_font("바탕");
    let result = convert_to_bytes("본문\n", &options).unwrap();

    let mut archive = archive(result.bytes);
    let header = read_entry(&mut archive, HEADER_PATH);
    assert!(header.contains("face=\"바탕\""));
    assert!(!header.contains("face=\"맑은 고딕\""));
}

#[test]
fn test_used_ids_are_subset_of_builtin_catalog() {
    let conversion = Assembler::new(Rulebook::builtin()).convert(mdhwpx::SAMPLE_DOCUMENT);
    let catalog = StyleCatalog::builtin();
    for id in mdhwpx::convert::used_char_styles(&conversion.records) {
        assert!(catalog.has_char_style(id), "char {id} undefined");
    }
    for id in mdhwpx::convert::used_para_styles(&conversion.records) {
        assert!(catalog.has_para_style(id), "para {id} undefined");
    }
}
