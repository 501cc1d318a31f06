//! Integration tests for the assembly pipeline.

use mdhwpx::convert::{used_char_styles, used_para_styles};
use mdhwpx::rulebook::ids;
use mdhwpx::{
    convert_str, Assembler, ConvertOptions, ElementType, RunEmphasis, Rulebook,
    WARN_STYLE_FALLBACK,
};

fn assemble(text: &str) -> mdhwpx::Conversion {
    Assembler::new(Rulebook::builtin()).convert(text)
}

#[test]
fn test_audit_entry_per_line_for_arbitrary_documents() {
    for doc in [
        "",
        "\n",
        "a",
        "a\nb\nc",
        "# h\n\n\n본문\n",
        "<주제목>제목\n\n□ 절\n◦ 항목\n",
    ] {
        let conversion = assemble(doc);
        assert_eq!(
            conversion.line_count(),
            doc.lines().count(),
            "audit/line mismatch for {doc:?}"
        );
    }
}

#[test]
fn test_run_concatenation_reproduces_visible_text() {
    let cases = [
        ("본문 **굵게** 그리고 *기울임*", "본문 굵게 그리고 기울임"),
        ("`코드`만", "코드만"),
        ("섞인 **a** `b` *c* 끝", "섞인 a b c 끝"),
        ("구분자 없는 줄", "구분자 없는 줄"),
        ("a ** b", "a ** b"),
    ];
    for (input, expected) in cases {
        let conversion = assemble(input);
        assert_eq!(conversion.records[0].plain_text(), expected, "for {input:?}");
    }
}

#[test]
fn test_list_precedence() {
    let conversion = assemble("- item");
    assert_eq!(conversion.records[0].element, ElementType::BulletList);

    let conversion = assemble("    - item");
    assert_eq!(conversion.records[0].element, ElementType::NestedList);

    let conversion = assemble("   - item");
    assert_eq!(conversion.records[0].element, ElementType::DashDescription);
}

#[test]
fn test_inline_precedence_flat_bold_run() {
    let conversion = assemble("**a*b*c**");
    let runs = &conversion.records[0].runs;
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "a*b*c");
    assert_eq!(runs[0].emphasis, RunEmphasis::Bold);
}

#[test]
fn test_unbound_element_falls_back_with_warning() {
    let conversion = assemble("| a | b |");
    let entry = &conversion.audit[0];
    assert_eq!(entry.element, ElementType::Table);
    assert!(entry.warnings.iter().any(|w| w == WARN_STYLE_FALLBACK));
    assert_eq!(entry.para_style, Some(ids::PARA_BODY));
    assert_eq!(conversion.records[0].para_style, ids::PARA_BODY);
}

#[test]
fn test_end_to_end_scenario() {
    let input = "# Title\n\nBody with **bold** and *italic* and `code`.\n";
    let conversion = assemble(input);

    assert_eq!(conversion.paragraph_count(), 2);
    assert_eq!(conversion.line_count(), 3);

    assert_eq!(conversion.records[0].element, ElementType::Heading1);
    assert_eq!(conversion.audit[1].element, ElementType::Blank);

    let runs = &conversion.records[1].runs;
    let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Body with ", "bold", " and ", "italic", " and ", "code", "."]
    );
    assert_eq!(runs[1].emphasis, RunEmphasis::Bold);
    assert_eq!(runs[3].emphasis, RunEmphasis::Italic);
    assert_eq!(runs[5].emphasis, RunEmphasis::Code);
    assert_eq!(runs[5].char_style, ids::CHAR_CODE);
}

#[test]
fn test_domain_markers_resolve_to_their_own_styles() {
    let conversion = assemble("<주제목>제목\n□ 소제목\n◦ 요점\n<강조>강조\n");
    let paras = used_para_styles(&conversion.records);
    assert!(paras.contains(&ids::PARA_MAIN_TITLE));
    assert!(paras.contains(&ids::PARA_SUB_TITLE));
    assert!(paras.contains(&ids::PARA_BODY_BULLET));
    assert!(paras.contains(&ids::PARA_EMPHASIS));

    let chars = used_char_styles(&conversion.records);
    assert!(chars.contains(&ids::CHAR_MAIN_TITLE));
    assert!(chars.contains(&ids::CHAR_EMPHASIS));
}

#[test]
fn test_blank_lines_produce_no_records() {
    let conversion = assemble("\n\n\n");
    assert_eq!(conversion.paragraph_count(), 0);
    assert_eq!(conversion.line_count(), 3);
    assert!(conversion.audit.iter().all(|e| e.para_style.is_none()));
}

#[test]
fn test_convert_str_with_default_options() {
    let conversion = convert_str("# 제목\n본문", &ConvertOptions::default()).unwrap();
    assert_eq!(conversion.paragraph_count(), 2);
}

#[test]
fn test_external_catalog_must_cover_bound_ids() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"char_styles": [{{"id": 18, "height": 1200}}], "para_styles": [{{"id": 25}}]}}"#
    )
    .unwrap();

    let options = ConvertOptions::new().with_styles(file.path());
    let err = convert_str("본문", &options).unwrap_err();
    assert!(matches!(err, mdhwpx::Error::Config(_)));
}

#[test]
fn test_style_guide_overrides_catalog() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "서식 안내\n[주제목] 크게\n").unwrap();

    let options = ConvertOptions::new().with_style_guide(file.path());
    // Overrides land in the catalog; the binding ids are unchanged.
    let conversion = convert_str("<주제목>제목", &options).unwrap();
    assert_eq!(conversion.records[0].para_style, ids::PARA_MAIN_TITLE);
}
