//! Synthesis of the individual XML parts of the container.

use crate::model::ParagraphRecord;
use crate::package::PackagingMode;
use crate::rulebook::StyleCatalog;

/// Standard declaration prepended to every XML part.
pub const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Escape exactly the five XML-reserved characters.
///
/// Applied once per text node; the reserved characters never appear
/// literally in emitted text.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Body section part: one `hp:p` per record, one `hp:run` per run.
pub fn section_xml(records: &[ParagraphRecord]) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        "<hs:sec xmlns:hs=\"http://www.hancom.co.kr/hwpml/2011/section\" \
         xmlns:hp=\"http://www.hancom.co.kr/hwpml/2011/paragraph\">\n",
    );

    for record in records {
        xml.push_str(&format!(
            "  <hp:p paraPrIDRef=\"{}\">\n",
            record.para_style
        ));
        for run in &record.runs {
            // The only empty run is the single run of an empty-but-
            // non-blank line; it carries no text node worth emitting.
            if run.is_empty() {
                continue;
            }
            xml.push_str(&format!(
                "    <hp:run charPrIDRef=\"{}\">\n      <hp:t>{}</hp:t>\n    </hp:run>\n",
                run.char_style,
                escape_xml(&run.text)
            ));
        }
        xml.push_str("  </hp:p>\n");
    }

    xml.push_str("</hs:sec>\n");
    xml
}

/// Style header part synthesized from the catalog.
pub fn header_xml(catalog: &StyleCatalog) -> String {
    // Font table: catalog default first, then any per-style faces in
    // order of appearance.
    let mut fonts: Vec<&str> = vec![catalog.default_font.as_str()];
    for style in &catalog.char_styles {
        let face = catalog.font_for(style);
        if !fonts.contains(&face) {
            fonts.push(face);
        }
    }

    let mut xml = String::from(XML_DECL);
    xml.push_str(
        "<hh:head xmlns:hh=\"http://www.hancom.co.kr/hwpml/2011/head\" \
         xmlns:hc=\"http://www.hancom.co.kr/hwpml/2011/core\" version=\"1.4\">\n",
    );
    xml.push_str(
        "  <hh:beginNum page=\"1\" footnote=\"1\" endnote=\"1\" pic=\"1\" tbl=\"1\" equation=\"1\"/>\n",
    );
    xml.push_str("  <hh:refList>\n");

    xml.push_str(&format!("    <hh:fontfaces itemCnt=\"{}\">\n", fonts.len()));
    xml.push_str(&format!(
        "      <hh:fontface lang=\"HANGUL\" fontCnt=\"{}\">\n",
        fonts.len()
    ));
    for (id, face) in fonts.iter().enumerate() {
        xml.push_str(&format!(
            "        <hh:font id=\"{}\" face=\"{}\" type=\"TTF\" isEmbedded=\"0\">\n\
             \x20         <hh:typeInfo familyType=\"FCAT_GOTHIC\" weight=\"5\"/>\n\
             \x20       </hh:font>\n",
            id,
            escape_xml(face)
        ));
    }
    xml.push_str("      </hh:fontface>\n    </hh:fontfaces>\n");

    xml.push_str(&format!(
        "    <hh:charProperties itemCnt=\"{}\">\n",
        catalog.char_styles.len()
    ));
    for style in &catalog.char_styles {
        let font_id = fonts
            .iter()
            .position(|f| *f == catalog.font_for(style))
            .unwrap_or(0);
        xml.push_str(&format!(
            "      <hh:charPr id=\"{}\" height=\"{}\" textColor=\"{}\">\n",
            style.id,
            style.height,
            escape_xml(&style.text_color)
        ));
        xml.push_str(&format!(
            "        <hh:fontRef hangul=\"{font_id}\" latin=\"{font_id}\"/>\n"
        ));
        if style.bold {
            xml.push_str("        <hh:bold/>\n");
        }
        if style.italic {
            xml.push_str("        <hh:italic/>\n");
        }
        xml.push_str("        <hh:underline type=\"NONE\"/>\n      </hh:charPr>\n");
    }
    xml.push_str("    </hh:charProperties>\n");

    xml.push_str(&format!(
        "    <hh:paraProperties itemCnt=\"{}\">\n",
        catalog.para_styles.len()
    ));
    for style in &catalog.para_styles {
        xml.push_str(&format!("      <hh:paraPr id=\"{}\">\n", style.id));
        xml.push_str(&format!(
            "        <hh:align horizontal=\"{}\"/>\n",
            escape_xml(&style.align)
        ));
        if let Some(indent) = style.indent {
            xml.push_str(&format!(
                "        <hh:margin>\n          <hc:intent value=\"{indent}\" unit=\"HWPUNIT\"/>\n        </hh:margin>\n"
            ));
        }
        xml.push_str(&format!(
            "        <hh:lineSpacing type=\"PERCENT\" value=\"{}\"/>\n      </hh:paraPr>\n",
            style.line_spacing
        ));
    }
    xml.push_str("    </hh:paraProperties>\n");

    xml.push_str("  </hh:refList>\n</hh:head>\n");
    xml
}

/// Version descriptor part.
pub fn version_xml() -> String {
    format!("{XML_DECL}<version>5.0.0.0</version>")
}

/// Container-registration descriptor pointing at the content
/// descriptor.
pub fn container_xml() -> String {
    format!(
        "{XML_DECL}\
         <container version=\"1.0\" xmlns=\"urn:oasis:names:tc:opendocument:xmlns:container\">\n\
         \x20 <rootfiles>\n\
         \x20   <rootfile full-path=\"Contents/content.hpf\" media-type=\"application/vnd.hancom.hwp\"/>\n\
         \x20 </rootfiles>\n\
         </container>"
    )
}

/// Access manifest enumerating every part with its media type.
pub fn manifest_xml() -> String {
    let entries = [
        ("version.xml", "text/xml"),
        ("Contents/content.hpf", "application/xml"),
        ("Contents/header.xml", "application/xml"),
        ("Contents/section0.xml", "application/xml"),
        ("settings.xml", "application/xml"),
    ];
    let mut xml = String::from(XML_DECL);
    xml.push_str("<manifest xmlns=\"urn:oasis:names:tc:opendocument:xmlns:manifest:1.0\">\n");
    for (path, media_type) in entries {
        xml.push_str(&format!(
            "  <file-entry full-path=\"{path}\" media-type=\"{media_type}\"/>\n"
        ));
    }
    xml.push_str("</manifest>");
    xml
}

/// Relationship descriptor marking which parts are the header and the
/// body kind.
pub fn container_rdf() -> String {
    format!(
        "{XML_DECL}\
         <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" \
         xmlns:hpf=\"http://www.hancom.co.kr/schema/2011/hpf#\">\n\
         \x20 <rdf:Description rdf:about=\"Contents/header.xml\">\n\
         \x20   <hpf:partKind>header</hpf:partKind>\n\
         \x20 </rdf:Description>\n\
         \x20 <rdf:Description rdf:about=\"Contents/section0.xml\">\n\
         \x20   <hpf:partKind>body</hpf:partKind>\n\
         \x20 </rdf:Description>\n\
         </rdf:RDF>"
    )
}

/// Application-settings descriptor.
pub fn settings_xml() -> String {
    format!(
        "{XML_DECL}\
         <ha:HWPApplicationSetting xmlns:ha=\"http://www.hancom.co.kr/hwpml/2011/app\">\n\
         \x20 <ha:CaretPosition listIDRef=\"0\" paraIDRef=\"0\" pos=\"0\"/>\n\
         </ha:HWPApplicationSetting>"
    )
}

/// Content descriptor. Both packaging modes resolve to the same
/// logical document; only the shape of this part differs.
pub fn content_hpf(mode: PackagingMode) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    match mode {
        PackagingMode::Direct => format!(
            "{XML_DECL}\
             <hpf:HwpDoc xmlns:hpf=\"http://www.hancom.co.kr/schema/2011/hpf\" version=\"1.4\">\n\
             \x20 <hpf:Head>\n\
             \x20   <hpf:Title>Converted from Markdown</hpf:Title>\n\
             \x20   <hpf:Author>mdhwpx</hpf:Author>\n\
             \x20   <hpf:Date>{date}</hpf:Date>\n\
             \x20 </hpf:Head>\n\
             \x20 <hpf:Body>\n\
             \x20   <hpf:Section name=\"section0.xml\"/>\n\
             \x20 </hpf:Body>\n\
             </hpf:HwpDoc>"
        ),
        PackagingMode::Indexed => format!(
            "{XML_DECL}\
             <opf:package xmlns:opf=\"http://www.idpf.org/2007/opf/\" version=\"\" \
             unique-identifier=\"\" id=\"\">\n\
             \x20 <opf:metadata>\n\
             \x20   <opf:title>Converted from Markdown</opf:title>\n\
             \x20   <opf:language>ko</opf:language>\n\
             \x20   <opf:meta name=\"CreatedDate\" content=\"{date}\"/>\n\
             \x20 </opf:metadata>\n\
             \x20 <opf:manifest>\n\
             \x20   <opf:item id=\"header\" href=\"Contents/header.xml\" media-type=\"application/xml\"/>\n\
             \x20   <opf:item id=\"section0\" href=\"Contents/section0.xml\" media-type=\"application/xml\"/>\n\
             \x20   <opf:item id=\"settings\" href=\"settings.xml\" media-type=\"application/xml\"/>\n\
             \x20 </opf:manifest>\n\
             \x20 <opf:spine>\n\
             \x20   <opf:itemref idref=\"header\"/>\n\
             \x20   <opf:itemref idref=\"section0\"/>\n\
             \x20 </opf:spine>\n\
             </opf:package>"
        ),
    }
}
