//! Style catalog: the full set of character and paragraph style
//! definitions emitted into the style header.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::StyleId;
use crate::rulebook::ids;

fn default_color() -> String {
    "#000000".to_string()
}

fn default_align() -> String {
    "JUSTIFY".to_string()
}

fn default_spacing() -> u32 {
    145
}

fn default_font() -> String {
    "맑은 고딕".to_string()
}

/// One character style definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharStyle {
    /// Style id referenced by runs
    pub id: StyleId,

    /// Font height in HWP units (point size x 100)
    pub height: u32,

    /// Text color as RGB hex
    #[serde(default = "default_color")]
    pub text_color: String,

    /// Bold face
    #[serde(default)]
    pub bold: bool,

    /// Italic face
    #[serde(default)]
    pub italic: bool,

    /// Font family override (catalog default when absent)
    #[serde(default)]
    pub font: Option<String>,
}

/// One paragraph style definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParaStyle {
    /// Style id referenced by paragraphs
    pub id: StyleId,

    /// Horizontal alignment (JUSTIFY, CENTER, LEFT, RIGHT)
    #[serde(default = "default_align")]
    pub align: String,

    /// Line spacing percentage
    #[serde(default = "default_spacing")]
    pub line_spacing: u32,

    /// Hanging indent in HWP units, negative pulls the marker left
    #[serde(default)]
    pub indent: Option<i32>,
}

/// The complete style definition set for a synthesized header.
///
/// Every style id referenced by any paragraph record or styled run must
/// appear here; the package writer enforces that invariant before any
/// container byte is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleCatalog {
    /// Character style definitions
    pub char_styles: Vec<CharStyle>,

    /// Paragraph style definitions
    pub para_styles: Vec<ParaStyle>,

    /// Default font family for styles with no explicit font
    #[serde(default = "default_font")]
    pub default_font: String,
}

impl StyleCatalog {
    /// Parse a catalog from its JSON source.
    ///
    /// Fails with a configuration error when the JSON is malformed or
    /// either style collection is absent or empty.
    pub fn from_json(source: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(source)?;
        if catalog.char_styles.is_empty() {
            return Err(Error::Config(
                "style catalog defines no character styles".into(),
            ));
        }
        if catalog.para_styles.is_empty() {
            return Err(Error::Config(
                "style catalog defines no paragraph styles".into(),
            ));
        }
        Ok(catalog)
    }

    /// The built-in catalog covering every default binding.
    pub fn builtin() -> Self {
        let char_styles = vec![
            char_style(ids::CHAR_H1, 1500, true, false),
            char_style(ids::CHAR_H2, 1300, true, false),
            char_style(ids::CHAR_BODY, 1200, false, false),
            char_style(ids::CHAR_BOLD, 1200, true, false),
            char_style(ids::CHAR_ITALIC, 1200, false, true),
            char_style(ids::CHAR_H3, 1200, true, false),
            char_style(ids::CHAR_CODE, 800, false, false),
            char_style(ids::CHAR_MAIN_TITLE, 1700, true, false),
            char_style(ids::CHAR_SUB_TITLE, 1500, true, false),
            char_style(ids::CHAR_BODY_BULLET, 1300, false, false),
            char_style(ids::CHAR_DASH_DESC, 1200, false, false),
            char_style(ids::CHAR_STAR_DESC, 1100, false, false),
            char_style(ids::CHAR_EMPHASIS, 1300, true, false),
        ];

        let para_styles = vec![
            para_style(ids::PARA_H1, "CENTER", 160, None),
            para_style(ids::PARA_BODY, "JUSTIFY", 145, None),
            para_style(ids::PARA_H3, "CENTER", 130, None),
            para_style(ids::PARA_BULLET, "JUSTIFY", 145, Some(-3024)),
            para_style(ids::PARA_NESTED, "JUSTIFY", 145, Some(-2777)),
            para_style(ids::PARA_ORDERED, "JUSTIFY", 155, Some(-3024)),
            para_style(ids::PARA_MAIN_TITLE, "CENTER", 160, None),
            para_style(ids::PARA_SUB_TITLE, "JUSTIFY", 150, None),
            para_style(ids::PARA_BODY_BULLET, "JUSTIFY", 150, Some(-2200)),
            para_style(ids::PARA_DASH_DESC, "JUSTIFY", 140, Some(-2777)),
            para_style(ids::PARA_STAR_DESC, "JUSTIFY", 130, Some(-3200)),
            para_style(ids::PARA_EMPHASIS, "CENTER", 150, None),
        ];

        Self {
            char_styles,
            para_styles,
            default_font: default_font(),
        }
    }

    /// Look up a character style by id.
    pub fn char_style(&self, id: StyleId) -> Option<&CharStyle> {
        self.char_styles.iter().find(|s| s.id == id)
    }

    /// Look up a paragraph style by id.
    pub fn para_style(&self, id: StyleId) -> Option<&ParaStyle> {
        self.para_styles.iter().find(|s| s.id == id)
    }

    /// Mutable character style lookup, used by guide overrides.
    pub(crate) fn char_style_mut(&mut self, id: StyleId) -> Option<&mut CharStyle> {
        self.char_styles.iter_mut().find(|s| s.id == id)
    }

    /// Mutable paragraph style lookup, used by guide overrides.
    pub(crate) fn para_style_mut(&mut self, id: StyleId) -> Option<&mut ParaStyle> {
        self.para_styles.iter_mut().find(|s| s.id == id)
    }

    /// Check whether a character style id is defined.
    pub fn has_char_style(&self, id: StyleId) -> bool {
        self.char_style(id).is_some()
    }

    /// Check whether a paragraph style id is defined.
    pub fn has_para_style(&self, id: StyleId) -> bool {
        self.para_style(id).is_some()
    }

    /// Force every character style (and the catalog default) onto one
    /// named font face.
    pub fn force_font(&mut self, face: &str) {
        self.default_font = face.to_string();
        for style in &mut self.char_styles {
            style.font = Some(face.to_string());
        }
    }

    /// Resolved font face for a character style.
    pub fn font_for<'a>(&'a self, style: &'a CharStyle) -> &'a str {
        style.font.as_deref().unwrap_or(&self.default_font)
    }
}

fn char_style(id: StyleId, height: u32, bold: bool, italic: bool) -> CharStyle {
    CharStyle {
        id,
        height,
        text_color: default_color(),
        bold,
        italic,
        font: None,
    }
}

fn para_style(id: StyleId, align: &str, line_spacing: u32, indent: Option<i32>) -> ParaStyle {
    ParaStyle {
        id,
        align: align.to_string(),
        line_spacing,
        indent,
    }
}
