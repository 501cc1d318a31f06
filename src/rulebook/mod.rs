//! The style rulebook: maps element classifications to style bindings.
//!
//! A rulebook is loaded once per conversion from a [`StyleCatalog`]
//! (built-in or external JSON) plus an optional [`StyleGuide`], and is
//! then shared read-only by every paragraph the assembler builds.

mod catalog;
mod guide;

pub use catalog::{CharStyle, ParaStyle, StyleCatalog};
pub use guide::{GuideCategory, StyleGuide};

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{ElementType, StyleId};

/// Fixed style ids used by the default bindings and the built-in
/// catalog. External catalogs must define the ids the bindings use.
pub mod ids {
    use crate::model::StyleId;

    pub const CHAR_H1: StyleId = 15;
    pub const CHAR_H2: StyleId = 17;
    pub const CHAR_BODY: StyleId = 18;
    pub const CHAR_BOLD: StyleId = 19;
    pub const CHAR_ITALIC: StyleId = 20;
    pub const CHAR_H3: StyleId = 23;
    pub const CHAR_CODE: StyleId = 44;
    pub const CHAR_MAIN_TITLE: StyleId = 60;
    pub const CHAR_SUB_TITLE: StyleId = 62;
    pub const CHAR_BODY_BULLET: StyleId = 64;
    pub const CHAR_DASH_DESC: StyleId = 66;
    pub const CHAR_STAR_DESC: StyleId = 68;
    pub const CHAR_EMPHASIS: StyleId = 70;

    pub const PARA_H1: StyleId = 1;
    pub const PARA_BODY: StyleId = 25;
    pub const PARA_H3: StyleId = 27;
    pub const PARA_BULLET: StyleId = 31;
    pub const PARA_NESTED: StyleId = 33;
    pub const PARA_ORDERED: StyleId = 37;
    pub const PARA_MAIN_TITLE: StyleId = 61;
    pub const PARA_SUB_TITLE: StyleId = 63;
    pub const PARA_BODY_BULLET: StyleId = 65;
    pub const PARA_DASH_DESC: StyleId = 67;
    pub const PARA_STAR_DESC: StyleId = 69;
    pub const PARA_EMPHASIS: StyleId = 71;
}

/// The style ids an element resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBinding {
    /// Base character style
    pub char_style: StyleId,
    /// Paragraph style
    pub para_style: StyleId,
    /// Character style for bold runs within this element
    pub bold_style: StyleId,
    /// Character style for italic runs within this element
    pub italic_style: StyleId,
}

fn binding(char_style: StyleId, para_style: StyleId) -> StyleBinding {
    StyleBinding {
        char_style,
        para_style,
        bold_style: ids::CHAR_BOLD,
        italic_style: ids::CHAR_ITALIC,
    }
}

/// Read-only lookup table from element type to style binding.
#[derive(Debug, Clone)]
pub struct Rulebook {
    catalog: StyleCatalog,
    bindings: HashMap<ElementType, StyleBinding>,
}

impl Rulebook {
    /// Build a rulebook from a catalog and an optional style guide.
    ///
    /// Guide overrides are applied to the catalog first. Fails with a
    /// configuration error when any binding references a style id the
    /// catalog does not define, so a partial external catalog is
    /// rejected before conversion starts.
    pub fn load(mut catalog: StyleCatalog, guide: Option<&StyleGuide>) -> Result<Self> {
        if let Some(guide) = guide {
            guide.apply(&mut catalog);
        }

        let bindings = default_bindings();
        for (element, b) in &bindings {
            for (kind, id, defined) in [
                ("character", b.char_style, catalog.has_char_style(b.char_style)),
                ("character", b.bold_style, catalog.has_char_style(b.bold_style)),
                ("character", b.italic_style, catalog.has_char_style(b.italic_style)),
                ("paragraph", b.para_style, catalog.has_para_style(b.para_style)),
            ] {
                if !defined {
                    return Err(Error::Config(format!(
                        "binding for {} references undefined {} style {}",
                        element.label(),
                        kind,
                        id
                    )));
                }
            }
        }
        if !catalog.has_char_style(ids::CHAR_CODE) {
            return Err(Error::Config(format!(
                "catalog does not define the code character style {}",
                ids::CHAR_CODE
            )));
        }

        Ok(Self { catalog, bindings })
    }

    /// Rulebook over the built-in catalog with no guide.
    pub fn builtin() -> Self {
        // The built-in catalog defines every bound id, so this cannot
        // fail; keep the invariant local to this module.
        Self::load(StyleCatalog::builtin(), None)
            .unwrap_or_else(|e| panic!("builtin catalog incomplete: {e}"))
    }

    /// Resolve the binding for an element type.
    ///
    /// Returns `None` for element types the rulebook carries no binding
    /// for (blank lines, detected tables). Callers fall back to the
    /// plain-paragraph binding and must record that fallback as a
    /// warning rather than hide it.
    pub fn resolve(&self, element: ElementType) -> Option<&StyleBinding> {
        self.bindings.get(&element)
    }

    /// The plain-paragraph binding used as the total-function fallback.
    pub fn fallback(&self) -> &StyleBinding {
        self.bindings
            .get(&ElementType::Paragraph)
            .unwrap_or_else(|| panic!("paragraph binding missing from rulebook"))
    }

    /// Fixed character style id for code runs.
    pub fn code_style(&self) -> StyleId {
        ids::CHAR_CODE
    }

    /// The active catalog.
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }
}

fn default_bindings() -> HashMap<ElementType, StyleBinding> {
    // Table and Blank carry no binding on purpose: blanks never reach
    // resolution, and table rows exercise the paragraph fallback.
    HashMap::from([
        (ElementType::Heading1, binding(ids::CHAR_H1, ids::PARA_H1)),
        (ElementType::Heading2, binding(ids::CHAR_H2, ids::PARA_BODY)),
        (ElementType::Heading3, binding(ids::CHAR_H3, ids::PARA_H3)),
        (ElementType::Paragraph, binding(ids::CHAR_BODY, ids::PARA_BODY)),
        (ElementType::BulletList, binding(ids::CHAR_BODY, ids::PARA_BULLET)),
        (ElementType::NestedList, binding(ids::CHAR_BODY, ids::PARA_NESTED)),
        (ElementType::OrderedList, binding(ids::CHAR_BODY, ids::PARA_ORDERED)),
        (
            ElementType::MainTitle,
            binding(ids::CHAR_MAIN_TITLE, ids::PARA_MAIN_TITLE),
        ),
        (
            ElementType::SubTitle,
            binding(ids::CHAR_SUB_TITLE, ids::PARA_SUB_TITLE),
        ),
        (
            ElementType::BodyBullet,
            binding(ids::CHAR_BODY_BULLET, ids::PARA_BODY_BULLET),
        ),
        (
            ElementType::DashDescription,
            binding(ids::CHAR_DASH_DESC, ids::PARA_DASH_DESC),
        ),
        (
            ElementType::StarDescription,
            binding(ids::CHAR_STAR_DESC, ids::PARA_STAR_DESC),
        ),
        (
            ElementType::Emphasis,
            binding(ids::CHAR_EMPHASIS, ids::PARA_EMPHASIS),
        ),
    ])
}
