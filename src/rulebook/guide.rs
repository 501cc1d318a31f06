//! External style description ("style guide") support.
//!
//! The guide format is deliberately tiny: six fixed section headers
//! recognized by substring match. A present header activates hard-coded
//! attribute overrides for that category; everything else in the file
//! is ignored. Absence of the file is not an error.

use crate::rulebook::catalog::StyleCatalog;
use crate::rulebook::ids;

/// The six overridable report categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCategory {
    /// `<주제목>` main title
    MainTitle,
    /// `□` sub-title
    SubTitle,
    /// `◦` body bullet
    BodyBullet,
    /// 3-space `-` description
    DashDescription,
    /// 4-space `*` description
    StarDescription,
    /// `<강조>` emphasis callout
    Emphasis,
}

const SECTION_MARKERS: [(&str, GuideCategory); 6] = [
    ("[주제목]", GuideCategory::MainTitle),
    ("[소제목]", GuideCategory::SubTitle),
    ("[본문기호]", GuideCategory::BodyBullet),
    ("[대시설명]", GuideCategory::DashDescription),
    ("[별표설명]", GuideCategory::StarDescription),
    ("[강조]", GuideCategory::Emphasis),
];

/// Parsed style description: the set of activated categories.
#[derive(Debug, Clone, Default)]
pub struct StyleGuide {
    active: Vec<GuideCategory>,
}

impl StyleGuide {
    /// Scan a description document for the six section markers.
    pub fn parse(text: &str) -> Self {
        let active = SECTION_MARKERS
            .iter()
            .filter(|(marker, _)| text.contains(marker))
            .map(|(_, category)| *category)
            .collect();
        Self { active }
    }

    /// Activated categories, in marker order.
    pub fn categories(&self) -> &[GuideCategory] {
        &self.active
    }

    /// Check whether a category was activated.
    pub fn is_active(&self, category: GuideCategory) -> bool {
        self.active.contains(&category)
    }

    /// Apply the hard-coded attribute overrides for every activated
    /// category to the catalog. Categories the guide does not mention
    /// keep their built-in defaults.
    pub fn apply(&self, catalog: &mut StyleCatalog) {
        for category in &self.active {
            let o = category.overrides();
            if let Some(cs) = catalog.char_style_mut(o.char_id) {
                cs.font = Some(o.font.to_string());
                cs.height = o.height;
                cs.bold = o.bold;
            }
            if let Some(ps) = catalog.para_style_mut(o.para_id) {
                ps.align = o.align.to_string();
                ps.line_spacing = o.line_spacing;
            }
            log::debug!("style guide override applied: {category:?}");
        }
    }
}

struct CategoryOverrides {
    char_id: u32,
    para_id: u32,
    font: &'static str,
    height: u32,
    bold: bool,
    align: &'static str,
    line_spacing: u32,
}

impl GuideCategory {
    fn overrides(self) -> CategoryOverrides {
        match self {
            Self::MainTitle => CategoryOverrides {
                char_id: ids::CHAR_MAIN_TITLE,
                para_id: ids::PARA_MAIN_TITLE,
                font: "HY헤드라인M",
                height: 1700,
                bold: true,
                align: "CENTER",
                line_spacing: 160,
            },
            Self::SubTitle => CategoryOverrides {
                char_id: ids::CHAR_SUB_TITLE,
                para_id: ids::PARA_SUB_TITLE,
                font: "HY헤드라인M",
                height: 1500,
                bold: true,
                align: "JUSTIFY",
                line_spacing: 150,
            },
            Self::BodyBullet => CategoryOverrides {
                char_id: ids::CHAR_BODY_BULLET,
                para_id: ids::PARA_BODY_BULLET,
                font: "맑은 고딕",
                height: 1300,
                bold: false,
                align: "JUSTIFY",
                line_spacing: 150,
            },
            Self::DashDescription => CategoryOverrides {
                char_id: ids::CHAR_DASH_DESC,
                para_id: ids::PARA_DASH_DESC,
                font: "맑은 고딕",
                height: 1200,
                bold: false,
                align: "JUSTIFY",
                line_spacing: 140,
            },
            Self::StarDescription => CategoryOverrides {
                char_id: ids::CHAR_STAR_DESC,
                para_id: ids::PARA_STAR_DESC,
                font: "맑은 고딕",
                height: 1100,
                bold: false,
                align: "JUSTIFY",
                line_spacing: 130,
            },
            Self::Emphasis => CategoryOverrides {
                char_id: ids::CHAR_EMPHASIS,
                para_id: ids::PARA_EMPHASIS,
                font: "맑은 고딕",
                height: 1300,
                bold: true,
                align: "CENTER",
                line_spacing: 150,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_markers_by_substring() {
        let guide = StyleGuide::parse("서식 안내\n\n[주제목] 17pt 가운데\n기타\n[강조] 진하게\n");
        assert!(guide.is_active(GuideCategory::MainTitle));
        assert!(guide.is_active(GuideCategory::Emphasis));
        assert!(!guide.is_active(GuideCategory::SubTitle));
        assert_eq!(guide.categories().len(), 2);
    }

    #[test]
    fn test_empty_guide_activates_nothing() {
        let guide = StyleGuide::parse("아무 마커도 없는 문서");
        assert!(guide.categories().is_empty());
    }

    #[test]
    fn test_apply_overrides_only_named_categories() {
        let mut catalog = StyleCatalog::builtin();
        let untouched_height = catalog.char_style(ids::CHAR_SUB_TITLE).unwrap().height;

        let guide = StyleGuide::parse("[주제목]");
        guide.apply(&mut catalog);

        let main = catalog.char_style(ids::CHAR_MAIN_TITLE).unwrap();
        assert_eq!(main.font.as_deref(), Some("HY헤드라인M"));
        assert_eq!(main.height, 1700);
        assert!(main.bold);

        let sub = catalog.char_style(ids::CHAR_SUB_TITLE).unwrap();
        assert_eq!(sub.height, untouched_height);
        assert_eq!(sub.font, None);
    }

    #[test]
    fn test_apply_sets_paragraph_attributes() {
        let mut catalog = StyleCatalog::builtin();
        StyleGuide::parse("[별표설명]").apply(&mut catalog);

        let para = catalog.para_style(ids::PARA_STAR_DESC).unwrap();
        assert_eq!(para.align, "JUSTIFY");
        assert_eq!(para.line_spacing, 130);
    }
}
