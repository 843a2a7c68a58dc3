//! Resolved typography settings: defaults overlaid with theme mods.

use crate::headings::{HEADING_SIZE_UNIT, HeadingLevel};
use crate::measure::ResponsiveMeasure;
use crate::subsets::{FontSubset, sanitize_font_subsets};
use log::debug;
use serde::Serialize;
use theme_mods::ThemeMods;

/// Family value meaning "inherit the theme stack"; never printed.
pub const DEFAULT_FAMILY: &str = "default";

pub mod keys {
    pub const BODY_FONT_FAMILY: &str = "neve_body_font_family";
    pub const BODY_FONT_SIZE: &str = "neve_body_font_size";
    pub const BODY_LINE_HEIGHT: &str = "neve_body_line_height";
    pub const BODY_LETTER_SPACING: &str = "neve_body_letter_spacing";
    pub const BODY_FONT_WEIGHT: &str = "neve_body_font_weight";
    pub const BODY_TEXT_TRANSFORM: &str = "neve_body_text_transform";
    pub const FONT_SUBSETS: &str = "neve_font_subsets";

    pub const HEADINGS_FONT_FAMILY: &str = "neve_headings_font_family";
    pub const HEADINGS_LINE_HEIGHT: &str = "neve_headings_line_height";
    pub const HEADINGS_LETTER_SPACING: &str = "neve_headings_letter_spacing";
    pub const HEADINGS_FONT_WEIGHT: &str = "neve_headings_font_weight";
    pub const HEADINGS_TEXT_TRANSFORM: &str = "neve_headings_text_transform";
}

/// Body text settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BodyTypography {
    pub font_family: String,
    pub font_size: ResponsiveMeasure,
    pub line_height: ResponsiveMeasure,
    /// Printed in `px`
    pub letter_spacing: ResponsiveMeasure,
    pub font_weight: String,
    pub text_transform: String,
    pub font_subsets: Vec<FontSubset>,
}

impl Default for BodyTypography {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FAMILY.to_owned(),
            font_size: ResponsiveMeasure::with_unit("15", "16", "16", "px"),
            line_height: ResponsiveMeasure::unitless("1.6", "1.6", "1.6"),
            letter_spacing: ResponsiveMeasure::with_unit("0", "0", "0", "px"),
            font_weight: "400".to_owned(),
            text_transform: "none".to_owned(),
            font_subsets: vec![FontSubset::Latin],
        }
    }
}

impl BodyTypography {
    /// Defaults, with every non-empty mod taking precedence.
    pub fn from_mods(mods: &ThemeMods) -> Self {
        let mut body = Self::default();

        if let Some(size) = ResponsiveMeasure::from_mods(mods, keys::BODY_FONT_SIZE, &body.font_size) {
            body.font_size = size;
        }
        if let Some(height) =
            ResponsiveMeasure::from_mods(mods, keys::BODY_LINE_HEIGHT, &body.line_height)
        {
            body.line_height = height;
        }
        if let Some(family) = mods.non_empty_str(keys::BODY_FONT_FAMILY) {
            body.font_family = family;
        }
        if let Some(spacing) = mods.non_empty_str(keys::BODY_LETTER_SPACING) {
            body.letter_spacing = ResponsiveMeasure::uniform(&spacing, Some("px"));
        }
        if let Some(transform) = mods.non_empty_str(keys::BODY_TEXT_TRANSFORM) {
            body.text_transform = transform;
        }
        if let Some(weight) = mods.non_empty_str(keys::BODY_FONT_WEIGHT) {
            body.font_weight = weight;
        }
        if let Some(subsets) = mods.raw(keys::FONT_SUBSETS) {
            body.font_subsets = sanitize_font_subsets(subsets);
        }

        debug!(target: "typography", "body family `{}`, weight {}", body.font_family, body.font_weight);
        body
    }
}

/// Size and line height of one heading level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingTypography {
    pub level: HeadingLevel,
    pub font_size: ResponsiveMeasure,
    pub line_height: ResponsiveMeasure,
}

impl HeadingTypography {
    /// Control defaults: tablet size on mobile and tablet, desktop size on
    /// desktop, line height 1.6.
    pub fn defaults(level: HeadingLevel) -> Self {
        let control = level.control();
        Self {
            level,
            font_size: ResponsiveMeasure::with_unit(
                control.default_tablet_size,
                control.default_tablet_size,
                control.default_size,
                HEADING_SIZE_UNIT,
            ),
            line_height: ResponsiveMeasure::unitless("1.6", "1.6", "1.6"),
        }
    }

    /// Per-level mods first, then the shared heading line height.
    pub fn from_mods(
        level: HeadingLevel,
        mods: &ThemeMods,
        shared_line_height: Option<&ResponsiveMeasure>,
    ) -> Self {
        let mut heading = Self::defaults(level);
        let prefix = level.mod_prefix();

        if let Some(size) =
            ResponsiveMeasure::from_mods(mods, &format!("{prefix}_font_size"), &heading.font_size)
        {
            heading.font_size = size;
        }
        let own_line_height =
            ResponsiveMeasure::from_mods(mods, &format!("{prefix}_line_height"), &heading.line_height);
        if let Some(height) = own_line_height.or_else(|| shared_line_height.cloned()) {
            heading.line_height = height;
        }
        heading
    }
}

/// Settings shared by all headings plus the per-level entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingsTypography {
    pub font_family: String,
    pub font_weight: String,
    pub text_transform: String,
    /// Printed in `px`; unset by default
    pub letter_spacing: Option<String>,
    pub levels: Vec<HeadingTypography>,
}

impl Default for HeadingsTypography {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FAMILY.to_owned(),
            font_weight: "600".to_owned(),
            text_transform: "none".to_owned(),
            letter_spacing: None,
            levels: HeadingLevel::ALL.map(HeadingTypography::defaults).to_vec(),
        }
    }
}

impl HeadingsTypography {
    pub fn from_mods(mods: &ThemeMods) -> Self {
        let defaults = Self::default();
        let shared_line_height = ResponsiveMeasure::from_mods(
            mods,
            keys::HEADINGS_LINE_HEIGHT,
            &ResponsiveMeasure::default(),
        );
        Self {
            font_family: mods
                .non_empty_str(keys::HEADINGS_FONT_FAMILY)
                .unwrap_or(defaults.font_family),
            font_weight: mods
                .non_empty_str(keys::HEADINGS_FONT_WEIGHT)
                .unwrap_or(defaults.font_weight),
            text_transform: mods
                .non_empty_str(keys::HEADINGS_TEXT_TRANSFORM)
                .unwrap_or(defaults.text_transform),
            letter_spacing: mods.non_empty_str(keys::HEADINGS_LETTER_SPACING),
            levels: HeadingLevel::ALL
                .iter()
                .map(|level| HeadingTypography::from_mods(*level, mods, shared_line_height.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inline_style::Responsive;
    use serde_json::json;

    #[test]
    fn empty_mods_keep_body_defaults() {
        assert_eq!(BodyTypography::from_mods(&ThemeMods::new()), BodyTypography::default());
    }

    #[test]
    fn body_mods_override_defaults() {
        let mods = ThemeMods::new()
            .with(keys::BODY_FONT_SIZE, r#"{"mobile":14,"tablet":15,"desktop":17}"#)
            .with(keys::BODY_FONT_FAMILY, "Inter")
            .with(keys::BODY_LETTER_SPACING, 0.5)
            .with(keys::BODY_FONT_WEIGHT, "")
            .with(keys::FONT_SUBSETS, json!(["latin", "greek"]));
        let body = BodyTypography::from_mods(&mods);

        assert_eq!(body.font_family, "Inter");
        assert_eq!(body.font_weight, "400");
        assert_eq!(body.font_size, ResponsiveMeasure::with_unit("14", "15", "17", "px"));
        assert_eq!(body.letter_spacing, ResponsiveMeasure::uniform("0.5", Some("px")));
        assert_eq!(body.font_subsets, [FontSubset::Latin, FontSubset::Greek]);
    }

    #[test]
    fn heading_line_height_falls_back_to_shared_value() {
        let mods = ThemeMods::new()
            .with(keys::HEADINGS_LINE_HEIGHT, json!({"mobile": 1.2, "tablet": 1.2, "desktop": 1.3}))
            .with("neve_h2_line_height", json!({"mobile": 1, "tablet": 1, "desktop": 1}));
        let headings = HeadingsTypography::from_mods(&mods);

        let line_heights: Vec<&Responsive<Option<String>>> =
            headings.levels.iter().map(|level| &level.line_height.value).collect();
        let shared = Responsive::new(
            Some("1.2".to_owned()),
            Some("1.2".to_owned()),
            Some("1.3".to_owned()),
        );
        let own = Responsive::uniform(Some("1".to_owned()));
        assert_eq!(line_heights[0], &shared);
        assert_eq!(line_heights[1], &own);
        assert_eq!(line_heights[5], &shared);
    }

    #[test]
    fn heading_defaults_follow_control_table() {
        let h1 = HeadingTypography::defaults(HeadingLevel::H1);
        assert_eq!(h1.font_size, ResponsiveMeasure::with_unit("1.5", "1.5", "2", "em"));
        let headings = HeadingsTypography::from_mods(&ThemeMods::new());
        assert_eq!(headings, HeadingsTypography::default());
    }
}
