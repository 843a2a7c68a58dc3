//! Feed resolved typography into a [`StyleComposer`].

use crate::headings::HeadingLevel;
use crate::settings::{BodyTypography, DEFAULT_FAMILY, HeadingsTypography};
use inline_style::{Breakpoint, StyleComposer, StyleRule};

pub const BODY_SELECTOR: &str = "body";

/// Selector list matching every heading level.
pub fn all_headings_selector() -> String {
    HeadingLevel::ALL
        .iter()
        .map(|level| level.selector())
        .collect::<Vec<_>>()
        .join(",")
}

fn family_rule(family: &str) -> StyleRule {
    let family = (family != DEFAULT_FAMILY).then(|| family.to_owned());
    StyleRule::optional("font-family", family)
}

/// Body size, line height and spacing per breakpoint; family, weight and
/// transform once in the base styles.
pub fn add_body_styles(composer: &mut StyleComposer, body: &BodyTypography) {
    composer.add_responsive_style(
        &[
            body.font_size.rule("font-size"),
            body.line_height.rule("line-height"),
            body.letter_spacing.rule("letter-spacing"),
        ],
        BODY_SELECTOR,
    );
    composer.add_style(
        &[
            family_rule(&body.font_family),
            StyleRule::new("font-weight", body.font_weight.as_str()),
            StyleRule::new("text-transform", body.text_transform.as_str()),
        ],
        BODY_SELECTOR,
        Breakpoint::Mobile,
    );
}

/// Shared heading styles, then per-level size and line height.
pub fn add_heading_styles(composer: &mut StyleComposer, headings: &HeadingsTypography) {
    composer.add_style(
        &[
            family_rule(&headings.font_family),
            StyleRule::new("font-weight", headings.font_weight.as_str()),
            StyleRule::new("text-transform", headings.text_transform.as_str()),
            StyleRule::optional("letter-spacing", headings.letter_spacing.clone()).with_suffix("px"),
        ],
        &all_headings_selector(),
        Breakpoint::Mobile,
    );
    for heading in &headings.levels {
        composer.add_responsive_style(
            &[
                heading.font_size.rule("font-size"),
                heading.line_height.rule("line-height"),
            ],
            heading.level.selector(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::ResponsiveMeasure;
    use crate::settings::HeadingTypography;

    #[test]
    fn default_body_styles() {
        let mut composer = StyleComposer::new();
        add_body_styles(&mut composer, &BodyTypography::default());

        assert_eq!(
            composer.style(Breakpoint::Mobile),
            "body{font-size:15px;line-height:1.6;letter-spacing:0px;}\
             body{font-weight:400;text-transform:none;}"
        );
        assert_eq!(
            composer.style(Breakpoint::Tablet),
            "body{font-size:16px;line-height:1.6;letter-spacing:0px;}"
        );
        assert_eq!(
            composer.style(Breakpoint::Desktop),
            "body{font-size:16px;line-height:1.6;letter-spacing:0px;}"
        );
    }

    #[test]
    fn custom_family_is_printed() {
        let mut composer = StyleComposer::new();
        let body = BodyTypography {
            font_family: "Inter".to_owned(),
            ..BodyTypography::default()
        };
        add_body_styles(&mut composer, &body);
        assert!(composer
            .style(Breakpoint::Mobile)
            .ends_with("body{font-family:Inter;font-weight:400;text-transform:none;}"));
    }

    #[test]
    fn heading_blocks_per_level() {
        let mut composer = StyleComposer::new();
        let headings = HeadingsTypography {
            levels: vec![HeadingTypography {
                level: HeadingLevel::H3,
                font_size: ResponsiveMeasure::with_unit("1.1", "1.1", "1.5", "em"),
                line_height: ResponsiveMeasure::default(),
            }],
            ..HeadingsTypography::default()
        };
        add_heading_styles(&mut composer, &headings);

        assert_eq!(
            composer.style(Breakpoint::Mobile),
            "h1,h2,h3,h4,h5,h6{font-weight:600;text-transform:none;}h3{font-size:1.1em;}"
        );
        assert_eq!(composer.style(Breakpoint::Desktop), "h3{font-size:1.5em;}");
    }
}
