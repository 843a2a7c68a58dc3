#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use inline_style::{Breakpoint, StyleComposer};
use serde_json::json;
use theme_mods::ThemeMods;
use typography::{
    BodyTypography, HeadingsTypography, add_body_styles, add_heading_styles, keys,
};

#[test]
fn one_composer_collects_body_and_heading_css() {
    let mods = ThemeMods::new()
        .with(
            keys::BODY_FONT_SIZE,
            r#"{"mobile":14,"tablet":15,"desktop":16,"suffix":{"mobile":"px","tablet":"px","desktop":"px"}}"#,
        )
        .with(keys::BODY_TEXT_TRANSFORM, "uppercase")
        .with(keys::HEADINGS_FONT_FAMILY, "Lora")
        .with(keys::HEADINGS_LETTER_SPACING, "1")
        .with("neve_h1_font_size", json!({"mobile": 30, "tablet": 36, "desktop": 48, "suffix": {"mobile": "px", "tablet": "px", "desktop": "px"}}));

    let mut composer = StyleComposer::new();
    add_body_styles(&mut composer, &BodyTypography::from_mods(&mods));
    add_heading_styles(&mut composer, &HeadingsTypography::from_mods(&mods));

    let mobile = composer.style(Breakpoint::Mobile);
    assert!(mobile.starts_with(
        "body{font-size:14px;line-height:1.6;letter-spacing:0px;}\
         body{font-weight:400;text-transform:uppercase;}\
         h1,h2,h3,h4,h5,h6{font-family:Lora;font-weight:600;text-transform:none;letter-spacing:1px;}\
         h1{font-size:30px;line-height:1.6;}\
         h2{font-size:1.3em;line-height:1.6;}"
    ));

    let desktop = composer.style(Breakpoint::Desktop);
    assert!(desktop.contains("h1{font-size:48px;line-height:1.6;}"));
    assert!(desktop.contains("h6{font-size:1em;line-height:1.6;}"));
    assert!(!desktop.contains("font-family"));
}
