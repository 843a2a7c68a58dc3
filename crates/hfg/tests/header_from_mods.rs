#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use hfg::{HeaderOptions, InvalidLayoutEnum, LayoutOption, footer_defaults, header_defaults, keys};
use serde_json::{Value, json};
use theme_mods::ThemeMods;

fn header_json(mods: &ThemeMods, ecommerce_active: bool) -> Result<Value, Box<dyn Error>> {
    let options = HeaderOptions::from_mods(mods, ecommerce_active)?;
    let document = header_defaults(&options);
    Ok(serde_json::from_str(&document.to_json()?)?)
}

#[test]
fn untouched_site_gets_left_layout_with_search() -> Result<(), Box<dyn Error>> {
    let document = header_json(&ThemeMods::new(), false)?;
    assert_eq!(
        document,
        json!({
            "desktop": {
                "top": [],
                "main": [
                    { "id": "logo", "width": 4, "x": 0, "settings": { "align": "center" } },
                    { "id": "primary-menu", "width": 7, "x": 4 }
                ],
                "bottom": [
                    { "id": "header_search_responsive", "width": 1, "x": 12 }
                ]
            },
            "mobile": { "top": [], "main": [], "bottom": [], "sidebar": [] }
        })
    );
    Ok(())
}

#[test]
fn shop_site_with_top_bar_and_right_layout() -> Result<(), Box<dyn Error>> {
    let mods = ThemeMods::new()
        .with(keys::TOP_BAR_ENABLE, "1")
        .with(keys::NAVIGATION_LAYOUT, "right");
    let document = header_json(&mods, true)?;

    assert_eq!(
        document["desktop"]["top"],
        json!([
            { "id": "custom_html", "width": 6, "x": 0 },
            { "id": "secondary-menu", "width": 6, "x": 6 }
        ])
    );
    assert_eq!(
        document["desktop"]["main"],
        json!([
            { "id": "primary-menu", "width": 6, "x": 0 },
            { "id": "header_search_responsive", "width": 1, "x": 6 },
            { "id": "header_cart_icon", "width": 1, "x": 7 },
            { "id": "logo", "width": 4, "x": 8 }
        ])
    );
    assert_eq!(document["desktop"]["bottom"], json!([]));
    Ok(())
}

#[test]
fn stored_garbage_is_an_error_not_a_default() {
    let mods = ThemeMods::new().with(keys::LAST_MENU_ITEM, "search-wishlist");
    assert_eq!(
        HeaderOptions::from_mods(&mods, false),
        Err(InvalidLayoutEnum {
            option: LayoutOption::LastMenuItem,
            value: "search-wishlist".to_owned(),
        })
    );
}

#[test]
fn footer_document_serializes_for_the_renderer() -> Result<(), Box<dyn Error>> {
    let document: Value = serde_json::from_str(&footer_defaults().to_json()?)?;
    assert_eq!(document["desktop"]["top"], json!([]));
    assert_eq!(
        document["desktop"]["bottom"],
        json!([{ "id": "footer_copyright", "width": 1, "x": 6 }])
    );
    Ok(())
}
