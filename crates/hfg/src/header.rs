//! Default header layout.
//!
//! Columns are assigned so that cells sharing a row never overlap:
//! - top row: two half-width cells, only when the top bar is enabled
//! - logo and primary menu placed per [`NavigationLayout`]
//! - trailing icons (search, cart) follow the menu

use crate::options::{HeaderOptions, LastMenuItem, NavigationLayout, TopBarAlignment};
use crate::types::{GridCell, GridDocument};

pub const LOGO: &str = "logo";
pub const PRIMARY_MENU: &str = "primary-menu";
pub const SECONDARY_MENU: &str = "secondary-menu";
pub const CUSTOM_HTML: &str = "custom_html";
pub const SEARCH_ICON: &str = "header_search_responsive";
pub const CART_ICON: &str = "header_cart_icon";

/// Empty column between the menu and trailing icons when they share a row
/// with free space after them.
const ICON_GAP: u8 = 1;

/// Column span of the primary menu and the ordered trailing icons.
///
/// The menu and its icons always add up to 8 columns.
pub const fn menu_allocation(last_menu_item: LastMenuItem) -> (u8, &'static [&'static str]) {
    match last_menu_item {
        LastMenuItem::None => (8, &[]),
        LastMenuItem::Search => (7, &[SEARCH_ICON]),
        LastMenuItem::Cart => (7, &[CART_ICON]),
        LastMenuItem::SearchCart => (6, &[SEARCH_ICON, CART_ICON]),
        LastMenuItem::CartSearch => (6, &[CART_ICON, SEARCH_ICON]),
    }
}

/// Width-1 icon cells at consecutive columns starting at `start`.
fn icon_cells(icons: &[&str], start: u8) -> impl Iterator<Item = GridCell> {
    icons
        .iter()
        .zip(start..)
        .map(|(id, x)| GridCell::new(*id, x, 1))
}

/// Compute the default header grid.
///
/// Pure: everything it depends on is in `options`.
pub fn header_defaults(options: &HeaderOptions) -> GridDocument {
    let mut document = GridDocument::default();

    if let Some(alignment) = options.top_bar {
        let (first, second) = match alignment {
            TopBarAlignment::ContentMenu => (CUSTOM_HTML, SECONDARY_MENU),
            TopBarAlignment::MenuContent => (SECONDARY_MENU, CUSTOM_HTML),
        };
        document.desktop.top.push(GridCell::new(first, 0, 6));
        document.desktop.top.push(GridCell::new(second, 6, 6));
    }

    let (menu_width, icons) = menu_allocation(options.last_menu_item);
    tracing::debug!(
        "header layout {:?}: menu width {menu_width}, {} trailing icons",
        options.navigation,
        icons.len()
    );

    let rows = &mut document.desktop;
    match options.navigation {
        NavigationLayout::Left => {
            rows.main
                .push(GridCell::new(LOGO, 0, 4).with_setting("align", "center"));
            rows.main.push(GridCell::new(PRIMARY_MENU, 4, menu_width));
            rows.bottom
                .extend(icon_cells(icons, 4 + menu_width + ICON_GAP));
        }
        NavigationLayout::Center => {
            rows.main.push(GridCell::new(LOGO, 3, 6));
            rows.bottom.push(GridCell::new(PRIMARY_MENU, 3, menu_width));
            rows.bottom
                .extend(icon_cells(icons, 3 + menu_width + ICON_GAP));
        }
        NavigationLayout::Right => {
            // Menu and icons fill exactly the 8 columns before the logo, so
            // the icons sit flush against the menu.
            rows.main.push(GridCell::new(PRIMARY_MENU, 0, menu_width));
            rows.main.extend(icon_cells(icons, menu_width));
            rows.main.push(GridCell::new(LOGO, 8, 4));
        }
    }

    document
}
