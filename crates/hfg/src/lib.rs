//! Header/footer grid defaults.
//!
//! Turns a handful of categorical layout choices into a placement document on
//! a fixed 12-column grid. The resolver is pure; reading the choices from theme
//! mods is a separate, fallible step.

#![forbid(unsafe_code)]

// Placement document
mod types;
pub use types::{DesktopRows, GRID_COLUMNS, GridCell, GridDocument, GridRow, MobileRows, RowSlot};

// Categorical inputs
mod options;
pub use options::{
    HeaderOptions, InvalidLayoutEnum, LastMenuItem, LayoutOption, NavigationLayout,
    TopBarAlignment, keys,
};

// Resolvers
mod header;
pub use header::{
    CART_ICON, CUSTOM_HTML, LOGO, PRIMARY_MENU, SEARCH_ICON, SECONDARY_MENU, header_defaults,
    menu_allocation,
};

mod footer;
pub use footer::{COPYRIGHT, footer_defaults};

// Component registry
mod support;
pub use support::{Builder, SUPPORT_KEY, SupportOverrides, ThemeSupport};
