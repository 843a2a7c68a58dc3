//! Default footer layout.

use crate::types::{GridCell, GridDocument};

pub const COPYRIGHT: &str = "footer_copyright";

/// The footer starts with only the copyright notice in the bottom row.
pub fn footer_defaults() -> GridDocument {
    let mut document = GridDocument::default();
    document.desktop.bottom.push(GridCell::new(COPYRIGHT, 6, 1));
    document
}
