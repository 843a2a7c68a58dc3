//! Grid placement document types.
//!
//! Coordinates live on a fixed 12-column grid. Cells are identified by the
//! component id the renderer mounts in that slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of columns in every builder row.
pub const GRID_COLUMNS: u8 = 12;

/// A positioned component inside one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Component id (`logo`, `primary-menu`, ...)
    pub id: String,
    /// Column span
    pub width: u8,
    /// Zero-based start column
    pub x: u8,
    /// Per-component settings forwarded to the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BTreeMap<String, String>>,
}

impl GridCell {
    /// Create a cell without settings.
    pub fn new(id: impl Into<String>, x: u8, width: u8) -> Self {
        Self {
            id: id.into(),
            width,
            x,
            settings: None,
        }
    }

    /// Attach a single setting.
    #[must_use]
    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Exclusive end column.
    pub fn end(&self) -> u8 {
        self.x.saturating_add(self.width)
    }

    /// Check if the `[x, x + width)` ranges of two cells intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.end() && other.x < self.end()
    }
}

/// Ordered cells of one row. Order is insertion order.
pub type GridRow = Vec<GridCell>;

/// Rows available on desktop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopRows {
    pub top: GridRow,
    pub main: GridRow,
    pub bottom: GridRow,
}

/// Rows available on mobile, including the off-canvas sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileRows {
    pub top: GridRow,
    pub main: GridRow,
    pub bottom: GridRow,
    pub sidebar: GridRow,
}

/// Identifies a single row for lookups and iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot {
    DesktopTop,
    DesktopMain,
    DesktopBottom,
    MobileTop,
    MobileMain,
    MobileBottom,
    MobileSidebar,
}

impl RowSlot {
    pub const ALL: [Self; 7] = [
        Self::DesktopTop,
        Self::DesktopMain,
        Self::DesktopBottom,
        Self::MobileTop,
        Self::MobileMain,
        Self::MobileBottom,
        Self::MobileSidebar,
    ];
}

/// Full builder layout handed to the grid renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    pub desktop: DesktopRows,
    pub mobile: MobileRows,
}

impl GridDocument {
    /// Borrow one row.
    pub const fn row(&self, slot: RowSlot) -> &GridRow {
        match slot {
            RowSlot::DesktopTop => &self.desktop.top,
            RowSlot::DesktopMain => &self.desktop.main,
            RowSlot::DesktopBottom => &self.desktop.bottom,
            RowSlot::MobileTop => &self.mobile.top,
            RowSlot::MobileMain => &self.mobile.main,
            RowSlot::MobileBottom => &self.mobile.bottom,
            RowSlot::MobileSidebar => &self.mobile.sidebar,
        }
    }

    /// Find the first pair of overlapping cells in any row.
    pub fn find_overlap(&self) -> Option<(RowSlot, &GridCell, &GridCell)> {
        RowSlot::ALL.into_iter().find_map(|slot| {
            let row = self.row(slot);
            row.iter().enumerate().find_map(|(index, first)| {
                row[index + 1..]
                    .iter()
                    .find(|second| first.overlaps(second))
                    .map(|second| (slot, first, second))
            })
        })
    }

    /// Serialize for the renderer.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
