//! Heading levels and their customizer defaults.

use serde::Serialize;

/// `h1` through `h6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// Control defaults for one heading level. Sizes are in `em`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingControl {
    pub level: HeadingLevel,
    /// Ordering within the headings section
    pub priority: u16,
    /// Desktop size
    pub default_size: &'static str,
    /// Tablet and mobile size
    pub default_tablet_size: &'static str,
    pub label: &'static str,
}

/// Unit of the default heading sizes.
pub const HEADING_SIZE_UNIT: &str = "em";

impl HeadingLevel {
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Element selector.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Theme-mod key prefix, e.g. `neve_h1`.
    pub const fn mod_prefix(self) -> &'static str {
        match self {
            Self::H1 => "neve_h1",
            Self::H2 => "neve_h2",
            Self::H3 => "neve_h3",
            Self::H4 => "neve_h4",
            Self::H5 => "neve_h5",
            Self::H6 => "neve_h6",
        }
    }

    pub const fn control(self) -> HeadingControl {
        let (priority, default_size, default_tablet_size, label) = match self {
            Self::H1 => (25, "2", "1.5", "H1"),
            Self::H2 => (30, "1.75", "1.3", "H2"),
            Self::H3 => (35, "1.5", "1.1", "H3"),
            Self::H4 => (40, "1.25", "1", "H4"),
            Self::H5 => (45, "1", "0.75", "H5"),
            Self::H6 => (50, "1", "0.75", "H6"),
        };
        HeadingControl {
            level: self,
            priority,
            default_size,
            default_tablet_size,
            label,
        }
    }
}

/// Controls for every level, in priority order.
pub fn heading_controls() -> [HeadingControl; 6] {
    HeadingLevel::ALL.map(HeadingLevel::control)
}
