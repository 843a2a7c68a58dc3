//! Responsive tiers and per-tier values.

use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the three responsive tiers.
///
/// `Mobile` is the unconditional base tier; `Tablet` and `Desktop` are wrapped
/// in `min-width` media queries by whoever prints the accumulated CSS.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Base styles, no media query.
    #[default]
    Mobile,
    /// Medium viewports.
    Tablet,
    /// Wide viewports.
    Desktop,
}

impl Breakpoint {
    /// All tiers in cascade order.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// The tag used by option readers (`mobile`, `tablet`, `desktop`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Parse a tag. Unknown tags yield `None`; callers treat that as a no-op.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mobile" => Some(Self::Mobile),
            "tablet" => Some(Self::Tablet),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }

    /// Position in [`Breakpoint::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Mobile => 0,
            Self::Tablet => 1,
            Self::Desktop => 2,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A value with one entry per breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive<Entry> {
    pub mobile: Entry,
    pub tablet: Entry,
    pub desktop: Entry,
}

impl<Entry> Responsive<Entry> {
    pub const fn new(mobile: Entry, tablet: Entry, desktop: Entry) -> Self {
        Self {
            mobile,
            tablet,
            desktop,
        }
    }

    /// Borrow the entry for `breakpoint`.
    pub const fn get(&self, breakpoint: Breakpoint) -> &Entry {
        match breakpoint {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Desktop => &self.desktop,
        }
    }

    pub fn map<Mapped, Convert>(&self, mut convert: Convert) -> Responsive<Mapped>
    where
        Convert: FnMut(&Entry) -> Mapped,
    {
        Responsive {
            mobile: convert(&self.mobile),
            tablet: convert(&self.tablet),
            desktop: convert(&self.desktop),
        }
    }
}

impl<Entry: Clone> Responsive<Entry> {
    /// The same value on every breakpoint.
    pub fn uniform(value: Entry) -> Self {
        Self {
            mobile: value.clone(),
            tablet: value.clone(),
            desktop: value,
        }
    }
}
