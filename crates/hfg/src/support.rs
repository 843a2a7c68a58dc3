//! Builder → component registry.
//!
//! A theme may declare its own registry; a declared `builders` table replaces
//! the default one as a whole rather than being merged per builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use theme_mods::ThemeMods;

/// Theme-mod key holding a theme-declared registry.
pub const SUPPORT_KEY: &str = "hfg_support";

/// A builder that lays components out on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Builder {
    Header,
    Footer,
}

/// Components available to each builder, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSupport {
    pub builders: BTreeMap<Builder, Vec<String>>,
}

/// Partial registry as declared by a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupportOverrides {
    #[serde(default)]
    pub builders: Option<BTreeMap<Builder, Vec<String>>>,
}

const HEADER_COMPONENTS: [&str; 4] = ["Logo", "MenuIcon", "Button", "CustomHtml"];
const FOOTER_COMPONENTS: [&str; 7] = [
    "FooterWidgetOne",
    "FooterWidgetTwo",
    "FooterWidgetThree",
    "FooterWidgetFour",
    "FooterWidgetFive",
    "FooterWidgetSix",
    "Copyright",
];

impl Default for ThemeSupport {
    fn default() -> Self {
        Self {
            builders: BTreeMap::from([
                (Builder::Header, owned(&HEADER_COMPONENTS)),
                (Builder::Footer, owned(&FOOTER_COMPONENTS)),
            ]),
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

impl ThemeSupport {
    /// Defaults with a theme's declarations applied on top.
    pub fn merged(overrides: SupportOverrides) -> Self {
        match overrides.builders {
            Some(builders) => Self { builders },
            None => Self::default(),
        }
    }

    /// Registry declared under [`SUPPORT_KEY`], or the defaults.
    pub fn from_mods(mods: &ThemeMods) -> Self {
        Self::merged(mods.decode(SUPPORT_KEY).unwrap_or_default())
    }

    /// Components registered for `builder`.
    pub fn components(&self, builder: Builder) -> &[String] {
        self.builders
            .get(&builder)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
