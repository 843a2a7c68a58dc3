//! Layout choices that drive the header defaults.

use core::error::Error;
use core::fmt;
use core::str::FromStr;
use theme_mods::ThemeMods;

/// Theme-mod keys read by [`HeaderOptions::from_mods`].
pub mod keys {
    pub const TOP_BAR_ENABLE: &str = "neve_top_bar_enable";
    pub const TOP_BAR_LAYOUT: &str = "neve_top_bar_layout";
    pub const NAVIGATION_LAYOUT: &str = "neve_navigation_layout";
    pub const LAST_MENU_ITEM: &str = "neve_last_menu_item";
}

/// Which categorical option held an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOption {
    TopBarAlignment,
    NavigationLayout,
    LastMenuItem,
}

impl LayoutOption {
    const fn name(self) -> &'static str {
        match self {
            Self::TopBarAlignment => "top bar alignment",
            Self::NavigationLayout => "navigation layout",
            Self::LastMenuItem => "last menu item",
        }
    }
}

/// A layout option string outside its documented set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLayoutEnum {
    pub option: LayoutOption,
    pub value: String,
}

impl fmt::Display for InvalidLayoutEnum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown {} `{}`", self.option.name(), self.value)
    }
}

impl Error for InvalidLayoutEnum {}

/// Order of the two top-bar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopBarAlignment {
    /// Custom HTML on the left, secondary menu on the right
    #[default]
    ContentMenu,
    /// Secondary menu on the left, custom HTML on the right
    MenuContent,
}

/// Where the logo and primary menu sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationLayout {
    /// Logo then menu in the main row
    #[default]
    Left,
    /// Logo centered in main, menu below it
    Center,
    /// Menu then logo in the main row
    Right,
}

/// Icon widgets trailing the primary menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastMenuItem {
    None,
    Search,
    Cart,
    SearchCart,
    CartSearch,
}

impl LastMenuItem {
    /// Default when nothing is configured; the cart only makes sense with a
    /// shop plugin active.
    pub const fn default_for(ecommerce_active: bool) -> Self {
        if ecommerce_active {
            Self::SearchCart
        } else {
            Self::Search
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Search => "search",
            Self::Cart => "cart",
            Self::SearchCart => "search-cart",
            Self::CartSearch => "cart-search",
        }
    }
}

impl TopBarAlignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContentMenu => "content-menu",
            Self::MenuContent => "menu-content",
        }
    }
}

impl NavigationLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for TopBarAlignment {
    type Err = InvalidLayoutEnum;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "content-menu" => Ok(Self::ContentMenu),
            "menu-content" => Ok(Self::MenuContent),
            _ => Err(invalid(LayoutOption::TopBarAlignment, value)),
        }
    }
}

impl FromStr for NavigationLayout {
    type Err = InvalidLayoutEnum;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(invalid(LayoutOption::NavigationLayout, value)),
        }
    }
}

impl FromStr for LastMenuItem {
    type Err = InvalidLayoutEnum;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "search" => Ok(Self::Search),
            "cart" => Ok(Self::Cart),
            "search-cart" => Ok(Self::SearchCart),
            "cart-search" => Ok(Self::CartSearch),
            _ => Err(invalid(LayoutOption::LastMenuItem, value)),
        }
    }
}

fn invalid(option: LayoutOption, value: &str) -> InvalidLayoutEnum {
    InvalidLayoutEnum {
        option,
        value: value.to_owned(),
    }
}

/// Everything the header resolver needs.
///
/// `top_bar` is `None` when the top bar is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    pub top_bar: Option<TopBarAlignment>,
    pub navigation: NavigationLayout,
    pub last_menu_item: LastMenuItem,
}

impl HeaderOptions {
    /// Parse the raw option strings.
    ///
    /// The alignment is only validated when the top bar is enabled, since it
    /// is never consulted otherwise.
    ///
    /// # Errors
    /// Returns [`InvalidLayoutEnum`] for any value outside its documented set.
    pub fn parse(
        top_bar_enabled: bool,
        top_bar_alignment: &str,
        navigation: &str,
        last_menu_item: &str,
    ) -> Result<Self, InvalidLayoutEnum> {
        let top_bar = top_bar_enabled
            .then(|| top_bar_alignment.parse::<TopBarAlignment>())
            .transpose()?;
        Ok(Self {
            top_bar,
            navigation: navigation.parse()?,
            last_menu_item: last_menu_item.parse()?,
        })
    }

    /// Read and parse the header options from theme mods.
    ///
    /// # Errors
    /// Returns [`InvalidLayoutEnum`] if a stored value is not recognized.
    pub fn from_mods(mods: &ThemeMods, ecommerce_active: bool) -> Result<Self, InvalidLayoutEnum> {
        Self::parse(
            mods.bool_or(keys::TOP_BAR_ENABLE, false),
            &mods.str_or(keys::TOP_BAR_LAYOUT, TopBarAlignment::default().as_str()),
            &mods.str_or(keys::NAVIGATION_LAYOUT, NavigationLayout::default().as_str()),
            &mods.str_or(
                keys::LAST_MENU_ITEM,
                LastMenuItem::default_for(ecommerce_active).as_str(),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(
            "sideways".parse::<NavigationLayout>(),
            Err(InvalidLayoutEnum {
                option: LayoutOption::NavigationLayout,
                value: "sideways".to_owned(),
            })
        );
        let err = HeaderOptions::parse(false, "content-menu", "left", "wishlist");
        assert_eq!(
            err.map_err(|err| err.to_string()),
            Err("unknown last menu item `wishlist`".to_owned())
        );
    }

    #[test]
    fn alignment_is_ignored_when_top_bar_is_off() {
        let options = HeaderOptions::parse(false, "bogus", "right", "none");
        assert_eq!(
            options,
            Ok(HeaderOptions {
                top_bar: None,
                navigation: NavigationLayout::Right,
                last_menu_item: LastMenuItem::None,
            })
        );
        assert!(matches!(
            HeaderOptions::parse(true, "bogus", "right", "none"),
            Err(InvalidLayoutEnum { option: LayoutOption::TopBarAlignment, .. })
        ));
    }

    #[test]
    fn defaults_depend_on_shop_plugin() {
        let mods = ThemeMods::new();
        let plain = HeaderOptions::from_mods(&mods, false);
        let shop = HeaderOptions::from_mods(&mods, true);

        assert_eq!(plain.map(|options| options.last_menu_item), Ok(LastMenuItem::Search));
        assert_eq!(shop.map(|options| options.last_menu_item), Ok(LastMenuItem::SearchCart));
    }

    #[test]
    fn mods_override_defaults() {
        let mods = ThemeMods::new()
            .with(keys::TOP_BAR_ENABLE, true)
            .with(keys::TOP_BAR_LAYOUT, "menu-content")
            .with(keys::NAVIGATION_LAYOUT, "center")
            .with(keys::LAST_MENU_ITEM, "cart");
        assert_eq!(
            HeaderOptions::from_mods(&mods, false),
            Ok(HeaderOptions {
                top_bar: Some(TopBarAlignment::MenuContent),
                navigation: NavigationLayout::Center,
                last_menu_item: LastMenuItem::Cart,
            })
        );
    }
}
