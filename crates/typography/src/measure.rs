//! Responsive numeric settings as stored by the customizer.

use inline_style::{Responsive, ResponsiveRule};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use theme_mods::ThemeMods;

/// A value per breakpoint plus the unit printed after it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResponsiveMeasure {
    pub value: Responsive<Option<String>>,
    pub suffix: Responsive<Option<String>>,
}

/// Stored form: numbers or strings per breakpoint, optional per-breakpoint unit.
#[derive(Deserialize)]
struct StoredMeasure {
    #[serde(default)]
    mobile: Value,
    #[serde(default)]
    tablet: Value,
    #[serde(default)]
    desktop: Value,
    #[serde(default)]
    suffix: Option<StoredSuffix>,
}

#[derive(Deserialize)]
struct StoredSuffix {
    #[serde(default)]
    mobile: Option<String>,
    #[serde(default)]
    tablet: Option<String>,
    #[serde(default)]
    desktop: Option<String>,
}

impl ResponsiveMeasure {
    /// Unitless values.
    pub fn unitless(mobile: &str, tablet: &str, desktop: &str) -> Self {
        Self {
            value: Responsive::new(
                Some(mobile.to_owned()),
                Some(tablet.to_owned()),
                Some(desktop.to_owned()),
            ),
            suffix: Responsive::default(),
        }
    }

    /// Values sharing one unit.
    pub fn with_unit(mobile: &str, tablet: &str, desktop: &str, unit: &str) -> Self {
        Self {
            suffix: Responsive::uniform(Some(unit.to_owned())),
            ..Self::unitless(mobile, tablet, desktop)
        }
    }

    /// Same value everywhere.
    pub fn uniform(value: &str, unit: Option<&str>) -> Self {
        Self {
            value: Responsive::uniform(Some(value.to_owned())),
            suffix: Responsive::uniform(unit.map(ToOwned::to_owned)),
        }
    }

    /// Decode a stored measure. Breakpoints without a stored unit keep the
    /// unit from `fallback`.
    pub fn from_mods(mods: &ThemeMods, key: &str, fallback: &Self) -> Option<Self> {
        let stored: StoredMeasure = mods.decode(key)?;
        let value = Responsive::new(
            value_text(&stored.mobile),
            value_text(&stored.tablet),
            value_text(&stored.desktop),
        );
        let suffix = match stored.suffix {
            Some(units) => Responsive::new(
                units.mobile.or_else(|| fallback.suffix.mobile.clone()),
                units.tablet.or_else(|| fallback.suffix.tablet.clone()),
                units.desktop.or_else(|| fallback.suffix.desktop.clone()),
            ),
            None => fallback.suffix.clone(),
        };
        Some(Self { value, suffix })
    }

    /// Rule for `property` carrying every breakpoint's value and unit.
    pub fn rule(&self, property: &str) -> ResponsiveRule {
        ResponsiveRule::new(property, self.value.clone())
            .with_responsive_suffix(self.suffix.clone())
    }
}

/// Text of a stored scalar. Empty strings and non-scalars count as unset.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Null | Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
            None
        }
    }
}
