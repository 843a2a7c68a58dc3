//! Property/value pairs fed to the composer.

use crate::breakpoint::{Breakpoint, Responsive};

/// A single `property:value suffix` declaration.
///
/// Rules are transient: they are rendered into the composer's text the moment
/// they are added and never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRule {
    /// CSS property name, e.g. `font-size`.
    pub property: String,
    /// Raw value. `None` and `""` both count as unset.
    pub value: Option<String>,
    /// Appended directly after the value, e.g. `px`.
    pub suffix: Option<String>,
}

impl StyleRule {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: Some(value.into()),
            suffix: None,
        }
    }

    /// A rule whose value may be missing; the composer filters it out if so.
    pub fn optional(property: impl Into<String>, value: Option<String>) -> Self {
        Self {
            property: property.into(),
            value,
            suffix: None,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// True when the value is present and non-empty.
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Render as `property:valuesuffix;`, or `None` for malformed rules.
    pub(crate) fn render(&self) -> Option<String> {
        if self.property.is_empty() || !self.has_value() {
            return None;
        }
        let value = self.value.as_deref().unwrap_or_default();
        let suffix = self.suffix.as_deref().unwrap_or_default();
        Some(format!("{}:{value}{suffix};", self.property))
    }
}

/// A rule carrying one value (and suffix) per breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponsiveRule {
    pub property: String,
    pub value: Responsive<Option<String>>,
    pub suffix: Responsive<Option<String>>,
}

impl ResponsiveRule {
    pub fn new(property: impl Into<String>, value: Responsive<Option<String>>) -> Self {
        Self {
            property: property.into(),
            value,
            suffix: Responsive::default(),
        }
    }

    /// Same suffix on every breakpoint.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Responsive::uniform(Some(suffix.into()));
        self
    }

    #[must_use]
    pub fn with_responsive_suffix(mut self, suffix: Responsive<Option<String>>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Project down to the scalar rule for `breakpoint`.
    pub fn project(&self, breakpoint: Breakpoint) -> StyleRule {
        StyleRule {
            property: self.property.clone(),
            value: self.value.get(breakpoint).clone(),
            suffix: self.suffix.get(breakpoint).clone(),
        }
    }
}

/// Where a single color value should be written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTarget {
    pub selector: String,
    pub property: String,
    pub breakpoint: Breakpoint,
    pub suffix: String,
    /// Prepended to the color, e.g. `1px solid ` for a border shorthand.
    pub prefix: String,
}

impl ColorTarget {
    pub fn new(selector: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            property: property.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn at(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Build the rule for `value`. A missing or empty color leaves the rule
    /// value unset regardless of prefix.
    pub(crate) fn rule_for(&self, value: Option<&str>) -> StyleRule {
        let value = value
            .filter(|color| !color.is_empty())
            .map(|color| format!("{}{color}", self.prefix));
        StyleRule {
            property: self.property.clone(),
            value,
            suffix: Some(self.suffix.clone()),
        }
    }
}
