//! Font subset whitelist.

use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSubset {
    Latin,
    LatinExt,
    Cyrillic,
    CyrillicExt,
    Greek,
    GreekExt,
    Vietnamese,
}

impl FontSubset {
    pub const ALL: [Self; 7] = [
        Self::Latin,
        Self::LatinExt,
        Self::Cyrillic,
        Self::CyrillicExt,
        Self::Greek,
        Self::GreekExt,
        Self::Vietnamese,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latin => "latin",
            Self::LatinExt => "latin-ext",
            Self::Cyrillic => "cyrillic",
            Self::CyrillicExt => "cyrillic-ext",
            Self::Greek => "greek",
            Self::GreekExt => "greek-ext",
            Self::Vietnamese => "vietnamese",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subset| subset.as_str() == name)
    }
}

/// Keep only known subset names, in input order.
///
/// Anything other than an array resets to `latin`. An array with no valid
/// entries stays empty.
pub fn sanitize_font_subsets(value: &Value) -> Vec<FontSubset> {
    let Value::Array(items) = value else {
        return vec![FontSubset::Latin];
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(FontSubset::from_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_resets_to_latin() {
        assert_eq!(sanitize_font_subsets(&json!("cyrillic")), [FontSubset::Latin]);
        assert_eq!(sanitize_font_subsets(&Value::Null), [FontSubset::Latin]);
    }

    #[test]
    fn unknown_entries_are_dropped() {
        let sanitized = sanitize_font_subsets(&json!(["greek", "klingon", 4, "latin-ext"]));
        assert_eq!(sanitized, [FontSubset::Greek, FontSubset::LatinExt]);
        assert!(sanitize_font_subsets(&json!(["klingon"])).is_empty());
    }
}
