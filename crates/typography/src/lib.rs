//! Typography settings and their CSS.
//!
//! Settings are resolved from theme mods over fixed defaults, then written
//! into a shared [`inline_style::StyleComposer`] by the producer functions.

#![forbid(unsafe_code)]

mod headings;
pub use headings::{HEADING_SIZE_UNIT, HeadingControl, HeadingLevel, heading_controls};

mod measure;
pub use measure::ResponsiveMeasure;

mod subsets;
pub use subsets::{FontSubset, sanitize_font_subsets};

mod settings;
pub use settings::{BodyTypography, DEFAULT_FAMILY, HeadingTypography, HeadingsTypography, keys};

mod producer;
pub use producer::{BODY_SELECTOR, add_body_styles, add_heading_styles, all_headings_selector};
