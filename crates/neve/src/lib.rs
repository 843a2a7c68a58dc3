//! Print header/footer defaults and typography CSS for a set of theme mods.

#![forbid(unsafe_code)]

pub mod args;
pub mod commands;

pub use args::{Command, Invocation, USAGE, parse_args};
pub use commands::{render_css, run, typography_css};
