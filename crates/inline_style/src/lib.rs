//! Responsive inline CSS composition.
//!
//! Option readers push `(selector, rules)` contributions into a
//! [`StyleComposer`], which keeps one append-only text buffer per
//! [`Breakpoint`]. Wrapping the tablet and desktop buffers in media queries is
//! left to the caller.

#![forbid(unsafe_code)]

mod breakpoint;
pub use breakpoint::{Breakpoint, Responsive};

mod rule;
pub use rule::{ColorTarget, ResponsiveRule, StyleRule};

mod composer;
pub use composer::StyleComposer;
