//! Append-only per-breakpoint CSS accumulator.

use crate::breakpoint::{Breakpoint, Responsive};
use crate::rule::{ColorTarget, ResponsiveRule, StyleRule};
use core::slice;
use log::{debug, trace};

/// Accumulated CSS text, one buffer per breakpoint.
///
/// One composer belongs to one render pass. Text only ever grows: every
/// operation either appends a complete `selector{...}` block or does nothing.
#[derive(Clone, Debug, Default)]
pub struct StyleComposer {
    buffers: [String; 3],
}

impl StyleComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `selector{rules}` to the `breakpoint` buffer.
    ///
    /// Does nothing when `rules` or `selector` is empty, or when no rule has a
    /// value. Rules missing a property or value are skipped individually.
    pub fn add_style(&mut self, rules: &[StyleRule], selector: &str, breakpoint: Breakpoint) {
        if rules.is_empty() || selector.is_empty() {
            return;
        }
        if !rules.iter().any(StyleRule::has_value) {
            trace!(target: "inline_style", "suppressed empty block for `{selector}` ({breakpoint})");
            return;
        }

        let mut block = String::with_capacity(selector.len() + 2);
        block.push_str(selector);
        block.push('{');
        for rendered in rules.iter().filter_map(StyleRule::render) {
            block.push_str(&rendered);
        }
        block.push('}');

        debug!(target: "inline_style", "{breakpoint}: {block}");
        self.buffers[breakpoint.index()].push_str(&block);
    }

    /// Same as [`Self::add_style`] but addressed by tag; unknown tags are ignored.
    pub fn add_style_for(&mut self, rules: &[StyleRule], selector: &str, tag: &str) {
        match Breakpoint::from_tag(tag) {
            Some(breakpoint) => self.add_style(rules, selector, breakpoint),
            None => trace!(target: "inline_style", "ignored unknown breakpoint `{tag}`"),
        }
    }

    /// Emit one block per breakpoint, each holding only that tier's values.
    pub fn add_responsive_style(&mut self, rules: &[ResponsiveRule], selector: &str) {
        for breakpoint in Breakpoint::ALL {
            let projected: Vec<StyleRule> =
                rules.iter().map(|rule| rule.project(breakpoint)).collect();
            self.add_style(&projected, selector, breakpoint);
        }
    }

    /// Write one color into every target.
    pub fn add_color(&mut self, targets: &[ColorTarget], value: Option<&str>) {
        for target in targets {
            let rule = target.rule_for(value);
            self.add_style(slice::from_ref(&rule), &target.selector, target.breakpoint);
        }
    }

    /// Accumulated text for `breakpoint`.
    pub fn style(&self, breakpoint: Breakpoint) -> &str {
        &self.buffers[breakpoint.index()]
    }

    /// Accumulated text for a tag, or `""` if the tag is unknown.
    pub fn style_for(&self, tag: &str) -> &str {
        Breakpoint::from_tag(tag).map_or("", |breakpoint| self.style(breakpoint))
    }

    /// Snapshot of all three buffers.
    pub fn styles(&self) -> Responsive<String> {
        Responsive::new(
            self.buffers[0].clone(),
            self.buffers[1].clone(),
            self.buffers[2].clone(),
        )
    }

    /// True if nothing has been appended to any breakpoint.
    pub fn is_empty(&self) -> bool {
        self.buffers.iter().all(String::is_empty)
    }
}
