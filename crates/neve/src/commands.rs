//! Command implementations. Each returns the text to print.

use crate::args::{Command, Invocation};
use anyhow::{Context as _, Result};
use core::fmt::Write as _;
use hfg::{HeaderOptions, ThemeSupport, footer_defaults, header_defaults};
use inline_style::{Breakpoint, StyleComposer};
use log::info;
use serde::Serialize;
use serde_json::to_string_pretty;
use theme_mods::ThemeMods;
use typography::{BodyTypography, HeadingsTypography, add_body_styles, add_heading_styles};

/// Lower bound of the tablet tier.
pub const TABLET_MIN_WIDTH: u32 = 576;
/// Lower bound of the desktop tier.
pub const DESKTOP_MIN_WIDTH: u32 = 960;

/// Load the mods for `invocation` and run its command.
///
/// # Errors
/// Returns an error if the mods cannot be loaded, a layout option is invalid,
/// or serialization fails.
pub fn run(invocation: &Invocation) -> Result<String> {
    let mods = match &invocation.mods {
        Some(path) => ThemeMods::load(path)
            .with_context(|| format!("loading theme mods from {}", path.display()))?,
        None => ThemeMods::default(),
    };
    info!("running {:?} with {} theme mods", invocation.command, mods.len());

    match invocation.command {
        Command::Header => {
            let options = HeaderOptions::from_mods(&mods, invocation.ecommerce)
                .context("resolving header layout")?;
            pretty(&header_defaults(&options))
        }
        Command::Footer => pretty(&footer_defaults()),
        Command::Css => Ok(render_css(&typography_css(&mods))),
        Command::Typography => pretty(&TypographyDump {
            body: BodyTypography::from_mods(&mods),
            headings: HeadingsTypography::from_mods(&mods),
        }),
        Command::Support => pretty(&ThemeSupport::from_mods(&mods)),
    }
}

#[derive(Serialize)]
struct TypographyDump {
    body: BodyTypography,
    headings: HeadingsTypography,
}

fn pretty<Output: Serialize>(value: &Output) -> Result<String> {
    to_string_pretty(value).context("serializing output")
}

/// Run every CSS producer over one composer.
pub fn typography_css(mods: &ThemeMods) -> StyleComposer {
    let mut composer = StyleComposer::new();
    add_body_styles(&mut composer, &BodyTypography::from_mods(mods));
    add_heading_styles(&mut composer, &HeadingsTypography::from_mods(mods));
    composer
}

/// Print the three tiers, wrapping tablet and desktop in min-width queries.
/// Empty tiers are left out.
pub fn render_css(composer: &StyleComposer) -> String {
    let mut out = String::new();
    for breakpoint in Breakpoint::ALL {
        let css = composer.style(breakpoint);
        if css.is_empty() {
            continue;
        }
        match breakpoint {
            Breakpoint::Mobile => out.push_str(css),
            Breakpoint::Tablet => push_media(&mut out, TABLET_MIN_WIDTH, css),
            Breakpoint::Desktop => push_media(&mut out, DESKTOP_MIN_WIDTH, css),
        }
    }
    out
}

fn push_media(out: &mut String, min_width: u32, css: &str) {
    drop(write!(out, "@media(min-width: {min_width}px){{{css}}}"));
}
