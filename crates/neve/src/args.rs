//! Command-line parsing.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// What to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Header grid defaults as JSON
    Header,
    /// Footer grid defaults as JSON
    Footer,
    /// Typography CSS with media queries
    Css,
    /// Resolved typography settings as JSON
    Typography,
    /// Builder component registry as JSON
    Support,
}

/// A parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// Theme-mods JSON file; no file means an untouched site
    pub mods: Option<PathBuf>,
    /// Whether the shop plugin is active
    pub ecommerce: bool,
}

pub const USAGE: &str = "Usage:
  neve header [--mods <FILE>] [--ecommerce]
  neve footer
  neve css [--mods <FILE>]
  neve typography [--mods <FILE>]
  neve support [--mods <FILE>]";

/// Parse arguments, excluding the program name.
///
/// # Errors
/// Returns an error for a missing or unknown command, an unknown flag, or a
/// flag missing its value.
pub fn parse_args(mut args: Vec<String>) -> Result<Invocation> {
    if args.is_empty() {
        return Err(anyhow!("missing command"));
    }
    let command = match args.remove(0).as_str() {
        "header" => Command::Header,
        "footer" => Command::Footer,
        "css" => Command::Css,
        "typography" => Command::Typography,
        "support" => Command::Support,
        other => return Err(anyhow!("unknown command '{other}'")),
    };

    let mut invocation = Invocation {
        command,
        mods: None,
        ecommerce: false,
    };
    let mut rest = args.into_iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--mods" => {
                let path = rest.next().ok_or_else(|| anyhow!("--mods requires a path"))?;
                invocation.mods = Some(PathBuf::from(path));
            }
            "--ecommerce" => invocation.ecommerce = true,
            other => return Err(anyhow!("unknown argument '{other}'")),
        }
    }
    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn parses_flags_in_any_order() -> Result<()> {
        let invocation = parse_args(args(&["header", "--ecommerce", "--mods", "mods.json"]))?;
        assert_eq!(
            invocation,
            Invocation {
                command: Command::Header,
                mods: Some(PathBuf::from("mods.json")),
                ecommerce: true,
            }
        );
        Ok(())
    }

    fn error_of(raw: &[&str]) -> Option<String> {
        parse_args(args(raw)).err().map(|err| err.to_string())
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(error_of(&[]).as_deref(), Some("missing command"));
        assert_eq!(error_of(&["sidebar"]).as_deref(), Some("unknown command 'sidebar'"));
        assert_eq!(error_of(&["css", "--mods"]).as_deref(), Some("--mods requires a path"));
        assert_eq!(
            error_of(&["css", "--verbose"]).as_deref(),
            Some("unknown argument '--verbose'")
        );
    }
}
