//! Settings resolved once at startup from flags and environment.

use std::path::PathBuf;

use lin_render::TerminalContext;

use crate::cli::{Cli, ColorChoice};

/// Filter used when `LIN_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Abstraction over environment variables.
pub trait EnvReader {
    /// The value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Where the API response is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pager_enabled: bool,
    /// Pager command line from `LIN_PAGER` or `PAGER`.
    pub pager: Option<String>,
    pub color: ColorChoice,
    /// `NO_COLOR` was set to a non-empty value.
    pub no_color: bool,
    pub log_filter: String,
    /// URL key of the workspace to mark as current.
    pub workspace: Option<String>,
    pub source: Source,
}

impl Settings {
    pub fn resolve(cli: &Cli, env: &dyn EnvReader) -> Settings {
        let non_empty = |name: &str| env.var(name).filter(|v| !v.trim().is_empty());

        let source = match &cli.from {
            Some(path) if path.as_os_str() != "-" => Source::File(path.clone()),
            _ => Source::Stdin,
        };

        Settings {
            pager_enabled: !cli.no_pager,
            pager: non_empty("LIN_PAGER").or_else(|| non_empty("PAGER")),
            color: cli.color,
            no_color: non_empty("NO_COLOR").is_some(),
            log_filter: non_empty("LIN_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            workspace: non_empty("LIN_WORKSPACE"),
            source,
        }
    }

    /// Apply the color policy to a detected terminal.
    pub fn terminal_context(&self, detected: TerminalContext) -> TerminalContext {
        let color = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detected.color_enabled && !self.no_color,
        };
        detected.color(color)
    }
}
