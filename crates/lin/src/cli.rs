use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Browse issues, projects, teams and workspaces from the terminal.
#[derive(Debug, Parser)]
#[command(name = "lin", version, about)]
pub struct Cli {
    /// Never send output through a pager
    #[arg(long, global = true)]
    pub no_pager: bool,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Read the API response from FILE instead of stdin ("-" for stdin)
    #[arg(long, value_name = "FILE", global = true)]
    pub from: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Work with issues
    #[command(subcommand)]
    Issue(Action),
    /// Work with projects
    #[command(subcommand)]
    Project(Action),
    /// Work with teams
    #[command(subcommand)]
    Team(Action),
    /// Work with workspaces
    #[command(subcommand)]
    Workspace(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// List as a table
    List,
}
