//! Listing commands.
//!
//! Each command decodes its records from the response, maps them to cells
//! through `Tabular`/`TabularRow`, and hands the rendered lines to the pager.

pub mod issues;
pub mod projects;
pub mod teams;
pub mod workspaces;

use anyhow::Result;
use console::Style;
use lin_pager::{Delivery, Pager, Platform};
use lin_render::tabular::{Cell, Table, Tabular, TabularRow};
use lin_render::{hex_style, TerminalContext};
use tracing::debug;

use crate::cli::{Action, Command};
use crate::config::Settings;
use crate::source::Snapshot;

/// Run `command` and deliver its output.
pub fn run(command: Command, settings: &Settings, ctx: TerminalContext) -> Result<Delivery> {
    let snapshot = Snapshot::load(&settings.source)?;
    let lines = match command {
        Command::Issue(Action::List) => issues::list(&snapshot, ctx)?,
        Command::Project(Action::List) => projects::list(&snapshot, ctx)?,
        Command::Team(Action::List) => teams::list(&snapshot, ctx)?,
        Command::Workspace(Action::List) => {
            workspaces::list(&snapshot, ctx, settings.workspace.as_deref())?
        }
    };

    let pager = Pager::new(Platform::current())
        .preference(settings.pager.clone())
        .enabled(settings.pager_enabled);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let delivery = pager.dispatch(&lines, &ctx, &mut out);
    debug!(?delivery, "output delivered");
    Ok(delivery)
}

/// Lay out `records` for `ctx` and render every line.
pub(crate) fn render<T: Tabular + TabularRow>(
    records: &[T],
    ctx: TerminalContext,
) -> Result<Vec<String>> {
    let table = Table::from_rows(records, ctx)?;
    debug!(
        rows = records.len(),
        width = ctx.layout_width(),
        widths = ?table.widths().widths,
        "laid out table"
    );
    Ok(table.lines())
}

/// A cell in the service-provided `#rrggbb` color, if there is one.
pub(crate) fn colored(text: &str, color: Option<&str>) -> Cell {
    Cell::styled(text, color.map(hex_style).unwrap_or_else(Style::new))
}
