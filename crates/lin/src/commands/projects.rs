use anyhow::Result;
use lin_render::tabular::{Cell, ColumnSpec, Tabular, TabularRow};
use lin_render::TerminalContext;
use serde::Deserialize;

use super::{colored, render};
use crate::model::{user_or_missing, User};
use crate::source::Snapshot;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub lead: Option<User>,
    /// Completion between 0.0 and 1.0.
    #[serde(default)]
    pub progress: f64,
}

impl Project {
    fn progress_label(&self) -> String {
        let percent = (self.progress * 100.0).round().clamp(0.0, 100.0);
        format!("{}%", percent as u8)
    }
}

impl Tabular for Project {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::flexible("Name"),
            ColumnSpec::fixed("State"),
            ColumnSpec::fixed("Lead").max(20),
            ColumnSpec::fixed("Progress").right(),
        ]
    }
}

impl TabularRow for Project {
    fn to_cells(&self) -> Vec<Cell> {
        vec![
            colored(&self.name, self.color.as_deref()),
            Cell::plain(&self.state),
            Cell::plain(user_or_missing(self.lead.as_ref())),
            Cell::plain(self.progress_label()),
        ]
    }
}

pub fn list(snapshot: &Snapshot, ctx: TerminalContext) -> Result<Vec<String>> {
    let projects: Vec<Project> = snapshot.get("projects.nodes")?;
    render(&projects, ctx)
}
