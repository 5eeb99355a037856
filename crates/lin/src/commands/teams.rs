use anyhow::Result;
use lin_render::tabular::{Cell, ColumnSpec, Tabular, TabularRow};
use lin_render::TerminalContext;
use serde::Deserialize;

use super::render;
use crate::model::{Connection, User};
use crate::source::Snapshot;

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub members: Connection<User>,
}

impl Tabular for Team {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::fixed("Key"),
            ColumnSpec::flexible("Name"),
            ColumnSpec::fixed("Members").right(),
        ]
    }
}

impl TabularRow for Team {
    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.key),
            Cell::plain(&self.name),
            Cell::plain(self.members.nodes.len().to_string()),
        ]
    }
}

pub fn list(snapshot: &Snapshot, ctx: TerminalContext) -> Result<Vec<String>> {
    let teams: Vec<Team> = snapshot.get("teams.nodes")?;
    render(&teams, ctx)
}
