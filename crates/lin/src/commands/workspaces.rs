use anyhow::Result;
use console::Style;
use lin_render::tabular::{Cell, ColumnSpec, Tabular, TabularRow};
use lin_render::TerminalContext;
use serde::Deserialize;

use super::render;
use crate::source::Snapshot;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url_key: String,
}

/// An organization and whether it is the one in use.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub organization: Organization,
    pub current: bool,
}

impl Tabular for Workspace {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::flexible("Name"),
            ColumnSpec::fixed("URL Key"),
            ColumnSpec::fixed("Current").center(),
        ]
    }
}

impl TabularRow for Workspace {
    fn to_cells(&self) -> Vec<Cell> {
        let marker = if self.current {
            Cell::styled("*", Style::new().green().bold())
        } else {
            Cell::default()
        };
        vec![
            Cell::plain(&self.organization.name),
            Cell::plain(&self.organization.url_key),
            marker,
        ]
    }
}

/// Workspaces from `data.organizations`, or the single `data.organization`.
///
/// In a list, the workspace whose URL key equals `current` is marked; a
/// single organization is the viewer's own and always current.
pub fn workspaces(snapshot: &Snapshot, current: Option<&str>) -> Result<Vec<Workspace>> {
    if snapshot.has("organizations") {
        let organizations: Vec<Organization> = snapshot.get("organizations")?;
        return Ok(organizations
            .into_iter()
            .map(|organization| Workspace {
                current: current == Some(organization.url_key.as_str()),
                organization,
            })
            .collect());
    }

    let organization: Organization = snapshot.get("organization")?;
    Ok(vec![Workspace {
        organization,
        current: true,
    }])
}

pub fn list(
    snapshot: &Snapshot,
    ctx: TerminalContext,
    current: Option<&str>,
) -> Result<Vec<String>> {
    render(&workspaces(snapshot, current)?, ctx)
}
