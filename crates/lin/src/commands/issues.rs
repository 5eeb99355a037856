use anyhow::Result;
use console::Style;
use lin_render::tabular::{Cell, ColumnSpec, Tabular, TabularRow};
use lin_render::{hex_style, TerminalContext};
use serde::Deserialize;

use super::{colored, render};
use crate::model::{user_or_missing, Connection, User, MISSING};
use crate::source::Snapshot;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub state: Option<WorkflowState>,
    #[serde(default)]
    pub labels: Connection<Label>,
    #[serde(default)]
    pub assignee: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowState {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Tabular for Issue {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::fixed("ID"),
            ColumnSpec::flexible("Title"),
            ColumnSpec::fixed("State"),
            ColumnSpec::fixed("Labels").max(24),
            ColumnSpec::fixed("Assignee").max(20),
        ]
    }
}

impl TabularRow for Issue {
    fn to_cells(&self) -> Vec<Cell> {
        let state = match &self.state {
            Some(state) => colored(&state.name, state.color.as_deref()),
            None => Cell::plain(MISSING),
        };
        vec![
            Cell::plain(&self.identifier),
            Cell::plain(&self.title),
            state,
            labels_cell(&self.labels.nodes),
            Cell::plain(user_or_missing(self.assignee.as_ref())),
        ]
    }
}

/// One run per label in its own color, separated by unstyled commas.
fn labels_cell(labels: &[Label]) -> Cell {
    labels
        .iter()
        .enumerate()
        .fold(Cell::default(), |cell, (i, label)| {
            let cell = if i > 0 { cell.push(", ", Style::new()) } else { cell };
            let style = label.color.as_deref().map(hex_style).unwrap_or_default();
            cell.push(&label.name, style)
        })
}

pub fn list(snapshot: &Snapshot, ctx: TerminalContext) -> Result<Vec<String>> {
    let issues: Vec<Issue> = snapshot.get("issues.nodes")?;
    render(&issues, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_render::tabular::display_width;

    const RESPONSE: &str = r##"{
      "data": {
        "issues": {
          "nodes": [
            {
              "identifier": "ENG-101",
              "title": "Fix login redirect loop on Safari",
              "state": {"name": "Todo", "color": "#e2e2e2"},
              "labels": {"nodes": [
                {"name": "bug", "color": "#eb5757"},
                {"name": "frontend", "color": "#5e6ad2"}
              ]},
              "assignee": {"name": "Ana Lima", "displayName": "ana"}
            },
            {
              "identifier": "ENG-7",
              "title": "Add CSV export",
              "state": {"name": "In Progress", "color": "#f2c94c"},
              "labels": {"nodes": []},
              "assignee": null
            }
          ]
        }
      }
    }"##;

    fn snapshot() -> Snapshot {
        Snapshot::parse(RESPONSE).unwrap()
    }

    fn line(cells: [&str; 5], title: usize) -> String {
        format!(
            "{:<7} {:<title$} {:<11} {:<13} {:<8}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            title = title
        )
    }

    #[test]
    fn renders_plain_table() {
        let ctx = TerminalContext::new(80, 24).interactive(true);
        let lines = list(&snapshot(), ctx).unwrap();

        assert_eq!(
            lines,
            vec![
                line(["ID", "Title", "State", "Labels", "Assignee"], 33),
                line(
                    ["ENG-101", "Fix login redirect loop on Safari", "Todo", "bug, frontend", "ana"],
                    33
                ),
                line(["ENG-7", "Add CSV export", "In Progress", "", "-"], 33),
            ]
        );
    }

    #[test]
    fn narrow_terminal_truncates_title() {
        let ctx = TerminalContext::new(60, 24).interactive(true);
        let lines = list(&snapshot(), ctx).unwrap();

        assert_eq!(
            lines[1],
            line(
                ["ENG-101", "Fix login red...", "Todo", "bug, frontend", "ana"],
                16
            )
        );
        assert_eq!(
            lines[2],
            line(["ENG-7", "Add CSV export", "In Progress", "", "-"], 16)
        );
        assert!(lines.iter().all(|l| display_width(l) < 60));
    }

    #[test]
    fn labels_keep_their_colors() {
        let ctx = TerminalContext::new(80, 24).interactive(true).color(true);
        let lines = list(&snapshot(), ctx).unwrap();

        assert!(lines[1].contains("\x1b[38;5;167mbug\x1b[0m, \x1b[38;5;68mfrontend\x1b[0m"));
        for l in &lines {
            assert_eq!(display_width(l), 7 + 33 + 11 + 13 + 8 + 4);
        }
    }

    #[test]
    fn long_label_list_is_capped() {
        let issue = Issue {
            identifier: "ENG-1".into(),
            title: "t".into(),
            state: None,
            labels: Connection {
                nodes: ["bug", "frontend", "needs-design", "regression"]
                    .iter()
                    .map(|n| Label {
                        name: n.to_string(),
                        color: None,
                    })
                    .collect(),
            },
            assignee: None,
        };
        let lines = render(&[issue], TerminalContext::new(200, 24).interactive(true)).unwrap();

        let columns = Issue::columns();
        assert_eq!(columns[3].max_width, Some(24));
        assert!(lines[1].contains("bug, frontend, needs-..."));
        assert!(lines[1].contains(" - "));
    }

    #[test]
    fn empty_result_prints_header_only() {
        let snapshot = Snapshot::parse(r#"{"data": {"issues": {"nodes": []}}}"#).unwrap();
        let lines = list(&snapshot, TerminalContext::new(80, 24)).unwrap();
        assert_eq!(lines, vec!["ID Title State Labels Assignee"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let snapshot = Snapshot::parse(r#"{"data": {"teams": {"nodes": []}}}"#).unwrap();
        assert!(list(&snapshot, TerminalContext::default()).is_err());
    }
}
