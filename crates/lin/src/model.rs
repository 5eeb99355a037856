//! Shapes shared by several API records.

use serde::Deserialize;

/// Shown in place of an optional value that is absent.
pub const MISSING: &str = "-";

/// A paginated list; only the current page's nodes matter here.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    /// The short name people recognise, falling back to the full name.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Display text for an optional user.
pub fn user_or_missing(user: Option<&User>) -> String {
    user.map_or(MISSING, User::label).to_string()
}
