//! Loading already-fetched API responses.
//!
//! A response is a GraphQL body, `{"data": {...}}`, possibly carrying an
//! `errors` array. Commands pick their records out of it by path.

use std::io::Read;

use anyhow::{anyhow, bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Source;

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// A decoded response body.
#[derive(Debug, Clone)]
pub struct Snapshot {
    data: Value,
}

impl Snapshot {
    /// Read and parse the response from `source`.
    pub fn load(source: &Source) -> Result<Snapshot> {
        let text = match source {
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read response from stdin")?;
                text
            }
        };
        debug!(bytes = text.len(), ?source, "loaded response");
        Snapshot::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Snapshot> {
        let body: Value = serde_json::from_str(text).context("response is not valid JSON")?;

        let errors: Vec<GraphQlError> = match body.get("errors") {
            Some(errors) => serde_json::from_value(errors.clone())
                .context("response has a malformed `errors` list")?,
            None => Vec::new(),
        };

        match body.get("data") {
            Some(data) if !data.is_null() => {
                for err in &errors {
                    debug!(message = %err.message, "response carries a partial error");
                }
                Ok(Snapshot { data: data.clone() })
            }
            _ if !errors.is_empty() => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                bail!("the API returned errors: {}", messages.join("; "))
            }
            _ => bail!("response has no `data` object"),
        }
    }

    /// Decode the value at a dotted `path` under `data`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .lookup(path)
            .ok_or_else(|| anyhow!("response has no `data.{}`", path))?;
        serde_json::from_value(value.clone())
            .with_context(|| format!("`data.{}` has an unexpected shape", path))
    }

    /// Whether a non-null value exists at `path` under `data`.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.data, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }
}
