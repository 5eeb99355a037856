use std::io;

use thiserror::Error;

/// Why a single pager attempt failed.
///
/// These never reach the caller of [`crate::Pager::dispatch`]; each one
/// moves the dispatcher to the next fallback.
#[derive(Debug, Error)]
pub enum PagerError {
    #[error("pager `{program}` could not be started: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("writing to pager `{program}` failed: {source}")]
    Write {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("waiting for pager `{program}` failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("pager `{program}` exited with {}", exit_description(.code))]
    Exit { program: String, code: Option<i32> },

    #[error("pager command is empty")]
    EmptyCommand,
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl PagerError {
    /// The pipe was closed by the pager before all output was written.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PagerError::Write { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }

    /// The program this error is about, if any.
    pub fn program(&self) -> Option<&str> {
        match self {
            PagerError::Spawn { program, .. }
            | PagerError::Write { program, .. }
            | PagerError::Wait { program, .. }
            | PagerError::Exit { program, .. } => Some(program),
            PagerError::EmptyCommand => None,
        }
    }
}
