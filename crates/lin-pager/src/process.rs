//! The process handle the dispatcher is written against.
//!
//! A [`Spawner`] starts a pager and hands back a [`PagerProcess`]. The
//! dispatcher only ever writes all of its input, closes the pipe, and waits;
//! [`SystemSpawner`] does that with `std::process`, while tests use
//! [`crate::MockSpawner`].

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use tracing::trace;

use crate::config::PagerConfig;
use crate::error::PagerError;

/// Starts pager processes.
pub trait Spawner: Send + Sync {
    fn spawn(&self, config: &PagerConfig) -> Result<Box<dyn PagerProcess>, PagerError>;
}

/// A running pager.
pub trait PagerProcess {
    /// Write all of `bytes` to the pager's input, then close it.
    ///
    /// The input is closed even when the write fails partway.
    fn write_and_close(&mut self, bytes: &[u8]) -> Result<(), PagerError>;

    /// Wait for the pager to exit. A non-success status is an error.
    fn wait_exit(&mut self) -> Result<(), PagerError>;
}

/// Spawns real processes with stdin piped and stdout/stderr inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, config: &PagerConfig) -> Result<Box<dyn PagerProcess>, PagerError> {
        if config.program.is_empty() {
            return Err(PagerError::EmptyCommand);
        }

        let spawn_error = |source: io::Error| PagerError::Spawn {
            program: config.program.clone(),
            source,
        };

        let path = which::which(&config.program)
            .map_err(|err| spawn_error(io::Error::new(io::ErrorKind::NotFound, err)))?;
        trace!(program = %config.program, path = %path.display(), "resolved pager");

        let child = Command::new(&path)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(spawn_error)?;

        Ok(Box::new(SystemProcess {
            program: config.program.clone(),
            child,
        }))
    }
}

struct SystemProcess {
    program: String,
    child: Child,
}

impl PagerProcess for SystemProcess {
    fn write_and_close(&mut self, bytes: &[u8]) -> Result<(), PagerError> {
        // Taking stdin out of the child drops it at the end of this scope,
        // closing the pipe on every path.
        let Some(mut stdin) = self.child.stdin.take() else {
            return Ok(());
        };
        stdin
            .write_all(bytes)
            .and_then(|()| stdin.flush())
            .map_err(|source| PagerError::Write {
                program: self.program.clone(),
                source,
            })
    }

    fn wait_exit(&mut self) -> Result<(), PagerError> {
        let status = self.child.wait().map_err(|source| PagerError::Wait {
            program: self.program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(PagerError::Exit {
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}
