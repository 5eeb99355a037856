//! Scripted pagers for tests.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::config::PagerConfig;
use crate::error::PagerError;
use crate::process::{PagerProcess, Spawner};

/// How a mock pager program behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// The program is not installed.
    Missing,
    /// Reads everything and exits successfully.
    Accept,
    /// Reads everything, then exits with this status.
    Fail(i32),
    /// The user quits before all input is read; exits successfully.
    QuitEarly,
    /// Dies before reading, exiting with this status.
    Crash(i32),
}

/// A [`Spawner`] whose programs behave as scripted.
///
/// Clones share their record of attempts, so a test can keep one handle
/// while the dispatcher owns another.
///
/// ```rust
/// use lin_pager::{MockBehavior, MockSpawner, PagerConfig, Spawner};
///
/// let spawner = MockSpawner::new().program("less", MockBehavior::Accept);
/// let mut pager = spawner.spawn(&PagerConfig::new("less", ["-R"])).unwrap();
/// pager.write_and_close(b"hello\n").unwrap();
/// pager.wait_exit().unwrap();
///
/// assert_eq!(spawner.received("less").as_deref(), Some("hello\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSpawner {
    behaviors: HashMap<String, MockBehavior>,
    log: Arc<Mutex<Vec<MockCall>>>,
}

/// One spawn attempt seen by a [`MockSpawner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub config: PagerConfig,
    pub received: Vec<u8>,
}

impl MockSpawner {
    /// A spawner on which every program is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the behavior of `program`.
    pub fn program(mut self, program: impl Into<String>, behavior: MockBehavior) -> Self {
        self.behaviors.insert(program.into(), behavior);
        self
    }

    /// Every spawn attempt so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().clone()
    }

    /// Programs that were tried, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.lock().iter().map(|c| c.config.program.clone()).collect()
    }

    /// What the last started instance of `program` received.
    pub fn received(&self, program: &str) -> Option<String> {
        self.lock()
            .iter()
            .rev()
            .find(|c| c.config.program == program)
            .map(|c| String::from_utf8_lossy(&c.received).into_owned())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MockCall>> {
        // A poisoned log only means another test thread panicked.
        self.log.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Spawner for MockSpawner {
    fn spawn(&self, config: &PagerConfig) -> Result<Box<dyn PagerProcess>, PagerError> {
        let behavior = self
            .behaviors
            .get(&config.program)
            .copied()
            .unwrap_or(MockBehavior::Missing);

        let mut log = self.lock();
        log.push(MockCall {
            config: config.clone(),
            received: Vec::new(),
        });
        let index = log.len() - 1;

        if behavior == MockBehavior::Missing {
            return Err(PagerError::Spawn {
                program: config.program.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        Ok(Box::new(MockProcess {
            program: config.program.clone(),
            behavior,
            index,
            log: Arc::clone(&self.log),
        }))
    }
}

struct MockProcess {
    program: String,
    behavior: MockBehavior,
    index: usize,
    log: Arc<Mutex<Vec<MockCall>>>,
}

impl PagerProcess for MockProcess {
    fn write_and_close(&mut self, bytes: &[u8]) -> Result<(), PagerError> {
        let accepted: &[u8] = match self.behavior {
            MockBehavior::Accept | MockBehavior::Fail(_) => bytes,
            MockBehavior::QuitEarly => &bytes[..bytes.len().min(16)],
            MockBehavior::Crash(_) | MockBehavior::Missing => &[],
        };
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(call) = log.get_mut(self.index) {
            call.received.extend_from_slice(accepted);
        }

        if accepted.len() < bytes.len() {
            return Err(PagerError::Write {
                program: self.program.clone(),
                source: io::Error::from(io::ErrorKind::BrokenPipe),
            });
        }
        Ok(())
    }

    fn wait_exit(&mut self) -> Result<(), PagerError> {
        match self.behavior {
            MockBehavior::Fail(code) | MockBehavior::Crash(code) => Err(PagerError::Exit {
                program: self.program.clone(),
                code: Some(code),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_program_is_missing() {
        let spawner = MockSpawner::new();
        let err = spawner
            .spawn(&PagerConfig::new("less", Vec::<String>::new()))
            .err()
            .unwrap();
        assert!(matches!(err, PagerError::Spawn { .. }));
        assert_eq!(spawner.attempts(), vec!["less"]);
    }

    #[test]
    fn quit_early_is_broken_pipe_then_success() {
        let spawner = MockSpawner::new().program("less", MockBehavior::QuitEarly);
        let mut process = spawner
            .spawn(&PagerConfig::new("less", Vec::<String>::new()))
            .unwrap();

        let err = process.write_and_close(&[b'x'; 100]).unwrap_err();
        assert!(err.is_broken_pipe());
        assert!(process.wait_exit().is_ok());
        assert_eq!(spawner.received("less").unwrap().len(), 16);
    }

    #[test]
    fn crash_fails_both_steps() {
        let spawner = MockSpawner::new().program("more", MockBehavior::Crash(2));
        let mut process = spawner
            .spawn(&PagerConfig::new("more", Vec::<String>::new()))
            .unwrap();

        assert!(process.write_and_close(b"data").unwrap_err().is_broken_pipe());
        assert!(matches!(
            process.wait_exit(),
            Err(PagerError::Exit { code: Some(2), .. })
        ));
    }

    #[test]
    fn clones_share_the_log() {
        let spawner = MockSpawner::new().program("less", MockBehavior::Accept);
        let handle = spawner.clone();
        let mut process = spawner
            .spawn(&PagerConfig::new("less", ["-R"]))
            .unwrap();
        process.write_and_close(b"a\nb\n").unwrap();

        assert_eq!(handle.received("less").as_deref(), Some("a\nb\n"));
        assert_eq!(handle.calls()[0].config.args, vec!["-R"]);
    }
}
