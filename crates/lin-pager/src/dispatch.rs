//! Delivering rendered lines: directly, or through a pager with fallbacks.
//!
//! ```text
//! Decide ──▶ Direct ───────────────────────────────▶ Done
//!    │
//!    └────▶ Paged ──ok / user quit──────────────────▶ Done
//!              │
//!              └─failed─▶ Fallback ──first success──▶ Done
//!                            │
//!                            └─all failed─▶ Direct ─▶ Done
//! ```
//!
//! Nothing here returns an error. A pager that cannot be started, exits
//! badly, or stops reading is logged and replaced by the next candidate;
//! the last resort is writing the lines ourselves.

use std::io::{self, Write};

use lin_render::TerminalContext;
use tracing::{debug, warn};

use crate::config::PagerConfig;
use crate::error::PagerError;
use crate::platform::Platform;
use crate::process::{Spawner, SystemSpawner};

/// Lines reserved below the output so the prompt does not scroll the
/// first rows away.
pub const PROMPT_LINES: usize = 2;

/// How the output finally reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Written straight to the output stream; paging was not wanted.
    Direct,
    /// A pager received every line and exited successfully.
    Paged { program: String },
    /// The user closed the pager before reading everything.
    UserExit { program: String },
    /// Every pager failed and the lines were written directly.
    DirectAfterFailure,
}

enum Attempt {
    Finished,
    QuitEarly,
}

/// Decides whether to page and delivers the lines.
///
/// ```rust
/// use lin_pager::{Delivery, MockBehavior, MockSpawner, Pager, Platform};
/// use lin_render::TerminalContext;
///
/// let spawner = MockSpawner::new().program("less", MockBehavior::Accept);
/// let pager = Pager::new(Platform::Unix).with_spawner(spawner.clone());
///
/// let ctx = TerminalContext::new(80, 10).interactive(true);
/// let lines: Vec<String> = (0..50).map(|i| format!("row {}", i)).collect();
///
/// let mut out = Vec::new();
/// let delivery = pager.dispatch(&lines, &ctx, &mut out);
///
/// assert_eq!(delivery, Delivery::Paged { program: "less".into() });
/// assert!(out.is_empty());
/// ```
pub struct Pager {
    platform: Platform,
    preference: Option<String>,
    enabled: bool,
    spawner: Box<dyn Spawner>,
}

impl Pager {
    /// A pager for `platform` that spawns real processes.
    pub fn new(platform: Platform) -> Self {
        Pager {
            platform,
            preference: None,
            enabled: true,
            spawner: Box::new(SystemSpawner),
        }
    }

    /// The user's pager command line (typically from `PAGER`).
    pub fn preference(mut self, preference: Option<String>) -> Self {
        self.preference = preference;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_spawner<S: Spawner + 'static>(mut self, spawner: S) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    /// Whether `line_count` lines should go through a pager.
    ///
    /// Only on an interactive terminal of known height, and only when the
    /// lines do not fit above the prompt.
    pub fn should_page(&self, line_count: usize, ctx: &TerminalContext) -> bool {
        self.enabled
            && ctx.is_interactive
            && ctx.has_height()
            && line_count > ctx.height.saturating_sub(PROMPT_LINES)
    }

    /// The first pager to try.
    pub fn primary(&self, color: bool) -> PagerConfig {
        PagerConfig::resolve(self.preference.as_deref(), self.platform).with_color(color)
    }

    /// Deliver `lines`, paging when appropriate.
    ///
    /// `out` is only written to when the lines are not paged.
    pub fn dispatch(
        &self,
        lines: &[String],
        ctx: &TerminalContext,
        out: &mut dyn Write,
    ) -> Delivery {
        if !self.should_page(lines.len(), ctx) {
            debug!(
                lines = lines.len(),
                height = ctx.height,
                interactive = ctx.is_interactive,
                enabled = self.enabled,
                "writing output directly"
            );
            write_direct(lines, out);
            return Delivery::Direct;
        }

        let payload = join_lines(lines);
        let primary = self.primary(ctx.color_enabled);
        let fallbacks = PagerConfig::fallbacks(self.platform)
            .into_iter()
            .map(|config| config.with_color(ctx.color_enabled));

        let mut failed: Vec<String> = Vec::new();
        for config in std::iter::once(primary).chain(fallbacks) {
            if failed.contains(&config.program) {
                continue;
            }
            debug!(pager = %config.display(), lines = lines.len(), "starting pager");
            match self.attempt(&config, &payload) {
                Ok(Attempt::Finished) => {
                    return Delivery::Paged {
                        program: config.program,
                    }
                }
                Ok(Attempt::QuitEarly) => {
                    debug!(pager = %config.program, "pager closed before reading all output");
                    return Delivery::UserExit {
                        program: config.program,
                    };
                }
                Err(err) => {
                    debug!(pager = %config.program, %err, "pager failed, trying next");
                    failed.push(config.program);
                }
            }
        }

        warn!(tried = ?failed, "no pager could display the output, writing directly");
        write_direct(lines, out);
        Delivery::DirectAfterFailure
    }

    /// Spawn, feed, close and wait for one pager.
    ///
    /// A broken pipe counts as the user quitting only when the pager then
    /// exits successfully; a pager that dies before reading is a failure.
    fn attempt(&self, config: &PagerConfig, payload: &[u8]) -> Result<Attempt, PagerError> {
        let mut process = self.spawner.spawn(config)?;
        let written = process.write_and_close(payload);
        let exited = process.wait_exit();

        match (written, exited) {
            (Ok(()), Ok(())) => Ok(Attempt::Finished),
            (Err(write), Ok(())) if write.is_broken_pipe() => Ok(Attempt::QuitEarly),
            (Err(write), Ok(())) => Err(write),
            (Ok(()), Err(exit)) => Err(exit),
            (Err(write), Err(exit)) => {
                debug!(pager = %config.program, %write, "write failed before exit");
                Err(exit)
            }
        }
    }
}

fn join_lines(lines: &[String]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        payload.extend_from_slice(line.as_bytes());
        payload.push(b'\n');
    }
    payload
}

/// Write every line to `out`. A failing stream is logged and abandoned.
fn write_direct(lines: &[String], out: &mut dyn Write) {
    let result = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line))
        .and_then(|()| out.flush());

    if let Err(err) = result {
        match err.kind() {
            io::ErrorKind::BrokenPipe => debug!("output closed by reader"),
            _ => debug!(%err, "writing output failed"),
        }
    }
}
