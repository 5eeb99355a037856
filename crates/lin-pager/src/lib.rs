//! # lin-pager - Paging With Fallback
//!
//! Sends rendered lines to the user's pager when they will not fit on one
//! screen, and falls back through the platform's pagers, and finally to
//! plain output, when a pager is missing or misbehaves.
//!
//! Process handling sits behind the [`Spawner`] and [`PagerProcess`]
//! traits: [`SystemSpawner`] runs real programs, [`MockSpawner`] scripts
//! them for tests.

mod config;
mod dispatch;
mod error;
mod mock;
mod platform;
pub mod process;

pub use config::PagerConfig;
pub use dispatch::{Delivery, Pager, PROMPT_LINES};
pub use error::PagerError;
pub use mock::{MockBehavior, MockCall, MockSpawner};
pub use platform::Platform;
pub use process::{PagerProcess, Spawner, SystemSpawner};
