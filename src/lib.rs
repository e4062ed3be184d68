//! Race-control classification and timing boards for Formula 1 session data.
//!
//! Pitboard turns exported session snapshots into the tables a race-engineering
//! dashboard renders: formatted lap tables, fastest-lap rankings, decoded track
//! status and annotated race-control messages.
//!
//! # Features
//!
//! - **Duration formatting**: lap times as `M:SS.mmm`, session clock as `H:MM:SS.mmm`
//! - **Message classification**: category, sanction, driver, car and lap for each
//!   race-control message
//! - **Session sources**: snapshot directories on disk or in-memory fixtures
//! - **Watching**: a background task that keeps a session board fresh
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pitboard::{SessionBoard, SessionKey, SessionKind, SessionSource, SnapshotDirectory};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> pitboard::Result<()> {
//!     let mut source = SnapshotDirectory::new("snapshots");
//!     let key = SessionKey::new(2024, 6, SessionKind::Sprint)?;
//!
//!     if let Some(snapshot) = source.load(&key).await? {
//!         let board = SessionBoard::build(&snapshot);
//!         for penalty in board.penalties() {
//!             println!("{} {} lap {}", penalty.driver_label(), penalty.penalty_type, penalty.lap_label());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod format;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Classification and boards
pub mod board;
pub mod classify;

// Session data
pub mod session;
pub mod source;
pub mod watcher;

// Core exports
pub use error::*;
pub use format::{NOT_AVAILABLE, format_lap_time, format_race_time};
pub use types::*;

// Classification exports
pub use board::SessionBoard;
pub use classify::{RaceControlClassifier, classify};

// Session exports
pub use session::{EventInfo, EventSchedule, SessionKey, SessionKind, SessionSnapshot};
pub use source::{SessionSource, SnapshotDirectory, StaticSource};
pub use watcher::{SessionWatcher, WatchChannels, WatchConfig};
