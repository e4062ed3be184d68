//! Session sources
//!
//! A [`SessionSource`] hands out the latest [`SessionSnapshot`] for a session
//! key. Sources own their I/O and timing; the watcher only asks for the
//! current state each refresh.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::session::{SessionKey, SessionSnapshot};
use crate::{PitboardError, Result};

/// Trait for session data sources
#[async_trait::async_trait]
pub trait SessionSource: Send + 'static {
    /// Load the current snapshot for `key`.
    ///
    /// Returns:
    /// - `Ok(Some(snapshot))` - Data available
    /// - `Ok(None)` - Session has no data (yet)
    /// - `Err(e)` - Loading failed
    async fn load(&mut self, key: &SessionKey) -> Result<Option<SessionSnapshot>>;
}

/// Snapshots exported to disk as `<root>/<year>/<round>/<kind>.yaml`.
///
/// Round directories are zero-padded to two digits, e.g.
/// `snapshots/2024/06/S.yaml` for the 2024 Miami sprint.
#[derive(Debug, Clone)]
pub struct SnapshotDirectory {
    root: PathBuf,
}

impl SnapshotDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the snapshot for `key`.
    pub fn path_for(&self, key: &SessionKey) -> PathBuf {
        self.root
            .join(key.year().to_string())
            .join(format!("{:02}", key.round()))
            .join(format!("{}.yaml", key.kind().code()))
    }
}

#[async_trait::async_trait]
impl SessionSource for SnapshotDirectory {
    async fn load(&mut self, key: &SessionKey) -> Result<Option<SessionSnapshot>> {
        let path = self.path_for(key);
        trace!(path = %path.display(), "Reading session snapshot");

        let yaml = match tokio::fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(%key, path = %path.display(), "No snapshot on disk");
                return Ok(None);
            }
            Err(e) => return Err(PitboardError::file_error(path, e)),
        };

        SessionSnapshot::parse(&yaml).map(Some)
    }
}

/// Fixed snapshot served from memory, useful for tests and demos.
#[derive(Debug, Clone)]
pub struct StaticSource {
    snapshot: Option<SessionSnapshot>,
}

impl StaticSource {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self { snapshot: Some(snapshot) }
    }

    pub fn empty() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait::async_trait]
impl SessionSource for StaticSource {
    async fn load(&mut self, _key: &SessionKey) -> Result<Option<SessionSnapshot>> {
        Ok(self.snapshot.clone())
    }
}
