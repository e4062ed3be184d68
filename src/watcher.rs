//! Watcher that keeps a session board fresh

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::board::SessionBoard;
use crate::classify::RaceControlClassifier;
use crate::session::SessionKey;
use crate::source::SessionSource;

/// Refresh behaviour for [`SessionWatcher`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Delay between successful refreshes
    #[serde(with = "secs")]
    pub refresh_interval: Duration,
    /// Consecutive failed loads before the watcher gives up
    pub max_errors: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { refresh_interval: Duration::from_secs(30), max_errors: 10 }
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Receivers for a running watcher
pub struct WatchChannels {
    /// Latest board; `None` until the first load and whenever the session has no data
    pub boards: watch::Receiver<Option<Arc<SessionBoard>>>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
}

impl WatchChannels {
    /// Board updates as a stream. Yields the current value first.
    pub fn stream(&self) -> WatchStream<Option<Arc<SessionBoard>>> {
        WatchStream::new(self.boards.clone())
    }
}

/// Spawns a task that reloads a session and republishes its board.
pub struct SessionWatcher;

impl SessionWatcher {
    /// Spawn the refresh task with the standard classifier.
    pub fn spawn<S>(source: S, key: SessionKey, config: WatchConfig) -> WatchChannels
    where
        S: SessionSource,
    {
        Self::spawn_with(source, key, config, RaceControlClassifier::default())
    }

    pub fn spawn_with<S>(
        source: S,
        key: SessionKey,
        config: WatchConfig,
        classifier: RaceControlClassifier,
    ) -> WatchChannels
    where
        S: SessionSource,
    {
        let (board_tx, board_rx) = watch::channel(None);
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::refresh_task(source, key, config, classifier, board_tx, cancel_task).await;
        });

        WatchChannels { boards: board_rx, cancel }
    }

    async fn refresh_task<S>(
        mut source: S,
        key: SessionKey,
        config: WatchConfig,
        classifier: RaceControlClassifier,
        board_tx: watch::Sender<Option<Arc<SessionBoard>>>,
        cancel: CancellationToken,
    ) where
        S: SessionSource,
    {
        info!(%key, interval = ?config.refresh_interval, "Session watcher started");
        let mut refresh_count = 0u64;
        let mut error_count = 0u32;

        loop {
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Session watcher cancelled during load");
                    break;
                }
                result = source.load(&key) => result,
            };

            let delay = match result {
                Ok(snapshot) => {
                    refresh_count += 1;
                    error_count = 0;
                    let board = snapshot.map(|s| Arc::new(SessionBoard::build_with(&s, &classifier)));
                    if board.is_none() {
                        debug!(%key, "No session data yet");
                    }
                    if board_tx.send(board).is_err() {
                        debug!("Board receivers dropped, shutting down");
                        break;
                    }
                    config.refresh_interval
                }
                Err(e) => {
                    error_count += 1;
                    error!("Session load error ({}/{}): {}", error_count, config.max_errors, e);

                    if error_count >= config.max_errors {
                        error!("Too many session load errors, shutting down");
                        let _ = board_tx.send(None);
                        break;
                    }
                    if !e.is_retryable() {
                        warn!("Error is not retryable, retrying at the refresh interval");
                        config.refresh_interval
                    } else {
                        // 50ms, 100ms, 200ms, ... capped by the refresh interval
                        Duration::from_millis(50 * (1 << error_count.min(5)))
                            .min(config.refresh_interval)
                    }
                }
            };

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Session watcher cancelled");
                    break;
                }
                _ = board_tx.closed() => {
                    debug!("Board receivers dropped, shutting down");
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!("Session watcher ended after {} refreshes", refresh_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_dashboard_refresh() {
        let config = WatchConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.max_errors, 10);
    }

    #[test]
    fn config_reads_seconds() {
        let config: WatchConfig = serde_yaml_ng::from_str("refresh_interval: 2.5").unwrap();
        assert_eq!(config.refresh_interval, Duration::from_millis(2500));
        assert_eq!(config.max_errors, 10);
        assert!(serde_yaml_ng::from_str::<WatchConfig>("refresh_interval: -1").is_err());
    }
}
