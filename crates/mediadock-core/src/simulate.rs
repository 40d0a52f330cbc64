//! Simulated transfers.
//!
//! No bytes move. A [`TransferSimulator`] walks one record from `downloading`
//! to `completed` on a timer, reporting each step through
//! [`DownloadQueue::update_progress`] exactly as a real transfer engine would.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DownloadError, Result};
use crate::queue::{DownloadId, DownloadQueue, DownloadStatus};

/// Default delay between progress steps.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Shortest allowed delay between progress steps.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Longest allowed delay between progress steps.
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;

/// Default progress added per step.
pub const DEFAULT_STEP_PERCENT: u8 = 10;

/// Timing of simulated transfers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Delay between progress steps, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Progress added per step.
    #[serde(default = "default_step_percent")]
    pub step_percent: u8,
}

const fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

const fn default_step_percent() -> u8 {
    DEFAULT_STEP_PERCENT
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step_percent: DEFAULT_STEP_PERCENT,
        }
    }
}

impl SimulationConfig {
    /// Clamp values into their allowed ranges.
    pub fn validate(&mut self) {
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        self.step_percent = self.step_percent.clamp(1, 100);
    }

    /// Delay between progress steps.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// How a simulated transfer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// The record reached `completed`.
    Completed,
    /// The record was moved to `error` by an injected failure.
    Failed,
    /// The cancel flag was raised; the record was left as it was.
    Cancelled,
}

/// Drives one download record through a simulated transfer.
#[derive(Debug)]
pub struct TransferSimulator {
    queue: Arc<DownloadQueue>,
    config: SimulationConfig,
    fail_at: Option<u8>,
    cancel: Arc<AtomicBool>,
}

impl TransferSimulator {
    /// Create a simulator that reports to `queue`.
    #[must_use]
    pub fn new(queue: Arc<DownloadQueue>, mut config: SimulationConfig) -> Self {
        config.validate();
        Self {
            queue,
            config,
            fail_at: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fail the transfer once progress reaches `progress`.
    #[must_use]
    pub const fn with_failure_at(mut self, progress: u8) -> Self {
        self.fail_at = Some(progress);
        self
    }

    /// Use an externally owned cancel flag.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Flag that stops the transfer when set.
    #[must_use]
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Check that record `id` exists and has not finished yet.
    pub async fn ensure_startable(&self, id: DownloadId) -> Result<()> {
        let record = self
            .queue
            .get(id)
            .await
            .ok_or(DownloadError::NotFound { id })?;
        if record.status.is_terminal() {
            return Err(DownloadError::AlreadyFinished {
                id,
                status: record.status,
            }
            .into());
        }
        Ok(())
    }

    /// Run the transfer for record `id` to its end.
    ///
    /// Errors from the queue (record missing or finished, removed
    /// mid-transfer, illegal transition) stop the run and are returned.
    pub async fn run(&self, id: DownloadId) -> Result<SimulationOutcome> {
        if self.is_cancelled() {
            return Ok(SimulationOutcome::Cancelled);
        }
        self.ensure_startable(id).await?;

        info!(
            "Starting simulated transfer for {} ({}% every {}ms)",
            id, self.config.step_percent, self.config.tick_interval_ms
        );
        self.queue
            .update_progress(id, 0, DownloadStatus::Downloading)
            .await?;

        let mut progress: u8 = 0;
        loop {
            tokio::time::sleep(self.config.tick_interval()).await;

            if self.is_cancelled() {
                info!("Simulated transfer for {} cancelled at {}%", id, progress);
                return Ok(SimulationOutcome::Cancelled);
            }

            progress = progress.saturating_add(self.config.step_percent).min(100);

            if let Some(fail_at) = self.fail_at
                && progress >= fail_at
            {
                self.queue
                    .update_progress(id, progress, DownloadStatus::Downloading)
                    .await?;
                self.queue
                    .fail(id, format!("Simulated transfer failure at {progress}%"))
                    .await?;
                info!("Simulated transfer for {} failed at {}%", id, progress);
                return Ok(SimulationOutcome::Failed);
            }

            if progress >= 100 {
                self.queue
                    .update_progress(id, 100, DownloadStatus::Completed)
                    .await?;
                info!("Simulated transfer for {} completed", id);
                return Ok(SimulationOutcome::Completed);
            }

            debug!("Simulated transfer for {} at {}%", id, progress);
            self.queue
                .update_progress(id, progress, DownloadStatus::Downloading)
                .await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DownloadError, Error};
    use crate::platform::Platform;
    use crate::queue::{NewDownload, QueueEvent};

    async fn queue_with_record() -> (Arc<DownloadQueue>, DownloadId) {
        let queue = Arc::new(DownloadQueue::new());
        let record = queue
            .add(NewDownload::new("https://x/video", "t", Platform::TikTok))
            .await
            .expect("add");
        (queue, record.id)
    }

    fn fast() -> SimulationConfig {
        SimulationConfig {
            tick_interval_ms: 100,
            step_percent: 25,
        }
    }

    #[test]
    fn test_config_clamps() {
        let mut config = SimulationConfig {
            tick_interval_ms: 1,
            step_percent: 0,
        };
        config.validate();
        assert_eq!(config.tick_interval_ms, MIN_TICK_INTERVAL_MS);
        assert_eq!(config.step_percent, 1);

        let mut config = SimulationConfig {
            tick_interval_ms: 60_000,
            step_percent: 250,
        };
        config.validate();
        assert_eq!(config.tick_interval_ms, MAX_TICK_INTERVAL_MS);
        assert_eq!(config.step_percent, 100);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: SimulationConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, SimulationConfig::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_completion() {
        let (queue, id) = queue_with_record().await;
        let simulator = TransferSimulator::new(Arc::clone(&queue), fast());

        let outcome = simulator.run(id).await.expect("run");
        assert_eq!(outcome, SimulationOutcome::Completed);

        let record = queue.get(id).await.expect("record");
        assert_eq!(record.status, DownloadStatus::Completed);
        assert_eq!(record.progress, 100);
        assert!(record.completed_at.is_some());

        let mut progress = Vec::new();
        while let Some(event) = queue.try_recv_event().await {
            if let QueueEvent::Updated(r) = event {
                progress.push(r.progress);
            }
        }
        assert_eq!(progress, vec![0, 25, 50, 75, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_failure() {
        let (queue, id) = queue_with_record().await;
        let simulator = TransferSimulator::new(Arc::clone(&queue), fast()).with_failure_at(50);

        let outcome = simulator.run(id).await.expect("run");
        assert_eq!(outcome, SimulationOutcome::Failed);

        let record = queue.get(id).await.expect("record");
        assert_eq!(record.status, DownloadStatus::Error);
        assert_eq!(record.progress, 50);
        assert!(record.error_message.is_some());
        assert!(record.completed_at.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_transfer() {
        let (queue, id) = queue_with_record().await;
        let simulator = Arc::new(TransferSimulator::new(Arc::clone(&queue), fast()));
        let cancel = simulator.cancel_flag();

        let runner = Arc::clone(&simulator);
        let handle = tokio::spawn(async move { runner.run(id).await });

        // Let the first two steps land, then cancel before the third
        tokio::time::sleep(Duration::from_millis(250)).await;
        cancel.store(true, Ordering::SeqCst);

        let outcome = handle.await.expect("join").expect("run");
        assert_eq!(outcome, SimulationOutcome::Cancelled);

        let record = queue.get(id).await.expect("record");
        assert_eq!(record.status, DownloadStatus::Downloading);
        assert_eq!(record.progress, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start_does_nothing() {
        let (queue, id) = queue_with_record().await;
        let cancel = Arc::new(AtomicBool::new(true));
        let simulator =
            TransferSimulator::new(Arc::clone(&queue), fast()).with_cancel_flag(cancel);

        let outcome = simulator.run(id).await.expect("run");
        assert_eq!(outcome, SimulationOutcome::Cancelled);
        assert_eq!(
            queue.get(id).await.expect("record").status,
            DownloadStatus::Pending
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_removed_record_stops_with_not_found() {
        let (queue, id) = queue_with_record().await;
        let simulator = Arc::new(TransferSimulator::new(Arc::clone(&queue), fast()));

        let runner = Arc::clone(&simulator);
        let handle = tokio::spawn(async move { runner.run(id).await });

        tokio::time::sleep(Duration::from_millis(150)).await;
        queue.remove(id).await.expect("remove");

        let result = handle.await.expect("join");
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::NotFound { .. }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_record_is_not_startable() {
        let (queue, id) = queue_with_record().await;
        queue
            .update_progress(id, 100, DownloadStatus::Completed)
            .await
            .expect("complete");
        let simulator = TransferSimulator::new(Arc::clone(&queue), fast());

        let err = simulator.ensure_startable(id).await.expect_err("finished");
        assert_eq!(err.kind(), crate::error::ErrorKind::Conflict);

        let result = simulator.run(id).await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::AlreadyFinished {
                status: DownloadStatus::Completed,
                ..
            }))
        ));
        let record = queue.get(id).await.expect("record");
        assert_eq!(record.status, DownloadStatus::Completed);
        assert_eq!(record.progress, 100);
    }

    #[tokio::test]
    async fn test_unknown_record_is_not_startable() {
        let queue = Arc::new(DownloadQueue::new());
        let simulator = TransferSimulator::new(queue, fast());
        let err = simulator
            .ensure_startable(DownloadId::new())
            .await
            .expect_err("unknown");
        assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
    }
}
