//! Simulated voice recording.
//!
//! No audio is captured: a periodic task counts elapsed seconds until the
//! caller stops it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct ActiveRecording {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

#[derive(Default)]
pub struct VoiceRecorder {
    elapsed: Arc<AtomicU64>,
    active: Option<ActiveRecording>,
}

impl VoiceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// Starts the one-second ticker. Returns `false` if already recording.
    pub fn start(&mut self, runtime: &Handle) -> bool {
        if self.active.is_some() {
            return false;
        }

        self.elapsed.store(0, Ordering::Relaxed);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let elapsed = Arc::clone(&self.elapsed);

        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        elapsed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        });

        log::debug!("voice recording started");
        self.active = Some(ActiveRecording { stop_tx, task });
        true
    }

    /// Cancels the ticker and returns the recorded length in seconds.
    pub fn stop(&mut self) -> Option<u64> {
        let active = self.active.take()?;
        // The task may already be gone; either way it must not tick again.
        let _ = active.stop_tx.send(());
        active.task.abort();

        let seconds = self.elapsed.swap(0, Ordering::Relaxed);
        log::debug!("voice recording stopped after {seconds}s");
        Some(seconds)
    }
}

impl Drop for VoiceRecorder {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            active.task.abort();
        }
    }
}
