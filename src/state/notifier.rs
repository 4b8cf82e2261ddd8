//! Timed "rows processed" notification.
//!
//! After a file is loaded the notification is shown once a short,
//! size-proportional delay has passed, then hidden after a much longer one.
//! Both waits run on a spawned tokio task so loading never blocks on them.
//! The hide step is only reached from inside the show step, which fixes the
//! order for a single sequence.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::io::config::IngestConfig;
use crate::state::status::{MessageId, NotificationStatus};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationDelays {
    pub show: Duration,
    /// Measured from the moment the notification is shown.
    pub hide: Duration,
}

impl NotificationDelays {
    /// `byte_size / divisor` milliseconds for each step.
    pub fn for_size(byte_size: u64, show_divisor: f64, hide_divisor: f64) -> Self {
        Self {
            show: millis(byte_size as f64 / show_divisor),
            hide: millis(byte_size as f64 / hide_divisor),
        }
    }
}

fn millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

/// Cancels a scheduled show/hide sequence.
#[derive(Debug)]
pub struct NotificationHandle {
    task: JoinHandle<()>,
}

impl NotificationHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[derive(Debug)]
pub struct NotificationSequencer {
    status: Arc<watch::Sender<NotificationStatus>>,
    show_divisor: f64,
    hide_divisor: f64,
}

impl Default for NotificationSequencer {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

impl NotificationSequencer {
    pub fn new(show_divisor: f64, hide_divisor: f64) -> Self {
        let (status, _) = watch::channel(NotificationStatus::default());
        Self {
            status: Arc::new(status),
            show_divisor,
            hide_divisor,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.show_divisor, config.hide_divisor)
    }

    pub fn status(&self) -> NotificationStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<NotificationStatus> {
        self.status.subscribe()
    }

    pub fn delays_for(&self, byte_size: u64) -> NotificationDelays {
        NotificationDelays::for_size(byte_size, self.show_divisor, self.hide_divisor)
    }

    /// Spawns the show/hide sequence on the current tokio runtime. Returns
    /// `None` (and schedules nothing) outside of a runtime.
    pub fn schedule(&self, byte_size: u64) -> Option<NotificationHandle> {
        let Ok(runtime) = Handle::try_current() else {
            warn!(byte_size, "no async runtime, notification not scheduled");
            return None;
        };

        let delays = self.delays_for(byte_size);
        let status = Arc::clone(&self.status);
        debug!(?delays, byte_size, "notification scheduled");

        let task = runtime.spawn(async move {
            tokio::time::sleep(delays.show).await;
            status.send_replace(NotificationStatus::shown(MessageId::Msg3));
            debug!("notification shown");

            tokio::time::sleep(delays.hide).await;
            status.send_replace(NotificationStatus::hidden(MessageId::Msg3));
            debug!("notification hidden");
        });

        Some(NotificationHandle { task })
    }

    /// Hides a visible notification without touching its message id.
    pub fn hide(&self) {
        self.status.send_if_modified(|status| {
            let was_visible = status.is_visible;
            status.is_visible = false;
            was_visible
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_scale_with_size() {
        let delays = NotificationDelays::for_size(2000, 2000.0, 0.3);
        assert_eq!(delays.show, Duration::from_millis(1));
        let hide_ms = delays.hide.as_secs_f64() * 1000.0;
        assert!((hide_ms - 6666.67).abs() < 0.01, "hide was {hide_ms}ms");
    }

    #[test]
    fn empty_file_has_no_delay() {
        let delays = NotificationDelays::for_size(0, 2000.0, 0.3);
        assert_eq!(delays.show, Duration::ZERO);
        assert_eq!(delays.hide, Duration::ZERO);
    }
}
