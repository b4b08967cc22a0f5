//! Idle-period debounce for the search input.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Idle time after the last keystroke before search re-filters.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds at most one pending value; a newer value replaces it and restarts
/// the idle period.
#[derive(Debug)]
pub struct Debouncer<T> {
    period: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.period));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its idle period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(due) if due <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

/// Forward values from `input` once `period` passes without a newer one.
///
/// A value still pending when `input` closes is delivered after its idle
/// period; the output closes afterwards.
pub fn spawn_debounced<T>(period: Duration, mut input: mpsc::Receiver<T>) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut debouncer = Debouncer::new(period);
        let mut open = true;

        while open || debouncer.is_pending() {
            let deadline = debouncer.deadline();
            let wake = deadline.unwrap_or_else(|| Instant::now() + period);

            tokio::select! {
                received = input.recv(), if open => match received {
                    Some(value) => debouncer.push(value, Instant::now()),
                    None => open = false,
                },
                _ = sleep_until(wake), if deadline.is_some() => {
                    if let Some(value) = debouncer.poll(Instant::now()) {
                        if tx.send(value).await.is_err() {
                            debug!("Debounce output dropped, stopping");
                            break;
                        }
                    }
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_value_restarts_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.push("f", start);
        debouncer.push("fo", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("fo"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_keystroke_is_delivered() {
        let (tx, input) = mpsc::channel(8);
        let mut output = spawn_debounced(SEARCH_DEBOUNCE, input);
        let start = Instant::now();

        tx.send("t".to_string()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("tr".to_string()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("tree".to_string()).await.unwrap();

        assert_eq!(output.recv().await.as_deref(), Some("tree"));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_and_close() {
        let (tx, input) = mpsc::channel(8);
        let mut output = spawn_debounced(SEARCH_DEBOUNCE, input);

        tx.send(1).await.unwrap();
        assert_eq!(output.recv().await, Some(1));

        tx.send(2).await.unwrap();
        tx.send(3).await.unwrap();
        drop(tx);
        assert_eq!(output.recv().await, Some(3));
        assert_eq!(output.recv().await, None);
    }
}
