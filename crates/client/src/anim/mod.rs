//! Frame loop ownership for pulsing styles.
//!
//! Rendering is otherwise change-driven; only the `waiting` pulse
//! needs wall-clock frames. The scheduler owns at most one loop so a
//! style change can never leave two tickers fighting over the screen.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};

/// Matches the frame cadence of the hardware pulse loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Default)]
pub struct AnimationScheduler {
    task: Option<JoinHandle<()>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any running loop with a fresh one calling `frame`
    /// every 16 ms with the milliseconds elapsed since this start.
    pub fn start<F>(&mut self, mut frame: F)
    where
        F: FnMut(u64) + Send + 'static,
    {
        self.cancel();
        let started = Instant::now();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(FRAME_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // An interval's first tick fires immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                frame(started.elapsed().as_millis() as u64);
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_frames_carry_elapsed_time() {
        let mut scheduler = AnimationScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        scheduler.start(move |elapsed| sink.lock().unwrap().push(elapsed));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*seen.lock().unwrap(), vec![16, 32, 48]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_replaces_previous_loop() {
        let mut scheduler = AnimationScheduler::new();
        let first = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&first);
        scheduler.start(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(40)).await;
        let frames_before = first.load(Ordering::SeqCst);
        assert!(frames_before >= 2);

        let second = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&second);
        scheduler.start(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(first.load(Ordering::SeqCst), frames_before);
        assert!(second.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let mut scheduler = AnimationScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        scheduler.start(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        assert!(scheduler.is_running());
        tokio::time::sleep(Duration::from_millis(40)).await;
        scheduler.cancel();
        assert!(!scheduler.is_running());

        let frames = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), frames);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let mut scheduler = AnimationScheduler::new();
            let sink = Arc::clone(&count);
            scheduler.start(move |_| {
                sink.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        let frames = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), frames);
    }
}
