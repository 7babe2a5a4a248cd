//! Transient notifications with per-entry expiry.
//!
//! Dispatch pushes short notices here (phase changes, event results,
//! authority errors). Every entry lives for a fixed TTL and then
//! removes itself; the UI may dismiss earlier.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

struct Inner {
    entries: Mutex<Vec<Notification>>,
    next_id: AtomicU64,
}

impl Inner {
    fn entries(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn remove(&self, id: u64) {
        self.entries().retain(|n| n.id != id);
    }
}

/// Shared queue of short-lived notices.
///
/// Each push arms its own expiry task holding only a `Weak`, so a
/// dropped queue leaves nothing behind for the timers to revive.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message.into())
    }

    fn push(&self, kind: NotificationKind, message: String) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.entries().push(Notification {
            id,
            kind,
            message,
            created_at: Instant::now(),
        });
        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        });
        id
    }

    /// Removes one entry. Ids are never reused, so dismissing an
    /// already expired notification is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.inner.remove(id);
    }

    /// Entries in push order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.entries().clone()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let queue = NotificationQueue::new();
        queue.info("phase: night");
        assert_eq!(queue.snapshot().len(), 1);

        tokio::time::sleep(NOTIFICATION_TTL - Duration::from_millis(1)).await;
        assert_eq!(queue.snapshot().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(queue.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_independently() {
        let queue = NotificationQueue::new();
        queue.info("first");
        tokio::time::sleep(Duration::from_millis(3000)).await;
        queue.error("second");

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let rest = queue.snapshot();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].message, "second");
        assert_eq!(rest[0].kind, NotificationKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_monotonic() {
        let queue = NotificationQueue::new();
        let a = queue.info("one");
        let b = queue.error("two");
        assert!(b > a);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let queue = NotificationQueue::new();
        let id = queue.info("stale");
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_keeps_push_order() {
        let queue = NotificationQueue::new();
        queue.info("one");
        queue.info("two");
        queue.info("three");
        let order: Vec<String> = queue.snapshot().into_iter().map(|n| n.message).collect();
        assert_eq!(order, ["one", "two", "three"]);
    }
}
