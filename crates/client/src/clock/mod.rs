//! Countdown derivation from absolute deadlines.
//!
//! Authority timers arrive as absolute end instants. The clock never
//! decrements anything; every poll recomputes the remaining time from
//! `ends_at`, so late or missed polls cannot drift the display.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::store::EventTimerRecord;

/// How often the runtime re-derives the countdown.
pub const CLOCK_POLL: Duration = Duration::from_millis(50);

/// What the UI shows for the timer that ends soonest.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    pub event_id: String,
    pub seconds_ceil: u64,
    /// Remaining fraction of the full duration, clamped to [0, 1].
    pub fraction: f64,
}

/// Stateful poller over the store's timer records.
///
/// The earliest deadline drives the single visible countdown, equal
/// deadlines fall back to id order. Each record yields its zero
/// reading exactly once; afterwards the countdown reads `None` until
/// the record is removed or re-armed.
#[derive(Debug, Default)]
pub struct EventClock {
    /// Deadlines already reported as finished, by event id.
    finished: HashMap<String, u64>,
}

impl EventClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(
        &mut self,
        timers: &BTreeMap<String, EventTimerRecord>,
        now_ms: u64,
    ) -> Option<Countdown> {
        // Forget finish marks whose record is gone or was re-armed.
        self.finished
            .retain(|id, ends_at| timers.get(id).is_some_and(|r| r.ends_at == *ends_at));

        let (id, record) = timers
            .iter()
            .filter(|(id, _)| !self.finished.contains_key(*id))
            .min_by_key(|(id, record)| (record.ends_at, id.as_str()))?;

        let remaining = record.ends_at.saturating_sub(now_ms);
        if remaining == 0 {
            self.finished.insert(id.clone(), record.ends_at);
            return Some(Countdown {
                event_id: id.clone(),
                seconds_ceil: 0,
                fraction: 0.0,
            });
        }
        let fraction = if record.duration_ms == 0 {
            0.0
        } else {
            (remaining as f64 / record.duration_ms as f64).clamp(0.0, 1.0)
        };
        Some(Countdown {
            event_id: id.clone(),
            seconds_ceil: remaining.div_ceil(1000),
            fraction,
        })
    }
}

/// Milliseconds since the Unix epoch, zero when the system clock sits
/// before it.
pub fn epoch_ms_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timers(entries: &[(&str, u64, u64)]) -> BTreeMap<String, EventTimerRecord> {
        entries
            .iter()
            .map(|&(id, ends_at, duration_ms)| {
                (
                    id.to_owned(),
                    EventTimerRecord {
                        ends_at,
                        duration_ms,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_counts_down_from_absolute_deadline() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 30_000, 20_000)]);

        let c = clock.tick(&timers, 10_000).unwrap();
        assert_eq!(c.event_id, "e1");
        assert_eq!(c.seconds_ceil, 20);
        assert_eq!(c.fraction, 1.0);

        let c = clock.tick(&timers, 10_100).unwrap();
        assert_eq!(c.seconds_ceil, 20);
        assert!((c.fraction - 0.995).abs() < 1e-9);

        let c = clock.tick(&timers, 20_000).unwrap();
        assert_eq!(c.seconds_ceil, 10);
        assert!((c.fraction - 0.5).abs() < 1e-9);

        let c = clock.tick(&timers, 29_001).unwrap();
        assert_eq!(c.seconds_ceil, 1);
    }

    #[test]
    fn test_fraction_clamps_when_deadline_exceeds_duration() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 60_000, 10_000)]);
        let c = clock.tick(&timers, 10_000).unwrap();
        assert_eq!(c.fraction, 1.0);
    }

    #[test]
    fn test_zero_duration_reads_zero_fraction() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 15_000, 0)]);
        let c = clock.tick(&timers, 10_000).unwrap();
        assert_eq!(c.seconds_ceil, 5);
        assert_eq!(c.fraction, 0.0);
    }

    #[test]
    fn test_emits_zero_exactly_once() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 30_000, 20_000)]);

        let c = clock.tick(&timers, 30_000).unwrap();
        assert_eq!(c.seconds_ceil, 0);
        assert_eq!(c.fraction, 0.0);

        assert_eq!(clock.tick(&timers, 30_050), None);
        assert_eq!(clock.tick(&timers, 31_000), None);
    }

    #[test]
    fn test_late_poll_still_reports_zero_once() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 30_000, 20_000)]);

        // First poll long after the deadline.
        let c = clock.tick(&timers, 95_000).unwrap();
        assert_eq!(c.seconds_ceil, 0);
        assert_eq!(clock.tick(&timers, 95_050), None);
    }

    #[test]
    fn test_rearmed_timer_counts_again() {
        let mut clock = EventClock::new();
        let first = timers(&[("e1", 30_000, 20_000)]);
        clock.tick(&first, 30_000).unwrap();
        assert_eq!(clock.tick(&first, 30_050), None);

        let rearmed = timers(&[("e1", 45_000, 10_000)]);
        let c = clock.tick(&rearmed, 40_000).unwrap();
        assert_eq!(c.seconds_ceil, 5);
    }

    #[test]
    fn test_earliest_deadline_wins_with_id_tiebreak() {
        let mut clock = EventClock::new();
        let timers = timers(&[("vote", 20_000, 10_000), ("seer", 20_000, 10_000)]);
        let c = clock.tick(&timers, 15_000).unwrap();
        assert_eq!(c.event_id, "seer");
    }

    #[test]
    fn test_next_timer_takes_over_after_finish() {
        let mut clock = EventClock::new();
        let timers = timers(&[("e1", 10_000, 10_000), ("e2", 99_000, 60_000)]);

        let c = clock.tick(&timers, 10_000).unwrap();
        assert_eq!(c.event_id, "e1");
        assert_eq!(c.seconds_ceil, 0);

        let c = clock.tick(&timers, 10_050).unwrap();
        assert_eq!(c.event_id, "e2");
        assert_eq!(c.seconds_ceil, 89);
    }
}
