use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::DegradationEvent;
use crate::config::defaults;

/// Bounded buffer of degradation events.
///
/// Holds at most `capacity` events between drains. When full, the oldest
/// event is evicted so the newest failures are always reported.
#[derive(Debug)]
pub struct DegradationLog {
    events: Mutex<VecDeque<DegradationEvent>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl DegradationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity.min(64))),
            capacity,
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an event, evicting the oldest one when the log is full.
    pub fn record(&self, event: DegradationEvent) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        while events.len() >= self.capacity {
            events.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        events.push_back(event);
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&self) -> Vec<DegradationEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events evicted or refused since creation.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for DegradationLog {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_MAX_DEGRADATION_EVENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(n: usize) -> DegradationEvent {
        DegradationEvent::now("translation", format!("failure {n}"), "pass-through")
    }

    #[test]
    fn holds_at_most_capacity_and_keeps_newest() {
        let log = DegradationLog::new(3);
        for n in 0..10 {
            log.record(event(n));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.dropped(), 7);

        let drained = log.drain();
        let failures: Vec<&str> = drained.iter().map(|e| e.failure.as_str()).collect();
        assert_eq!(failures, vec!["failure 7", "failure 8", "failure 9"]);
        assert!(log.is_empty());
    }

    #[test]
    fn drain_frees_room_for_new_events() {
        let log = DegradationLog::new(2);
        log.record(event(0));
        log.record(event(1));
        assert_eq!(log.drain().len(), 2);

        log.record(event(2));
        assert_eq!(log.len(), 1);
        assert_eq!(log.dropped(), 0);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let log = DegradationLog::new(0);
        log.record(event(0));
        assert!(log.drain().is_empty());
        assert_eq!(log.dropped(), 1);
    }

    #[test]
    fn default_uses_configured_default_capacity() {
        assert_eq!(
            DegradationLog::default().capacity(),
            defaults::DEFAULT_MAX_DEGRADATION_EVENTS
        );
    }
}
