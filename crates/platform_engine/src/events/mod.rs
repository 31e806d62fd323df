//! Tick-stamped event queue
//!
//! Two delivery modes:
//! - Immediate: queued with [`EventQueue::send`], delivered by the next drain
//! - Deferred: queued with [`EventQueue::post`], delivered by the first drain
//!   whose tick is at or past the requested tick
//!
//! Ordering within a drain: immediate events first (in send order), then due
//! deferred events (in post order).

/// Queue of events of type `E`
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    immediate_queue: Vec<E>,
    deferred_queue: Vec<(u64, E)>,
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
        }
    }

    /// Queue an event for the next drain
    pub fn send(&mut self, event: E) {
        self.immediate_queue.push(event);
    }

    /// Queue an event for delivery once the tick counter reaches `deliver_at`
    pub fn post(&mut self, deliver_at: u64, event: E) {
        self.deferred_queue.push((deliver_at, event));
    }

    /// Take every event that is due at tick `now`
    pub fn drain(&mut self, now: u64) -> Vec<E> {
        let mut due = std::mem::take(&mut self.immediate_queue);

        let mut i = 0;
        while i < self.deferred_queue.len() {
            if self.deferred_queue[i].0 <= now {
                let (_, event) = self.deferred_queue.remove(i);
                due.push(event);
            } else {
                i += 1;
            }
        }

        due
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cue {
        Jump,
        Coin,
        Dismiss,
    }

    #[test]
    fn test_immediate_dispatch() {
        let mut queue = EventQueue::new();
        queue.send(Cue::Jump);
        queue.send(Cue::Coin);
        assert_eq!(queue.drain(0), vec![Cue::Jump, Cue::Coin]);
        assert!(queue.drain(1).is_empty());
    }

    #[test]
    fn test_deferred_dispatch() {
        let mut queue = EventQueue::new();
        queue.post(120, Cue::Dismiss);

        assert!(queue.drain(60).is_empty());
        assert!(queue.drain(119).is_empty());

        assert_eq!(queue.drain(120), vec![Cue::Dismiss]);
        assert!(queue.drain(500).is_empty());
    }

    #[test]
    fn test_immediate_before_deferred() {
        let mut queue = EventQueue::new();
        queue.post(5, Cue::Dismiss);
        queue.send(Cue::Coin);
        assert_eq!(queue.drain(10), vec![Cue::Coin, Cue::Dismiss]);
    }
}
