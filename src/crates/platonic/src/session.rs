//! Single-writer "current result" cell
//!
//! Every submission takes a [`Ticket`] before it is sent. When the outcome
//! arrives it is published with that ticket, and only the most recently
//! dispatched ticket may write. Slow replies to superseded submissions are
//! therefore dropped instead of overwriting newer results.

use parking_lot::Mutex;
use std::sync::Arc;

/// Sequence number handed out per dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SlotState<T> {
    latest: u64,
    current: Option<(u64, T)>,
}

/// Latest-wins result cell, shared by cloning
#[derive(Debug)]
pub struct ResultSlot<T> {
    state: Arc<Mutex<SlotState<T>>>,
}

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState {
                latest: 0,
                current: None,
            })),
        }
    }

    /// Reserve the next sequence number; it supersedes all earlier tickets
    pub fn dispatch(&self) -> Ticket {
        let mut state = self.state.lock();
        state.latest += 1;
        Ticket(state.latest)
    }

    /// Store `value` if `ticket` is still the latest dispatch
    ///
    /// Returns whether the value was accepted.
    pub fn publish(&self, ticket: Ticket, value: T) -> bool {
        let mut state = self.state.lock();
        if ticket.0 != state.latest {
            return false;
        }
        state.current = Some((ticket.0, value));
        true
    }

    /// Sequence number of the most recent dispatch (0 before any)
    pub fn latest_dispatched(&self) -> u64 {
        self.state.lock().latest
    }
}

impl<T: Clone> ResultSlot<T> {
    /// The published value and the ticket it was published under
    pub fn current(&self) -> Option<(u64, T)> {
        self.state.lock().current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_strictly_increasing() {
        let slot: ResultSlot<&str> = ResultSlot::new();
        assert_eq!(slot.latest_dispatched(), 0);

        let first = slot.dispatch();
        let second = slot.dispatch();
        assert!(second > first);
        assert_eq!(second.sequence(), 2);
        assert_eq!(slot.latest_dispatched(), 2);
    }

    #[test]
    fn test_stale_publish_is_rejected() {
        let slot = ResultSlot::new();
        let older = slot.dispatch();
        let newer = slot.dispatch();

        assert!(slot.publish(newer, "toaster"));
        assert!(!slot.publish(older, "kettle"));
        assert_eq!(slot.current(), Some((2, "toaster")));
    }

    #[test]
    fn test_old_ticket_cannot_write_after_new_dispatch() {
        let slot = ResultSlot::new();
        let older = slot.dispatch();
        let _pending = slot.dispatch();

        assert!(!slot.publish(older, 1));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let slot = ResultSlot::new();
        let other = slot.clone();

        let ticket = other.dispatch();
        assert!(slot.publish(ticket, "shared"));
        assert_eq!(other.current(), Some((1, "shared")));
    }

    #[test]
    fn test_republish_same_ticket_overwrites() {
        let slot = ResultSlot::new();
        let ticket = slot.dispatch();
        assert!(slot.publish(ticket, 1));
        assert!(slot.publish(ticket, 2));
        assert_eq!(slot.current(), Some((1, 2)));
    }
}
