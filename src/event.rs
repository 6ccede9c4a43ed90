//! Arbitration events.
//!
//! The arbiter publishes three kinds of transitions, all carrying the device
//! index they concern:
//! - [`PadEvent::Connected`] / [`PadEvent::Disconnected`] — derived
//!   connectivity of the *active* index flipped between two consecutive polls
//!   (or a rescan recovered onto a newly found index).
//! - [`PadEvent::SelectionChanged`] — the active index moved, whether by an
//!   explicit command, a rescan recovery, or auto-switch.
//!
//! Within one tick, connectivity events are always delivered before any
//! selection event they caused.
//!
//! Consumers implement [`PadEventListener`] and register on the
//! [`EventBus`](crate::eventbus::EventBus); they never poll devices
//! themselves.

use serde::{Deserialize, Serialize};

/// A state transition published by the arbiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadEvent {
    /// The device at this index became connected.
    Connected(usize),
    /// The device at this index became disconnected.
    Disconnected(usize),
    /// This index is now the active selection.
    SelectionChanged(usize),
}

impl PadEvent {
    /// The device index the event concerns.
    pub fn index(&self) -> usize {
        match *self {
            PadEvent::Connected(i) | PadEvent::Disconnected(i) | PadEvent::SelectionChanged(i) => i,
        }
    }
}

/// Trait for reacting to arbitration events.
pub trait PadEventListener: Send {
    fn on_event(&mut self, event: &PadEvent);
}
