//! The arbitration core.
//!
//! [`PadArbiter`] owns a [`PadDriver`] and runs the poll-and-diff state
//! machine: one host `tick` per frame refreshes the active index, diffs
//! connectivity against the previous poll, recovers from a dead index with a
//! debounced full rescan, and (when enabled) auto-switches to the
//! lowest-indexed device showing significant input. Consumers observe the
//! resulting [`PadEvent`]s through the bus and read state through the query
//! surface; they never touch the driver.
//!
//! Timing is driven entirely by the `dt` the host passes in. The arbiter
//! keeps a monotonic uptime accumulator; the rescan debounce and rumble
//! zero-outs are measured against it, so irregular frame rates cannot
//! double-fire or skip a window.

use std::mem;
use std::time::Duration;

use log::{debug, info};

use crate::backends;
use crate::config::ArbiterConfig;
use crate::diagnostics::DiagnosticSink;
use crate::driver::PadDriver;
use crate::event::PadEvent;
use crate::eventbus::EventBus;
use crate::rumble::RumbleScheduler;
use crate::significance::snapshot_significant;
use crate::state::{DeviceSnapshot, GamepadState, JoystickState};

/// Tracks candidate devices, keeps one index active, publishes transitions.
pub struct PadArbiter {
    driver: Box<dyn PadDriver>,
    config: ArbiterConfig,
    bus: EventBus,
    diag: Option<DiagnosticSink>,

    active: usize,
    /// Snapshot pair for the active index. `prev` is exactly one poll behind
    /// `cur`, never more.
    prev: DeviceSnapshot,
    cur: DeviceSnapshot,

    auto_switch: bool,
    uptime: Duration,
    rescan_elapsed: Duration,
    rumble: RumbleScheduler,
}

impl PadArbiter {
    /// Build an arbiter over `driver`.
    ///
    /// Performs an initial full scan: the active index defaults to the first
    /// connected index in `0..scan_width`, else 0. No event is published for
    /// the initial state; the first `tick` only reports changes from here on.
    pub fn new(driver: Box<dyn PadDriver>, config: ArbiterConfig) -> Self {
        let mut arbiter = Self {
            driver,
            config,
            bus: EventBus::new(),
            diag: None,
            active: 0,
            prev: DeviceSnapshot::default(),
            cur: DeviceSnapshot::default(),
            auto_switch: false,
            uptime: Duration::ZERO,
            rescan_elapsed: Duration::ZERO,
            rumble: RumbleScheduler::new(),
        };

        arbiter.active = (0..arbiter.config.scan_width)
            .find(|index| arbiter.poll_index(*index).connected())
            .unwrap_or(0);
        arbiter.cur = arbiter.poll_index(arbiter.active);
        arbiter.prev = arbiter.cur.clone();

        info!(
            "arbiter started on index {} (connected: {})",
            arbiter.active,
            arbiter.cur.connected()
        );
        arbiter
    }

    /// Build over the platform's bundled hardware backend, when one exists.
    pub fn with_default_driver(config: ArbiterConfig) -> Option<Self> {
        backends::default_driver().map(|driver| Self::new(driver, config))
    }

    /// Attach a diagnostic sink; every published event is also recorded there.
    pub fn with_diagnostics(mut self, sink: DiagnosticSink) -> Self {
        self.diag = Some(sink);
        self
    }

    /// Advance one frame. `dt` is the time elapsed since the previous tick.
    pub fn tick(&mut self, dt: Duration) {
        self.uptime += dt;
        let mut events = Vec::new();

        // Poller: the active index is refreshed every tick, unconditionally.
        let polled = self.poll_index(self.active);
        self.prev = mem::replace(&mut self.cur, polled);

        // Transition detector: derived connectivity, one event per flip.
        let was_connected = self.prev.connected();
        let is_connected = self.cur.connected();
        if is_connected != was_connected {
            events.push(if is_connected {
                PadEvent::Connected(self.active)
            } else {
                PadEvent::Disconnected(self.active)
            });
        }

        // Debounced rescan: recover from a dead active index. The accumulator
        // resets on crossing, one rescan per window regardless of tick rate.
        self.rescan_elapsed += dt;
        if self.rescan_elapsed >= self.config.rescan_interval() {
            self.rescan_elapsed = Duration::ZERO;
            if !is_connected {
                if let Some(found) = self.scan_for_connected() {
                    events.push(PadEvent::Connected(found));
                    self.switch_to(found, &mut events);
                }
            }
        }

        // Auto-switch: lowest significant connected index wins, at most one
        // switch per tick.
        if self.auto_switch {
            if let Some(found) = self.scan_for_significant() {
                if found != self.active {
                    self.switch_to(found, &mut events);
                }
            }
        }

        // Service scheduled rumble zero-outs.
        for index in self.rumble.due(self.uptime) {
            self.driver.set_vibration(index, 0.0, 0.0);
        }

        self.publish(&events);
    }

    // ---- commands ----

    /// Make `index` the active device.
    ///
    /// No-op when `index` is already active. Out-of-range indices are ignored
    /// (deliberately permissive, traced at debug level). Switching resets the
    /// snapshot pair for the new index, so the switch itself never produces a
    /// spurious connect/disconnect on the next tick.
    pub fn select_device(&mut self, index: usize) {
        if index == self.active {
            return;
        }
        if index >= self.config.scan_width {
            debug!("ignoring selection of out-of-range index {index}");
            return;
        }
        let mut events = Vec::new();
        self.switch_to(index, &mut events);
        self.publish(&events);
    }

    /// Enable or disable auto-switch. Pure flag set; takes effect next tick.
    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    /// Start vibration on the active device.
    ///
    /// Motor values are clamped to `[0, 1]`. No-op when the active device is
    /// disconnected or its family has no haptics. A positive `duration`
    /// schedules a zero-out for that moment, replacing any pending one; a
    /// zero `duration` rumbles until explicitly cleared and cancels any
    /// pending zero-out so a stale timer cannot clip it.
    pub fn trigger_rumble(&mut self, left: f32, right: f32, duration: Duration) {
        if !self.cur.connected() {
            debug!("rumble ignored: active index {} is disconnected", self.active);
            return;
        }
        let left = left.clamp(0.0, 1.0);
        let right = right.clamp(0.0, 1.0);
        if !self.driver.set_vibration(self.active, left, right) {
            debug!("rumble ignored: index {} has no haptics", self.active);
            return;
        }
        if duration > Duration::ZERO {
            self.rumble.schedule(self.active, self.uptime + duration);
        } else {
            self.rumble.cancel(self.active);
        }
    }

    // ---- queries ----

    /// The currently active device index.
    pub fn selected_index(&self) -> usize {
        self.active
    }

    /// Derived connectivity of the active index as of the last poll.
    pub fn is_connected(&self) -> bool {
        self.cur.connected()
    }

    /// Whether auto-switch is enabled.
    pub fn auto_switch(&self) -> bool {
        self.auto_switch
    }

    /// Last polled snapshot of the active index.
    pub fn current_state(&self) -> &DeviceSnapshot {
        &self.cur
    }

    /// Structured-family half of the active snapshot.
    pub fn current_gamepad(&self) -> &GamepadState {
        &self.cur.gamepad
    }

    /// Generic-family half of the active snapshot.
    pub fn current_joystick(&self) -> &JoystickState {
        &self.cur.joystick
    }

    /// Indices of the generic-family buttons held on the active device.
    pub fn pressed_generic_buttons(&self) -> Vec<u16> {
        self.cur.joystick.pressed_buttons().collect()
    }

    /// Lazily scan all candidate indices for connectivity.
    ///
    /// Recomputed from driver capabilities on every call — live, not cached.
    pub fn connected_devices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.config.scan_width).filter(move |index| {
            self.driver.gamepad_caps(*index).connected
                || self.driver.joystick_caps(*index).connected
        })
    }

    /// Display label for `index`: structured name, then generic name, then a
    /// synthesized label, then `"Unknown Controller"`.
    pub fn device_name(&self, index: usize) -> String {
        let pad = self.driver.gamepad_caps(index);
        if pad.connected {
            return pad.name.unwrap_or_else(|| format!("Gamepad {index}"));
        }
        let stick = self.driver.joystick_caps(index);
        if stick.connected {
            return stick.name.unwrap_or_else(|| format!("Joystick {index}"));
        }
        "Unknown Controller".to_string()
    }

    /// Listener registration surface.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    // ---- internals ----

    fn poll_index(&mut self, index: usize) -> DeviceSnapshot {
        DeviceSnapshot {
            gamepad: self.driver.poll_gamepad(index),
            joystick: self.driver.poll_joystick(index),
        }
    }

    /// Ascending scan for any connected candidate, skipping the active index.
    fn scan_for_connected(&mut self) -> Option<usize> {
        let active = self.active;
        (0..self.config.scan_width)
            .filter(|index| *index != active)
            .find(|index| self.poll_index(*index).connected())
    }

    /// Ascending scan for the first connected index showing significant input.
    fn scan_for_significant(&mut self) -> Option<usize> {
        for index in 0..self.config.scan_width {
            let snapshot = if index == self.active {
                self.cur.clone()
            } else {
                self.poll_index(index)
            };
            if snapshot.connected() && snapshot_significant(&snapshot, &self.config.thresholds) {
                return Some(index);
            }
        }
        None
    }

    /// Retarget the active index, resetting the snapshot pair so the move
    /// itself cannot register as a connectivity transition.
    fn switch_to(&mut self, index: usize, events: &mut Vec<PadEvent>) {
        self.active = index;
        self.cur = self.poll_index(index);
        self.prev = self.cur.clone();
        events.push(PadEvent::SelectionChanged(index));
    }

    fn publish(&mut self, events: &[PadEvent]) {
        if events.is_empty() {
            return;
        }
        for event in events {
            match event {
                PadEvent::Connected(i) => info!("device connected on index {i}"),
                PadEvent::Disconnected(i) => info!("device disconnected on index {i}"),
                PadEvent::SelectionChanged(i) => info!("selected device index {i}"),
            }
            if let Some(diag) = self.diag.as_mut() {
                diag.record(self.uptime, event);
            }
        }
        self.bus.emit_all(events);
    }
}

impl Drop for PadArbiter {
    fn drop(&mut self) {
        // Driver-level cleanup: never leave motors spinning.
        if self.cur.connected() {
            self.driver.set_vibration(self.active, 0.0, 0.0);
        }
        self.rumble.clear();
    }
}
