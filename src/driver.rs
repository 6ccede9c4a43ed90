//! The driver seam.
//!
//! [`PadDriver`] is the boundary between the arbiter and whatever actually
//! talks to hardware. The arbiter never enumerates devices itself; it asks the
//! driver about slot indices `0..scan_width` and treats the answers as truth.
//!
//! # Contract
//! - Polling an index with no device behind it returns that family's
//!   disconnected `Default` state. A device vanishing mid-call is reported the
//!   same way — drivers never surface device loss as an error.
//! - Capability queries are side-effect free and cheap enough to call several
//!   times per frame (UI refresh paths re-scan them).
//! - `set_vibration` reports whether the command was applied. Only the
//!   structured family has a haptics API, so joystick-only indices return
//!   `false`.
//!
//! Bundled implementations live in [`crate::backends`].

use serde::{Deserialize, Serialize};

use crate::state::{GamepadState, JoystickState};

/// Capability snapshot for one family at one index.
///
/// All counts are best-effort; backends populate what the platform reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceCaps {
    pub connected: bool,
    /// Driver-reported display name, when the platform has one.
    pub name: Option<String>,
    pub buttons: usize,
    pub axes: usize,
    pub hats: usize,
}

/// Backend interface for polling device slots and driving haptics.
pub trait PadDriver: Send {
    /// Current structured-family state at `index`.
    fn poll_gamepad(&mut self, index: usize) -> GamepadState;

    /// Current generic-family state at `index`.
    fn poll_joystick(&mut self, index: usize) -> JoystickState;

    /// Structured-family capabilities at `index`.
    fn gamepad_caps(&self, index: usize) -> DeviceCaps;

    /// Generic-family capabilities at `index`.
    fn joystick_caps(&self, index: usize) -> DeviceCaps;

    /// Set motor speeds (`[0, 1]` each) on the structured device at `index`.
    ///
    /// Returns `false` when the index has no device with haptics support.
    fn set_vibration(&mut self, index: usize, left: f32, right: f32) -> bool;
}
