//! Device-state snapshots for both device families.
//!
//! padpick tracks two families of physical devices per index:
//! - **Gamepad** ([`GamepadState`]): the structured, XInput-style family with a
//!   fixed set of named buttons, two sticks, two triggers and a D-pad.
//! - **Joystick** ([`JoystickState`]): the generic HID family with
//!   variable-length button/axis/hat arrays.
//!
//! A given index may expose either family, both, or neither; [`DeviceSnapshot`]
//! bundles the pair and derives connectivity as the OR of the two.
//!
//! ## Value conventions
//! - **Stick axes** are normalized to `[-1.0, 1.0]`.
//! - **Triggers** are normalized to `[0.0, 1.0]` (`0` released, `1` fully pulled).
//! - **Generic axes** are normalized to `[-1.0, 1.0]`.
//! - **Hats (POV/D-pad)**: `-1` = neutral, `0..7` = 8-way directions (Up = 0,
//!   clockwise). The structured family's D-pad is kept as four named booleans
//!   instead, since callers address it by direction.
//!
//! Backends are responsible for normalizing into these ranges; everything above
//! the driver seam assumes them.

use serde::{Deserialize, Serialize};

/// Named buttons of the structured (XInput-style) family.
///
/// The set matches the stable XInput layout; indices are the bit positions
/// used by [`ButtonSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
    LeftThumb,
    RightThumb,
}

impl PadButton {
    /// All named buttons, in bit order.
    pub const ALL: [PadButton; 10] = [
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::LeftShoulder,
        PadButton::RightShoulder,
        PadButton::Back,
        PadButton::Start,
        PadButton::LeftThumb,
        PadButton::RightThumb,
    ];

    /// Bit position of this button inside a [`ButtonSet`].
    #[inline]
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Pressed-button set of the structured family, stored as a bitfield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSet(pub u16);

impl ButtonSet {
    /// Empty set (nothing pressed).
    pub const NONE: ButtonSet = ButtonSet(0);

    #[inline]
    pub fn press(&mut self, button: PadButton) {
        self.0 |= button.bit();
    }

    #[inline]
    pub fn release(&mut self, button: PadButton) {
        self.0 &= !button.bit();
    }

    #[inline]
    pub fn is_pressed(&self, button: PadButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// `true` if any named button is pressed.
    #[inline]
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    /// Iterate the currently pressed buttons in bit order.
    pub fn iter(&self) -> impl Iterator<Item = PadButton> + '_ {
        PadButton::ALL.into_iter().filter(|b| self.is_pressed(*b))
    }
}

/// D-pad state of the structured family as named directions.
///
/// Conflicting pairs (up+down, left+right) are backend territory; this type
/// stores whatever the backend reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dpad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Dpad {
    /// `true` if any direction is held.
    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Thumbstick position, both components in `[-1.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StickPos {
    pub x: f32,
    pub y: f32,
}

impl StickPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from center, used for deadzone checks.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// One poll of a structured-family device.
///
/// `Default` is the disconnected neutral state, which is also what backends
/// return for an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GamepadState {
    pub connected: bool,
    pub buttons: ButtonSet,
    pub dpad: Dpad,
    pub left_stick: StickPos,
    pub right_stick: StickPos,
    /// Left trigger in `[0, 1]`.
    pub left_trigger: f32,
    /// Right trigger in `[0, 1]`.
    pub right_trigger: f32,
}

/// One poll of a generic-family (HID joystick) device.
///
/// Array lengths are whatever the device exposes and may differ between
/// indices; `Default` is the disconnected empty state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JoystickState {
    pub connected: bool,
    pub buttons: Vec<bool>,
    /// Axis values in `[-1, 1]`.
    pub axes: Vec<f32>,
    /// Hat values: `-1` neutral, `0..7` directions (Up = 0, clockwise).
    pub hats: Vec<i8>,
}

impl JoystickState {
    /// Indices of the currently held buttons.
    pub fn pressed_buttons(&self) -> impl Iterator<Item = u16> + '_ {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .map(|(i, _)| i as u16)
    }

    /// `true` if any hat is pushed out of neutral.
    pub fn any_hat_engaged(&self) -> bool {
        self.hats.iter().any(|h| *h >= 0)
    }
}

/// Per-family state pair for a single device index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub gamepad: GamepadState,
    pub joystick: JoystickState,
}

impl DeviceSnapshot {
    /// Derived connectivity: the index counts as connected if either family
    /// reports a device.
    #[inline]
    pub fn connected(&self) -> bool {
        self.gamepad.connected || self.joystick.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_set_press_release() {
        let mut set = ButtonSet::NONE;
        assert!(!set.any());

        set.press(PadButton::A);
        set.press(PadButton::Start);
        assert!(set.is_pressed(PadButton::A));
        assert!(set.is_pressed(PadButton::Start));
        assert!(!set.is_pressed(PadButton::B));
        assert!(set.any());

        set.release(PadButton::A);
        assert!(!set.is_pressed(PadButton::A));
        assert!(set.is_pressed(PadButton::Start));
    }

    #[test]
    fn test_button_set_iter_in_bit_order() {
        let mut set = ButtonSet::NONE;
        set.press(PadButton::RightThumb);
        set.press(PadButton::B);

        let pressed: Vec<PadButton> = set.iter().collect();
        assert_eq!(pressed, vec![PadButton::B, PadButton::RightThumb]);
    }

    #[test]
    fn test_dpad_any() {
        let mut dpad = Dpad::default();
        assert!(!dpad.any());
        dpad.left = true;
        assert!(dpad.any());
    }

    #[test]
    fn test_stick_magnitude() {
        let stick = StickPos::new(0.3, 0.4);
        assert!((stick.magnitude() - 0.5).abs() < 1e-6);
        assert_eq!(StickPos::default().magnitude(), 0.0);
    }

    #[test]
    fn test_joystick_pressed_buttons() {
        let stick = JoystickState {
            connected: true,
            buttons: vec![false, true, false, true],
            ..Default::default()
        };
        let pressed: Vec<u16> = stick.pressed_buttons().collect();
        assert_eq!(pressed, vec![1, 3]);
    }

    #[test]
    fn test_hat_engagement() {
        let mut stick = JoystickState {
            connected: true,
            hats: vec![-1, -1],
            ..Default::default()
        };
        assert!(!stick.any_hat_engaged());
        stick.hats[1] = 6;
        assert!(stick.any_hat_engaged());
    }

    #[test]
    fn test_snapshot_connectivity_is_or_of_families() {
        let mut snap = DeviceSnapshot::default();
        assert!(!snap.connected());

        snap.joystick.connected = true;
        assert!(snap.connected());

        snap.joystick.connected = false;
        snap.gamepad.connected = true;
        assert!(snap.connected());
    }
}
