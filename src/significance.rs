//! Input-significance heuristics.
//!
//! "Significant" means the device's current state looks like deliberate user
//! action rather than noise: a held button, a pushed hat, a trigger or stick
//! past its threshold. Auto-switch uses this to decide which device the user
//! is actually touching.
//!
//! Each check operates strictly on the candidate index's own polled state for
//! both families; nothing here reads the active device.

use serde::{Deserialize, Serialize};

use crate::state::{DeviceSnapshot, GamepadState, JoystickState};

/// Activation thresholds for the significance checks.
///
/// All comparisons are strict (`>`), so a value sitting exactly on the
/// threshold does not count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceThresholds {
    /// Trigger activation threshold, `[0, 1]` scale.
    pub trigger: f32,
    /// Thumbstick deadzone radius.
    pub stick_deadzone: f32,
    /// Generic-axis deadzone (absolute value).
    pub axis_deadzone: f32,
}

impl Default for SignificanceThresholds {
    fn default() -> Self {
        Self {
            trigger: 0.1,
            stick_deadzone: 0.2,
            axis_deadzone: 0.2,
        }
    }
}

/// `true` if a structured-family state shows deliberate input.
pub fn gamepad_significant(state: &GamepadState, thresholds: &SignificanceThresholds) -> bool {
    state.buttons.any()
        || state.dpad.any()
        || state.left_trigger > thresholds.trigger
        || state.right_trigger > thresholds.trigger
        || state.left_stick.magnitude() > thresholds.stick_deadzone
        || state.right_stick.magnitude() > thresholds.stick_deadzone
}

/// `true` if a generic-family state shows deliberate input.
pub fn joystick_significant(state: &JoystickState, thresholds: &SignificanceThresholds) -> bool {
    state.buttons.iter().any(|held| *held)
        || state.axes.iter().any(|a| a.abs() > thresholds.axis_deadzone)
        || state.any_hat_engaged()
}

/// `true` if either family of this index's snapshot shows deliberate input.
pub fn snapshot_significant(snapshot: &DeviceSnapshot, thresholds: &SignificanceThresholds) -> bool {
    gamepad_significant(&snapshot.gamepad, thresholds)
        || joystick_significant(&snapshot.joystick, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PadButton, StickPos};

    fn thresholds() -> SignificanceThresholds {
        SignificanceThresholds::default()
    }

    #[test]
    fn test_neutral_gamepad_not_significant() {
        let state = GamepadState {
            connected: true,
            ..Default::default()
        };
        assert!(!gamepad_significant(&state, &thresholds()));
    }

    #[test]
    fn test_button_press_is_significant() {
        let mut state = GamepadState {
            connected: true,
            ..Default::default()
        };
        state.buttons.press(PadButton::A);
        assert!(gamepad_significant(&state, &thresholds()));
    }

    #[test]
    fn test_dpad_is_significant() {
        let mut state = GamepadState::default();
        state.dpad.down = true;
        assert!(gamepad_significant(&state, &thresholds()));
    }

    #[test]
    fn test_trigger_threshold_is_strict() {
        let mut state = GamepadState::default();
        state.left_trigger = 0.1;
        assert!(!gamepad_significant(&state, &thresholds()));
        state.left_trigger = 0.11;
        assert!(gamepad_significant(&state, &thresholds()));
    }

    #[test]
    fn test_stick_deadzone_uses_magnitude() {
        let mut state = GamepadState::default();
        // 0.15 on each axis: magnitude ~0.212, past the 0.2 radius.
        state.right_stick = StickPos::new(0.15, 0.15);
        assert!(gamepad_significant(&state, &thresholds()));

        state.right_stick = StickPos::new(0.15, 0.0);
        assert!(!gamepad_significant(&state, &thresholds()));
    }

    #[test]
    fn test_joystick_axis_threshold() {
        let mut state = JoystickState {
            connected: true,
            axes: vec![0.05, 0.0],
            ..Default::default()
        };
        assert!(!joystick_significant(&state, &thresholds()));

        state.axes[0] = 0.5;
        assert!(joystick_significant(&state, &thresholds()));

        state.axes[0] = -0.5;
        assert!(joystick_significant(&state, &thresholds()));
    }

    #[test]
    fn test_joystick_button_and_hat() {
        let mut state = JoystickState {
            connected: true,
            buttons: vec![false, false],
            hats: vec![-1],
            ..Default::default()
        };
        assert!(!joystick_significant(&state, &thresholds()));

        state.buttons[1] = true;
        assert!(joystick_significant(&state, &thresholds()));

        state.buttons[1] = false;
        state.hats[0] = 2;
        assert!(joystick_significant(&state, &thresholds()));
    }

    #[test]
    fn test_snapshot_or_combines_families() {
        let mut snap = DeviceSnapshot::default();
        assert!(!snapshot_significant(&snap, &thresholds()));

        snap.joystick.axes = vec![0.9];
        assert!(snapshot_significant(&snap, &thresholds()));
    }

    #[test]
    fn test_custom_thresholds() {
        let tight = SignificanceThresholds {
            trigger: 0.5,
            stick_deadzone: 0.5,
            axis_deadzone: 0.5,
        };
        let mut state = GamepadState::default();
        state.left_trigger = 0.3;
        assert!(gamepad_significant(&state, &thresholds()));
        assert!(!gamepad_significant(&state, &tight));
    }
}
