#![cfg(target_os = "windows")]

//! Windows XInput backend.
//!
//! Implements [`PadDriver`] over the XInput slot API (`XInputGetState` /
//! `XInputSetState`). Slots `0..4` carry the structured family; XInput has no
//! generic-family surface, so joystick polls and caps always report
//! disconnected — generic HID devices must come from a host-supplied driver.
//!
//! # Normalization
//! - Thumbsticks: `[-32768, 32767] -> [-1, 1]` with asymmetric scaling so both
//!   endpoints map exactly.
//! - Triggers: `0..255 -> [0, 1]`.
//! - D-pad: the four `wButtons` direction bits, passed through as named
//!   directions.
//!
//! XInput exposes no product string, so capability names are `None`; the
//! arbiter synthesizes a `"Gamepad N"` label.

use windows_sys::Win32::UI::Input::XboxController::*;

use crate::driver::{DeviceCaps, PadDriver};
use crate::state::{ButtonSet, Dpad, GamepadState, JoystickState, PadButton, StickPos};

/// XInput supports exactly four user slots.
const XINPUT_SLOTS: usize = 4;

/// wButtons bit → named button. Indices must stay aligned with
/// [`PadButton::ALL`].
const BUTTON_MAP: [(u16, PadButton); 10] = [
    (XINPUT_GAMEPAD_A, PadButton::A),
    (XINPUT_GAMEPAD_B, PadButton::B),
    (XINPUT_GAMEPAD_X, PadButton::X),
    (XINPUT_GAMEPAD_Y, PadButton::Y),
    (XINPUT_GAMEPAD_LEFT_SHOULDER, PadButton::LeftShoulder),
    (XINPUT_GAMEPAD_RIGHT_SHOULDER, PadButton::RightShoulder),
    (XINPUT_GAMEPAD_BACK, PadButton::Back),
    (XINPUT_GAMEPAD_START, PadButton::Start),
    (XINPUT_GAMEPAD_LEFT_THUMB, PadButton::LeftThumb),
    (XINPUT_GAMEPAD_RIGHT_THUMB, PadButton::RightThumb),
];

/// Stateless XInput-slot driver.
pub struct XInputDriver;

impl XInputDriver {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn normalize_thumb(v: i16) -> f32 {
        // Map [-32768, 32767] -> [-1, 1]
        if v >= 0 {
            (v as f32) / 32767.0
        } else {
            (v as f32) / 32768.0
        }
    }

    #[inline]
    fn normalize_trigger(v: u8) -> f32 {
        (v as f32) / 255.0
    }

    fn read_state(index: usize) -> Option<XINPUT_STATE> {
        if index >= XINPUT_SLOTS {
            return None;
        }
        // FFI struct: must be manually zeroed.
        let mut state: XINPUT_STATE = unsafe { std::mem::zeroed() };
        // XInputGetState returns 0 on success; anything else is an empty slot.
        let res = unsafe { XInputGetState(index as u32, &mut state) };
        (res == 0).then_some(state)
    }
}

impl Default for XInputDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PadDriver for XInputDriver {
    fn poll_gamepad(&mut self, index: usize) -> GamepadState {
        let Some(state) = Self::read_state(index) else {
            return GamepadState::default();
        };
        let gp = state.Gamepad;
        let held = gp.wButtons;

        let mut buttons = ButtonSet::NONE;
        for (mask, button) in BUTTON_MAP {
            if held & mask != 0 {
                buttons.press(button);
            }
        }

        GamepadState {
            connected: true,
            buttons,
            dpad: Dpad {
                up: held & XINPUT_GAMEPAD_DPAD_UP != 0,
                down: held & XINPUT_GAMEPAD_DPAD_DOWN != 0,
                left: held & XINPUT_GAMEPAD_DPAD_LEFT != 0,
                right: held & XINPUT_GAMEPAD_DPAD_RIGHT != 0,
            },
            left_stick: StickPos::new(
                Self::normalize_thumb(gp.sThumbLX),
                Self::normalize_thumb(gp.sThumbLY),
            ),
            right_stick: StickPos::new(
                Self::normalize_thumb(gp.sThumbRX),
                Self::normalize_thumb(gp.sThumbRY),
            ),
            left_trigger: Self::normalize_trigger(gp.bLeftTrigger),
            right_trigger: Self::normalize_trigger(gp.bRightTrigger),
        }
    }

    fn poll_joystick(&mut self, _index: usize) -> JoystickState {
        JoystickState::default()
    }

    fn gamepad_caps(&self, index: usize) -> DeviceCaps {
        let connected = Self::read_state(index).is_some();
        DeviceCaps {
            connected,
            name: None,
            buttons: BUTTON_MAP.len(),
            axes: 6,
            hats: 1,
        }
    }

    fn joystick_caps(&self, _index: usize) -> DeviceCaps {
        DeviceCaps::default()
    }

    fn set_vibration(&mut self, index: usize, left: f32, right: f32) -> bool {
        if index >= XINPUT_SLOTS {
            return false;
        }
        let mut vibration = XINPUT_VIBRATION {
            wLeftMotorSpeed: (left.clamp(0.0, 1.0) * 65535.0) as u16,
            wRightMotorSpeed: (right.clamp(0.0, 1.0) * 65535.0) as u16,
        };
        // Returns 0 on success; a disconnected slot reports an error code.
        unsafe { XInputSetState(index as u32, &mut vibration) == 0 }
    }
}
