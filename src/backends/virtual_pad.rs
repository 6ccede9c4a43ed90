//! In-memory scriptable backend.
//!
//! [`VirtualDriver`] implements [`PadDriver`] over a shared slot table. The
//! driver is `Clone`; every clone is a control handle onto the same slots, so
//! a test or demo can keep one handle to script device state while the arbiter
//! owns another inside its `Box<dyn PadDriver>`.
//!
//! Vibration commands are recorded per slot and in a global log for
//! assertions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::driver::{DeviceCaps, PadDriver};
use crate::state::{GamepadState, JoystickState, PadButton};

/// Scriptable state of one device index.
#[derive(Clone, Debug, Default)]
pub struct VirtualSlot {
    pub gamepad: GamepadState,
    pub joystick: JoystickState,
    pub gamepad_name: Option<String>,
    pub joystick_name: Option<String>,
    /// Whether `set_vibration` succeeds on this slot.
    pub rumble_supported: bool,
    /// Last motor values applied to this slot.
    pub motors: (f32, f32),
}

impl VirtualSlot {
    /// Plug in a structured-family device (haptics-capable, neutral input).
    pub fn connect_gamepad(&mut self) -> &mut Self {
        self.gamepad.connected = true;
        self.rumble_supported = true;
        self
    }

    /// Plug in a generic-family device with the given channel counts.
    pub fn connect_joystick(&mut self, buttons: usize, axes: usize, hats: usize) -> &mut Self {
        self.joystick.connected = true;
        self.joystick.buttons = vec![false; buttons];
        self.joystick.axes = vec![0.0; axes];
        self.joystick.hats = vec![-1; hats];
        self
    }

    /// Unplug both families.
    pub fn disconnect(&mut self) -> &mut Self {
        self.gamepad = GamepadState::default();
        self.joystick = JoystickState::default();
        self.rumble_supported = false;
        self
    }

    pub fn press(&mut self, button: PadButton) -> &mut Self {
        self.gamepad.buttons.press(button);
        self
    }

    pub fn release(&mut self, button: PadButton) -> &mut Self {
        self.gamepad.buttons.release(button);
        self
    }
}

#[derive(Default)]
struct Inner {
    slots: HashMap<usize, VirtualSlot>,
    rumble_log: Vec<(usize, f32, f32)>,
}

/// Shared-handle scriptable driver. See the module docs.
#[derive(Clone, Default)]
pub struct VirtualDriver {
    inner: Arc<Mutex<Inner>>,
}

impl VirtualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate the slot at `index` (created empty on first touch).
    pub fn update_slot(&self, index: usize, f: impl FnOnce(&mut VirtualSlot)) {
        let mut inner = self.inner.lock().unwrap();
        f(inner.slots.entry(index).or_default());
    }

    /// Read a copy of the slot at `index`.
    pub fn slot(&self, index: usize) -> VirtualSlot {
        self.inner
            .lock()
            .unwrap()
            .slots
            .get(&index)
            .cloned()
            .unwrap_or_default()
    }

    /// Every vibration command seen so far, in order: `(index, left, right)`.
    pub fn rumble_log(&self) -> Vec<(usize, f32, f32)> {
        self.inner.lock().unwrap().rumble_log.clone()
    }
}

impl PadDriver for VirtualDriver {
    fn poll_gamepad(&mut self, index: usize) -> GamepadState {
        self.inner
            .lock()
            .unwrap()
            .slots
            .get(&index)
            .map(|s| s.gamepad)
            .unwrap_or_default()
    }

    fn poll_joystick(&mut self, index: usize) -> JoystickState {
        self.inner
            .lock()
            .unwrap()
            .slots
            .get(&index)
            .map(|s| s.joystick.clone())
            .unwrap_or_default()
    }

    fn gamepad_caps(&self, index: usize) -> DeviceCaps {
        let inner = self.inner.lock().unwrap();
        let Some(slot) = inner.slots.get(&index) else {
            return DeviceCaps::default();
        };
        DeviceCaps {
            connected: slot.gamepad.connected,
            name: slot.gamepad_name.clone(),
            buttons: PadButton::ALL.len(),
            axes: 6,
            hats: 1,
        }
    }

    fn joystick_caps(&self, index: usize) -> DeviceCaps {
        let inner = self.inner.lock().unwrap();
        let Some(slot) = inner.slots.get(&index) else {
            return DeviceCaps::default();
        };
        DeviceCaps {
            connected: slot.joystick.connected,
            name: slot.joystick_name.clone(),
            buttons: slot.joystick.buttons.len(),
            axes: slot.joystick.axes.len(),
            hats: slot.joystick.hats.len(),
        }
    }

    fn set_vibration(&mut self, index: usize, left: f32, right: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let applied = match inner.slots.get_mut(&index) {
            Some(slot) if slot.gamepad.connected && slot.rumble_supported => {
                slot.motors = (left, right);
                true
            }
            _ => false,
        };
        if applied {
            inner.rumble_log.push((index, left, right));
        }
        applied
    }
}
