//! padpick — controller-input arbitration for multi-device setups.
//!
//! Tracks XInput-style gamepads and generic HID joysticks across a slot
//! range, keeps exactly one index active, publishes connect/disconnect and
//! selection transitions to registered listeners, recovers from total
//! disconnection with a debounced rescan, and can auto-switch to whichever
//! device the user is actually touching.
//!
//! The host drives everything with one [`PadArbiter::tick`] per frame;
//! hardware access goes through the [`PadDriver`] seam (bring your own, or
//! use a bundled backend from [`backends`]).

pub mod arbiter;
pub mod backends;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod event;
pub mod eventbus;
pub mod rumble;
pub mod significance;
pub mod state;

pub use arbiter::*;
pub use config::*;
pub use driver::*;
pub use event::*;
pub use eventbus::*;
pub use significance::*;
pub use state::*;
