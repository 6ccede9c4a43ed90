//! Bundled [`PadDriver`](crate::driver::PadDriver) implementations.
//!
//! # Feature flags
//! - **`xinput`** (default) — enables the Windows XInput backend.
//!
//! The virtual backend is always available; it backs the demos and the
//! arbiter's own tests, and is useful for host apps that inject synthetic
//! devices.
//!
//! padpick reads devices; it does not create virtual OS devices (vJoy/uinput).

use crate::driver::PadDriver;

#[cfg(all(feature = "xinput", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "xinput", target_os = "windows"))))]
pub mod xinput;

pub mod virtual_pad;

/// The platform's default hardware driver, when one is bundled.
///
/// Currently: XInput on Windows with the `xinput` feature. Hosts on other
/// platforms (or with richer device stacks) supply their own driver.
pub fn default_driver() -> Option<Box<dyn PadDriver>> {
    #[cfg(all(feature = "xinput", target_os = "windows"))]
    {
        Some(Box::new(xinput::XInputDriver::new()))
    }
    #[cfg(not(all(feature = "xinput", target_os = "windows")))]
    {
        None
    }
}
