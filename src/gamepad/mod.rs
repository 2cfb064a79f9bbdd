//! Gamepad subsystem
//!
//! Normalizes one physical gamepad for the action engine:
//!
//! 1. [`types`] - Button/axis identifiers and raw hardware snapshots
//! 2. [`deadzone`] - Inner/outer deadzone shaping for thumbsticks
//! 3. [`source`] - Host-provided snapshot sources (gilrs behind the `gamepad` feature)
//! 4. [`manager`] - Connection lifecycle and normalized queries
//!
//! # Architecture
//!
//! ```text
//! Host/Driver ──► GamepadSource ──► GamepadManager ──► ActionEngine / game code
//!                 (raw snapshots)   (trigger quirk, deadzone)
//! ```

pub mod deadzone;
pub mod manager;
pub mod source;
pub mod types;

pub use deadzone::{apply_deadzone, DeadzoneConfig};
pub use manager::GamepadManager;
pub use source::GamepadSource;
#[cfg(feature = "gamepad")]
pub use source::GilrsSource;
pub use types::{
    ButtonValue, GamepadAxis, GamepadButton, GamepadSnapshot, Thumbstick, TriggerMode,
    BUTTON_NAMES,
};
