//! Frame-driven input abstraction for keyboard, mouse and gamepad
//!
//! - [`gamepad`] normalizes one physical pad (trigger reporting quirks,
//!   deadzone shaping, connection lifecycle).
//! - [`action`] fuses raw inputs into named HOLD/PRESS actions that game
//!   code polls once per frame.
//! - [`config`] loads settings and bindings from TOML.
//!
//! ```rust
//! use padaction::action::{ActionBinding, ActionEngine, ActionMode};
//!
//! let mut engine = ActionEngine::new();
//! engine
//!     .add_action(ActionBinding::new("jump").keys(["space"]).buttons(["a"]).mode(ActionMode::Press))
//!     .unwrap();
//!
//! engine.key_down("Space");
//! engine.tick(0.016);
//! assert!(engine.is_active("jump").unwrap());
//! ```

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod gamepad;

pub use action::{ActionBinding, ActionEngine, ActionMode};
pub use clock::FrameClock;
pub use config::InputConfig;
pub use error::InputError;
pub use gamepad::{GamepadAxis, GamepadButton, GamepadManager, GamepadSnapshot, Thumbstick};
