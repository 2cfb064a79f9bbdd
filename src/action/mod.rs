//! Action subsystem
//!
//! Maps physical triggers (keys, mouse buttons, gamepad buttons) onto named
//! logical actions with HOLD or PRESS semantics. See [`engine`] for the
//! per-frame flow.

pub mod engine;
pub mod keys;
pub mod state;

pub use engine::{ActionEngine, DEFAULT_BUFFER_DURATION};
pub use keys::{canonical_key, expand_key, KeyState, MOUSE_BUTTON_NAMES};
pub use state::{Action, ActionBinding, ActionMode, ActionState, ButtonBinding, PressPhase};
