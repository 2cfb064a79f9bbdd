//! Error definitions for action registration and lookup

use thiserror::Error;

/// Errors surfaced by the input layer
///
/// Both kinds indicate a setup mistake in the calling code. Missing or
/// disconnected hardware is never reported through this type; gamepad
/// queries degrade to neutral values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An argument was rejected (empty trigger set, unknown button name, bad deadzone)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The named action was never registered
    #[error("Action not found: {0}")]
    NotFound(String),
}
