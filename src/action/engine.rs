//! Action Engine - fuses keyboard, mouse and gamepad input into named actions
//!
//! The host feeds raw key and mouse transitions as they arrive and calls
//! [`ActionEngine::tick`] (or [`ActionEngine::update`]) once per frame.
//! Application code then polls [`ActionEngine::is_active`].
//!
//! # Frame flow
//!
//! ```text
//! key_down/key_up ──► KeyState ─┐
//!                               ├─► tick(dt) ──► Action state machines ──► is_active(name)
//! GamepadManager::poll ─────────┘
//! ```
//!
//! Key state and the gamepad snapshot are only read during a tick, so every
//! action in the same frame sees the same input.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::keys::KeyState;
use super::state::{Action, ActionBinding, ActionState};
use crate::clock::FrameClock;
use crate::error::InputError;
use crate::gamepad::GamepadManager;

/// Buffer window of PRESS actions in seconds
pub const DEFAULT_BUFFER_DURATION: f32 = 0.03;

#[derive(Debug)]
pub struct ActionEngine {
    actions: HashMap<String, Action>,
    keys: KeyState,
    gamepad: Option<GamepadManager>,
    buffer_duration: f32,
    clock: FrameClock,
}

impl Default for ActionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionEngine {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            keys: KeyState::new(),
            gamepad: None,
            buffer_duration: DEFAULT_BUFFER_DURATION,
            clock: FrameClock::new(),
        }
    }

    pub fn with_gamepad(mut self, gamepad: GamepadManager) -> Self {
        self.gamepad = Some(gamepad);
        self
    }

    /// Register an action, replacing any earlier action with the same name
    pub fn add_action(&mut self, binding: ActionBinding) -> Result<(), InputError> {
        let action = Action::from_binding(&binding)?;
        info!(
            "Registered action '{}' ({} keys, {} buttons, {})",
            action.name(),
            action.keys().len(),
            action.buttons().len(),
            action.mode()
        );

        if self
            .actions
            .insert(binding.name.clone(), action)
            .is_some()
        {
            warn!("Action '{}' was already registered, replaced", binding.name);
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    // Raw input ingestion

    pub fn key_down(&mut self, key: &str) {
        self.keys.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.set(key, false);
    }

    /// Mouse button transition (0=left, 1=middle, 2=right)
    pub fn mouse_down(&mut self, button: usize) {
        self.keys.set_mouse(button, true);
    }

    pub fn mouse_up(&mut self, button: usize) {
        self.keys.set_mouse(button, false);
    }

    /// Release every key and mouse button, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    pub fn key_state(&self) -> &KeyState {
        &self.keys
    }

    // Gamepad

    pub fn attach_gamepad(&mut self, gamepad: GamepadManager) {
        info!("Gamepad manager attached (slot {:?})", gamepad.selected_index());
        self.gamepad = Some(gamepad);
    }

    pub fn detach_gamepad(&mut self) -> Option<GamepadManager> {
        self.gamepad.take()
    }

    pub fn gamepad(&self) -> Option<&GamepadManager> {
        self.gamepad.as_ref()
    }

    pub fn gamepad_mut(&mut self) -> Option<&mut GamepadManager> {
        self.gamepad.as_mut()
    }

    // Settings

    pub fn buffer_duration(&self) -> f32 {
        self.buffer_duration
    }

    pub fn set_buffer_duration(&mut self, seconds: f32) -> Result<(), InputError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(InputError::InvalidArgument(format!(
                "buffer duration must be a non-negative number of seconds, got {}",
                seconds
            )));
        }
        debug!("Buffer duration set to {}s", seconds);
        self.buffer_duration = seconds;
        Ok(())
    }

    // Frame processing

    /// Run one frame using the internal monotonic clock, returns the measured dt
    pub fn update(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.tick(dt);
        dt
    }

    /// Run one frame with an explicit delta time in seconds
    pub fn tick(&mut self, dt: f32) {
        let keys = &self.keys;
        let gamepad = self.gamepad.as_ref().filter(|pad| pad.connected());
        let buffer_duration = self.buffer_duration;

        for action in self.actions.values_mut() {
            let pressed = keys.any_down(action.keys())
                || gamepad.is_some_and(|pad| {
                    action
                        .buttons()
                        .iter()
                        .any(|&button| pad.button_pressed(button))
                });

            if action.update(pressed, dt, buffer_duration) {
                debug!("Action '{}' fired", action.name());
            }
        }
    }

    // Queries

    /// Whether the action is active this frame
    ///
    /// Consumes the buffer window: a PRESS action reports each physical
    /// press to the first query only.
    pub fn is_active(&mut self, name: &str) -> Result<bool, InputError> {
        let action = self
            .actions
            .get_mut(name)
            .ok_or_else(|| InputError::NotFound(name.to_string()))?;
        Ok(action.consume())
    }

    /// Non-consuming view of an action's state
    pub fn state(&self, name: &str) -> Result<ActionState, InputError> {
        self.actions
            .get(name)
            .map(Action::state)
            .ok_or_else(|| InputError::NotFound(name.to_string()))
    }
}
