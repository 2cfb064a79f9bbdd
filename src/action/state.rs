//! Named actions and their per-frame state machines

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::keys::expand_key;
use crate::error::InputError;
use crate::gamepad::GamepadButton;

/// Activation semantics of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    /// Active for exactly as long as a trigger is down
    #[default]
    Hold,
    /// Fires once per physical press, with a short buffer window
    Press,
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionMode::Hold => write!(f, "hold"),
            ActionMode::Press => write!(f, "press"),
        }
    }
}

impl FromStr for ActionMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hold" => Ok(ActionMode::Hold),
            "press" => Ok(ActionMode::Press),
            other => Err(InputError::InvalidArgument(format!(
                "unknown action mode '{}'",
                other
            ))),
        }
    }
}

/// A gamepad trigger, either by symbolic name or already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonBinding {
    Named(String),
    Button(GamepadButton),
}

impl ButtonBinding {
    pub fn resolve(&self) -> Result<GamepadButton, InputError> {
        match self {
            ButtonBinding::Named(name) => name.parse(),
            ButtonBinding::Button(button) => Ok(*button),
        }
    }
}

impl From<GamepadButton> for ButtonBinding {
    fn from(button: GamepadButton) -> Self {
        ButtonBinding::Button(button)
    }
}

impl From<&str> for ButtonBinding {
    fn from(name: &str) -> Self {
        ButtonBinding::Named(name.to_string())
    }
}

impl From<String> for ButtonBinding {
    fn from(name: String) -> Self {
        ButtonBinding::Named(name)
    }
}

impl From<ButtonBinding> for String {
    fn from(binding: ButtonBinding) -> Self {
        match binding {
            ButtonBinding::Named(name) => name,
            ButtonBinding::Button(button) => button.name().to_string(),
        }
    }
}

/// Registration request for one action
///
/// Also the on-disk shape of an action in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub name: String,
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub gamepad_buttons: Vec<ButtonBinding>,
    #[serde(default)]
    pub mode: ActionMode,
}

impl ActionBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
            gamepad_buttons: Vec::new(),
            mode: ActionMode::Hold,
        }
    }

    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn buttons<I, B>(mut self, buttons: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<ButtonBinding>,
    {
        self.gamepad_buttons
            .extend(buttons.into_iter().map(Into::into));
        self
    }

    pub fn mode(mut self, mode: ActionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Transient per-frame state of an action
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    pub active: bool,
    /// The current press already fired
    pub latched: bool,
    /// Seconds left in the buffer window
    pub buffer_remaining: f32,
}

/// Where a PRESS action sits in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Idle,
    Buffered,
    Latched,
}

impl ActionState {
    pub fn phase(&self) -> PressPhase {
        if self.buffer_remaining > 0.0 {
            PressPhase::Buffered
        } else if self.latched {
            PressPhase::Latched
        } else {
            PressPhase::Idle
        }
    }
}

/// A registered action: its triggers, mode and live state
#[derive(Debug, Clone)]
pub struct Action {
    name: String,
    keys: Vec<String>,
    buttons: Vec<GamepadButton>,
    mode: ActionMode,
    state: ActionState,
}

impl Action {
    /// Build an action from a binding, normalizing and validating its triggers
    pub fn from_binding(binding: &ActionBinding) -> Result<Self, InputError> {
        if binding.keys.is_empty() && binding.gamepad_buttons.is_empty() {
            return Err(InputError::InvalidArgument(format!(
                "action '{}' needs at least one key or gamepad button",
                binding.name
            )));
        }

        let mut keys: Vec<String> = Vec::new();
        for key in binding.keys.iter().flat_map(|key| expand_key(key)) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let mut buttons = Vec::new();
        for binding in &binding.gamepad_buttons {
            let button = binding.resolve()?;
            if !buttons.contains(&button) {
                buttons.push(button);
            }
        }

        Ok(Self {
            name: binding.name.clone(),
            keys,
            buttons,
            mode: binding.mode,
            state: ActionState::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical key names, modifiers already expanded
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn buttons(&self) -> &[GamepadButton] {
        &self.buttons
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Advance the state machine by one frame
    ///
    /// Returns true when a PRESS action fires on this frame.
    pub fn update(&mut self, pressed: bool, dt: f32, buffer_duration: f32) -> bool {
        match self.mode {
            ActionMode::Hold => {
                self.state.active = pressed;
                false
            }
            ActionMode::Press => self.update_press(pressed, dt, buffer_duration),
        }
    }

    fn update_press(&mut self, pressed: bool, dt: f32, buffer_duration: f32) -> bool {
        let state = &mut self.state;

        if !pressed {
            state.active = false;
            state.latched = false;
            state.buffer_remaining = 0.0;
            return false;
        }

        // Buffered window: stays active while time is strictly left
        if state.buffer_remaining > 0.0 {
            state.buffer_remaining -= dt;
            if state.buffer_remaining > 0.0 {
                state.active = true;
                return false;
            }
            state.buffer_remaining = 0.0;
        }

        if state.latched {
            state.active = false;
            return false;
        }

        state.active = true;
        state.latched = true;
        state.buffer_remaining = buffer_duration;
        trace!("Action {} fired, buffering {:.3}s", self.name, buffer_duration);
        true
    }

    /// Read the active flag and consume any remaining buffer
    ///
    /// A PRESS action reports a given press to one reader only.
    pub fn consume(&mut self) -> bool {
        let active = self.state.active;
        self.state.buffer_remaining = 0.0;
        if self.mode == ActionMode::Press {
            self.state.active = false;
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_action() -> Action {
        Action::from_binding(&ActionBinding::new("jump").keys(["space"]).mode(ActionMode::Press))
            .unwrap()
    }

    #[test]
    fn empty_binding_is_rejected() {
        let err = Action::from_binding(&ActionBinding::new("nothing")).unwrap_err();
        assert!(matches!(err, InputError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_button_name_is_rejected() {
        let err = Action::from_binding(&ActionBinding::new("fire").buttons(["trigger9"]))
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidArgument(_)));
    }

    #[test]
    fn triggers_are_normalized_and_deduplicated() {
        let action = Action::from_binding(
            &ActionBinding::new("run")
                .keys(["Shift", "ShiftLeft", "KeyR"])
                .buttons([ButtonBinding::from("b"), GamepadButton::B.into()]),
        )
        .unwrap();
        assert_eq!(action.keys(), ["shiftleft", "shiftright", "keyr"]);
        assert_eq!(action.buttons(), [GamepadButton::B]);
        assert_eq!(action.mode(), ActionMode::Hold);
    }

    #[test]
    fn hold_tracks_raw_input() {
        let mut action =
            Action::from_binding(&ActionBinding::new("walk").keys(["keyw"])).unwrap();
        for pressed in [true, true, false, true, false] {
            action.update(pressed, 0.016, 0.03);
            assert_eq!(action.state().active, pressed);
        }
    }

    #[test]
    fn press_fires_once_then_latches() {
        let mut action = press_action();
        assert!(action.update(true, 0.016, 0.03));
        assert_eq!(action.state().phase(), PressPhase::Buffered);
        assert!(!action.update(true, 0.016, 0.03));
        assert!(action.state().active);
        action.update(true, 0.016, 0.03);
        assert!(!action.state().active);
        assert_eq!(action.state().phase(), PressPhase::Latched);

        action.update(false, 0.016, 0.03);
        assert_eq!(action.state().phase(), PressPhase::Idle);
        assert!(action.update(true, 0.016, 0.03));
    }

    #[test]
    fn consume_clears_buffer_and_active() {
        let mut action = press_action();
        action.update(true, 0.016, 0.03);
        assert!(action.consume());
        assert!(!action.consume());
        action.update(true, 0.016, 0.03);
        assert!(!action.state().active);
    }

    #[test]
    fn mode_parses_from_text() {
        assert_eq!("PRESS".parse::<ActionMode>().unwrap(), ActionMode::Press);
        assert_eq!("hold".parse::<ActionMode>().unwrap(), ActionMode::Hold);
        assert!("toggle".parse::<ActionMode>().is_err());
    }
}
