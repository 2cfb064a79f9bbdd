//! Gamepad identifiers and raw hardware snapshots
//!
//! Button indices follow the "standard" gamepad layout most drivers and
//! browsers agree on. Triggers are the exception: some report them through
//! the axis array, others through dedicated button entries. [`TriggerMode`]
//! captures which one a given pad uses.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Logical gamepad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Guide,
    /// Left trigger pulled to full travel
    LeftTriggerFull,
    /// Right trigger pulled to full travel
    RightTriggerFull,
}

/// Analog axes exposed by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

/// Thumbstick selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumbstick {
    Left,
    Right,
}

impl Thumbstick {
    /// The (x, y) axis pair backing this stick
    pub fn axes(self) -> (GamepadAxis, GamepadAxis) {
        match self {
            Thumbstick::Left => (GamepadAxis::LeftStickX, GamepadAxis::LeftStickY),
            Thumbstick::Right => (GamepadAxis::RightStickX, GamepadAxis::RightStickY),
        }
    }
}

/// Symbolic name lookup table, first entry per button is its canonical name
pub const BUTTON_NAMES: &[(&str, GamepadButton)] = &[
    ("a", GamepadButton::A),
    ("b", GamepadButton::B),
    ("x", GamepadButton::X),
    ("y", GamepadButton::Y),
    ("lb", GamepadButton::LeftBumper),
    ("rb", GamepadButton::RightBumper),
    ("lt", GamepadButton::LeftTrigger),
    ("rt", GamepadButton::RightTrigger),
    ("select", GamepadButton::Select),
    ("back", GamepadButton::Select),
    ("start", GamepadButton::Start),
    ("ls", GamepadButton::LeftStick),
    ("rs", GamepadButton::RightStick),
    ("up", GamepadButton::DPadUp),
    ("down", GamepadButton::DPadDown),
    ("left", GamepadButton::DPadLeft),
    ("right", GamepadButton::DPadRight),
    ("guide", GamepadButton::Guide),
    ("home", GamepadButton::Guide),
    ("lt_full", GamepadButton::LeftTriggerFull),
    ("rt_full", GamepadButton::RightTriggerFull),
];

impl GamepadButton {
    /// Position in the snapshot button array
    ///
    /// Full-pull pseudo-buttons share the index of their trigger; the
    /// manager reads them through the analog value instead of the flag.
    pub fn index(self) -> usize {
        match self {
            GamepadButton::A => 0,
            GamepadButton::B => 1,
            GamepadButton::X => 2,
            GamepadButton::Y => 3,
            GamepadButton::LeftBumper => 4,
            GamepadButton::RightBumper => 5,
            GamepadButton::LeftTrigger | GamepadButton::LeftTriggerFull => 6,
            GamepadButton::RightTrigger | GamepadButton::RightTriggerFull => 7,
            GamepadButton::Select => 8,
            GamepadButton::Start => 9,
            GamepadButton::LeftStick => 10,
            GamepadButton::RightStick => 11,
            GamepadButton::DPadUp => 12,
            GamepadButton::DPadDown => 13,
            GamepadButton::DPadLeft => 14,
            GamepadButton::DPadRight => 15,
            GamepadButton::Guide => 16,
        }
    }

    /// Canonical symbolic name
    pub fn name(self) -> &'static str {
        BUTTON_NAMES
            .iter()
            .find(|(_, button)| *button == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }

    /// Resolve a symbolic name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        BUTTON_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == lowered)
            .map(|(_, button)| *button)
    }
}

impl fmt::Display for GamepadButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GamepadButton {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| InputError::InvalidArgument(format!("unknown gamepad button '{}'", s)))
    }
}

/// Number of entries in a standard button array
pub const STANDARD_BUTTON_COUNT: usize = 17;

/// How a pad reports its analog triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Axes `[LX, LY, LT, RX, RY, RT]`, triggers in [-1, 1]
    Axes,
    /// Axes `[LX, LY, RX, RY]`, triggers as analog button values in [0, 1]
    Buttons,
}

impl TriggerMode {
    // Slot that only exists on pads reporting triggers through axes
    const PROBE_AXIS: usize = 5;

    /// Inspect a snapshot and decide where its triggers live
    pub fn detect(snapshot: &GamepadSnapshot) -> Self {
        match snapshot.axis(Self::PROBE_AXIS) {
            Some(value) if value.is_finite() => TriggerMode::Axes,
            _ => TriggerMode::Buttons,
        }
    }

    /// Axis array slot for a thumbstick axis, or for a trigger in axis mode
    pub fn axis_slot(self, axis: GamepadAxis) -> Option<usize> {
        match (self, axis) {
            (_, GamepadAxis::LeftStickX) => Some(0),
            (_, GamepadAxis::LeftStickY) => Some(1),
            (TriggerMode::Axes, GamepadAxis::LeftTrigger) => Some(2),
            (TriggerMode::Axes, GamepadAxis::RightStickX) => Some(3),
            (TriggerMode::Axes, GamepadAxis::RightStickY) => Some(4),
            (TriggerMode::Axes, GamepadAxis::RightTrigger) => Some(5),
            (TriggerMode::Buttons, GamepadAxis::RightStickX) => Some(2),
            (TriggerMode::Buttons, GamepadAxis::RightStickY) => Some(3),
            (TriggerMode::Buttons, _) => None,
        }
    }

    /// Number of axes a neutral snapshot carries in this mode
    pub fn axis_count(self) -> usize {
        match self {
            TriggerMode::Axes => 6,
            TriggerMode::Buttons => 4,
        }
    }
}

/// One button entry: digital flag plus analog travel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonValue {
    pub pressed: bool,
    pub value: f32,
}

impl ButtonValue {
    pub fn new(pressed: bool, value: f32) -> Self {
        Self { pressed, value }
    }
}

/// Raw hardware state of one pad, replaced wholesale on every poll
#[derive(Debug, Clone, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub buttons: Vec<ButtonValue>,
    pub axes: Vec<f32>,
}

impl GamepadSnapshot {
    pub fn new(buttons: Vec<ButtonValue>, axes: Vec<f32>) -> Self {
        Self {
            connected: true,
            buttons,
            axes,
        }
    }

    /// A connected pad at rest in the given layout
    ///
    /// In axis mode released triggers sit at -1.0.
    pub fn neutral(mode: TriggerMode) -> Self {
        let mut axes = vec![0.0; mode.axis_count()];
        if mode == TriggerMode::Axes {
            axes[2] = -1.0;
            axes[5] = -1.0;
        }
        Self::new(vec![ButtonValue::default(); STANDARD_BUTTON_COUNT], axes)
    }

    pub fn button(&self, index: usize) -> Option<ButtonValue> {
        self.buttons.get(index).copied()
    }

    pub fn axis(&self, index: usize) -> Option<f32> {
        self.axes.get(index).copied()
    }

    /// Set a button entry, growing the array if needed
    pub fn set_button(&mut self, index: usize, pressed: bool, value: f32) {
        if self.buttons.len() <= index {
            self.buttons.resize(index + 1, ButtonValue::default());
        }
        self.buttons[index] = ButtonValue::new(pressed, value);
    }

    /// Set an axis entry, growing the array if needed
    pub fn set_axis(&mut self, index: usize, value: f32) {
        if self.axes.len() <= index {
            self.axes.resize(index + 1, 0.0);
        }
        self.axes[index] = value;
    }
}
