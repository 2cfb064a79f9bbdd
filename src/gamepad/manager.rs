//! Gamepad Manager - normalized view of one physical pad
//!
//! Tracks a single gamepad (a fixed slot, or whichever pad shows up first)
//! and answers button, axis and thumbstick queries with the per-driver
//! trigger quirk hidden and deadzone shaping applied.
//!
//! # Failure semantics
//!
//! No query fails. Without a live snapshot every query returns its neutral
//! value (`false`, `0.0`, [`Vec2::ZERO`]) so the frame loop never has to
//! special-case a missing or unplugged controller.
//!
//! # Trigger mode
//!
//! The first accepted snapshot fixes the [`TriggerMode`] for the lifetime of
//! the manager. Later reconnections reuse it, even if a different pad is
//! plugged into the slot.

use glam::Vec2;
use tracing::{debug, info, warn};

use super::deadzone::DeadzoneConfig;
use super::source::GamepadSource;
use super::types::{GamepadAxis, GamepadButton, GamepadSnapshot, Thumbstick, TriggerMode};
use crate::error::InputError;

#[derive(Debug, Clone, Default)]
pub struct GamepadManager {
    // Requested slot, None means "any connected pad"
    index: Option<usize>,

    // Slot of the pad currently held
    tracked: Option<usize>,

    snapshot: Option<GamepadSnapshot>,

    // Determined on the first accepted snapshot, never recomputed
    trigger_mode: Option<TriggerMode>,

    deadzone: DeadzoneConfig,
}

impl GamepadManager {
    /// Create a manager for a fixed slot, or for any pad when `index` is None
    pub fn new(index: Option<usize>) -> Self {
        debug!("Creating GamepadManager for slot {:?}", index);
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn with_deadzone(mut self, deadzone: DeadzoneConfig) -> Self {
        self.deadzone = deadzone;
        self
    }

    pub fn deadzone(&self) -> DeadzoneConfig {
        self.deadzone
    }

    /// Replace the deadzone pair, rejecting invalid thresholds
    pub fn set_deadzone(&mut self, inner: f32, outer: f32) -> Result<(), InputError> {
        self.deadzone = DeadzoneConfig::new(inner, outer)?;
        debug!("Deadzone updated: inner={} outer={}", inner, outer);
        Ok(())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.index
    }

    pub fn tracked_index(&self) -> Option<usize> {
        self.tracked
    }

    pub fn trigger_mode(&self) -> Option<TriggerMode> {
        self.trigger_mode
    }

    /// Refresh the snapshot from the host's gamepad source
    ///
    /// In "any pad" mode the currently tracked slot is preferred; once it
    /// disappears the first connected pad is acquired under the same rules.
    pub fn poll<S: GamepadSource + ?Sized>(&mut self, source: &S) {
        let found = match self.index {
            Some(index) => source.pad(index).map(|snapshot| (index, snapshot)),
            None => {
                let still_tracked = self.tracked.and_then(|index| {
                    source
                        .pad(index)
                        .filter(|snapshot| snapshot.connected)
                        .map(|snapshot| (index, snapshot))
                });
                match still_tracked {
                    Some(found) => Some(found),
                    None => {
                        // Tracked pad is gone, fall back to acquisition
                        self.disconnect();
                        source.first_connected()
                    }
                }
            }
        };

        match found {
            Some((index, snapshot)) if snapshot.connected => self.connect(index, snapshot),
            _ => self.disconnect(),
        }
    }

    /// Accept a snapshot for `index` (event-driven hosts call this directly)
    pub fn connect(&mut self, index: usize, snapshot: GamepadSnapshot) {
        if !snapshot.connected {
            self.disconnect();
            return;
        }

        if let Some(selected) = self.index {
            if selected != index {
                debug!("Ignoring gamepad in slot {} (tracking slot {})", index, selected);
                return;
            }
        }

        if let Some(tracked) = self.tracked {
            if self.index.is_none() && tracked != index && self.snapshot.is_some() {
                debug!("Ignoring gamepad in slot {} (already tracking {})", index, tracked);
                return;
            }
        }

        if self.snapshot.is_none() {
            info!(
                "Gamepad connected in slot {} ({} buttons, {} axes)",
                index,
                snapshot.buttons.len(),
                snapshot.axes.len()
            );
        }

        if self.trigger_mode.is_none() {
            let mode = TriggerMode::detect(&snapshot);
            info!("Detected trigger mode {:?} for slot {}", mode, index);
            self.trigger_mode = Some(mode);
        }

        self.tracked = Some(index);
        self.snapshot = Some(snapshot);
    }

    /// Drop the current snapshot and revert to the disconnected state
    pub fn disconnect(&mut self) {
        if self.snapshot.take().is_some() {
            warn!("Gamepad in slot {:?} disconnected", self.tracked);
        }
        self.tracked = None;
    }

    pub fn connected(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&GamepadSnapshot> {
        self.snapshot.as_ref()
    }

    /// Digital state of a button
    ///
    /// Full-pull pseudo-buttons report true only when the trigger reads
    /// exactly 1.0.
    pub fn button_pressed(&self, button: GamepadButton) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };

        match button {
            GamepadButton::LeftTriggerFull => {
                self.trigger_value(snapshot, GamepadAxis::LeftTrigger) == 1.0
            }
            GamepadButton::RightTriggerFull => {
                self.trigger_value(snapshot, GamepadAxis::RightTrigger) == 1.0
            }
            _ => snapshot
                .button(button.index())
                .is_some_and(|entry| entry.pressed),
        }
    }

    /// Analog value of an axis
    ///
    /// Triggers come back in [0, 1] and are never deadzoned. Thumbstick
    /// axes are deadzoned unless `raw` is set.
    pub fn axis_value(&self, axis: GamepadAxis, raw: bool) -> f32 {
        let Some(snapshot) = &self.snapshot else {
            return 0.0;
        };

        match axis {
            GamepadAxis::LeftTrigger | GamepadAxis::RightTrigger => {
                self.trigger_value(snapshot, axis)
            }
            _ => {
                let value = self
                    .mode_for(snapshot)
                    .axis_slot(axis)
                    .and_then(|slot| snapshot.axis(slot))
                    .unwrap_or(0.0);
                if raw {
                    value
                } else {
                    self.deadzone.apply(value)
                }
            }
        }
    }

    /// Position of a thumbstick, each axis shaped independently
    pub fn stick_position(&self, stick: Thumbstick, raw: bool) -> Vec2 {
        if self.snapshot.is_none() {
            return Vec2::ZERO;
        }
        let (x, y) = stick.axes();
        Vec2::new(self.axis_value(x, raw), self.axis_value(y, raw))
    }

    /// Unit-length direction of a thumbstick, zero when centered
    pub fn stick_direction(&self, stick: Thumbstick) -> Vec2 {
        self.stick_position(stick, false).normalize_or_zero()
    }

    fn mode_for(&self, snapshot: &GamepadSnapshot) -> TriggerMode {
        self.trigger_mode
            .unwrap_or_else(|| TriggerMode::detect(snapshot))
    }

    // Trigger travel in [0, 1] regardless of how the pad reports it
    fn trigger_value(&self, snapshot: &GamepadSnapshot, axis: GamepadAxis) -> f32 {
        let mode = self.mode_for(snapshot);
        match mode {
            TriggerMode::Axes => mode
                .axis_slot(axis)
                .and_then(|slot| snapshot.axis(slot))
                .map(|value| (value + 1.0) / 2.0)
                .unwrap_or(0.0),
            TriggerMode::Buttons => {
                let button = match axis {
                    GamepadAxis::RightTrigger => GamepadButton::RightTrigger,
                    _ => GamepadButton::LeftTrigger,
                };
                snapshot
                    .button(button.index())
                    .map(|entry| entry.value)
                    .unwrap_or(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons_pad() -> GamepadSnapshot {
        GamepadSnapshot::neutral(TriggerMode::Buttons)
    }

    fn axes_pad() -> GamepadSnapshot {
        GamepadSnapshot::neutral(TriggerMode::Axes)
    }

    #[test]
    fn disconnected_queries_are_neutral() {
        let manager = GamepadManager::new(None);
        assert!(!manager.connected());
        assert!(!manager.button_pressed(GamepadButton::A));
        assert!(!manager.button_pressed(GamepadButton::RightTriggerFull));
        assert_eq!(manager.axis_value(GamepadAxis::LeftStickX, false), 0.0);
        assert_eq!(manager.axis_value(GamepadAxis::RightTrigger, true), 0.0);
        assert_eq!(manager.stick_position(Thumbstick::Left, false), Vec2::ZERO);
        assert_eq!(manager.stick_direction(Thumbstick::Right), Vec2::ZERO);
    }

    #[test]
    fn trigger_mode_is_fixed_after_first_connection() {
        let mut manager = GamepadManager::new(None);
        manager.connect(0, buttons_pad());
        assert_eq!(manager.trigger_mode(), Some(TriggerMode::Buttons));

        manager.disconnect();
        manager.connect(1, axes_pad());
        assert_eq!(manager.trigger_mode(), Some(TriggerMode::Buttons));
        assert_eq!(manager.tracked_index(), Some(1));
    }

    #[test]
    fn fixed_slot_ignores_other_pads() {
        let mut manager = GamepadManager::new(Some(2));
        manager.connect(0, buttons_pad());
        assert!(!manager.connected());
        manager.connect(2, buttons_pad());
        assert!(manager.connected());
    }

    #[test]
    fn disconnected_flag_in_snapshot_counts_as_absent() {
        let mut manager = GamepadManager::new(None);
        manager.connect(0, buttons_pad());
        let mut gone = buttons_pad();
        gone.connected = false;
        manager.connect(0, gone);
        assert!(!manager.connected());
    }

    #[test]
    fn triggers_skip_deadzone() {
        let mut manager = GamepadManager::new(None);
        let mut pad = buttons_pad();
        pad.set_button(6, false, 0.05);
        manager.connect(0, pad);
        assert_eq!(manager.axis_value(GamepadAxis::LeftTrigger, false), 0.05);
    }

    #[test]
    fn axis_mode_triggers_are_remapped() {
        let mut manager = GamepadManager::new(None);
        let mut pad = axes_pad();
        pad.set_axis(5, 0.0);
        manager.connect(0, pad);
        assert_eq!(manager.axis_value(GamepadAxis::RightTrigger, false), 0.5);
        assert_eq!(manager.axis_value(GamepadAxis::LeftTrigger, false), 0.0);
    }

    #[test]
    fn right_stick_slots_follow_trigger_mode() {
        let mut axes = GamepadManager::new(None);
        let mut pad = axes_pad();
        pad.set_axis(3, 0.8);
        axes.connect(0, pad);
        assert_eq!(axes.axis_value(GamepadAxis::RightStickX, true), 0.8);

        let mut buttons = GamepadManager::new(None);
        let mut pad = buttons_pad();
        pad.set_axis(2, 0.8);
        buttons.connect(0, pad);
        assert_eq!(buttons.axis_value(GamepadAxis::RightStickX, true), 0.8);
    }

    #[test]
    fn stick_direction_is_unit_length() {
        let mut manager = GamepadManager::new(None);
        let mut pad = buttons_pad();
        pad.set_axis(0, 0.6);
        pad.set_axis(1, 0.6);
        manager.connect(0, pad);
        let direction = manager.stick_direction(Thumbstick::Left);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!((direction.x - direction.y).abs() < 1e-6);
    }

    #[test]
    fn invalid_deadzone_is_rejected_and_kept() {
        let mut manager = GamepadManager::new(None);
        assert!(manager.set_deadzone(0.9, 0.2).is_err());
        assert_eq!(manager.deadzone(), DeadzoneConfig::default());
        manager.set_deadzone(0.2, 0.0).unwrap();
        assert_eq!(manager.deadzone().inner, 0.2);
    }
}
