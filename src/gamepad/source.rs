//! Host-side gamepad sources
//!
//! The manager never talks to a driver itself. The host hands it a
//! [`GamepadSource`] that can return a snapshot for a slot or enumerate all
//! connected pads. Slices of optional snapshots (the shape most platform
//! APIs return) implement the trait directly; the `gamepad` feature adds a
//! gilrs-backed source.

use super::types::GamepadSnapshot;

/// Anything that can hand out raw gamepad snapshots
pub trait GamepadSource {
    /// Snapshot of the pad in `index`, None if the slot is empty
    fn pad(&self, index: usize) -> Option<GamepadSnapshot>;

    /// All currently connected pads with their slot index
    fn pads(&self) -> Vec<(usize, GamepadSnapshot)>;

    /// First connected pad in slot order
    fn first_connected(&self) -> Option<(usize, GamepadSnapshot)> {
        self.pads()
            .into_iter()
            .filter(|(_, snapshot)| snapshot.connected)
            .min_by_key(|(index, _)| *index)
    }
}

impl GamepadSource for [Option<GamepadSnapshot>] {
    fn pad(&self, index: usize) -> Option<GamepadSnapshot> {
        self.get(index).cloned().flatten()
    }

    fn pads(&self) -> Vec<(usize, GamepadSnapshot)> {
        self.iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.clone().map(|snapshot| (index, snapshot)))
            .collect()
    }
}

impl GamepadSource for Vec<Option<GamepadSnapshot>> {
    fn pad(&self, index: usize) -> Option<GamepadSnapshot> {
        self.as_slice().pad(index)
    }

    fn pads(&self) -> Vec<(usize, GamepadSnapshot)> {
        self.as_slice().pads()
    }
}

#[cfg(feature = "gamepad")]
pub use self::gilrs_source::GilrsSource;

#[cfg(feature = "gamepad")]
mod gilrs_source {
    use super::GamepadSource;
    use crate::gamepad::types::{ButtonValue, GamepadSnapshot};
    use gilrs::{Axis, Button, Event, EventType, Gamepad, Gilrs};
    use tracing::{debug, error, info, trace, warn};

    // gilrs buttons in standard layout order
    const STANDARD_BUTTONS: [Button; 17] = [
        Button::South,
        Button::East,
        Button::West,
        Button::North,
        Button::LeftTrigger,
        Button::RightTrigger,
        Button::LeftTrigger2,
        Button::RightTrigger2,
        Button::Select,
        Button::Start,
        Button::LeftThumb,
        Button::RightThumb,
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
        Button::Mode,
    ];

    /// Gamepad source backed by a gilrs context
    ///
    /// gilrs reports triggers as buttons, so every snapshot uses the
    /// button-mode layout. Y axes are flipped to the "down is positive"
    /// convention of the standard layout.
    pub struct GilrsSource {
        gilrs: Gilrs,
    }

    impl GilrsSource {
        pub fn new() -> Result<Self, gilrs::Error> {
            info!("Initializing gilrs controller interface");
            let gilrs = match Gilrs::new() {
                Ok(g) => {
                    info!("Successfully initialized gilrs");
                    g
                }
                Err(e) => {
                    error!("Failed to initialize gilrs: {}", e);
                    return Err(e);
                }
            };

            for (id, gamepad) in gilrs.gamepads() {
                info!("  Found gamepad {}: {}", id, gamepad.name());
            }

            Ok(Self { gilrs })
        }

        /// Drain pending gilrs events so the cached pad state is current
        pub fn pump(&mut self) {
            while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
                match event {
                    EventType::Connected => info!("Controller {} connected", id),
                    EventType::Disconnected => warn!("Controller {} disconnected", id),
                    EventType::ButtonPressed(button, _) => {
                        debug!("Controller {} button pressed: {:?}", id, button)
                    }
                    _ => trace!("Controller {} event: {:?}", id, event),
                }
            }
        }

        fn snapshot(gamepad: &Gamepad<'_>) -> GamepadSnapshot {
            let buttons = STANDARD_BUTTONS
                .iter()
                .map(|&button| {
                    let value = gamepad
                        .button_data(button)
                        .map(|data| data.value())
                        .unwrap_or(0.0);
                    ButtonValue::new(gamepad.is_pressed(button), value)
                })
                .collect();

            let axes = vec![
                gamepad.value(Axis::LeftStickX),
                -gamepad.value(Axis::LeftStickY),
                gamepad.value(Axis::RightStickX),
                -gamepad.value(Axis::RightStickY),
            ];

            let mut snapshot = GamepadSnapshot::new(buttons, axes);
            snapshot.connected = gamepad.is_connected();
            snapshot
        }
    }

    impl GamepadSource for GilrsSource {
        fn pad(&self, index: usize) -> Option<GamepadSnapshot> {
            self.gilrs
                .gamepads()
                .find(|(id, _)| usize::from(*id) == index)
                .map(|(_, gamepad)| Self::snapshot(&gamepad))
        }

        fn pads(&self) -> Vec<(usize, GamepadSnapshot)> {
            self.gilrs
                .gamepads()
                .map(|(id, gamepad)| (usize::from(id), Self::snapshot(&gamepad)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamepad::types::TriggerMode;

    #[test]
    fn slice_source_skips_empty_slots() {
        let pads = vec![None, Some(GamepadSnapshot::neutral(TriggerMode::Buttons)), None];
        assert!(pads.pad(0).is_none());
        assert!(pads.pad(1).is_some());
        assert!(pads.pad(7).is_none());
        assert_eq!(pads.pads().len(), 1);
        assert_eq!(pads.first_connected().map(|(index, _)| index), Some(1));
    }

    #[test]
    fn first_connected_skips_disconnected_snapshots() {
        let mut stale = GamepadSnapshot::neutral(TriggerMode::Buttons);
        stale.connected = false;
        let pads = vec![Some(stale), None, Some(GamepadSnapshot::neutral(TriggerMode::Axes))];
        assert_eq!(pads.first_connected().map(|(index, _)| index), Some(2));
    }
}
