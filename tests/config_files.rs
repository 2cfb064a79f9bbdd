use padaction::action::{ActionBinding, ActionMode};
use padaction::gamepad::{DeadzoneConfig, GamepadButton};
use padaction::InputConfig;

fn sample() -> InputConfig {
    InputConfig {
        buffer_duration: 0.05,
        gamepad_index: Some(0),
        deadzone: DeadzoneConfig::new(0.15, 0.1).unwrap(),
        actions: vec![
            ActionBinding::new("jump")
                .keys(["space"])
                .buttons([GamepadButton::A])
                .mode(ActionMode::Press),
            ActionBinding::new("sprint").keys(["shift"]),
        ],
    }
}

#[test]
fn save_then_load_keeps_settings_and_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("input.toml");

    sample().save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("mode = \"press\""));
    assert!(text.contains("gamepad_buttons"));
    assert!(text.contains("\"a\""));

    let loaded = InputConfig::load(&path).unwrap();
    assert_eq!(loaded.buffer_duration, 0.05);
    assert_eq!(loaded.gamepad_index, Some(0));
    assert_eq!(loaded.deadzone, sample().deadzone);
    assert_eq!(loaded.actions.len(), 2);
    assert_eq!(loaded.actions[0].name, "jump");

    let mut engine = loaded.build_engine().unwrap();
    engine.key_down("ShiftRight");
    engine.tick(0.016);
    assert_eq!(engine.is_active("sprint"), Ok(true));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = InputConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, InputConfig::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.toml");
    std::fs::write(&path, "buffer_duration = \"soon\"").unwrap();
    assert!(InputConfig::load(&path).is_err());
    assert!(InputConfig::load_or_default(&path).is_err());
}

#[test]
fn unknown_button_name_surfaces_when_building() {
    let config = InputConfig::from_toml(
        r#"
        [[actions]]
        name = "fire"
        gamepad_buttons = ["paddle4"]
        "#,
    )
    .unwrap();
    assert!(config.build_engine().is_err());
}
