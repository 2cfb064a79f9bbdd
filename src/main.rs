use color_eyre::{eyre::eyre, Result};
use padaction::action::{ActionBinding, ActionMode};
use padaction::gamepad::{GamepadButton, GilrsSource, Thumbstick};
use padaction::InputConfig;
use std::collections::HashSet;
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

// ~60 frames per second
const FRAME_INTERVAL_MS: u64 = 16;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config_path = InputConfig::default_path()?;
    let mut config = InputConfig::load_or_default(&config_path)?;
    if config.actions.is_empty() {
        info!("No actions configured, registering demo bindings");
        config.actions = demo_bindings();
    }

    let mut engine = config
        .build_engine()
        .map_err(|e| eyre!("Invalid input config: {}", e))?;
    let mut source = GilrsSource::new().map_err(|e| eyre!("Failed to start gilrs: {}", e))?;

    let names: Vec<String> = engine.action_names().map(str::to_string).collect();
    let mut reported: HashSet<String> = HashSet::new();
    let mut frame = interval(Duration::from_millis(FRAME_INTERVAL_MS));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!("Entering frame loop, press Ctrl-C to quit");
    loop {
        tokio::select! {
            _ = frame.tick() => {}
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }

        source.pump();
        if let Some(gamepad) = engine.gamepad_mut() {
            gamepad.poll(&source);
        }
        engine.update();

        for name in &names {
            let active = engine.is_active(name)?;
            if active && reported.insert(name.clone()) {
                info!("Action '{}' active", name);
            } else if !active && reported.remove(name) {
                debug!("Action '{}' released", name);
            }
        }

        if let Some(gamepad) = engine.gamepad() {
            let stick = gamepad.stick_position(Thumbstick::Left, false);
            if stick.length() > 0.5 {
                debug!("Left stick at ({:.2}, {:.2})", stick.x, stick.y);
            }
        }
    }

    // Leave a starting point for the user on first run
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            warn!("Unable to save config: {}", e);
        }
    }
    Ok(())
}

fn demo_bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::new("jump")
            .keys(["space"])
            .buttons([GamepadButton::A])
            .mode(ActionMode::Press),
        ActionBinding::new("fire")
            .keys(["mouseleft"])
            .buttons(["rt_full"])
            .mode(ActionMode::Press),
        ActionBinding::new("sprint")
            .keys(["shift"])
            .buttons(["ls"]),
        ActionBinding::new("pause")
            .keys(["escape"])
            .buttons(["start"])
            .mode(ActionMode::Press),
    ]
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
