//! bookshelf-tui - the top loaned books of a library catalog, in a terminal
//!
//! This is the main entry point for the bookshelf-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    // Load config before logging so the level can come from it
    let (config, config_error) = Config::load();
    let log_guard = logging::init(&config.logging);

    if let Some(err) = config_error {
        warn!(error = %format!("{:#}", err), "config rejected, using defaults");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting bookshelf-tui");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(config);
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = %format!("{:#}", err), "application error");
        drop(log_guard);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("bookshelf-tui exited");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Every pass redraws the whole frame from the current view state
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                debug!(action = %a, "dispatch");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
