//! fitdash - a terminal fitness dashboard
//!
//! Renders goal progress cards, a steps trend chart and the daily info
//! panels from an immutable dataset, using the Component Architecture
//! pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod logging;
mod model;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::model::DashboardData;
use crate::theme::Theme;
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing log file is not worth refusing to start over
    match logging::init(cli.log_file.as_deref()) {
        Ok(path) => info!("logging to {}", path.display()),
        Err(err) => eprintln!("fitdash: file logging disabled: {err}"),
    }

    // Resolve and validate the dataset before touching the terminal so
    // errors print to a normal screen
    let data = match &cli.data {
        Some(path) => DashboardData::load(path)?,
        None => DashboardData::sample(),
    };
    let theme = if cli.dark { Theme::Dark } else { Theme::Light };

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(cli.tick_rate));
    tui.enter()?;

    // Create app state
    let mut app = App::new(data, theme);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("draw error: {}", e);
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

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    info!("shutting down");
    Ok(())
}
