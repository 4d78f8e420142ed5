//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! owns the dashboard view. It handles the global keys (quit) itself and
//! routes everything else down; on quit it unmounts the dashboard before
//! the event loop stops, so no timer can outlive the view.

use crate::action::Action;
use crate::component::Component;
use crate::components::DashboardComponent;
use crate::model::DashboardData;
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::info;

/// Main application struct
pub struct App {
    dashboard: DashboardComponent,
    /// Flag checked by the main loop each iteration
    pub should_quit: bool,
}

impl App {
    pub fn new(data: DashboardData, theme: Theme) -> Self {
        Self {
            dashboard: DashboardComponent::new(data, theme),
            should_quit: false,
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.dashboard.init()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::Quit)),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::Quit))
            }
            _ => self.dashboard.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.dashboard.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Quit => {
                // unmount first so no timer survives the view
                self.dashboard.unmount();
                self.should_quit = true;
                info!("quit requested");
                Ok(None)
            }
            other => self.dashboard.update(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.dashboard.draw(frame, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(DashboardData::sample(), Theme::Light)
    }

    #[test]
    fn test_quit_keys_map_to_quit() {
        let mut app = app();

        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(app.handle_key_event(key).unwrap(), Some(Action::Quit));
        }
    }

    #[test]
    fn test_theme_key_reaches_the_dashboard() {
        let mut app = app();

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ToggleTheme));
    }

    #[test]
    fn test_quit_unmounts_the_dashboard() {
        let mut app = app();
        app.init().unwrap();
        assert!(app.dashboard.active_timers() > 0);

        app.update(Action::Quit).unwrap();

        assert!(app.should_quit);
        assert_eq!(app.dashboard.active_timers(), 0);
    }

    #[test]
    fn test_toggle_theme_round_trips_through_update() {
        let mut app = app();
        assert_eq!(app.dashboard.theme(), Theme::Light);

        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.dashboard.theme(), Theme::Dark);

        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.dashboard.theme(), Theme::Light);
    }

    #[test]
    fn test_unhandled_keys_produce_no_action() {
        let mut app = app();

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
    }
}
