//! Component trait - Interface for UI components
//!
//! A component owns its slice of state, translates raw input into Actions,
//! and renders itself. State only changes inside `update`, which keeps every
//! transition on the event loop and inspectable in tests.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow per loop iteration:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert raw input into a
///    semantic Action without touching state
/// 2. `update` - Apply the Action (or a Tick) to component state
/// 3. `draw` - Render the current state to the frame
pub trait Component {
    /// Initialize the component
    ///
    /// Called once after construction, before the first draw. This is where
    /// a component arms timers or captures other runtime state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// Returning another Action chains a follow-up update in the same loop
    /// iteration.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// Rendering may cache layout facts (such as where a button landed) but
    /// must not change visible state.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
