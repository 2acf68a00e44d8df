use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for applications driven by [`Runtime::run`].
pub trait App {
    /// Called once before the loop starts. Use this to schedule the timer and render mode.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the loop should stop before the next event.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen (called on each render request).
    fn draw(&self, frame: &mut Frame);

    /// Called each time the recurring timer fires.
    fn update(&mut self, runtime: &mut Runtime);
}
