use blockfall_engine::{GameEvent, GameSession, SessionState};
use blockfall_runtime::{App, RenderMode, Runtime};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use super::keymap;
use crate::ui::widgets::SessionDisplay;

const FPS: f64 = 60.0;

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    show_grid: bool,
}

impl PlayApp {
    pub fn new(session: GameSession, show_grid: bool) -> Self {
        Self { session, show_grid }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn apply(&mut self, runtime: &mut Runtime, event: GameEvent) {
        self.session.handle_event(event);
        sync_gravity_timer(&self.session, runtime);
    }
}

/// Keeps the gravity timer in step with the session.
///
/// The timer runs only while playing, and is rescheduled when the level changes
/// the interval or when play resumes.
fn sync_gravity_timer(session: &GameSession, runtime: &mut Runtime) {
    let wanted = session
        .state()
        .is_playing()
        .then(|| session.gravity_interval());
    if runtime.tick_interval() != wanted {
        runtime.set_tick_interval(wanted);
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
        sync_gravity_timer(&self.session, runtime);
    }

    fn should_exit(&self) -> bool {
        self.session.state().is_quit()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(event) = keymap::game_event(&event) {
            self.apply(runtime, event);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session).show_grid(self.show_grid);
        let help_text = match self.session.state() {
            SessionState::Playing => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | P (Pause) | Q (Quit)"
            }
            SessionState::Paused => "Controls: P (Resume) | Q (Quit)",
            SessionState::GameOver | SessionState::Quit => "Controls: Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.apply(runtime, GameEvent::Tick);
    }
}
