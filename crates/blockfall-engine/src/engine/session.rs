use std::time::Duration;

use log::{debug, info};

use crate::{
    PieceCollisionError,
    core::{Board, Tetromino},
};

use super::{GameConfig, GameEvent, GameStats, InputState, Key, PieceGenerator, wall_kick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    /// A new piece could not be placed at the spawn position.
    GameOver,
    Quit,
}

/// A single game: the board, the falling and queued pieces, and the score.
///
/// All state changes go through [`handle_event`](Self::handle_event) or the
/// `try_*` methods. A rejected move leaves the session unchanged.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    stats: GameStats,
    state: SessionState,
    input: InputState,
    generator: PieceGenerator,
    config: GameConfig,
}

impl GameSession {
    /// Starts a session with an OS-seeded piece generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, PieceGenerator::new())
    }

    #[must_use]
    pub fn with_generator(config: GameConfig, mut generator: PieceGenerator) -> Self {
        let current = generator.next_piece();
        let next = generator.next_piece();
        Self {
            board: Board::new(),
            current,
            next,
            stats: GameStats::new(),
            state: SessionState::Playing,
            input: InputState::new(),
            generator,
            config,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> &Tetromino {
        &self.current
    }

    #[must_use]
    pub fn next_piece(&self) -> &Tetromino {
        &self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Returns the gravity interval for the current level.
    #[must_use]
    pub fn gravity_interval(&self) -> Duration {
        self.config.gravity_interval(self.stats.level())
    }

    /// Applies one input or timer event.
    ///
    /// Movement keys and gravity ticks only act while playing. [`Key::Pause`]
    /// toggles between playing and paused, and [`GameEvent::Quit`] ends the
    /// session from any state.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::KeyDown(key) => {
                self.input.press(key);
                self.process_input();
            }
            GameEvent::KeyUp(key) => self.input.release(key),
            GameEvent::Tick => {
                if self.state.is_playing() {
                    self.gravity_tick();
                }
            }
            GameEvent::Quit => self.quit(),
        }
    }

    fn process_input(&mut self) {
        for key in self.input.take_pressed() {
            match key {
                Key::Pause => self.toggle_pause(),
                _ if !self.state.is_playing() => {}
                Key::Left => _ = self.try_move_left(),
                Key::Right => _ = self.try_move_right(),
                Key::Down => _ = self.soft_drop(),
                Key::Rotate => _ = self.try_rotate(),
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            state @ (SessionState::GameOver | SessionState::Quit) => state,
        };
    }

    pub fn quit(&mut self) {
        info!(
            "quit with score {} after {} pieces",
            self.stats.score(),
            self.stats.completed_pieces()
        );
        self.state = SessionState::Quit;
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_update(Tetromino::move_left)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_update(Tetromino::move_right)
    }

    /// Rotates clockwise, shifting off a side wall when possible.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        self.current =
            wall_kick::rotate_with_recovery(&self.board, self.current).ok_or(PieceCollisionError)?;
        Ok(())
    }

    /// Moves the piece down one row now, landing it if it cannot move.
    ///
    /// Returns the number of lines cleared if the piece landed.
    pub fn soft_drop(&mut self) -> Option<usize> {
        self.step_down()
    }

    /// Applies one gravity step.
    ///
    /// Returns the number of lines cleared if the piece landed.
    pub fn gravity_tick(&mut self) -> Option<usize> {
        self.step_down()
    }

    fn try_update(&mut self, f: impl FnOnce(&mut Tetromino)) -> Result<(), PieceCollisionError> {
        let mut piece = self.current;
        f(&mut piece);
        if !self.board.can_place(&piece) {
            return Err(PieceCollisionError);
        }
        self.current = piece;
        Ok(())
    }

    fn step_down(&mut self) -> Option<usize> {
        if self.try_update(Tetromino::move_down).is_ok() {
            return None;
        }
        Some(self.land_current())
    }

    fn land_current(&mut self) -> usize {
        let cleared = self.board.land(&self.current);
        let level = self.stats.level();
        self.stats.complete_piece_drop(cleared);
        debug!(
            "landed {:?} at {:?}, cleared {cleared} line(s)",
            self.current.kind(),
            self.current.position()
        );
        if self.stats.level() != level {
            info!(
                "reached level {} (gravity {}ms)",
                self.stats.level(),
                self.gravity_interval().as_millis()
            );
        }

        self.current = self.next;
        self.next = self.generator.next_piece();
        if !self.board.can_place(&self.current) {
            info!(
                "game over: score {}, {} lines, level {}",
                self.stats.score(),
                self.stats.total_cleared_lines(),
                self.stats.level()
            );
            self.state = SessionState::GameOver;
        }
        cleared
    }
}
