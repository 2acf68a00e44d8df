use arrayvec::ArrayVec;

/// Game actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Left = 0,
    Right = 1,
    Down = 2,
    Rotate = 3,
    Pause = 4,
}

impl Key {
    pub const LEN: usize = 5;

    /// All keys in the order pending presses are handled.
    pub const ALL: [Self; Self::LEN] = [
        Self::Left,
        Self::Right,
        Self::Down,
        Self::Rotate,
        Self::Pause,
    ];
}

/// An event delivered to [`GameSession::handle_event`](super::GameSession::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Gravity timer fired.
    Tick,
    Quit,
}

/// Held-key flags, one per [`Key`].
///
/// A press sets the flag and [`take_pressed`](Self::take_pressed) clears it, so each
/// detected press triggers its action at most once.
///
/// # Example
///
/// ```
/// use blockfall_engine::{InputState, Key};
///
/// let mut input = InputState::new();
/// input.press(Key::Rotate);
/// input.press(Key::Left);
///
/// assert_eq!(input.take_pressed().as_slice(), [Key::Left, Key::Rotate]);
/// assert!(input.take_pressed().is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    held: [bool; Key::LEN],
}

impl InputState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            held: [false; Key::LEN],
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held[key as usize] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    /// Returns the held keys in [`Key::ALL`] order and clears them.
    pub fn take_pressed(&mut self) -> ArrayVec<Key, { Key::LEN }> {
        Key::ALL
            .into_iter()
            .filter(|&key| std::mem::take(&mut self.held[key as usize]))
            .collect()
    }
}
