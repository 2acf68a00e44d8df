use crossterm::event::Event as CrosstermEvent;

/// Events consumed by the run loop, in the order the loop produces them.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The recurring timer fired.
    Tick,
    /// Screen render timing.
    Render,
    /// Terminal events such as key input and resize.
    Crossterm(CrosstermEvent),
}
