use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Render after state changes (tick or crossterm event).
    #[default]
    OnDirty,
    /// Render after state changes, but with minimum interval between renders.
    ///
    /// If events occur faster than the interval, they are batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Event loop state: the recurring timer and render scheduling.
///
/// Pending terminal input always takes priority over rendering, so a burst of
/// key presses is drained before the next frame is drawn.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` with no timer and `OnDirty` rendering.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: now,
            dirty: true, // Initial render is required on startup
        }
    }

    /// Schedules the recurring timer, restarting its countdown from now.
    ///
    /// Pass `None` to cancel it.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.schedule_tick(interval, Instant::now());
    }

    pub(super) fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Returns the next event.
    ///
    /// Priority is timer tick, then any pending terminal input, then render.
    /// Blocks until one of them is ready.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.tick_due(now) {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if event::poll(Duration::ZERO)? {
                self.dirty = true;
                return Ok(event::read()?.into());
            }

            if self.render_due(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn schedule_tick(&mut self, interval: Option<Duration>, now: Instant) {
        self.tick_interval = interval;
        self.last_tick = now;
    }

    fn tick_due(&self, now: Instant) -> bool {
        self.tick_interval
            .is_some_and(|interval| now.duration_since(self.last_tick) >= interval)
    }

    fn render_due(&self, now: Instant) -> bool {
        match self.render_mode {
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.duration_since(self.last_render) >= interval
            }
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_timeout_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn clean_loop(now: Instant) -> EventLoop {
        EventLoop {
            tick_interval: None,
            render_mode: RenderMode::OnDirty,
            last_tick: now,
            last_render: now,
            dirty: false,
        }
    }

    #[test]
    fn test_new_loop_renders_first() {
        let events = EventLoop::new();
        let now = Instant::now();
        assert!(!events.tick_due(now));
        assert!(events.render_due(now));
        assert_eq!(events.compute_timeout(now), Some(Duration::ZERO));
    }

    #[test]
    fn test_tick_fires_after_interval() {
        let t0 = Instant::now();
        let mut events = clean_loop(t0);
        events.schedule_tick(Some(100 * MS), t0);

        assert!(!events.tick_due(t0 + 99 * MS));
        assert!(events.tick_due(t0 + 100 * MS));
        assert_eq!(events.compute_timeout(t0 + 40 * MS), Some(60 * MS));
    }

    #[test]
    fn test_reschedule_restarts_countdown() {
        let t0 = Instant::now();
        let mut events = clean_loop(t0);
        events.schedule_tick(Some(100 * MS), t0);
        events.schedule_tick(Some(50 * MS), t0 + 90 * MS);

        assert!(!events.tick_due(t0 + 100 * MS));
        assert!(events.tick_due(t0 + 140 * MS));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut events = clean_loop(t0);
        events.schedule_tick(Some(10 * MS), t0);
        events.schedule_tick(None, t0);

        assert!(!events.tick_due(t0 + 1000 * MS));
        assert_eq!(events.compute_timeout(t0), None);
    }

    #[test]
    fn test_throttled_render_waits() {
        let t0 = Instant::now();
        let mut events = clean_loop(t0);
        events.set_render_mode(RenderMode::Throttled(16 * MS));
        events.dirty = true;

        assert!(!events.render_due(t0 + 10 * MS));
        assert!(events.render_due(t0 + 16 * MS));
        assert_eq!(events.compute_timeout(t0 + 10 * MS), Some(6 * MS));
    }

    #[test]
    fn test_timeout_picks_earliest_deadline() {
        let t0 = Instant::now();
        let mut events = clean_loop(t0);
        events.set_render_mode(RenderMode::Throttled(30 * MS));
        events.schedule_tick(Some(20 * MS), t0);
        events.dirty = true;

        assert_eq!(events.compute_timeout(t0), Some(20 * MS));
    }
}
