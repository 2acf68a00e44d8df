use std::{io, time::Duration};

use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Drives an [`App`] from a single thread until it asks to exit.
///
/// The app talks back to the runtime through the `&mut Runtime` it receives in
/// each callback, which is how it reschedules or cancels the recurring timer.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    frames: u64,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules, reschedules, or cancels (`None`) the recurring timer.
    ///
    /// The countdown restarts from now whenever this is called.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        debug!("tick interval set to {interval:?}");
        self.events.set_tick_interval(interval);
    }

    /// Returns the interval of the recurring timer, if scheduled.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.events.tick_interval()
    }

    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.events.set_render_mode(render_mode);
    }

    /// Takes over the terminal and runs `app` until [`App::should_exit`] is true.
    ///
    /// Timer ticks go to [`App::update`], terminal input to [`App::handle_event`],
    /// and render requests to [`App::draw`]. The terminal is restored before
    /// this returns, including on error.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);
        info!("runtime started");
        let result = ratatui::run(|terminal| self.drive(app, terminal));
        info!("runtime stopped after {} frames", self.frames);
        result
    }

    fn drive<A>(&mut self, app: &mut A, terminal: &mut DefaultTerminal) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            let event = self.events.next()?;
            self.dispatch(app, terminal, event)?;
        }
        Ok(())
    }

    fn dispatch<A>(
        &mut self,
        app: &mut A,
        terminal: &mut DefaultTerminal,
        event: TuiEvent,
    ) -> io::Result<()>
    where
        A: App,
    {
        match event {
            TuiEvent::Tick => app.update(self),
            TuiEvent::Crossterm(event) => app.handle_event(self, event),
            TuiEvent::Render => {
                terminal.draw(|frame| app.draw(frame))?;
                self.frames += 1;
            }
        }
        Ok(())
    }
}
