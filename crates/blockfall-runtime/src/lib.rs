//! Single-threaded terminal loop for ratatui applications.
//!
//! [`Runtime::run`] multiplexes three event sources on one thread: a recurring
//! timer ([`App::update`]), terminal input ([`App::handle_event`]), and render
//! requests ([`App::draw`]).

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
