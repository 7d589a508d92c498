mod app;
mod constants;
mod event;
mod event_loop;
mod services;
mod terminal;
mod view;

pub use app::{AppState, AppStateOptions, ButtonHit, InputEvent};
pub use constants::DEFAULT_FRAME_INTERVAL;
pub use event::map_crossterm_event_to_input_event;
pub use event_loop::{TuiOptions, run_tui};
pub use terminal::TerminalGuard;
pub use view::view;
