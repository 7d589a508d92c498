//! Event Loop Module
//!
//! Contains the main TUI event loop: terminal setup, the crossterm reader
//! thread, and the select loop that merges input, flow events and frames.

use crate::app::{AppState, AppStateOptions, InputEvent};
use crate::constants::DEFAULT_FRAME_INTERVAL;
use crate::services::handlers::{handle_flow_event, update_queued};
use crate::terminal::TerminalGuard;
use crate::view::view;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use smarttasks_flow::{FlowConfig, FlowEvent};
use std::io;
use std::time::Instant;
use tokio::time::{Duration, MissedTickBehavior, interval};

#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub flow: FlowConfig,
    /// Redraw cadence; drives the splash fade.
    pub frame_interval: Duration,
    pub mouse_capture: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            flow: FlowConfig::default(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            mouse_capture: true,
        }
    }
}

pub async fn run_tui(options: TuiOptions) -> io::Result<()> {
    let _guard = TerminalGuard;

    crossterm::terminal::enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    if options.mouse_capture {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (flow_tx, mut flow_rx) = tokio::sync::mpsc::channel::<FlowEvent>(16);
    let (internal_tx, mut internal_rx) = tokio::sync::mpsc::channel::<InputEvent>(100);

    let mut state = AppState::new(AppStateOptions {
        flow_config: options.flow,
        flow_tx,
        mouse_capture: options.mouse_capture,
    });
    state.terminal_size = terminal.size()?;
    state.flow.start().map_err(io::Error::other)?;
    log::info!("flow started at {}", state.flow.current());

    let internal_tx_thread = internal_tx.clone();
    std::thread::spawn(move || {
        loop {
            if let Ok(event) = crossterm::event::read()
                && let Some(event) = crate::event::map_crossterm_event_to_input_event(event)
                && internal_tx_thread.blocking_send(event).is_err()
            {
                break;
            }
        }
    });

    let mut frame_interval = interval(options.frame_interval);
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    terminal.draw(|f| view(f, &mut state))?;
    let mut should_quit = false;
    loop {
        state.expire_ctrl_c(Instant::now());
        let mut input = None;
        tokio::select! {
            Some(event) = internal_rx.recv() => {
                input = Some(event);
            }
            Some(event) = flow_rx.recv() => {
                handle_flow_event(&mut state, event, &internal_tx);
            }
            _ = frame_interval.tick() => {
                state.tick(Instant::now());
            }
        }
        if let Some(event) = input {
            should_quit = update_queued(&mut state, event, &mut internal_rx, &internal_tx);
        }
        if should_quit {
            break;
        }
        terminal.draw(|f| view(f, &mut state))?;
    }

    state.flow.teardown();
    log::info!("quitting at {}", state.flow.current());
    crossterm::terminal::disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    if state.mouse_capture_enabled {
        execute!(std::io::stdout(), DisableMouseCapture)?;
    }
    Ok(())
}
