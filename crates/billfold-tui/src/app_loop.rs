// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main application event loop.
//!
//! A dedicated thread reads terminal events and forwards them over a
//! channel; the loop multiplexes them with a 16ms animation tick, feeds the
//! view-model, and redraws only when the model reports a change.

use crossbeam_channel as chan;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};
use tracing::debug;

use crate::{
    terminal::{self, TerminalConfig},
    view::{self, HitTestRegistry},
    view_model::{AppModel, MouseAction, Msg},
};

const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Translate a mouse event into a view-model message. Clicks resolve
/// through the hit zones registered by the previous frame; wheel events
/// carry the hover position so the model can route them.
fn mouse_msg(event: MouseEvent, hits: &HitTestRegistry<MouseAction>) -> Option<Msg> {
    let MouseEvent { column, row, .. } = event;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => hits
            .hit_test(column, row)
            .map(|action| Msg::MouseClick { action, column, row }),
        MouseEventKind::ScrollUp => Some(Msg::MouseScrollUp { column, row }),
        MouseEventKind::ScrollDown => Some(Msg::MouseScrollDown { column, row }),
        MouseEventKind::ScrollLeft => Some(Msg::MouseScrollLeft { column, row }),
        MouseEventKind::ScrollRight => Some(Msg::MouseScrollRight { column, row }),
        _ => None,
    }
}

/// Run the bill manager UI until the user quits or the process is interrupted.
pub fn run_app(
    mut model: AppModel,
    mouse_capture: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let running = Arc::new(AtomicBool::new(true));
    terminal::setup_terminal(
        TerminalConfig::default()
            .with_running_flag(running.clone())
            .with_mouse_capture(mouse_capture),
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut hit_registry: HitTestRegistry<MouseAction> = HitTestRegistry::new();

    let (tx_ev, rx_ev) = chan::unbounded::<Event>();
    // Coalescing tick channel that never builds a backlog
    let rx_tick = chan::tick(TICK_INTERVAL);

    thread::spawn(move || {
        while let Ok(ev) = crossterm::event::read() {
            let _ = tx_ev.send(ev);
        }
    });

    'outer: while running.load(Ordering::SeqCst) {
        // Biased select prefers input events over ticks
        chan::select_biased! {
            recv(rx_ev) -> received => {
                let Ok(event) = received else { break };
                match event {
                    Event::Key(key) => {
                        debug!(key_code = ?key.code, modifiers = ?key.modifiers, "key event");
                        model.update(Msg::Key(key));
                    }
                    Event::Mouse(mouse_event) => {
                        if let Some(msg) = mouse_msg(mouse_event, &hit_registry) {
                            model.update(msg);
                        }
                    }
                    Event::Resize(..) => {
                        let _ = terminal.autoresize();
                        model.needs_redraw = true;
                    }
                    _ => {}
                }
                if model.take_exit_request() {
                    break 'outer;
                }
            }
            recv(rx_tick) -> _ => {
                model.update(Msg::Tick);
            }
        }

        if model.needs_redraw {
            terminal.draw(|frame| {
                view::render(frame, &mut model, &mut hit_registry);
            })?;
            model.needs_redraw = false;
        }
    }

    terminal::cleanup_terminal();

    Ok(())
}
