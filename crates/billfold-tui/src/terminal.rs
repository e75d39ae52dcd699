// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal lifecycle: raw mode, alternate screen, mouse capture, and the
//! hooks that put the terminal back no matter how the process leaves.
//!
//! Setup records each feature it enabled in a shared bitmask; cleanup walks
//! the mask in reverse order and is safe to call from the event loop, the
//! ctrlc handler, and the panic hook at the same time.

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io, panic,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU8, Ordering},
    },
};

const RAW_MODE: u8 = 1 << 0;
const ALT_SCREEN: u8 = 1 << 1;
const CURSOR_HIDDEN: u8 = 1 << 2;
const KB_FLAGS: u8 = 1 << 3;
const MOUSE_CAPTURE: u8 = 1 << 4;

/// Features currently enabled on the terminal. Cleanup takes the whole mask
/// at once, so concurrent callers restore each feature exactly once.
static ACTIVE: AtomicU8 = AtomicU8::new(0);
static PANIC_HOOK_SET: AtomicBool = AtomicBool::new(false);

/// What [`setup_terminal`] enables.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub raw_mode: bool,
    pub alternate_screen: bool,
    /// Kitty keyboard protocol flags (disambiguated Esc, key-release events)
    pub keyboard_enhancement: bool,
    pub mouse_capture: bool,
    /// Install the ctrlc handler and the terminal-restoring panic hook
    pub install_signal_handlers: bool,
    /// Flag the ctrlc handler clears to stop the event loop
    pub running_flag: Option<Arc<AtomicBool>>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            keyboard_enhancement: true,
            mouse_capture: true,
            install_signal_handlers: true,
            running_flag: None,
        }
    }
}

impl TerminalConfig {
    pub fn with_running_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.running_flag = Some(flag);
        self
    }

    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }
}

/// Put the terminal into TUI mode per `config`.
pub fn setup_terminal(config: TerminalConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();

    if config.raw_mode {
        crossterm::terminal::enable_raw_mode()?;
        ACTIVE.fetch_or(RAW_MODE, Ordering::SeqCst);
    }

    if config.alternate_screen {
        stdout.execute(EnterAlternateScreen)?;
        ACTIVE.fetch_or(ALT_SCREEN, Ordering::SeqCst);
    }

    // No text entry anywhere in the UI, so the hardware cursor stays hidden
    stdout.execute(Hide)?;
    ACTIVE.fetch_or(CURSOR_HIDDEN, Ordering::SeqCst);

    if config.keyboard_enhancement {
        // Disambiguated escapes let a lone Esc press arrive immediately, and
        // event types let the view model ignore key releases
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
        ACTIVE.fetch_or(KB_FLAGS, Ordering::SeqCst);
    }

    if config.mouse_capture {
        stdout.execute(EnableMouseCapture)?;
        ACTIVE.fetch_or(MOUSE_CAPTURE, Ordering::SeqCst);
    }

    if config.install_signal_handlers {
        let running = config.running_flag.clone();
        ctrlc::set_handler(move || {
            cleanup_terminal();
            if let Some(flag) = &running {
                flag.store(false, Ordering::SeqCst);
            }
        })?;

        // Restore the terminal before the default panic output prints
        if !PANIC_HOOK_SET.swap(true, Ordering::SeqCst) {
            let default_panic = panic::take_hook();
            panic::set_hook(Box::new(move |panic_info| {
                cleanup_terminal();
                default_panic(panic_info);
            }));
        }
    }

    Ok(())
}

/// Undo everything [`setup_terminal`] did, in reverse order. Idempotent.
pub fn cleanup_terminal() {
    let active = ACTIVE.swap(0, Ordering::SeqCst);
    if active == 0 {
        return;
    }

    let mut stdout = io::stdout();

    // Keyboard flags must be popped while still in raw mode
    if active & KB_FLAGS != 0 {
        let _ = stdout.execute(PopKeyboardEnhancementFlags);
    }
    if active & MOUSE_CAPTURE != 0 {
        let _ = stdout.execute(DisableMouseCapture);
    }
    if active & CURSOR_HIDDEN != 0 {
        let _ = stdout.execute(Show);
    }
    if active & RAW_MODE != 0 {
        let _ = crossterm::terminal::disable_raw_mode();
    }
    // Leave the alternate screen last so any error output above lands on it
    if active & ALT_SCREEN != 0 {
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}
