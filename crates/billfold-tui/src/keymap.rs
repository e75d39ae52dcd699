// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Keyboard operations and chord-string key matching
//!
//! Bindings are written as chord strings (`"Ctrl+Right"`, `"Shift+G"`,
//! `"["`, `"Home"`). Every operation ships with defaults; the config file
//! can replace the bindings of individual operations.

use crate::config::TuiKeymapConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Operations the UI can be driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardOperation {
    NextCategory,
    PrevCategory,
    FirstCategory,
    LastCategory,
    ScrollBarLeft,
    ScrollBarRight,
    NextBill,
    PrevBill,
    FirstBill,
    LastBill,
    ToggleFocus,
    ToggleHighContrast,
    Quit,
}

impl KeyboardOperation {
    pub fn english_description(&self) -> &'static str {
        match self {
            KeyboardOperation::NextCategory => "Select next category",
            KeyboardOperation::PrevCategory => "Select previous category",
            KeyboardOperation::FirstCategory => "Jump to first category",
            KeyboardOperation::LastCategory => "Jump to last category",
            KeyboardOperation::ScrollBarLeft => "Scroll category bar left",
            KeyboardOperation::ScrollBarRight => "Scroll category bar right",
            KeyboardOperation::NextBill => "Select next bill",
            KeyboardOperation::PrevBill => "Select previous bill",
            KeyboardOperation::FirstBill => "Jump to first bill",
            KeyboardOperation::LastBill => "Jump to last bill",
            KeyboardOperation::ToggleFocus => "Switch focus between bar and list",
            KeyboardOperation::ToggleHighContrast => "Toggle high contrast colors",
            KeyboardOperation::Quit => "Quit",
        }
    }
}

/// Errors for keyboard shortcut parsing
#[derive(Debug, Error)]
pub enum KeyboardShortcutError {
    #[error("shortcut must contain a key code, e.g. 'Enter' or 'Ctrl+Enter'")]
    MissingKey,
    #[error("unsupported key token '{0}'")]
    UnsupportedKey(String),
}

/// Key matcher with support for required/optional modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMatcher {
    pub code: KeyCode,
    pub required: KeyModifiers,
    pub optional: KeyModifiers,
    /// Lowercase form for case-insensitive character matching
    pub char_lower: Option<char>,
}

impl KeyMatcher {
    pub fn new(
        code: KeyCode,
        required: KeyModifiers,
        optional: KeyModifiers,
        char_lower: Option<char>,
    ) -> Self {
        Self {
            code,
            required,
            optional,
            char_lower,
        }
    }

    /// Displayable representation, `"Ctrl+Right"` style
    pub fn to_string(&self) -> String {
        let mut parts = Vec::new();

        if self.required.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.required.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.required.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.required.contains(KeyModifiers::SUPER) {
            parts.push("Cmd");
        }

        let key_str = match &self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            _ => "Unknown".to_string(),
        };

        if !parts.is_empty() {
            format!("{}+{}", parts.join("+"), key_str)
        } else {
            key_str
        }
    }

    /// Check if this matcher matches a crossterm KeyEvent
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.matches_code(&event.code) {
            return false;
        }

        // Cursor movement keys tolerate SHIFT, terminals differ on reporting it
        let is_cursor_key = matches!(
            event.code,
            KeyCode::Left
                | KeyCode::Right
                | KeyCode::Up
                | KeyCode::Down
                | KeyCode::Home
                | KeyCode::End
                | KeyCode::PageUp
                | KeyCode::PageDown
        );

        for modifier in [
            KeyModifiers::CONTROL,
            KeyModifiers::ALT,
            KeyModifiers::SHIFT,
            KeyModifiers::SUPER,
        ] {
            let required = self.required.contains(modifier);
            let optional = self.optional.contains(modifier)
                || (modifier == KeyModifiers::SHIFT && is_cursor_key);
            let present = event.modifiers.contains(modifier);

            if required && !present {
                return false;
            }
            if !required && !optional && present {
                return false;
            }
        }

        true
    }

    fn matches_code(&self, code: &KeyCode) -> bool {
        match (&self.code, code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                if let Some(lower) = self.char_lower {
                    actual.to_ascii_lowercase() == lower
                } else {
                    actual == expected
                }
            }
            _ => self.code == *code,
        }
    }
}

/// Intermediate chord-string representation
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl KeyBinding {
    /// Parse `"Ctrl+A"`, `"C-a"`, `"Cmd+Left"` style chord strings.
    pub fn from_string(s: &str) -> Result<Self, KeyboardShortcutError> {
        let lower = s.to_lowercase();
        let ctrl = lower.contains("c-") || lower.contains("ctrl+") || lower.contains("control+");
        let alt = lower.contains("m-")
            || lower.contains("alt+")
            || lower.contains("option+")
            || lower.contains("opt+");
        let super_key = lower.contains("cmd+")
            || lower.contains("super+")
            || lower.contains("meta+")
            || lower.contains("win+");
        let shift = lower.contains("shift+") || lower.contains("s-");

        // The key is everything after the last separator
        let key = if let Some(last_plus) = s.rfind('+') {
            s[last_plus + 1..].to_string()
        } else if let Some(last_dash) = s.rfind('-') {
            s[last_dash + 1..].to_string()
        } else {
            s.to_string()
        };

        if key.is_empty() {
            return Err(KeyboardShortcutError::MissingKey);
        }

        Ok(KeyBinding {
            key,
            ctrl,
            alt,
            shift,
            super_key,
        })
    }

    /// Convert to a KeyMatcher for matching against events
    pub fn to_matcher(&self) -> Result<KeyMatcher, KeyboardShortcutError> {
        let (code, char_lower) = self.parse_key_token()?;
        let mut required = KeyModifiers::empty();
        let mut optional = KeyModifiers::empty();

        if self.ctrl {
            required |= KeyModifiers::CONTROL;
        }
        if self.alt {
            required |= KeyModifiers::ALT;
        }
        if self.shift {
            required |= KeyModifiers::SHIFT;
        }
        if self.super_key {
            required |= KeyModifiers::SUPER;
        }

        // For character keys, shift is optional (case-insensitive matching)
        if matches!(code, KeyCode::Char(_)) && !self.shift {
            optional |= KeyModifiers::SHIFT;
        }

        Ok(KeyMatcher::new(code, required, optional, char_lower))
    }

    fn parse_key_token(&self) -> Result<(KeyCode, Option<char>), KeyboardShortcutError> {
        let token = &self.key;
        let lower = token.to_lowercase();

        let (code, char_lower) = match lower.as_str() {
            "enter" | "return" => (KeyCode::Enter, None),
            "tab" => (KeyCode::Tab, None),
            "esc" | "escape" => (KeyCode::Esc, None),
            "space" => (KeyCode::Char(' '), None),
            "backspace" => (KeyCode::Backspace, None),
            "delete" | "del" => (KeyCode::Delete, None),
            "up" => (KeyCode::Up, None),
            "down" => (KeyCode::Down, None),
            "left" => (KeyCode::Left, None),
            "right" => (KeyCode::Right, None),
            "home" => (KeyCode::Home, None),
            "end" => (KeyCode::End, None),
            "pageup" | "page-up" | "pgup" => (KeyCode::PageUp, None),
            "pagedown" | "page-down" | "pgdown" => (KeyCode::PageDown, None),
            _ => {
                let mut chars = token.chars();
                let first = chars
                    .next()
                    .ok_or_else(|| KeyboardShortcutError::UnsupportedKey(token.clone()))?;
                if chars.next().is_some() {
                    return Err(KeyboardShortcutError::UnsupportedKey(token.clone()));
                }

                let lower_char = if first.is_ascii_alphabetic() {
                    Some(first.to_ascii_lowercase())
                } else {
                    None
                };

                (KeyCode::Char(first), lower_char)
            }
        };

        Ok((code, char_lower))
    }
}

/// Parse a chord string straight to a matcher
pub fn parse_chord(s: &str) -> Result<KeyMatcher, KeyboardShortcutError> {
    KeyBinding::from_string(s)?.to_matcher()
}

/// Operation with its default chord strings
#[derive(Debug, Clone)]
pub struct KeyboardOperationDefinition {
    pub operation: KeyboardOperation,
    pub defaults: Vec<String>,
}

impl KeyboardOperationDefinition {
    pub fn new(operation: KeyboardOperation, defaults: Vec<String>) -> Self {
        Self {
            operation,
            defaults,
        }
    }
}

/// Resolved key bindings for every operation
#[derive(Debug, Clone)]
pub struct Keymap {
    next_category: Vec<KeyMatcher>,
    prev_category: Vec<KeyMatcher>,
    first_category: Vec<KeyMatcher>,
    last_category: Vec<KeyMatcher>,
    scroll_bar_left: Vec<KeyMatcher>,
    scroll_bar_right: Vec<KeyMatcher>,
    next_bill: Vec<KeyMatcher>,
    prev_bill: Vec<KeyMatcher>,
    first_bill: Vec<KeyMatcher>,
    last_bill: Vec<KeyMatcher>,
    toggle_focus: Vec<KeyMatcher>,
    toggle_high_contrast: Vec<KeyMatcher>,
    quit: Vec<KeyMatcher>,
}

impl Default for Keymap {
    fn default() -> Self {
        let (keymap, _warnings) = Self::from_config(None);
        keymap
    }
}

impl Keymap {
    /// Default chord strings per operation
    pub fn operation_definitions() -> Vec<KeyboardOperationDefinition> {
        vec![
            KeyboardOperationDefinition::new(
                KeyboardOperation::NextCategory,
                vec!["Right".to_string(), "l".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::PrevCategory,
                vec!["Left".to_string(), "h".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::FirstCategory,
                vec!["Home".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::LastCategory,
                vec!["End".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::ScrollBarLeft,
                vec!["[".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::ScrollBarRight,
                vec!["]".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::NextBill,
                vec!["Down".to_string(), "j".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::PrevBill,
                vec!["Up".to_string(), "k".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::FirstBill,
                vec!["g".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::LastBill,
                vec!["Shift+G".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::ToggleFocus,
                vec!["Tab".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::ToggleHighContrast,
                vec!["c".to_string()],
            ),
            KeyboardOperationDefinition::new(
                KeyboardOperation::Quit,
                vec!["q".to_string(), "Ctrl+C".to_string()],
            ),
        ]
    }

    /// Build the keymap from defaults plus optional config overrides.
    ///
    /// An override replaces the default bindings of its operation. Chord
    /// strings that fail to parse are reported in the returned warnings and
    /// leave the defaults in place.
    pub fn from_config(config: Option<&TuiKeymapConfig>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let mut resolve = |operation: KeyboardOperation, override_chord: Option<&String>| {
            if let Some(chord) = override_chord {
                match parse_chord(chord) {
                    Ok(matcher) => return vec![matcher],
                    Err(err) => warnings.push(format!(
                        "ignoring binding '{}' for {}: {}",
                        chord,
                        operation.english_description(),
                        err
                    )),
                }
            }
            Self::defaults_for(operation)
        };

        let empty = TuiKeymapConfig::default();
        let config = config.unwrap_or(&empty);

        let keymap = Self {
            next_category: resolve(KeyboardOperation::NextCategory, config.next_category.as_ref()),
            prev_category: resolve(KeyboardOperation::PrevCategory, config.prev_category.as_ref()),
            first_category: resolve(
                KeyboardOperation::FirstCategory,
                config.first_category.as_ref(),
            ),
            last_category: resolve(KeyboardOperation::LastCategory, config.last_category.as_ref()),
            scroll_bar_left: resolve(
                KeyboardOperation::ScrollBarLeft,
                config.scroll_bar_left.as_ref(),
            ),
            scroll_bar_right: resolve(
                KeyboardOperation::ScrollBarRight,
                config.scroll_bar_right.as_ref(),
            ),
            next_bill: resolve(KeyboardOperation::NextBill, config.next_bill.as_ref()),
            prev_bill: resolve(KeyboardOperation::PrevBill, config.prev_bill.as_ref()),
            first_bill: resolve(KeyboardOperation::FirstBill, config.first_bill.as_ref()),
            last_bill: resolve(KeyboardOperation::LastBill, config.last_bill.as_ref()),
            toggle_focus: resolve(KeyboardOperation::ToggleFocus, config.toggle_focus.as_ref()),
            toggle_high_contrast: resolve(
                KeyboardOperation::ToggleHighContrast,
                config.toggle_high_contrast.as_ref(),
            ),
            quit: resolve(KeyboardOperation::Quit, config.quit.as_ref()),
        };

        (keymap, warnings)
    }

    fn defaults_for(operation: KeyboardOperation) -> Vec<KeyMatcher> {
        Self::operation_definitions()
            .iter()
            .find(|def| def.operation == operation)
            .map(|def| {
                def.defaults.iter().filter_map(|chord| parse_chord(chord).ok()).collect()
            })
            .unwrap_or_default()
    }

    fn matchers(&self, operation: KeyboardOperation) -> &[KeyMatcher] {
        match operation {
            KeyboardOperation::NextCategory => &self.next_category,
            KeyboardOperation::PrevCategory => &self.prev_category,
            KeyboardOperation::FirstCategory => &self.first_category,
            KeyboardOperation::LastCategory => &self.last_category,
            KeyboardOperation::ScrollBarLeft => &self.scroll_bar_left,
            KeyboardOperation::ScrollBarRight => &self.scroll_bar_right,
            KeyboardOperation::NextBill => &self.next_bill,
            KeyboardOperation::PrevBill => &self.prev_bill,
            KeyboardOperation::FirstBill => &self.first_bill,
            KeyboardOperation::LastBill => &self.last_bill,
            KeyboardOperation::ToggleFocus => &self.toggle_focus,
            KeyboardOperation::ToggleHighContrast => &self.toggle_high_contrast,
            KeyboardOperation::Quit => &self.quit,
        }
    }

    /// Check if any key binding for the given operation matches the KeyEvent
    pub fn matches(&self, operation: KeyboardOperation, event: &KeyEvent) -> bool {
        self.matchers(operation).iter().any(|matcher| matcher.matches(event))
    }

    /// Display strings for the operation's bindings, for hints and help text
    pub fn bindings_display(&self, operation: KeyboardOperation) -> Vec<String> {
        self.matchers(operation).iter().map(|matcher| matcher.to_string()).collect()
    }
}
