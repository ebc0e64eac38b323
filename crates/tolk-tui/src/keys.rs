// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use crossterm::event::{KeyCode, KeyEvent};

/// Logical actions inside the reasoning-effort selector overlay,
/// independent of key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    /// Move the highlight to the previous option (wraps).
    Prev,
    /// Move the highlight to the next option (wraps).
    Next,
    /// Commit the highlighted option.
    Confirm,
    /// Close the overlay without committing.
    Cancel,
}

/// Map a raw key event to a [`SelectorAction`].
///
/// Unbound keys return `None` and are ignored by the overlay.
pub fn map_selector_key(event: KeyEvent) -> Option<SelectorAction> {
    match event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorAction::Prev),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorAction::Next),
        KeyCode::Enter => Some(SelectorAction::Confirm),
        KeyCode::Esc => Some(SelectorAction::Cancel),
        _ => None,
    }
}
