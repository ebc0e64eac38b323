// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Reasoning-effort selector overlay state.
//!
//! The overlay renders the two reasoning-effort levels as a modal list.
//! Navigation uses arrow keys / j/k; Enter commits the highlighted level
//! through the caller-supplied setter; Esc dismisses without committing.
//! Key events are mapped by [`crate::map_selector_key`] and dispatched by
//! the owning app.

use tracing::debug;

use tolk_config::ReasoningEffort;

/// State of the active reasoning-effort selector.
///
/// The overlay never owns or persists the setting — it captures the
/// current value when opened (to position the highlight) and hands the
/// chosen value back through `set_effort` on confirm.  The setter runs on
/// the render thread; ordering of the externally held value is the
/// caller's responsibility.
pub struct ReasoningEffortOverlay {
    /// Index of the currently highlighted option in [`ReasoningEffort::ALL`].
    selected: usize,
    set_effort: Box<dyn FnMut(ReasoningEffort)>,
}

impl ReasoningEffortOverlay {
    /// Open the selector with the highlight on `current`.
    pub fn open(current: ReasoningEffort, set_effort: impl FnMut(ReasoningEffort) + 'static) -> Self {
        let selected = ReasoningEffort::ALL
            .iter()
            .position(|e| *e == current)
            .unwrap_or(0);
        Self {
            selected,
            set_effort: Box::new(set_effort),
        }
    }

    /// Move the highlight down by one, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ReasoningEffort::ALL.len();
    }

    /// Move the highlight up by one, wrapping.
    pub fn select_prev(&mut self) {
        self.selected = self.selected
            .checked_sub(1)
            .unwrap_or(ReasoningEffort::ALL.len() - 1);
    }

    /// The option currently under the highlight.
    pub fn highlighted(&self) -> ReasoningEffort {
        ReasoningEffort::ALL[self.selected]
    }

    /// Commit the highlighted option: invokes the setter exactly once,
    /// even when the choice equals the value the overlay was opened with.
    /// Returns the chosen value and consumes the overlay.
    pub fn confirm(mut self) -> ReasoningEffort {
        let chosen = self.highlighted();
        debug!(effort = %chosen, "reasoning effort selected");
        (self.set_effort)(chosen);
        chosen
    }

    /// Dismiss the overlay without invoking the setter.
    pub fn cancel(self) {
        debug!("reasoning effort selection cancelled");
    }
}
