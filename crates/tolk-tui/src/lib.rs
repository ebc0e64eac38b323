// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod keys;
mod overlay;
mod widgets;

pub use keys::{map_selector_key, SelectorAction};
pub use overlay::ReasoningEffortOverlay;
pub use widgets::draw_reasoning_selector;
