// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod effort;

pub use effort::{ParseReasoningEffortError, ReasoningEffort};
