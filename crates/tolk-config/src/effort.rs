// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Reasoning-effort level for models that trade response latency against
/// depth of internal deliberation.
///
/// The value itself is owned by the caller (model config, settings form);
/// this type only defines the closed set of levels plus their wire and UI
/// forms.  Serializes as `"low"` / `"high"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    /// Faster responses, less thinking
    #[default]
    Low,
    /// More thorough thinking, slower responses
    High,
}

impl ReasoningEffort {
    /// All levels, in the order they are presented to the user.
    pub const ALL: [ReasoningEffort; 2] = [ReasoningEffort::Low, ReasoningEffort::High];

    /// Human-readable label shown in settings UIs.
    pub fn label(self) -> &'static str {
        match self {
            ReasoningEffort::Low => "Low (faster responses, less thinking)",
            ReasoningEffort::High => "High (more thorough thinking, slower responses)",
        }
    }
}

impl std::fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReasoningEffort::Low => write!(f, "low"),
            ReasoningEffort::High => write!(f, "high"),
        }
    }
}

/// Error returned when parsing a reasoning-effort string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reasoning effort '{0}' (expected 'low' or 'high')")]
pub struct ParseReasoningEffortError(pub String);

impl std::str::FromStr for ReasoningEffort {
    type Err = ParseReasoningEffortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(ReasoningEffort::Low),
            "high" => Ok(ReasoningEffort::High),
            _ => Err(ParseReasoningEffortError(s.to_string())),
        }
    }
}
