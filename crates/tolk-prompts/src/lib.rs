// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod prepend;

pub use prepend::{prepend_to_file_description, PrependExamples, ToolArgs};
