// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use tolk_config::ReasoningEffort;

use crate::overlay::ReasoningEffortOverlay;

// ── Character sets ────────────────────────────────────────────────────────────

fn border_type(ascii: bool) -> BorderType {
    if ascii { BorderType::Plain } else { BorderType::Rounded }
}
fn radio(ascii: bool, active: bool) -> &'static str {
    match (ascii, active) {
        (true, true) => "*",
        (true, false) => "o",
        (false, true) => "●",
        (false, false) => "○",
    }
}

// ── Draw functions ────────────────────────────────────────────────────────────

/// Draw the reasoning-effort selector as a centred modal.
///
/// One line per level, radio indicator on the highlighted option, hint
/// line at the bottom.  Purely presentational — all state lives in the
/// overlay.
pub fn draw_reasoning_selector(
    frame: &mut Frame,
    overlay: &ReasoningEffortOverlay,
    ascii: bool,
) {
    let area = frame.area();
    let bt = border_type(ascii);

    // Modal width: up to 64 columns, leaving 4 cols margin each side.
    let modal_w = (area.width.saturating_sub(8)).clamp(20, 64);
    // 1 row per option + blank + hint, plus the border.
    let content_rows = ReasoningEffort::ALL.len() as u16 + 2;
    let modal_h = (content_rows + 2).min(area.height.saturating_sub(2)).max(5);
    let x = area.width.saturating_sub(modal_w) / 2;
    let y = area.height.saturating_sub(modal_h) / 2;
    // Clip to the frame so undersized terminals never index out of bounds.
    let modal_area = Rect::new(x, y, modal_w, modal_h).intersection(area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Reasoning Effort ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(bt)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let highlighted = overlay.highlighted();
    let mut lines: Vec<Line> = Vec::new();

    for effort in ReasoningEffort::ALL {
        let active = effort == highlighted;
        let style = if active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} ", radio(ascii, active)), style),
            Span::styled(effort.label(), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "j/k: move   Enter: select   Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
