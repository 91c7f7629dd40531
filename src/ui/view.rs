//! Widget construction for the reader, entry overlays and the dashboard.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::analytics::Summary;
use crate::engine::{Decomposition, PivotMode, PlaybackState, Snapshot};
use crate::ui::theme::colors;

/// Renders the current word with its pivot character fixed at `pivot_col`.
///
/// The left part is right-aligned to end just before the pivot column and
/// the right part continues after it, so the pivot never moves between
/// words. Display-column padding uses the rendered width of the left part,
/// which keeps wide characters honest.
pub fn render_word(decomposition: &Decomposition, pivot_col: u16) -> Paragraph<'static> {
    let left_width = decomposition.left.as_str().width() as u16;
    let padding = pivot_col.saturating_sub(left_width) as usize;

    let text_style = Style::default().fg(colors::text()).add_modifier(Modifier::BOLD);
    let pivot_style = Style::default().fg(colors::pivot()).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(decomposition.left.clone(), text_style),
        Span::styled(decomposition.pivot.clone(), pivot_style),
        Span::styled(decomposition.right.clone(), text_style),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

/// Guide rails above and below the pivot column.
pub fn render_pivot_marker(pivot_col: u16, glyph: &'static str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::raw(" ".repeat(pivot_col as usize)),
        Span::styled(glyph, Style::default().fg(colors::dimmed())),
    ]);
    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_progress_bar(position: usize, total: usize, width: u16) -> Line<'static> {
    let width = width.max(1) as usize;
    let filled = if total == 0 {
        0
    } else {
        // Position is 0-based; the bar fills completely on the last word
        (position + 1) * width / total
    };

    let mut spans = Vec::with_capacity(width);
    for _ in 0..filled.min(width) {
        spans.push(Span::styled("─", Style::default().fg(colors::pivot())));
    }
    for _ in filled.min(width)..width {
        spans.push(Span::styled("─", Style::default().fg(colors::dimmed())));
    }
    Line::from(spans)
}

pub fn render_status_bar(
    snapshot: &Snapshot,
    pivot_mode: PivotMode,
    wpm: u32,
    status: Option<&str>,
) -> Paragraph<'static> {
    let state = match snapshot.state {
        PlaybackState::Idle => "IDLE",
        PlaybackState::Playing => "PLAYING",
        PlaybackState::Paused => "PAUSED",
    };

    let progress = if snapshot.total == 0 {
        "-/-".to_string()
    } else {
        format!("{}/{}", snapshot.position + 1, snapshot.total)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {state} "),
            Style::default().fg(colors::background()).bg(colors::dimmed()),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{wpm} wpm · {} · pivot {}", progress, pivot_mode.label()),
            Style::default().fg(colors::text()),
        ),
    ];

    if let Some(message) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(colors::pivot()),
        ));
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::surface()))
}

pub fn render_help_bar() -> Paragraph<'static> {
    let text = "space play/pause · ←/→ seek · +/- speed · o pivot · e text · f file · v paste · r reset · a admin · q quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "No text loaded\n\nPress e to type text, f to load a file, v to paste";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

/// Single-line entry prompt for text, file path or password input.
pub fn render_entry(title: &'static str, buffer: &str, masked: bool) -> Paragraph<'static> {
    let shown = if masked {
        "•".repeat(buffer.chars().count())
    } else {
        buffer.to_string()
    };

    Paragraph::new(format!("{shown}▏"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed()))
                .title(title),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}

pub fn render_admin_dashboard(summary: &Summary) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Administrator — usage overview",
            Style::default().fg(colors::text()).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(format!("  Sessions recorded   {}", summary.total_sessions)),
        Line::raw(format!("  Words read          {}", summary.total_words)),
        Line::raw(format!("  Avg words per text  {}", summary.avg_word_count)),
        Line::raw(format!("  Median words        {}", summary.median_word_count)),
        Line::raw(format!("  Avg rate            {} wpm", summary.avg_wpm)),
        Line::raw(""),
        Line::from(Span::styled(
            "  x clear statistics · esc back",
            Style::default().fg(colors::dimmed()),
        )),
    ];

    Paragraph::new(lines).style(Style::default().fg(colors::text()).bg(colors::background()))
}
