use crate::diary::DiaryEntry;
use crate::ui::diary::state::DiaryState;
use crate::ui::theme::{
    ACTIVE_OUTLINE, INK, INPUT_INK, MARGIN_RED, MUTED, PAPER, PAPER_EDGE, PIN_RED,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const EMPTY_MESSAGE: &str = "No diary entries yet. Write your first one!";
pub const INPUT_LABEL: &str = "Write your diary entry...";

const INPUT_HEIGHT: u16 = 5;
const TOGGLE_HEIGHT: u16 = 1;

pub fn render_diary(frame: &mut Frame<'_>, area: Rect, state: &DiaryState) {
    let [list_area, toggle_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(TOGGLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .areas(area);

    render_entries(frame, list_area, state.visible());

    if state.can_toggle() {
        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("[ {} ]", state.toggle_label()),
                Style::default().fg(INK).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+A", Style::default().fg(MUTED)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(toggle, toggle_area);
    }

    render_input(frame, input_area, state.draft());
}

fn render_entries(frame: &mut Frame<'_>, area: Rect, entries: &[DiaryEntry]) {
    if entries.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        let y = area.y + area.height / 3;
        frame.render_widget(empty, Rect { y, height: 1.min(area.height), ..area });
        return;
    }

    // Newest cards stay visible when the list overflows; the card that
    // reaches the top is cut to the rows left.
    let mut bottom = area.y + area.height;
    for entry in entries.iter().rev() {
        let available = bottom - area.y;
        if available == 0 {
            break;
        }
        let height = card_height(entry, area.width).min(available);
        bottom -= height;
        let card = Rect {
            x: area.x,
            y: bottom,
            width: area.width,
            height,
        };
        frame.render_widget(entry_card(entry), card);
    }
}

fn entry_card(entry: &DiaryEntry) -> Paragraph<'_> {
    let mut lines = Vec::new();
    for (idx, text) in entry.text.lines().enumerate() {
        let marker = if idx == 0 {
            Span::styled("● ", Style::default().fg(PIN_RED))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled("│ ", Style::default().fg(MARGIN_RED)),
            Span::styled(text, Style::default().fg(INK)),
        ]));
    }

    Paragraph::new(lines)
        .style(Style::default().bg(PAPER))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PAPER_EDGE)),
        )
}

fn card_height(entry: &DiaryEntry, width: u16) -> u16 {
    // Borders plus the pin and margin columns.
    let inner = width.saturating_sub(6).max(1) as usize;
    let rows: usize = entry
        .text
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(inner))
        .sum();
    u16::try_from(rows.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_input(frame: &mut Frame<'_>, area: Rect, draft: &str) {
    let block = Block::default()
        .title(Span::styled(INPUT_LABEL, Style::default().fg(MUTED)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACTIVE_OUTLINE));
    let inner = block.inner(area);
    let lines: Vec<Line> = draft
        .split('\n')
        .map(|text| {
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(MARGIN_RED)),
                Span::styled(text, Style::default().fg(INPUT_INK)),
            ])
        })
        .collect();
    let row_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    // Keep the line being typed in view.
    let scroll = row_count.saturating_sub(inner.height);
    let input = Paragraph::new(lines)
        .style(Style::default().bg(PAPER))
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(input, area);

    if inner.width > 0 && inner.height > 0 {
        let last = draft.rsplit('\n').next().unwrap_or("");
        let offset = last.chars().count().saturating_add(2);
        let x = inner.x + offset.min(usize::from(inner.width.saturating_sub(1))) as u16;
        let y = inner.y + row_count.saturating_sub(1).min(inner.height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}
