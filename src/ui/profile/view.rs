use crate::ui::profile::state::ProfileState;
use crate::ui::theme::{ACTIVE_OUTLINE, INK, INPUT_INK, MUTED, PAPER_EDGE, PROFILE_BACKGROUND};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

pub const NAME_PROMPT: &str = "Enter your name to personalize your diary.";

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 12;

pub fn render_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ProfileState,
    user_name: Option<&str>,
    total_notes: usize,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(PROFILE_BACKGROUND)),
        area,
    );

    let card = centered_card(area);
    frame.render_widget(Clear, card);
    let card_block = Block::default()
        .title(Span::styled(
            " Profile ",
            Style::default().fg(INK).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PAPER_EDGE))
        .padding(Padding::horizontal(1));
    let inner = card_block.inner(card);
    frame.render_widget(card_block, card);

    let [greeting_area, notes_area, _, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let greeting = match user_name {
        Some(name) => Line::from(Span::styled(
            format!("Hello, {name}!"),
            Style::default().fg(INK).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(NAME_PROMPT, Style::default().fg(INK))),
    };
    frame.render_widget(Paragraph::new(greeting), greeting_area);

    let noun = if total_notes == 1 { "note" } else { "notes" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{total_notes} {noun} written"),
            Style::default().fg(MUTED),
        )),
        notes_area,
    );

    let input_block = Block::default()
        .title(Span::styled("Your Name", Style::default().fg(MUTED)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACTIVE_OUTLINE));
    let input_inner = input_block.inner(input_area);
    frame.render_widget(
        Paragraph::new(Span::styled(state.draft(), Style::default().fg(INPUT_INK)))
            .block(input_block),
        input_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled("Enter: Save", Style::default().fg(MUTED))),
        hint_area,
    );

    if input_inner.width > 0 && input_inner.height > 0 {
        let offset = state.draft().chars().count();
        let x = input_inner.x
            + offset.min(usize::from(input_inner.width.saturating_sub(1))) as u16;
        frame.set_cursor_position((x, input_inner.y));
    }
}

fn centered_card(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    card
}
