use crate::store::AppSnapshot;
use crate::ui::app::Screen;
use crate::ui::theme::{INK, MUTED, PAPER_EDGE, PARCHMENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    screen: Screen,
    snapshot: &'a AppSnapshot,
}

impl<'a> Header<'a> {
    pub fn new(screen: Screen, snapshot: &'a AppSnapshot) -> Self {
        Self { screen, snapshot }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(INK).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(MUTED);
        let text_style = Style::default().fg(INK);

        let title = match self.screen {
            Screen::Diary => "📔 My Diary",
            Screen::Profile => "My Profile",
        };
        let who = match &self.snapshot.user_name {
            Some(name) => format!("Hello, {name}"),
            None => "No name set".to_string(),
        };
        let notes = self.snapshot.total_notes;

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(title, title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(who, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("notes: {notes}"), text_style),
        ]);

        Paragraph::new(line).style(Style::default().bg(PARCHMENT)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(PAPER_EDGE)),
        )
    }
}
