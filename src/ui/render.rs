use crate::ui::app::{App, Screen};
use crate::ui::diary::render_diary;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::profile::render_profile;
use crate::ui::theme::PARCHMENT;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let snapshot = app.header_snapshot();
    frame.render_widget(Header::new(app.screen(), &snapshot).widget(), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Diary => {
            frame.render_widget(Block::default().style(Style::default().bg(PARCHMENT)), body);
            render_diary(frame, body, app.diary().state());
        }
        Screen::Profile => {
            let name = app.profile().user_name();
            render_profile(
                frame,
                body,
                app.profile().state(),
                name.as_deref(),
                app.profile().total_notes(),
            );
        }
    }

    frame.render_widget(Footer::new(app.screen()).widget(footer), footer);
}
