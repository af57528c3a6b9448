use crate::ui::app::{App, Screen};
use crate::ui::diary::DiaryIntent;
use crate::ui::profile::ProfileIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_screen();
        return;
    }

    match app.screen() {
        Screen::Diary => handle_diary_key(app, key),
        Screen::Profile => handle_profile_key(app, key),
    }
}

fn handle_diary_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'a') {
        app.dispatch_diary(DiaryIntent::ToggleShowAll);
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_diary(DiaryIntent::ClearDraft);
        return;
    }

    match key.code {
        // Alt+Enter starts a new line inside the entry.
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.dispatch_diary(DiaryIntent::Input('\n'));
        }
        KeyCode::Enter => app.dispatch_diary(DiaryIntent::Submit),
        KeyCode::Backspace => app.dispatch_diary(DiaryIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_diary(DiaryIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_profile(ProfileIntent::ClearDraft);
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate(Screen::Diary),
        KeyCode::Enter => {
            app.save_profile();
        }
        KeyCode::Backspace => app.dispatch_profile(ProfileIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_profile(ProfileIntent::Input(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
