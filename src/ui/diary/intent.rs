use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiaryIntent {
    /// A typed character appended to the draft.
    Input(char),
    /// Pasted text appended to the draft as-is.
    Paste(String),
    Backspace,
    ClearDraft,
    /// Turn the draft into a new entry. Blank drafts are ignored.
    Submit,
    /// Switch between the latest entry and the full list.
    ToggleShowAll,
}

impl Intent for DiaryIntent {}
