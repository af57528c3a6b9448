use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIntent {
    Input(char),
    Paste(String),
    Backspace,
    ClearDraft,
    /// The draft was accepted and written to the store.
    Saved,
}

impl Intent for ProfileIntent {}
