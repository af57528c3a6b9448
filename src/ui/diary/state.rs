use crate::diary::{visible_entries, DiaryEntry};
use crate::ui::mvi::UiState;

/// Local state of the diary screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiaryState {
    pub(super) entries: Vec<DiaryEntry>,
    pub(super) draft: String,
    pub(super) show_all: bool,
    /// Id handed to the next entry. Never reused.
    pub(super) next_id: u64,
}

impl UiState for DiaryState {}

impl DiaryState {
    /// Empty diary, optionally starting in the expanded view.
    pub fn new(show_all: bool) -> Self {
        Self {
            show_all,
            ..Self::default()
        }
    }

    /// All entries in creation order.
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Entries the list should render right now.
    pub fn visible(&self) -> &[DiaryEntry] {
        visible_entries(&self.entries, self.show_all)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// The show-all toggle is only offered once there is something to hide.
    pub fn can_toggle(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_all {
            "Show Less"
        } else {
            "Show All Entries"
        }
    }
}
