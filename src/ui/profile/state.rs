use crate::ui::mvi::UiState;

/// Local state of the profile screen: the name being typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileState {
    pub(super) draft: String,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn draft(&self) -> &str {
        &self.draft
    }
}
