use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Names are single-line.
            ProfileIntent::Input('\n') => {}
            ProfileIntent::Input(ch) => state.draft.push(ch),
            ProfileIntent::Paste(text) => {
                state.draft.extend(text.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
            }
            ProfileIntent::Backspace => {
                state.draft.pop();
            }
            ProfileIntent::ClearDraft | ProfileIntent::Saved => state.draft.clear(),
        }
        state
    }
}

/// Returns the name to store, or `None` when the draft is blank.
pub fn validate_name(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
