use crate::diary::DiaryEntry;
use crate::ui::diary::intent::DiaryIntent;
use crate::ui::diary::state::DiaryState;
use crate::ui::mvi::Reducer;

pub struct DiaryReducer;

impl Reducer for DiaryReducer {
    type State = DiaryState;
    type Intent = DiaryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DiaryIntent::Input(ch) => {
                state.draft.push(ch);
                state
            }
            DiaryIntent::Paste(text) => {
                state.draft.push_str(&text);
                state
            }
            DiaryIntent::Backspace => {
                state.draft.pop();
                state
            }
            DiaryIntent::ClearDraft => {
                state.draft.clear();
                state
            }
            DiaryIntent::Submit => {
                if !DiaryEntry::is_writable(&state.draft) {
                    return state;
                }
                // Text is kept untrimmed; only the blank check trims.
                let text = std::mem::take(&mut state.draft);
                state.entries.push(DiaryEntry::new(state.next_id, text));
                state.next_id += 1;
                state
            }
            DiaryIntent::ToggleShowAll => {
                if state.can_toggle() {
                    state.show_all = !state.show_all;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: DiaryState, text: &str) -> DiaryState {
        let state = DiaryReducer::reduce(state, DiaryIntent::Paste(text.to_string()));
        DiaryReducer::reduce(state, DiaryIntent::Submit)
    }

    #[test]
    fn submit_clears_draft() {
        let state = submit(DiaryState::default(), "hello");
        assert_eq!(state.draft(), "");
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn blank_submit_keeps_draft_and_entries() {
        let state = DiaryReducer::reduce(DiaryState::default(), DiaryIntent::Paste("  ".into()));
        let after = DiaryReducer::reduce(state.clone(), DiaryIntent::Submit);
        assert_eq!(after, state);
    }

    #[test]
    fn toggle_ignored_with_single_entry() {
        let state = submit(DiaryState::default(), "only");
        let after = DiaryReducer::reduce(state.clone(), DiaryIntent::ToggleShowAll);
        assert_eq!(after, state);
    }

    #[test]
    fn backspace_on_empty_draft_is_noop() {
        let state = DiaryReducer::reduce(DiaryState::default(), DiaryIntent::Backspace);
        assert_eq!(state, DiaryState::default());
    }
}
