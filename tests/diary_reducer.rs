mod common;

use common::{submit, submit_all};
use paper_diary::diary::{visible_entries, DiaryEntry};
use paper_diary::ui::diary::{DiaryIntent, DiaryReducer, DiaryState};
use paper_diary::ui::mvi::Reducer;

#[test]
fn n_submits_produce_sequential_ids() {
    let texts = ["one", "  two  ", "three\nlines", "4"];
    let state = submit_all(&texts);

    assert_eq!(state.entries().len(), texts.len());
    for (idx, entry) in state.entries().iter().enumerate() {
        assert_eq!(entry.id, idx as u64);
        assert_eq!(entry.text, texts[idx]);
    }
}

#[test]
fn submitted_text_is_not_trimmed() {
    let state = submit(DiaryState::default(), "  padded  ");
    assert_eq!(state.entries()[0].text, "  padded  ");
}

#[test]
fn blank_submits_never_add_entries() {
    let mut state = submit(DiaryState::default(), "kept");
    for blank in ["", " ", "\t", "\n \n", "   "] {
        state = submit(state, blank);
        assert_eq!(state.entries().len(), 1, "blank {:?} was accepted", blank);
    }
}

#[test]
fn blank_submit_between_entries_does_not_consume_an_id() {
    let state = submit_all(&["a", "   ", "b"]);
    let ids: Vec<u64> = state.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn abc_collapsed_and_expanded() {
    let state = submit_all(&["A", "B", "C"]);

    assert_eq!(
        visible_entries(state.entries(), false),
        &[DiaryEntry::new(2, "C")]
    );
    assert_eq!(
        visible_entries(state.entries(), true),
        &[
            DiaryEntry::new(0, "A"),
            DiaryEntry::new(1, "B"),
            DiaryEntry::new(2, "C"),
        ]
    );
}

#[test]
fn state_visible_follows_toggle() {
    let state = submit_all(&["A", "B", "C"]);
    assert_eq!(state.visible().len(), 1);

    let state = DiaryReducer::reduce(state, DiaryIntent::ToggleShowAll);
    assert!(state.show_all());
    assert_eq!(state.visible().len(), 3);
    assert_eq!(state.toggle_label(), "Show Less");

    let state = DiaryReducer::reduce(state, DiaryIntent::ToggleShowAll);
    assert!(!state.show_all());
    assert_eq!(state.visible(), &[DiaryEntry::new(2, "C")]);
}

#[test]
fn toggle_is_unavailable_until_two_entries() {
    let empty = DiaryReducer::reduce(DiaryState::default(), DiaryIntent::ToggleShowAll);
    assert!(!empty.show_all());

    let one = submit(DiaryState::default(), "solo");
    assert!(!one.can_toggle());
    let one = DiaryReducer::reduce(one, DiaryIntent::ToggleShowAll);
    assert!(!one.show_all());

    let two = submit(one, "duo");
    assert!(two.can_toggle());
}

#[test]
fn expanded_start_lists_everything() {
    let state = submit(submit(DiaryState::new(true), "x"), "y");
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn draft_editing() {
    let state = DiaryReducer::reduce(DiaryState::default(), DiaryIntent::Input('h'));
    let state = DiaryReducer::reduce(state, DiaryIntent::Input('i'));
    let state = DiaryReducer::reduce(state, DiaryIntent::Backspace);
    assert_eq!(state.draft(), "h");

    let state = DiaryReducer::reduce(state, DiaryIntent::ClearDraft);
    assert_eq!(state.draft(), "");
    assert!(state.entries().is_empty());
}
