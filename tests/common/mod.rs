//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use paper_diary::config::Config;
use paper_diary::store::{AppSnapshot, AppStore};
use paper_diary::ui::app::App;
use paper_diary::ui::diary::{DiaryIntent, DiaryReducer, DiaryState};
use paper_diary::ui::mvi::Reducer;
use parking_lot::Mutex;
use std::sync::Arc;

/// Type `text` into the draft and submit it.
pub fn submit(state: DiaryState, text: &str) -> DiaryState {
    let state = DiaryReducer::reduce(state, DiaryIntent::Paste(text.to_string()));
    DiaryReducer::reduce(state, DiaryIntent::Submit)
}

pub fn submit_all(texts: &[&str]) -> DiaryState {
    texts
        .iter()
        .fold(DiaryState::default(), |state, text| submit(state, text))
}

/// Records every snapshot the store pushes.
pub fn record_notifications(store: &AppStore) -> Arc<Mutex<Vec<AppSnapshot>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot| sink.lock().push(snapshot.clone()));
    seen
}

pub fn make_app() -> (App, AppStore) {
    let store = AppStore::new();
    let app = App::new(&Config::default(), &store).expect("screens mount on a bound store");
    (app, store)
}
