mod common;

use common::{make_app, record_notifications};
use paper_diary::store::{AppStore, StoreScope};
use paper_diary::ui::diary::{self, DiaryIntent, DiaryScreen};
use paper_diary::ui::profile::{self, ProfileIntent, ProfileScreen};

fn mount_profile(store: &AppStore) -> ProfileScreen {
    ProfileScreen::mount(&store.scope(profile::SCREEN_NAME)).unwrap()
}

fn type_name(screen: &mut ProfileScreen, text: &str) {
    screen.dispatch(ProfileIntent::Paste(text.to_string()));
}

#[test]
fn save_trims_before_reaching_store() {
    let store = AppStore::new();
    let mut screen = mount_profile(&store);
    type_name(&mut screen, "  Alice  ");

    assert!(screen.save());
    assert_eq!(store.user_name().as_deref(), Some("Alice"));
    assert_eq!(screen.state().draft(), "");
}

#[test]
fn blank_save_never_reaches_store() {
    let store = AppStore::new();
    let seen = record_notifications(&store);
    let mut screen = mount_profile(&store);

    assert!(!screen.save());
    type_name(&mut screen, "   ");
    assert!(!screen.save());

    assert_eq!(store.user_name(), None);
    assert!(seen.lock().is_empty());
    // Draft is kept so the user can keep editing.
    assert_eq!(screen.state().draft(), "   ");
}

#[test]
fn saved_name_has_no_surrounding_whitespace() {
    for raw in ["Bob", " Bob", "Bob\t", "  Bo b  "] {
        let store = AppStore::new();
        let mut screen = mount_profile(&store);
        type_name(&mut screen, raw);
        assert!(screen.save());

        let name = store.user_name().unwrap();
        assert!(!name.is_empty());
        assert_eq!(name, name.trim());
    }
}

#[test]
fn later_save_replaces_name() {
    let store = AppStore::new();
    let mut screen = mount_profile(&store);
    type_name(&mut screen, "Bob");
    screen.save();
    type_name(&mut screen, "Robert");
    screen.save();
    assert_eq!(screen.user_name().as_deref(), Some("Robert"));
}

#[test]
fn profile_sees_notes_written_on_diary() {
    let store = AppStore::new();
    let mut diary = DiaryScreen::mount(&store.scope(diary::SCREEN_NAME), false).unwrap();
    let profile = mount_profile(&store);

    for text in ["a", " ", "b", "c"] {
        diary.dispatch(DiaryIntent::Paste(text.to_string()));
        diary.dispatch(DiaryIntent::Submit);
        diary.dispatch(DiaryIntent::ClearDraft);
    }

    assert_eq!(diary.state().entries().len(), 3);
    assert_eq!(profile.total_notes(), 3);
}

#[test]
fn unbound_profile_fails_to_mount() {
    assert!(ProfileScreen::mount(&StoreScope::unbound(profile::SCREEN_NAME)).is_err());
}

#[test]
fn app_header_tracks_both_screens() {
    let (mut app, _store) = make_app();
    app.dispatch_diary(DiaryIntent::Paste("first".into()));
    app.dispatch_diary(DiaryIntent::Submit);
    app.dispatch_profile(ProfileIntent::Paste("Ada".into()));
    assert!(app.save_profile());

    let snapshot = app.header_snapshot();
    assert_eq!(snapshot.user_name.as_deref(), Some("Ada"));
    assert_eq!(snapshot.total_notes, 1);
}
