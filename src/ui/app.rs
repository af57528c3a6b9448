use crate::config::{Config, StartScreen};
use crate::store::{AppSnapshot, AppStore, StoreError, SubscriptionId};
use crate::ui::diary::{self, DiaryIntent, DiaryScreen};
use crate::ui::profile::{self, ProfileIntent, ProfileScreen};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Diary,
    Profile,
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Diary => Screen::Diary,
            StartScreen::Profile => Screen::Profile,
        }
    }
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    size: Option<(u16, u16)>,
    diary: DiaryScreen,
    profile: ProfileScreen,
    store: AppStore,
    /// Latest store snapshot, kept current by a store subscription.
    header: Arc<Mutex<AppSnapshot>>,
    subscription: SubscriptionId,
}

impl App {
    /// Mount both screens on `store`.
    pub fn new(config: &Config, store: &AppStore) -> Result<Self, StoreError> {
        let diary = DiaryScreen::mount(&store.scope(diary::SCREEN_NAME), config.diary.show_all)?;
        let profile = ProfileScreen::mount(&store.scope(profile::SCREEN_NAME))?;

        let header = Arc::new(Mutex::new(store.snapshot()));
        let sink = Arc::clone(&header);
        let subscription = store.subscribe(move |snapshot| {
            *sink.lock() = snapshot.clone();
        });

        Ok(Self {
            should_quit: false,
            screen: config.ui.start_screen.into(),
            size: None,
            diary,
            profile,
            store: store.clone(),
            header,
            subscription,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch screens. Navigation carries no data; both screens read the store.
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
            self.screen = screen;
        }
    }

    pub fn toggle_screen(&mut self) {
        let next = match self.screen {
            Screen::Diary => Screen::Profile,
            Screen::Profile => Screen::Diary,
        };
        self.navigate(next);
    }

    pub fn diary(&self) -> &DiaryScreen {
        &self.diary
    }

    pub fn profile(&self) -> &ProfileScreen {
        &self.profile
    }

    pub fn dispatch_diary(&mut self, intent: DiaryIntent) {
        self.diary.dispatch(intent);
    }

    pub fn dispatch_profile(&mut self, intent: ProfileIntent) {
        self.profile.dispatch(intent);
    }

    pub fn save_profile(&mut self) -> bool {
        self.profile.save()
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.screen {
            Screen::Diary => self.dispatch_diary(DiaryIntent::Paste(text.to_string())),
            Screen::Profile => self.dispatch_profile(ProfileIntent::Paste(text.to_string())),
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Snapshot used by the header.
    pub fn header_snapshot(&self) -> AppSnapshot {
        self.header.lock().clone()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
