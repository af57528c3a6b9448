use serde::Deserialize;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub diary: DiaryConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between ticks of the event loop in milliseconds (default: 250).
    pub tick_rate_ms: u64,
    /// Screen shown on launch (default: diary).
    pub start_screen: StartScreen,
}

/// Diary screen settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DiaryConfig {
    /// Start with every entry listed instead of only the latest one.
    pub show_all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Diary,
    Profile,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: StartScreen::default(),
        }
    }
}
