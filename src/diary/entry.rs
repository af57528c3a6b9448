/// A single note written on the diary screen.
///
/// Entries are immutable once created. `id` comes from the diary's
/// sequential counter and is unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub id: u64,
    pub text: String,
}

impl DiaryEntry {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// True when the text has something besides whitespace.
    pub fn is_writable(text: &str) -> bool {
        !text.trim().is_empty()
    }
}
