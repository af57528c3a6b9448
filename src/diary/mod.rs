//! Diary domain: entries and the rule deciding which of them are shown.

mod entry;
mod policy;

pub use entry::DiaryEntry;
pub use policy::visible_entries;
