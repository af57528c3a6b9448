//! A two-screen terminal diary.
//!
//! The diary screen writes short notes and shows either the latest one or
//! all of them. The profile screen sets a display name and shows how many
//! notes were written. Both screens share an [`store::AppStore`].

pub mod config;
pub mod diary;
pub mod logging;
pub mod store;
pub mod ui;
