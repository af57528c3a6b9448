pub mod app;
pub mod diary;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod profile;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
