//! `tudu` — terminal-native single-screen to-do list library.

pub mod app;
pub mod config;
pub mod text_input;
pub mod ui;
