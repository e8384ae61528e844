// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod splash_screen;
pub mod status_indicator;
pub mod theme;
pub mod transcript;
pub mod ui;

pub use app::{App, AppScreen};
pub use chat_message::{ChatMessage, Sender};
pub use transcript::Transcript;
