pub mod article;
pub mod config;
pub mod edition;
pub mod error;
pub mod gemini;
pub mod i18n;
pub mod layout;
pub mod newsroom;
pub mod render;
pub mod scheduler;
pub mod security;
pub mod server;
pub mod theme;
