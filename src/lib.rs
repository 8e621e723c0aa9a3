pub mod clipboard;
pub mod config;
pub mod image;
pub mod logging;
pub mod navigation;
pub mod search;
pub mod ui;
