pub mod common;
pub mod config;
pub mod format;
pub mod recording;
pub mod session;
pub mod storage;
pub mod store;
pub mod ui;
