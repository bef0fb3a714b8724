pub mod api;
pub mod config;
pub mod logging;
pub mod projects;
pub mod ui;
