pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
