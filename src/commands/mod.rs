pub mod config;
pub mod diff;
