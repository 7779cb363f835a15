pub mod calculator;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod unit;
pub mod window;

pub use calculator::{BusinessHoursDiff, DaySpan};
pub use error::BusinessHoursError;
pub use unit::Unit;
pub use window::BusinessWindow;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
