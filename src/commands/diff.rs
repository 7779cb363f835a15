use crate::OutputFormat;
use crate::calculator::{BusinessHoursDiff, DaySpan};
use crate::calendar::parse_instant;
use crate::config::Config;
use crate::unit::Unit;
use crate::window::BusinessWindow;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;

/// Business hours given on the command line; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct HoursArgs {
    #[arg(long, help = "Hour the business opens (0-23)")]
    pub opens_at: Option<u32>,
    #[arg(long, help = "Hour the business closes (0-23)")]
    pub closes_at: Option<u32>,
    #[arg(long, value_enum, help = "Output unit")]
    pub unit: Option<Unit>,
    #[arg(long, value_enum, help = "Output format (defaults to config)")]
    pub format: Option<OutputFormat>,
}

impl HoursArgs {
    /// Merge flags over the config file and build the calculator.
    pub fn calculator(&self, config: &Config) -> Result<BusinessHoursDiff> {
        let hours = &config.business_hours;
        let calc = BusinessHoursDiff::new(
            self.opens_at.or(hours.opens_at),
            self.closes_at.or(hours.closes_at),
            self.unit.unwrap_or(hours.unit),
        );

        // Reject bad hours up front; an unset window is reported by diff itself
        if let Ok(window) = calc.window() {
            BusinessWindow::new(window.opens_at(), window.closes_at())
                .context("Invalid business hours")?;
        }

        Ok(calc)
    }

    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub opens_at: u32,
    pub closes_at: u32,
    pub unit: Unit,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct DaysReport {
    pub unit: Unit,
    pub days: Vec<DaySpan>,
    pub total: i64,
}

const HOURS_HINT: &str = "Set business_hours.opens_at/closes_at in the config file \
                          or pass --opens-at/--closes-at";

pub fn compute(calc: &BusinessHoursDiff, start: &str, end: &str) -> Result<DiffReport> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    let window = calc.window().context(HOURS_HINT)?;
    let value = calc.diff(start, end).context(HOURS_HINT)?;

    Ok(DiffReport {
        start,
        end,
        opens_at: window.opens_at(),
        closes_at: window.closes_at(),
        unit: calc.output_unit(),
        value,
    })
}

pub fn compute_days(calc: &BusinessHoursDiff, start: &str, end: &str) -> Result<DaysReport> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    let days = calc.spans(start, end).context(HOURS_HINT)?;
    let total = days.iter().map(|day| day.amount).sum();

    Ok(DaysReport {
        unit: calc.output_unit(),
        days,
        total,
    })
}

/// Print the business time between two instants
pub fn diff(config: &Config, start: &str, end: &str, args: &HoursArgs) -> Result<()> {
    let calc = args.calculator(config)?;
    let report = compute(&calc, start, end)?;

    match args.format(config) {
        OutputFormat::Text => println!("{}", report.value),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize result")?
        ),
    }

    Ok(())
}

/// Print the per-day breakdown of the business time between two instants
pub fn days(config: &Config, start: &str, end: &str, args: &HoursArgs) -> Result<()> {
    let calc = args.calculator(config)?;
    let report = compute_days(&calc, start, end)?;

    match args.format(config) {
        OutputFormat::Text => {
            if report.days.is_empty() {
                println!("No business time in range.");
            }
            for day in &report.days {
                println!(
                    "{}  {} - {}  {}",
                    day.date,
                    day.from.format("%H:%M"),
                    day.to.format("%H:%M"),
                    day.amount
                );
            }
            println!("Total: {} {}", report.total, report.unit);
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize result")?
        ),
    }

    Ok(())
}
