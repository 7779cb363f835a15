//! Business-time difference between two instants.
//!
//! Instants are first clamped to their own day's business window. Same-day
//! pairs are measured directly; otherwise the lazy [`BusinessDays`] sequence
//! starting on the start date is walked until it passes `end`, each day
//! contributing its window intersected with `[start, end]`.
//!
//! Passing `end` before `start` is undefined. Today a reversed pair on the
//! same day yields the magnitude of the difference and a reversed pair on
//! different days yields 0; callers must not rely on either.
//!
//! [`BusinessDays`]: crate::window::BusinessDays

use crate::calendar;
use crate::error::{BusinessHoursError, Result};
use crate::unit::Unit;
use crate::window::{BusinessDays, BusinessWindow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

/// Business-hours calculator configuration.
///
/// A plain `Copy` value: builder methods consume and return it, so a value in
/// use by `diff` can never be reconfigured underneath it. An unset bound is
/// `None`, which keeps a midnight opening (`Some(0)`) valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BusinessHoursDiff {
    opens_at: Option<u32>,
    closes_at: Option<u32>,
    unit: Unit,
}

/// One day's contribution to a difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySpan {
    pub date: NaiveDate,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub amount: i64,
}

impl BusinessHoursDiff {
    pub fn new(opens_at: Option<u32>, closes_at: Option<u32>, unit: Unit) -> Self {
        Self {
            opens_at,
            closes_at,
            unit,
        }
    }

    pub fn with_hours(opens_at: u32, closes_at: u32) -> Self {
        Self::default().opens_at(opens_at).closes_at(closes_at)
    }

    pub fn opens_at(mut self, hour: u32) -> Self {
        self.opens_at = Some(hour);
        self
    }

    pub fn closes_at(mut self, hour: u32) -> Self {
        self.closes_at = Some(hour);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Select the unit by name (`min`, `minutes`). Unknown names fail.
    pub fn unit_named(self, name: &str) -> Result<Self> {
        Ok(self.unit(name.parse()?))
    }

    pub fn output_unit(&self) -> Unit {
        self.unit
    }

    /// The configured window, unvalidated.
    pub fn window(&self) -> Result<BusinessWindow> {
        match (self.opens_at, self.closes_at) {
            (Some(opens_at), Some(closes_at)) => {
                Ok(BusinessWindow::unchecked(opens_at, closes_at))
            }
            _ => Err(BusinessHoursError::HoursNotSet),
        }
    }

    /// Business time from `start` to `end`, in the configured unit.
    pub fn diff(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<i64> {
        let window = self.window()?;
        let start = window.clamp(start);
        let end = window.clamp(end);

        if calendar::is_same_day(start, end) {
            let amount = self.unit.between(start, end).abs();
            tracing::debug!(%start, %end, amount, "same-day business diff");
            return Ok(amount);
        }

        let total: i64 = self
            .overlapping(window.days_from(start.date()), start, end)
            .fold(0, |total, span| total.saturating_add(span.amount));

        tracing::debug!(%start, %end, total, unit = %self.unit, "business diff");
        Ok(total)
    }

    /// Same as [`diff`](Self::diff) on each value's local wall-clock time.
    pub fn diff_zoned<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<i64> {
        self.diff(start.naive_local(), end.naive_local())
    }

    /// The per-day contributions `diff` adds up, for ordered input.
    pub fn spans(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<DaySpan>> {
        let window = self.window()?;
        let start = window.clamp(start);
        let end = window.clamp(end);

        Ok(self
            .overlapping(window.days_from(start.date()), start, end)
            .collect())
    }

    fn overlapping(
        &self,
        days: BusinessDays,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl Iterator<Item = DaySpan> {
        let unit = self.unit;
        days.take_while(move |day| day.midnight() < end)
            .filter_map(move |day| {
                day.intersect(start, end).map(|(from, to)| DaySpan {
                    date: day.date,
                    from,
                    to,
                    amount: unit.between(from, to),
                })
            })
    }
}
