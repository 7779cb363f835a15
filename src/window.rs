use crate::calendar;
use crate::error::{BusinessHoursError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Daily business window, in whole hours from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessWindow {
    opens_at: u32,
    closes_at: u32,
}

impl BusinessWindow {
    /// Validated constructor: both hours in `0..=23` and opening before closing.
    pub fn new(opens_at: u32, closes_at: u32) -> Result<Self> {
        for hour in [opens_at, closes_at] {
            if hour >= 24 {
                return Err(BusinessHoursError::InvalidHour(hour));
            }
        }
        if opens_at >= closes_at {
            return Err(BusinessHoursError::EmptyWindow {
                opens_at,
                closes_at,
            });
        }
        Ok(Self {
            opens_at,
            closes_at,
        })
    }

    /// Builds a window without any checks. Inverted or out-of-range hours give
    /// undefined (but non-panicking) results downstream.
    pub const fn unchecked(opens_at: u32, closes_at: u32) -> Self {
        Self {
            opens_at,
            closes_at,
        }
    }

    pub fn opens_at(&self) -> u32 {
        self.opens_at
    }

    pub fn closes_at(&self) -> u32 {
        self.closes_at
    }

    pub fn opening(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.opens_at)
    }

    pub fn closing(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.closes_at)
    }

    /// Snap an instant to its own day's window. The day never changes.
    pub fn clamp(&self, instant: NaiveDateTime) -> NaiveDateTime {
        let opening = self.opening(instant.date());
        let closing = self.closing(instant.date());

        if instant < opening {
            opening
        } else if instant > closing {
            closing
        } else {
            instant
        }
    }

    pub fn day(&self, date: NaiveDate) -> DayWindow {
        DayWindow {
            date,
            opens: self.opening(date),
            closes: self.closing(date),
        }
    }

    /// Day windows starting at `date` (even a weekend date), then every
    /// following weekday.
    pub fn days_from(&self, date: NaiveDate) -> BusinessDays {
        BusinessDays {
            window: *self,
            next: Some(date),
        }
    }
}

/// Midnight plus `hour` hours, saturating at the end of the calendar.
fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    Duration::try_hours(i64::from(hour))
        .and_then(|offset| calendar::midnight(date).checked_add_signed(offset))
        .unwrap_or(NaiveDateTime::MAX)
}

/// One calendar day's business window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub opens: NaiveDateTime,
    pub closes: NaiveDateTime,
}

impl DayWindow {
    pub fn midnight(&self) -> NaiveDateTime {
        calendar::midnight(self.date)
    }

    /// Part of this window inside `[start, end]`, if any.
    pub fn intersect(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let from = self.opens.max(start);
        let to = self.closes.min(end);
        (from < to).then_some((from, to))
    }
}

/// Lazy sequence of business-day windows. Clone it to restart from the same day.
#[derive(Debug, Clone)]
pub struct BusinessDays {
    window: BusinessWindow,
    next: Option<NaiveDate>,
}

impl Iterator for BusinessDays {
    type Item = DayWindow;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next?;
        self.next = calendar::next_weekday(date);
        Some(self.window.day(date))
    }
}
