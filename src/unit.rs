use crate::error::BusinessHoursError;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit the business time is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    #[value(alias = "min")]
    #[serde(alias = "min")]
    Minutes,
}

impl Unit {
    /// Whole units elapsed from `from` to `to`, truncated toward zero.
    pub fn between(self, from: NaiveDateTime, to: NaiveDateTime) -> i64 {
        match self {
            Unit::Minutes => (to - from).num_minutes(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Minutes => "minutes",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = BusinessHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "minutes" => Ok(Unit::Minutes),
            other => Err(BusinessHoursError::UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 8)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("min".parse::<Unit>().unwrap(), Unit::Minutes);
        assert_eq!("minutes".parse::<Unit>().unwrap(), Unit::Minutes);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "seconds".parse::<Unit>().unwrap_err();
        assert_eq!(err, BusinessHoursError::UnknownUnit("seconds".to_string()));
        assert!("MIN".parse::<Unit>().is_err());
    }

    #[test]
    fn test_minutes_truncate_partial() {
        assert_eq!(Unit::Minutes.between(at(10, 0, 30), at(17, 0, 0)), 419);
        assert_eq!(Unit::Minutes.between(at(9, 0, 0), at(17, 0, 0)), 480);
    }

    #[test]
    fn test_serde_names() {
        let unit: Unit = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(unit, Unit::Minutes);
        assert_eq!(serde_json::to_string(&Unit::Minutes).unwrap(), "\"minutes\"");
    }
}
