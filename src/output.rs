//! Result structures printed by the subcommands.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::convert::OutputFormat;

/// Every accessor of one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub date: String,
    pub calendar: String,
    pub year: i64,
    pub month: i64,
    pub month_code: String,
    pub day: i64,
    pub day_of_week: i64,
    pub day_of_year: i64,
    pub week_of_year: i64,
    pub year_of_week: i64,
    pub days_in_week: i64,
    pub days_in_month: i64,
    pub days_in_year: i64,
    pub months_in_year: i64,
    pub in_leap_year: bool,
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, String); 15] = [
            ("date", self.date.clone()),
            ("calendar", self.calendar.clone()),
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
            ("monthCode", self.month_code.clone()),
            ("day", self.day.to_string()),
            ("dayOfWeek", self.day_of_week.to_string()),
            ("dayOfYear", self.day_of_year.to_string()),
            ("weekOfYear", self.week_of_year.to_string()),
            ("yearOfWeek", self.year_of_week.to_string()),
            ("daysInWeek", self.days_in_week.to_string()),
            ("daysInMonth", self.days_in_month.to_string()),
            ("daysInYear", self.days_in_year.to_string()),
            ("monthsInYear", self.months_in_year.to_string()),
            ("inLeapYear", self.in_leap_year.to_string()),
        ];
        for (i, (name, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<13} {value}")?;
        }
        Ok(())
    }
}

/// ISO week of one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    pub date: String,
    pub year: i64,
    pub week: i64,
}

impl fmt::Display for WeekReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Outcome of `add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddReport {
    pub date: String,
    pub duration: String,
    pub overflow: String,
    pub result: String,
}

impl fmt::Display for AddReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}

/// Outcome of `until`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UntilReport {
    pub one: String,
    pub two: String,
    pub largest_unit: String,
    pub duration: String,
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl fmt::Display for UntilReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.duration)
    }
}

/// Outcome of `from-fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromFieldsReport {
    pub kind: String,
    pub calendar: String,
    pub fields: Vec<String>,
    pub result: String,
}

impl fmt::Display for FromFieldsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}

/// Renders a report as text or pretty-printed JSON.
pub fn render<T: Serialize + fmt::Display>(report: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_text_is_iso_week_notation() {
        let report = WeekReport {
            date: "2021-01-03".to_string(),
            year: 2020,
            week: 53,
        };
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), "2020-W53");
        let report = WeekReport { week: 4, ..report };
        assert_eq!(report.to_string(), "2020-W04");
    }

    #[test]
    fn json_uses_field_names() {
        let report = UntilReport {
            one: "2021-01-01".to_string(),
            two: "2021-03-01".to_string(),
            largest_unit: "month".to_string(),
            duration: "P2M".to_string(),
            years: 0,
            months: 2,
            weeks: 0,
            days: 0,
        };
        let json = render(&report, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["largest_unit"], "month");
        assert_eq!(parsed["months"], 2);
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), "P2M");
    }
}
