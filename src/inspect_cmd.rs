//! Inspect and week commands: read calendar accessors of a single date.

use anyhow::Result;
use tracing::info_span;

use kalends_calendar::{
    CalendarMethod, DateLike, MethodSet, MethodsRecord, calendar_day, calendar_day_of_week,
    calendar_day_of_year, calendar_days_in_month, calendar_days_in_week, calendar_days_in_year,
    calendar_in_leap_year, calendar_month, calendar_month_code, calendar_months_in_year,
    calendar_week_of_year, calendar_year, calendar_year_of_week,
};

use crate::cli::DateArgs;
use crate::convert::{self, Settings};
use crate::output::{Inspection, WeekReport};

/// Reads every accessor of the date through its calendar.
pub fn inspect(args: &DateArgs, settings: &Settings) -> Result<Inspection> {
    let _cmd = info_span!("inspect").entered();
    let date = convert::parse_date(&args.date, &settings.provider)?;
    let provider = date.calendar.clone();
    let record = MethodsRecord::new(provider.clone(), MethodSet::of(&[CalendarMethod::Day]))?;
    let like = DateLike::from(date.clone());

    Ok(Inspection {
        date: date.to_string(),
        calendar: provider.identifier()?,
        year: calendar_year(&provider, &like)?,
        month: calendar_month(&provider, &like)?,
        month_code: calendar_month_code(&provider, &like)?,
        day: calendar_day(&record, &like)?,
        day_of_week: calendar_day_of_week(&provider, &like)?,
        day_of_year: calendar_day_of_year(&provider, &like)?,
        week_of_year: calendar_week_of_year(&provider, &like)?,
        year_of_week: calendar_year_of_week(&provider, &like)?,
        days_in_week: calendar_days_in_week(&provider, &like)?,
        days_in_month: calendar_days_in_month(&provider, &like)?,
        days_in_year: calendar_days_in_year(&provider, &like)?,
        months_in_year: calendar_months_in_year(&provider, &like)?,
        in_leap_year: calendar_in_leap_year(&provider, &like)?,
    })
}

/// Week-numbering year and week of the date.
pub fn week(args: &DateArgs, settings: &Settings) -> Result<WeekReport> {
    let _cmd = info_span!("week").entered();
    let date = convert::parse_date(&args.date, &settings.provider)?;
    let like = DateLike::from(date.clone());
    Ok(WeekReport {
        date: date.to_string(),
        year: calendar_year_of_week(&date.calendar, &like)?,
        week: calendar_week_of_year(&date.calendar, &like)?,
    })
}
