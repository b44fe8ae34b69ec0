//! Add and until commands: date arithmetic through a methods record.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use kalends_calendar::{
    CalendarMethod, FieldBag, MethodSet, MethodsRecord, consolidate, date_add,
    date_until_with_unit,
};
use kalends_iso::Duration;

use crate::cli::{AddArgs, UntilArgs};
use crate::convert::{self, Settings};
use crate::output::{AddReport, UntilReport};

/// Adds the duration given on the command line to a date.
pub fn add(args: &AddArgs, settings: &Settings) -> Result<AddReport> {
    let _cmd = info_span!("add").entered();
    let date = convert::parse_date(&args.date, &settings.provider)?;
    let overflow = match &args.overflow {
        Some(s) => convert::parse_overflow(s)?,
        None => settings.overflow,
    };
    let duration = Duration {
        years: args.years,
        months: args.months,
        weeks: args.weeks,
        days: args.days,
        hours: args.hours,
        minutes: args.minutes,
        seconds: args.seconds,
        ..Duration::default()
    };
    duration.validate().context("invalid duration")?;

    let record = MethodsRecord::new(date.calendar.clone(), MethodSet::of(&[CalendarMethod::DateAdd]))?;
    let options = FieldBag::new().with("overflow", overflow.as_str());
    let result = date_add(&record, &date, &duration, Some(&options))
        .with_context(|| format!("failed to add {duration} to {date}"))?;
    debug!(%date, %duration, %result, "added");

    Ok(AddReport {
        date: date.to_string(),
        duration: duration.to_string(),
        overflow: overflow.to_string(),
        result: result.to_string(),
    })
}

/// Difference between two dates in a common calendar.
pub fn until(args: &UntilArgs, settings: &Settings) -> Result<UntilReport> {
    let _cmd = info_span!("until").entered();
    let one = convert::parse_date(&args.one, &settings.provider)?;
    let two = convert::parse_date(&args.two, &settings.provider)?;
    let largest_unit = match &args.largest_unit {
        Some(s) => convert::parse_largest_unit(s)?,
        None => settings.largest_unit,
    };

    let calendar = consolidate(&one.calendar, &two.calendar)?;
    let record = MethodsRecord::new(calendar, MethodSet::of(&[CalendarMethod::DateUntil]))?;
    let duration = date_until_with_unit(&record, &one, &two, largest_unit)?;

    Ok(UntilReport {
        one: one.to_string(),
        two: two.to_string(),
        largest_unit: largest_unit.to_string(),
        duration: duration.to_string(),
        years: duration.years,
        months: duration.months,
        weeks: duration.weeks,
        days: duration.days,
    })
}
