//! From-fields command: build a date-like value from individual fields.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use kalends_calendar::{
    CalendarField, CalendarMethod, FieldBag, MethodSet, MethodsRecord, Object, collect_fields,
    date_from_fields, month_day_from_fields, prepare_temporal_fields, year_month_from_fields,
};

use crate::cli::{FieldsKind, FromFieldsArgs};
use crate::convert::{self, Settings};
use crate::output::FromFieldsReport;

fn kind_name(kind: FieldsKind) -> &'static str {
    match kind {
        FieldsKind::Date => "date",
        FieldsKind::YearMonth => "year-month",
        FieldsKind::MonthDay => "month-day",
    }
}

fn input_bag(args: &FromFieldsArgs) -> FieldBag {
    let mut bag = FieldBag::new();
    if let Some(year) = args.year {
        bag.set("year", year as f64);
    }
    if let Some(month) = args.month {
        bag.set("month", month as f64);
    }
    if let Some(code) = &args.month_code {
        bag.set("monthCode", code.as_str());
    }
    if let Some(day) = args.day {
        bag.set("day", day as f64);
    }
    bag
}

/// Reads the requested fields through the configured calendar and builds
/// the value of the requested kind.
pub fn from_fields(args: &FromFieldsArgs, settings: &Settings) -> Result<FromFieldsReport> {
    let _cmd = info_span!("from_fields").entered();
    let overflow = match &args.overflow {
        Some(s) => convert::parse_overflow(s)?,
        None => settings.overflow,
    };
    let method = match args.kind {
        FieldsKind::Date => CalendarMethod::DateFromFields,
        FieldsKind::YearMonth => CalendarMethod::YearMonthFromFields,
        FieldsKind::MonthDay => CalendarMethod::MonthDayFromFields,
    };
    let wanted: Vec<CalendarField> = match args.kind {
        FieldsKind::YearMonth => vec![
            CalendarField::Month,
            CalendarField::MonthCode,
            CalendarField::Year,
        ],
        FieldsKind::Date | FieldsKind::MonthDay => CalendarField::ALL.to_vec(),
    };

    let record = MethodsRecord::new(
        settings.provider.clone(),
        MethodSet::of(&[CalendarMethod::Fields, method]),
    )?;
    let names = collect_fields(&record, &wanted)?;
    let prepared = prepare_temporal_fields(&Object::from(input_bag(args)), names.as_slice(), &[])
        .context("invalid field value")?;
    let fields = Object::from(prepared.to_field_bag());
    debug!(?names, "fields prepared");

    let options = FieldBag::new().with("overflow", overflow.as_str());
    let result = match args.kind {
        FieldsKind::Date => date_from_fields(&record, &fields, Some(&options))?.to_string(),
        FieldsKind::YearMonth => year_month_from_fields(&record, &fields, Some(&options))?
            .year_month
            .to_string(),
        FieldsKind::MonthDay => month_day_from_fields(&record, &fields, Some(&options))?
            .month_day
            .to_string(),
    };

    Ok(FromFieldsReport {
        kind: kind_name(args.kind).to_string(),
        calendar: settings.provider.identifier()?,
        fields: names,
        result,
    })
}
