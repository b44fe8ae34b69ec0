mod common;

use std::sync::{Arc, Mutex};

use common::CountingCalendar;
use kalends_calendar::{
    CalendarError, CalendarMethod, CalendarProvider, DateObject, FieldBag, MethodSet,
    MethodsRecord, Object, Value, consolidate, date_add, date_from_fields, date_until,
    date_until_with_unit, month_day_from_fields, resolve_provider, year_month_from_fields,
};
use kalends_iso::{DateUnit, Duration, IsoError, PlainDate};

fn external(calendar: CountingCalendar, methods: &[CalendarMethod]) -> MethodsRecord {
    MethodsRecord::new(
        CalendarProvider::External(calendar.into_provider()),
        MethodSet::of(methods),
    )
    .unwrap()
}

fn iso(methods: &[CalendarMethod]) -> MethodsRecord {
    let provider = resolve_provider(&Value::Undefined, Some("iso8601")).unwrap();
    MethodsRecord::new(provider, MethodSet::of(methods)).unwrap()
}

fn date(y: i32, m: u8, d: u8) -> DateObject {
    DateObject::iso(PlainDate::new(y, m, d).unwrap())
}

#[test]
fn resolve_month_then_regulate() {
    let record = iso(&[CalendarMethod::DateFromFields]);
    let fields = Object::from(
        FieldBag::new()
            .with("year", 2021)
            .with("monthCode", "M02")
            .with("day", 31),
    );
    assert_eq!(date_from_fields(&record, &fields, None).unwrap(), date(2021, 2, 28));

    let reject = FieldBag::new().with("overflow", "reject");
    assert!(matches!(
        date_from_fields(&record, &fields, Some(&reject)),
        Err(CalendarError::Iso(IsoError::OverflowRejected { .. }))
    ));
}

#[test]
fn date_from_fields_requires_month_or_code() {
    let record = iso(&[CalendarMethod::DateFromFields]);
    let fields = Object::from(FieldBag::new().with("year", 2021).with("day", 1));
    assert_eq!(
        date_from_fields(&record, &fields, None),
        Err(CalendarError::MissingRequiredField {
            field: "monthCode".to_string()
        })
    );
}

#[test]
fn date_add_month_end() {
    let record = iso(&[CalendarMethod::DateAdd]);
    let month = Duration {
        months: 1,
        ..Duration::default()
    };
    assert_eq!(date_add(&record, &date(2021, 1, 31), &month, None).unwrap(), date(2021, 2, 28));
    assert_eq!(date_add(&record, &date(2020, 1, 31), &month, None).unwrap(), date(2020, 2, 29));
}

#[test]
fn external_from_fields_results_are_checked() {
    let calendar = CountingCalendar::new("custom")
        .with_method(CalendarMethod::DateFromFields, |_, _| Ok(Value::from(5)))
        .with_method(CalendarMethod::YearMonthFromFields, |_, _| {
            Ok(Value::from(DateObject::iso(PlainDate::new(2021, 1, 1).unwrap())))
        });
    let record = external(
        calendar,
        &[
            CalendarMethod::DateFromFields,
            CalendarMethod::YearMonthFromFields,
            CalendarMethod::MonthDayFromFields,
        ],
    );
    let fields = Object::from(FieldBag::new().with("monthCode", "M03").with("day", 4));

    assert_eq!(
        date_from_fields(&record, &fields, None),
        Err(CalendarError::UnexpectedResultType {
            method: "dateFromFields",
            expected: "a PlainDate object",
            found: "number 5".to_string(),
        })
    );
    assert_eq!(
        year_month_from_fields(&record, &fields, None),
        Err(CalendarError::UnexpectedResultType {
            method: "yearMonthFromFields",
            expected: "a PlainYearMonth object",
            found: "a PlainDate object".to_string(),
        })
    );
    // The delegating default accepts month-day fields without a year.
    let md = month_day_from_fields(&record, &fields, None).unwrap();
    assert_eq!(md.month_day.to_string(), "--03-04");
}

#[test]
fn external_from_fields_skips_local_validation() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let calendar = CountingCalendar::new("custom").with_method(
        CalendarMethod::DateFromFields,
        move |_, args| {
            sink.lock().unwrap().extend(args.iter().cloned());
            Ok(Value::from(DateObject::iso(PlainDate::new(1999, 9, 9).unwrap())))
        },
    );
    let record = external(calendar, &[CalendarMethod::DateFromFields]);
    let fields = Object::from(FieldBag::new().with("month", -4));
    let options = FieldBag::new().with("overflow", "sideways");

    let result = date_from_fields(&record, &fields, Some(&options)).unwrap();
    assert_eq!(result, date(1999, 9, 9));
    let args = received.lock().unwrap();
    assert_eq!(args.as_slice(), &[Value::from(fields), Value::from(options)]);
}

#[test]
fn external_date_add_receives_duration_and_undefined_options() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let calendar = CountingCalendar::new("custom").with_method(CalendarMethod::DateAdd, move |_, args| {
        sink.lock().unwrap().extend(args.iter().cloned());
        Ok(args[0].clone())
    });
    let record = external(calendar, &[CalendarMethod::DateAdd]);
    let duration = Duration {
        days: 3,
        hours: 4,
        ..Duration::default()
    };
    let start = date(2021, 5, 5);
    assert_eq!(date_add(&record, &start, &duration, None).unwrap(), start.clone());
    let args = received.lock().unwrap();
    assert_eq!(
        args.as_slice(),
        &[Value::from(start), Value::from(duration), Value::Undefined]
    );
}

#[test]
fn external_date_until_with_unit_gets_fresh_options() {
    let received = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);
    let calendar = CountingCalendar::new("custom").with_method(CalendarMethod::DateUntil, move |_, args| {
        *sink.lock().unwrap() = args.get(2).cloned();
        Ok(Value::from(Duration {
            months: 2,
            ..Duration::default()
        }))
    });
    let record = external(calendar, &[CalendarMethod::DateUntil]);
    let result =
        date_until_with_unit(&record, &date(2021, 1, 1), &date(2021, 3, 1), DateUnit::Month).unwrap();
    assert_eq!(result.months, 2);
    assert_eq!(
        *received.lock().unwrap(),
        Some(Value::from(FieldBag::new().with("largestUnit", "month")))
    );
}

#[test]
fn external_date_until_must_return_duration() {
    let calendar = CountingCalendar::new("custom")
        .with_method(CalendarMethod::DateUntil, |_, _| Ok(Value::Null));
    let record = external(calendar, &[CalendarMethod::DateUntil]);
    assert!(matches!(
        date_until(&record, &date(2021, 1, 1), &date(2021, 3, 1), &FieldBag::new()),
        Err(CalendarError::UnexpectedResultType { method: "dateUntil", .. })
    ));
}

#[test]
fn builtin_date_until_rejects_time_units() {
    let record = iso(&[CalendarMethod::DateUntil]);
    let options = FieldBag::new().with("largestUnit", "hours");
    assert!(matches!(
        date_until(&record, &date(2021, 1, 1), &date(2021, 3, 1), &options),
        Err(CalendarError::InvalidOption { option: "largestUnit", .. })
    ));
}

#[test]
fn consolidate_cases() {
    let iso = CalendarProvider::Iso8601;
    let x = CalendarProvider::External(CountingCalendar::new("x").into_provider());
    let y = CalendarProvider::External(CountingCalendar::new("y").into_provider());

    assert_eq!(consolidate(&iso, &iso), Ok(CalendarProvider::Iso8601));
    assert_eq!(consolidate(&iso, &x), Ok(x.clone()));
    assert_eq!(
        consolidate(&x, &y),
        Err(CalendarError::IncompatibleCalendars {
            one: "x".to_string(),
            two: "y".to_string(),
        })
    );
}

#[test]
fn missing_capability_fails_record() {
    let calendar = CountingCalendar::new("custom").with_property("dateAdd", Value::Undefined);
    let err = MethodsRecord::new(
        CalendarProvider::External(calendar.into_provider()),
        MethodSet::of(&[CalendarMethod::DateAdd]),
    )
    .unwrap_err();
    assert_eq!(err, CalendarError::MissingCapability { method: "dateAdd" });
}
