//! Pure conversion functions: raw TOML and CLI strings -> engine types.

use anyhow::{Context, Result, bail};

use kalends_calendar::{CalendarProvider, DateObject, Value, resolve_provider};
use kalends_iso::{DateUnit, Overflow, PlainDate};

use crate::config::KalendsConfig;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Typed settings resolved from a [`KalendsConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub provider: CalendarProvider,
    pub overflow: Overflow,
    pub largest_unit: DateUnit,
    pub format: OutputFormat,
}

/// Parses an `overflow` option string.
pub fn parse_overflow(s: &str) -> Result<Overflow> {
    s.parse()
        .with_context(|| format!("invalid overflow option {s:?}"))
}

/// Parses a largest-unit string; `auto` means day.
pub fn parse_largest_unit(s: &str) -> Result<DateUnit> {
    if s == "auto" {
        return Ok(DateUnit::Day);
    }
    s.parse()
        .with_context(|| format!("invalid largest unit {s:?}"))
}

/// Parses an output format name.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Resolves a calendar identifier through the provider layer.
pub fn build_provider(id: &str) -> Result<CalendarProvider> {
    resolve_provider(&Value::Undefined, Some(id))
        .with_context(|| format!("invalid [calendar].id {id:?}"))
}

/// Builds typed [`Settings`] from the TOML configuration.
pub fn build_settings(config: &KalendsConfig) -> Result<Settings> {
    Ok(Settings {
        provider: build_provider(&config.calendar.id)?,
        overflow: parse_overflow(&config.defaults.overflow)
            .context("in [defaults].overflow")?,
        largest_unit: parse_largest_unit(&config.defaults.largest_unit)
            .context("in [defaults].largest_unit")?,
        format: parse_output_format(&config.output.format).context("in [output].format")?,
    })
}

/// Parses a date argument.
///
/// A `[u-ca=...]` annotation selects the calendar; without one the date
/// uses `default`.
pub fn parse_date(s: &str, default: &CalendarProvider) -> Result<DateObject> {
    let date: PlainDate = s.parse().with_context(|| format!("invalid date {s:?}"))?;
    let calendar = if s.contains("[u-ca=") || s.contains("[!u-ca=") {
        resolve_provider(&Value::from(s), None)
            .with_context(|| format!("invalid calendar annotation in {s:?}"))?
    } else {
        default.clone()
    };
    Ok(DateObject::new(date, calendar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_names() {
        assert_eq!(parse_overflow("constrain").unwrap(), Overflow::Constrain);
        assert_eq!(parse_overflow("reject").unwrap(), Overflow::Reject);
        let err = parse_overflow("balance").unwrap_err();
        assert!(format!("{err:#}").contains("\"balance\""));
    }

    #[test]
    fn largest_unit_names() {
        assert_eq!(parse_largest_unit("auto").unwrap(), DateUnit::Day);
        assert_eq!(parse_largest_unit("months").unwrap(), DateUnit::Month);
        assert_eq!(parse_largest_unit("year").unwrap(), DateUnit::Year);
        assert!(parse_largest_unit("hours").is_err());
    }

    #[test]
    fn output_formats() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn default_settings() {
        let settings = build_settings(&KalendsConfig::default()).unwrap();
        assert_eq!(settings.provider, CalendarProvider::Iso8601);
        assert_eq!(settings.overflow, Overflow::Constrain);
        assert_eq!(settings.largest_unit, DateUnit::Day);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn invalid_calendar_id_has_context() {
        let mut config = KalendsConfig::default();
        config.calendar.id = "gregory".to_string();
        let err = build_settings(&config).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("[calendar].id"), "{msg}");
        assert!(msg.contains("gregory"), "{msg}");
    }

    #[test]
    fn dates_with_and_without_annotation() {
        let d = parse_date("2021-03-04", &CalendarProvider::Iso8601).unwrap();
        assert_eq!(d.date, PlainDate::new(2021, 3, 4).unwrap());
        let d = parse_date("2021-03-04[u-ca=ISO8601]", &CalendarProvider::Iso8601).unwrap();
        assert_eq!(d.calendar, CalendarProvider::Iso8601);
        assert!(parse_date("2021-03-04[u-ca=hebrew]", &CalendarProvider::Iso8601).is_err());
        assert!(parse_date("2021-02-30", &CalendarProvider::Iso8601).is_err());
    }
}
