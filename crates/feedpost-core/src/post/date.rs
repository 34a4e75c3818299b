//! Portuguese rendering of publication dates
//!
//! Two renderings are produced from a post's `published_at`:
//! an absolute one (`"10 de janeiro às 15:30h"`) used as the title of the
//! time element, and a relative one (`"há 3 dias"`) used as its text.
//! The relative thresholds follow the usual "distance to now" buckets:
//! minutes, about-hours, days, about-months, months, then years with
//! about/over/almost qualifiers.

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};
use serde::Serialize;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Absolute rendering: day, month name and time in the timestamp's own offset
pub fn format_absolute(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{} de {} às {:02}:{:02}h",
        at.day(),
        MONTHS[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

/// Machine-readable rendering, UTC with millisecond precision
pub fn format_iso(at: &DateTime<FixedOffset>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Relative rendering against `now`, with the "há"/"daqui a" suffix
pub fn format_relative(at: &DateTime<FixedOffset>, now: &DateTime<Utc>) -> String {
    let at = at.with_timezone(&Utc);
    let (earlier, later, future) = if at > *now {
        (*now, at, true)
    } else {
        (at, *now, false)
    };

    let phrase = Distance::between(&earlier, &later).to_string();
    if future {
        format!("daqui a {}", phrase)
    } else {
        format!("há {}", phrase)
    }
}

/// Bucketed distance between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    fn between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> Self {
        let seconds = (*later - *earlier).num_seconds();
        let minutes = div_round(seconds, 60);

        if minutes < 2 {
            return if minutes == 0 {
                Distance::LessThanAMinute
            } else {
                Distance::Minutes(minutes)
            };
        }
        if minutes < 45 {
            return Distance::Minutes(minutes);
        }
        if minutes < 90 {
            return Distance::AboutHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Distance::AboutHours(div_round(minutes, 60));
        }
        if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Distance::Days(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Distance::Days(div_round(minutes, MINUTES_IN_DAY));
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return Distance::AboutMonths(div_round(minutes, MINUTES_IN_MONTH));
        }

        let months = calendar_months_between(earlier, later);
        if months < 12 {
            return Distance::Months(div_round(minutes, MINUTES_IN_MONTH));
        }

        let years = months / 12;
        match months % 12 {
            0..=2 => Distance::AboutYears(years),
            3..=8 => Distance::OverYears(years),
            _ => Distance::AlmostYears(years + 1),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Distance::LessThanAMinute => write!(f, "menos de um minuto"),
            Distance::Minutes(1) => write!(f, "1 minuto"),
            Distance::Minutes(n) => write!(f, "{} minutos", n),
            Distance::AboutHours(1) => write!(f, "aproximadamente 1 hora"),
            Distance::AboutHours(n) => write!(f, "aproximadamente {} horas", n),
            Distance::Days(1) => write!(f, "1 dia"),
            Distance::Days(n) => write!(f, "{} dias", n),
            Distance::AboutMonths(1) => write!(f, "aproximadamente 1 mês"),
            Distance::AboutMonths(n) => write!(f, "aproximadamente {} meses", n),
            Distance::Months(1) => write!(f, "1 mês"),
            Distance::Months(n) => write!(f, "{} meses", n),
            Distance::AboutYears(1) => write!(f, "aproximadamente 1 ano"),
            Distance::AboutYears(n) => write!(f, "aproximadamente {} anos", n),
            Distance::OverYears(1) => write!(f, "mais de 1 ano"),
            Distance::OverYears(n) => write!(f, "mais de {} anos", n),
            Distance::AlmostYears(1) => write!(f, "quase 1 ano"),
            Distance::AlmostYears(n) => write!(f, "quase {} anos", n),
        }
    }
}

/// Integer division rounding half up, for non-negative operands
fn div_round(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`
fn calendar_months_between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);

    // The last month only counts once its day and time have been reached
    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}

/// Clock-independent renderings of a publication date
///
/// Computed once per view since they depend only on `published_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedDate {
    /// The timestamp itself
    pub at: DateTime<FixedOffset>,
    /// Title text, e.g. `"10 de janeiro às 15:30h"`
    pub absolute: String,
    /// Machine form, e.g. `"2024-01-10T18:30:00.000Z"`
    pub iso: String,
}

impl PublishedDate {
    /// Render both fixed forms of `at`
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self {
            absolute: format_absolute(&at),
            iso: format_iso(&at),
            at,
        }
    }

    /// Relative text against `now`
    pub fn relative_to(&self, now: &DateTime<Utc>) -> String {
        format_relative(&self.at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn published() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-10T15:30:00-03:00").unwrap()
    }

    fn ago(duration: Duration) -> String {
        let at = published();
        let now = at.with_timezone(&Utc) + duration;
        format_relative(&at, &now)
    }

    #[test]
    fn test_absolute_format() {
        assert_eq!(format_absolute(&published()), "10 de janeiro às 15:30h");
    }

    #[test]
    fn test_absolute_format_pads_time() {
        let at = DateTime::parse_from_rfc3339("2022-03-05T08:05:00+00:00").unwrap();
        assert_eq!(format_absolute(&at), "5 de março às 08:05h");
    }

    #[test]
    fn test_iso_format() {
        assert_eq!(format_iso(&published()), "2024-01-10T18:30:00.000Z");
    }

    #[test]
    fn test_relative_minutes_and_hours() {
        assert_eq!(ago(Duration::seconds(10)), "há menos de um minuto");
        assert_eq!(ago(Duration::seconds(70)), "há 1 minuto");
        assert_eq!(ago(Duration::minutes(30)), "há 30 minutos");
        assert_eq!(ago(Duration::minutes(60)), "há aproximadamente 1 hora");
        assert_eq!(ago(Duration::hours(5)), "há aproximadamente 5 horas");
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(ago(Duration::hours(30)), "há 1 dia");
        assert_eq!(ago(Duration::days(3)), "há 3 dias");
        assert_eq!(ago(Duration::days(29)), "há 29 dias");
    }

    #[test]
    fn test_relative_months() {
        assert_eq!(ago(Duration::days(40)), "há aproximadamente 1 mês");
        assert_eq!(ago(Duration::days(95)), "há 3 meses");
    }

    #[test]
    fn test_relative_years() {
        assert_eq!(ago(Duration::days(370)), "há aproximadamente 1 ano");
        assert_eq!(ago(Duration::days(365 + 180)), "há mais de 1 ano");
        assert_eq!(ago(Duration::days(365 + 320)), "há quase 2 anos");
    }

    #[test]
    fn test_relative_future() {
        let at = published();
        let now = at.with_timezone(&Utc) - Duration::days(2);
        assert_eq!(format_relative(&at, &now), "daqui a 2 dias");
    }

    #[test]
    fn test_published_date() {
        let date = PublishedDate::new(published());
        assert_eq!(date.absolute, "10 de janeiro às 15:30h");
        let now = published().with_timezone(&Utc) + Duration::days(3);
        assert_eq!(date.relative_to(&now), "há 3 dias");
    }

    #[test]
    fn test_calendar_months_between() {
        let a = DateTime::parse_from_rfc3339("2024-01-31T12:00:00Z").unwrap().with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2024-03-30T12:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(calendar_months_between(&a, &b), 1);
    }
}
