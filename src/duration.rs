use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Strict `YYYY-MM-DD` parse. Rejects any other shape and calendar
/// overflow such as `2024-02-30`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| matches!(index, 4 | 7) || byte.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = value[0..4].parse::<i32>().ok()?;
    let month = value[5..7].parse::<u32>().ok()?;
    let day = value[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

pub fn days_since(start_date: &str) -> i64 {
    days_since_at(start_date, Local::now().date_naive())
}

/// Whole days between the start date and `today`, as an absolute value.
/// A start date that does not parse counts as 0 elapsed days.
pub fn days_since_at(start_date: &str, today: NaiveDate) -> i64 {
    match parse_date(start_date) {
        Some(start) => (today - start).num_days().abs(),
        None => 0,
    }
}

/// `"1 de Janeiro de 2024"`, no zero-padding. Input that does not parse
/// is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}

pub fn days_label(days: i64) -> &'static str {
    if days == 1 { "Dia" } else { "Dias" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailedDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

pub fn detailed_duration(start_date: &str) -> DetailedDuration {
    detailed_duration_at(start_date, Local::now().date_naive())
}

/// Calendar-aware breakdown: subtract field by field, borrowing days from
/// the months before `today` and months from the year until every field
/// is non-negative.
pub fn detailed_duration_at(start_date: &str, today: NaiveDate) -> DetailedDuration {
    let Some(start) = parse_date(start_date) else {
        return DetailedDuration {
            years: 0,
            months: 0,
            days: 0,
        };
    };

    let mut years = today.year() - start.year();
    let mut months = today.month() as i32 - start.month() as i32;
    let mut days = today.day() as i32 - start.day() as i32;

    let mut year = today.year();
    let mut month = today.month();
    while days < 0 {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
        months -= 1;
        days += days_in_month(year, month);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    DetailedDuration {
        years,
        months,
        days,
    }
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(start), Some(end)) => (end - start).num_days() as i32,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn valid_dates_pass() {
        assert!(is_valid_date("2024-01-01"));
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date("1999-12-31"));
    }

    #[test]
    fn overflow_and_shape_errors_fail_closed() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-1-1"));
        assert!(!is_valid_date("01-01-2024"));
        assert!(!is_valid_date("2024/01/01"));
        assert!(!is_valid_date("2024-01-01extra"));
    }

    #[test]
    fn days_since_counts_whole_days() {
        let today = date(2024, 1, 8);
        assert_eq!(days_since_at("2024-01-08", today), 0);
        assert_eq!(days_since_at("2024-01-07", today), 1);
        assert_eq!(days_since_at("2024-01-01", today), 7);
    }

    #[test]
    fn days_since_spans_leap_day() {
        assert_eq!(days_since_at("2024-02-28", date(2024, 3, 1)), 2);
        assert_eq!(days_since_at("2023-02-28", date(2023, 3, 1)), 1);
    }

    #[test]
    fn days_since_takes_absolute_difference() {
        assert_eq!(days_since_at("2024-01-10", date(2024, 1, 5)), 5);
    }

    #[test]
    fn days_since_invalid_input_is_zero() {
        assert_eq!(days_since_at("not-a-date!", date(2024, 1, 5)), 0);
        assert_eq!(days_since_at("", date(2024, 1, 5)), 0);
    }

    #[test]
    fn formats_in_portuguese_without_padding() {
        assert_eq!(format_date("2024-01-01"), "1 de Janeiro de 2024");
        assert_eq!(format_date("2024-03-05"), "5 de Março de 2024");
        assert_eq!(format_date("2025-12-21"), "21 de Dezembro de 2025");
    }

    #[test]
    fn format_passes_through_invalid_input() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn days_label_singular_plural() {
        assert_eq!(days_label(0), "Dias");
        assert_eq!(days_label(1), "Dia");
        assert_eq!(days_label(2), "Dias");
    }

    #[test]
    fn detailed_duration_plain_difference() {
        assert_eq!(
            detailed_duration_at("2024-01-01", date(2026, 3, 15)),
            DetailedDuration {
                years: 2,
                months: 2,
                days: 14
            }
        );
    }

    #[test]
    fn detailed_duration_same_day_is_zero() {
        assert_eq!(
            detailed_duration_at("2024-06-10", date(2024, 6, 10)),
            DetailedDuration {
                years: 0,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn detailed_duration_borrows_days_from_previous_month() {
        // 2024-01-15 -> 2024-03-10: borrow February's 29 days.
        assert_eq!(
            detailed_duration_at("2024-01-15", date(2024, 3, 10)),
            DetailedDuration {
                years: 0,
                months: 1,
                days: 24
            }
        );
    }

    #[test]
    fn detailed_duration_borrows_month_from_year() {
        assert_eq!(
            detailed_duration_at("2024-11-20", date(2025, 3, 10)),
            DetailedDuration {
                years: 0,
                months: 3,
                days: 18
            }
        );
    }

    #[test]
    fn detailed_duration_fields_stay_non_negative() {
        // Day-31 starts against short months force a second borrow.
        let cases = [
            ("2024-01-31", date(2024, 3, 1)),
            ("2023-12-31", date(2024, 3, 1)),
            ("2024-08-31", date(2025, 3, 1)),
        ];
        for (start, today) in cases {
            let duration = detailed_duration_at(start, today);
            assert!(duration.years >= 0, "{start}: {duration:?}");
            assert!(duration.months >= 0, "{start}: {duration:?}");
            assert!(duration.days >= 0, "{start}: {duration:?}");
        }
    }

    #[test]
    fn detailed_duration_invalid_input_is_zeroed() {
        assert_eq!(
            detailed_duration_at("2024-02-30", date(2024, 6, 10)),
            DetailedDuration {
                years: 0,
                months: 0,
                days: 0
            }
        );
    }
}
