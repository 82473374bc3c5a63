use chrono::{Duration, Months, NaiveDateTime};

/// Days added when the period unit is not recognized. The resolver never
/// fails on a bad unit word; it falls back to a 30 day period instead.
const FALLBACK_DAYS: i64 = 30;

/// Resolves a billing period into a concrete end instant.
///
/// Month and year arithmetic advances the calendar month and clamps to
/// the last valid day of the target month, so Jan 31 + 1 month lands on
/// Feb 29 in a leap year and Feb 28 otherwise.
pub fn period_end(start: NaiveDateTime, period_number: i32, period_unit: &str) -> NaiveDateTime {
    let n = i64::from(period_number);
    match period_unit {
        "day" | "days" => start + Duration::days(n),
        "week" => start + Duration::days(7 * n),
        "month" => add_months(start, period_number as u32),
        "year" => add_months(start, 12 * period_number as u32),
        "hour" | "hours" => start + Duration::hours(n),
        "minute" | "minutes" => start + Duration::minutes(n),
        _ => start + Duration::days(FALLBACK_DAYS),
    }
}

fn add_months(start: NaiveDateTime, months: u32) -> NaiveDateTime {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or_else(|| start + Duration::days(FALLBACK_DAYS * i64::from(months)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn days_and_weeks_are_exact() {
        let start = at(2024, 3, 1);
        assert_eq!(period_end(start, 1, "day"), start + Duration::days(1));
        assert_eq!(period_end(start, 10, "days"), start + Duration::days(10));
        assert_eq!(period_end(start, 2, "week"), start + Duration::days(14));
    }

    #[test]
    fn hours_and_minutes_are_exact() {
        let start = at(2024, 3, 1);
        assert_eq!(period_end(start, 3, "hour"), start + Duration::hours(3));
        assert_eq!(period_end(start, 3, "hours"), start + Duration::hours(3));
        assert_eq!(period_end(start, 45, "minute"), start + Duration::minutes(45));
        assert_eq!(
            period_end(start, 45, "minutes"),
            start + Duration::minutes(45)
        );
    }

    #[test]
    fn months_advance_the_calendar_with_year_rollover() {
        assert_eq!(period_end(at(2024, 11, 15), 3, "month"), at(2025, 2, 15));
        assert_eq!(period_end(at(2024, 1, 1), 12, "month"), at(2025, 1, 1));
    }

    #[test]
    fn month_end_dates_clamp_to_the_last_valid_day() {
        // leap year February
        assert_eq!(period_end(at(2024, 1, 31), 1, "month"), at(2024, 2, 29));
        // non-leap year February
        assert_eq!(period_end(at(2023, 1, 31), 1, "month"), at(2023, 2, 28));
        // 30-day month
        assert_eq!(period_end(at(2024, 3, 31), 1, "month"), at(2024, 4, 30));
    }

    #[test]
    fn years_preserve_month_and_day_where_possible() {
        assert_eq!(period_end(at(2023, 6, 15), 2, "year"), at(2025, 6, 15));
        // Feb 29 in a leap year clamps on non-leap targets
        assert_eq!(period_end(at(2024, 2, 29), 1, "year"), at(2025, 2, 28));
    }

    #[test]
    fn unknown_units_fall_back_to_thirty_days() {
        let start = at(2024, 5, 1);
        for unit in ["", "fortnight", "weeks", "Month"] {
            assert_eq!(period_end(start, 1, unit), start + Duration::days(30));
        }
    }

    #[test]
    fn end_is_always_after_start_for_valid_periods() {
        let start = at(2024, 1, 31);
        for unit in ["day", "week", "month", "year", "hour", "minute", "bogus"] {
            assert!(period_end(start, 1, unit) > start, "unit {}", unit);
        }
    }
}
