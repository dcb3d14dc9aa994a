// Season week clock.

use chrono::{DateTime, NaiveDate, TimeZone};

/// Week number of `today` relative to `season_start`.
///
/// Week 1 covers the first seven days starting at `season_start`. Dates before
/// the start clamp to week 0. There is no upper clamp: dates long after the
/// season keep counting up.
pub fn current_week(today: NaiveDate, season_start: NaiveDate) -> i64 {
    let days = today.signed_duration_since(season_start).num_days();
    (days.div_euclid(7) + 1).max(0)
}

/// `current_week` for a timestamp; the time of day is ignored.
pub fn week_at<Tz: TimeZone>(now: &DateTime<Tz>, season_start: NaiveDate) -> i64 {
    current_week(now.date_naive(), season_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 21).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_date_is_week_one() {
        assert_eq!(current_week(start(), start()), 1);
    }

    #[test]
    fn week_boundaries() {
        assert_eq!(current_week(day(2024, 10, 27), start()), 1);
        assert_eq!(current_week(day(2024, 10, 28), start()), 2);
        assert_eq!(current_week(day(2024, 11, 4), start()), 3);
    }

    #[test]
    fn dates_before_start_clamp_to_zero() {
        assert_eq!(current_week(day(2024, 10, 20), start()), 0);
        assert_eq!(current_week(day(2024, 10, 14), start()), 0);
        assert_eq!(current_week(day(2023, 1, 1), start()), 0);
    }

    #[test]
    fn no_upper_clamp() {
        // 2025-03-10 is 140 days after the start: week 21.
        assert_eq!(current_week(day(2025, 3, 10), start()), 21);
        assert!(current_week(day(2026, 10, 16), start()) > 100);
    }

    #[test]
    fn time_of_day_is_ignored() {
        let early = Utc.with_ymd_and_hms(2024, 10, 28, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 10, 28, 23, 59, 59).unwrap();
        assert_eq!(week_at(&early, start()), 2);
        assert_eq!(week_at(&late, start()), 2);
    }
}
