//! Clock-derived features.
//!
//! The formulas here mirror the batch time stage field for field; the two
//! sides of the schema contract must never diverge.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Time features computed from a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFeatures {
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    /// 0 = Monday.
    pub day_of_week: u32,
    pub is_weekend: bool,
    pub rush_hour: bool,
    /// 1:Winter, 2:Spring, 3:Summer, 4:Autumn
    pub season: u32,
    pub is_daytime: bool,
}

impl ClockFeatures {
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        let hour = now.hour();
        let month = now.month();
        let day_of_week = now.weekday().num_days_from_monday();
        Self {
            hour,
            day: now.day(),
            month,
            day_of_week,
            is_weekend: day_of_week >= 5,
            rush_hour: matches!(hour, 7..=9 | 17..=19),
            season: (month % 12) / 3 + 1,
            is_daytime: (6..=18).contains(&hour),
        }
    }

    /// Features for the current local wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> ClockFeatures {
        ClockFeatures::from_datetime(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn weekday_monday_is_zero() {
        // 2018-11-26 was a Monday.
        assert_eq!(at(2018, 11, 26, 12).day_of_week, 0);
        assert_eq!(at(2018, 11, 27, 12).day_of_week, 1);
        assert!(at(2018, 12, 1, 12).is_weekend); // Saturday
        assert!(!at(2018, 11, 27, 12).is_weekend);
    }

    #[test]
    fn rush_hour_covers_both_peaks() {
        for hour in [7, 8, 9, 17, 18, 19] {
            assert!(at(2018, 11, 27, hour).rush_hour, "hour {hour}");
        }
        for hour in [6, 10, 16, 20, 0] {
            assert!(!at(2018, 11, 27, hour).rush_hour, "hour {hour}");
        }
    }

    #[test]
    fn season_buckets_by_month() {
        assert_eq!(at(2018, 12, 10, 12).season, 1);
        assert_eq!(at(2018, 1, 10, 12).season, 1);
        assert_eq!(at(2018, 3, 10, 12).season, 2);
        assert_eq!(at(2018, 7, 10, 12).season, 3);
        assert_eq!(at(2018, 11, 10, 12).season, 4);
    }

    #[test]
    fn daytime_spans_six_to_eighteen() {
        assert!(at(2018, 11, 27, 6).is_daytime);
        assert!(at(2018, 11, 27, 18).is_daytime);
        assert!(!at(2018, 11, 27, 5).is_daytime);
        assert!(!at(2018, 11, 27, 19).is_daytime);
    }
}
