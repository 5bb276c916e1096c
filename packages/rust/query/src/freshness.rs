//! Staleness bucketing by last-updated date.
//!
//! Module dates arrive as raw strings in whatever format the source repo
//! used; parsing is lenient and a date that fails every format simply
//! excludes the module from the Freshness sheet, nothing else.

use chrono::{Months, NaiveDate};

/// Date formats accepted for module metadata, tried in order.
///
/// `%m/%d/%y` must come before `%m/%d/%Y`: chrono's `%Y` also accepts a
/// two-digit year, which would turn "06/01/26" into year 0026. Four-digit
/// years fail `%y` on trailing input and fall through to `%Y`.
const DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// Time-since-last-update category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FreshnessBucket {
    Months3,
    Months6,
    Months12,
    Months18,
    Months24,
    Older,
}

impl FreshnessBucket {
    /// All buckets, nearest to farthest. This is also the column order of
    /// the Freshness sheet.
    pub const ALL: [FreshnessBucket; 6] = [
        FreshnessBucket::Months3,
        FreshnessBucket::Months6,
        FreshnessBucket::Months12,
        FreshnessBucket::Months18,
        FreshnessBucket::Months24,
        FreshnessBucket::Older,
    ];

    /// Display label used in report headers.
    pub fn label(self) -> &'static str {
        match self {
            FreshnessBucket::Months3 => "3 Months",
            FreshnessBucket::Months6 => "6 Months",
            FreshnessBucket::Months12 => "12 Months",
            FreshnessBucket::Months18 => "18 Months",
            FreshnessBucket::Months24 => "24 Months",
            FreshnessBucket::Older => "Older",
        }
    }

    /// The bucket's lookback window, `None` for the catch-all.
    fn window_months(self) -> Option<u32> {
        match self {
            FreshnessBucket::Months3 => Some(3),
            FreshnessBucket::Months6 => Some(6),
            FreshnessBucket::Months12 => Some(12),
            FreshnessBucket::Months18 => Some(18),
            FreshnessBucket::Months24 => Some(24),
            FreshnessBucket::Older => None,
        }
    }
}

/// Parse a module date string against the accepted formats.
pub fn parse_module_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Assign a date to its freshness bucket relative to `today`.
///
/// Buckets are tested nearest-to-farthest and boundaries are inclusive of
/// the nearer edge: a date exactly `today - 3 months` is still "3 Months".
pub fn bucket_for(date: NaiveDate, today: NaiveDate) -> FreshnessBucket {
    for bucket in FreshnessBucket::ALL {
        let Some(months) = bucket.window_months() else {
            break;
        };
        if let Some(edge) = today.checked_sub_months(Months::new(months)) {
            if date >= edge {
                return bucket;
            }
        }
    }
    FreshnessBucket::Older
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_us_and_iso_formats() {
        assert_eq!(parse_module_date("09/24/2020"), Some(date(2020, 9, 24)));
        assert_eq!(parse_module_date("2020-09-24"), Some(date(2020, 9, 24)));
        assert_eq!(parse_module_date(" 09/24/20 "), Some(date(2020, 9, 24)));
    }

    #[test]
    fn two_digit_year_parses_to_current_century() {
        assert_eq!(parse_module_date("06/01/26"), Some(date(2026, 6, 1)));
        // A recent two-digit-year date must land in the nearest bucket.
        let today = date(2026, 8, 31);
        let d = parse_module_date("06/01/26").expect("parse");
        assert_eq!(bucket_for(d, today), FreshnessBucket::Months3);
    }

    #[test]
    fn unparseable_dates_yield_none() {
        assert_eq!(parse_module_date(""), None);
        assert_eq!(parse_module_date("soon"), None);
        assert_eq!(parse_module_date("24 Sep 2020"), None);
    }

    #[test]
    fn three_months_minus_one_day_is_three_month_bucket() {
        let today = date(2024, 6, 15);
        let d = today
            .checked_sub_months(Months::new(3))
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .expect("valid date");
        assert_eq!(bucket_for(d, today), FreshnessBucket::Months3);
    }

    #[test]
    fn boundaries_are_inclusive_of_the_nearer_edge() {
        let today = date(2024, 6, 15);
        let exactly_three = today.checked_sub_months(Months::new(3)).unwrap();
        assert_eq!(bucket_for(exactly_three, today), FreshnessBucket::Months3);

        let one_day_past = exactly_three.checked_sub_days(Days::new(1)).unwrap();
        assert_eq!(bucket_for(one_day_past, today), FreshnessBucket::Months6);
    }

    #[test]
    fn old_dates_land_in_older() {
        let today = date(2024, 6, 15);
        assert_eq!(bucket_for(date(2021, 1, 1), today), FreshnessBucket::Older);
    }

    #[test]
    fn future_dates_are_treated_as_fresh() {
        let today = date(2024, 6, 15);
        assert_eq!(bucket_for(date(2024, 7, 1), today), FreshnessBucket::Months3);
    }

    #[test]
    fn all_buckets_ordered_nearest_first() {
        let labels: Vec<&str> = FreshnessBucket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            ["3 Months", "6 Months", "12 Months", "18 Months", "24 Months", "Older"]
        );
    }
}
