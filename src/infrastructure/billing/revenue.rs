//! Dashboard revenue figures
//!
//! Revenue computation is out of scope for the admin backend; the dashboard
//! receives fixed sample figures laid out on the last twelve months.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

const SAMPLE_MONTHLY_REVENUE: [i64; 12] =
    [105, 248, 372, 740, 580, 880, 1553, 1286, 1780, 3000, 2732, 3378];

pub const SAMPLE_CUSTOMERS: i64 = 584;
pub const SAMPLE_MRR: i64 = 348;
pub const SAMPLE_TOTAL_REVENUE: i64 = 583;

/// One monthly data point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    /// First day of the month, midnight UTC
    pub date: DateTime<Utc>,
    pub value: i64,
}

/// Twelve monthly points, oldest first, the last one in the month of `now`
pub fn sample_revenue(now: DateTime<Utc>) -> Vec<RevenuePoint> {
    let last = now.year() * 12 + now.month0() as i32;
    let first = last - (SAMPLE_MONTHLY_REVENUE.len() as i32 - 1);

    SAMPLE_MONTHLY_REVENUE
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let month_index = first + index as i32;
            let year = month_index.div_euclid(12);
            let month = month_index.rem_euclid(12) as u32 + 1;

            Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
                .single()
                .map(|date| RevenuePoint {
                    date,
                    value: *value,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_ends_in_current_month() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap();
        let series = sample_revenue(now);

        assert_eq!(series.len(), 12);
        assert_eq!(series[11].date, Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap());
        assert_eq!(series[11].value, 3378);
        assert_eq!(series[0].date, Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap());
        assert_eq!(series[0].value, 105);
    }

    #[test]
    fn test_series_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap();
        let series = sample_revenue(now);

        assert_eq!(series[0].date, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(series[10].date, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(series[11].date, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_series_months_are_consecutive() {
        let now = Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap();
        let series = sample_revenue(now);

        for pair in series.windows(2) {
            assert!(pair[0].date < pair[1].date);
            assert_eq!(pair[0].date.day(), 1);
        }
        assert_eq!(series[0].date, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }
}
