use crate::revenue::RevenueError;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::utils::end_of_day;
use utoipa::ToSchema;

/// Reporting window anchored at a start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RevenuePeriod {
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl RevenuePeriod {
    pub const ALL: [RevenuePeriod; 4] = [
        RevenuePeriod::Daily,
        RevenuePeriod::Weekly,
        RevenuePeriod::Monthly,
        RevenuePeriod::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RevenuePeriod::Daily => "daily",
            RevenuePeriod::Weekly => "weekly",
            RevenuePeriod::Monthly => "monthly",
            RevenuePeriod::Annual => "annual",
        }
    }

    /// Inclusive `[anchor, end]` window. The end is always the last instant
    /// of a calendar day.
    pub fn window(&self, anchor: NaiveDateTime) -> Result<(NaiveDateTime, NaiveDateTime), RevenueError> {
        let day = anchor.date();

        let last_day = match self {
            RevenuePeriod::Daily => Some(day),
            RevenuePeriod::Weekly => day.checked_add_days(Days::new(6)),
            RevenuePeriod::Monthly => last_day_of_month(day),
            RevenuePeriod::Annual => NaiveDate::from_ymd_opt(day.year(), 12, 31),
        };

        let end = last_day
            .and_then(end_of_day)
            .ok_or(RevenueError::OutOfRange(anchor))?;

        Ok((anchor, end))
    }
}

fn last_day_of_month(day: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if day.month() == 12 {
        (day.year().checked_add(1)?, 1)
    } else {
        (day.year(), day.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

impl std::fmt::Display for RevenuePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::testing::at;

    fn end(y: i32, m: u32, d: u32) -> NaiveDateTime {
        end_of_day(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn daily_window_closes_at_end_of_anchor_day() {
        let anchor = at(2024, 3, 10, 15);
        assert_eq!(
            RevenuePeriod::Daily.window(anchor).unwrap(),
            (anchor, end(2024, 3, 10))
        );
    }

    #[test]
    fn weekly_window_spans_seven_days() {
        let anchor = at(2024, 2, 26, 0);
        assert_eq!(
            RevenuePeriod::Weekly.window(anchor).unwrap().1,
            end(2024, 3, 3)
        );
    }

    #[test]
    fn monthly_window_handles_leap_february_and_december() {
        assert_eq!(
            RevenuePeriod::Monthly.window(at(2024, 2, 10, 0)).unwrap().1,
            end(2024, 2, 29)
        );
        assert_eq!(
            RevenuePeriod::Monthly.window(at(2023, 12, 5, 8)).unwrap().1,
            end(2023, 12, 31)
        );
    }

    #[test]
    fn annual_window_ends_on_december_31() {
        assert_eq!(
            RevenuePeriod::Annual.window(at(2024, 7, 1, 0)).unwrap().1,
            end(2024, 12, 31)
        );
    }

    #[test]
    fn window_past_the_calendar_is_out_of_range() {
        let anchor = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(
            RevenuePeriod::Weekly.window(anchor).unwrap_err(),
            RevenueError::OutOfRange(anchor)
        );
    }

    #[test]
    fn periods_serialize_lowercase() {
        let names: Vec<String> = RevenuePeriod::ALL
            .iter()
            .map(|p| serde_json::to_string(p).unwrap())
            .collect();
        assert_eq!(names, vec!["\"daily\"", "\"weekly\"", "\"monthly\"", "\"annual\""]);
    }
}
