use chrono::{NaiveDate, NaiveTime};

use crate::analytics::aggregation::summarize;
use crate::analytics::errors::AnalyticsError;
use crate::models::analytics::MonthlyResult;
use crate::models::game::GameRecord;

/// Half-open UTC epoch range `[start of month, start of next month)`.
pub fn month_bounds(year: i32, month: u32) -> Result<(i64, i64), AnalyticsError> {
    let invalid = || AnalyticsError::InvalidMonth { year, month };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

    Ok((
        start.and_time(NaiveTime::MIN).and_utc().timestamp(),
        end.and_time(NaiveTime::MIN).and_utc().timestamp(),
    ))
}

/// Games that ended inside the given month. Games without an end time are
/// never in range.
pub fn games_in_month(
    records: &[GameRecord],
    year: i32,
    month: u32,
) -> Result<Vec<&GameRecord>, AnalyticsError> {
    let (start, end) = month_bounds(year, month)?;

    Ok(records
        .iter()
        .filter(|record| {
            record
                .end_time
                .is_some_and(|ended| ended >= start && ended < end)
        })
        .collect())
}

/// Wins and losses for `username` among games that ended in the month.
pub fn monthly_result(
    username: &str,
    records: &[GameRecord],
    year: i32,
    month: u32,
) -> Result<MonthlyResult, AnalyticsError> {
    let in_month = games_in_month(records, year, month)?;
    let summary = summarize(username, in_month);

    Ok(MonthlyResult {
        wins: summary.wins,
        losses: summary.losses,
    })
}
