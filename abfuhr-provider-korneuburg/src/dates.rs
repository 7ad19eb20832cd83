//! Resolution of year-less `D.M` dates as printed on the collection calendar.

use chrono::{Datelike, Local, NaiveDate};

/// Months a date may lie behind the current month before it is read as next year.
const ROLLOVER_MONTHS: i64 = 6;

/// Resolve `D.M` or `D.M.` against `year_hint`, using today's month for rollover.
///
/// Returns `None` for anything that is not a real calendar date.
#[must_use]
pub fn resolve_day_month(text: &str, year_hint: i32) -> Option<NaiveDate> {
    resolve_day_month_at(text, year_hint, Local::now().month())
}

/// Resolve `D.M` or `D.M.` against `year_hint` as seen from `current_month`.
///
/// The calendar is published as a rolling window without years. A month more
/// than six months behind `current_month` belongs to the year after
/// `year_hint`, everything else to `year_hint` itself.
#[must_use]
pub fn resolve_day_month_at(text: &str, year_hint: i32, current_month: u32) -> Option<NaiveDate> {
    let (day, month) = text.trim_matches('.').split_once('.')?;
    let day = day.parse::<u32>().ok()?;
    let month = month.parse::<u32>().ok()?;

    let year = if i64::from(month) < i64::from(current_month) - ROLLOVER_MONTHS {
        year_hint.checked_add(1)?
    } else {
        year_hint
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
