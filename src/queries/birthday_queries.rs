use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::FriendRecord;

/// Default look-ahead window for `upcoming_birthdays`.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Full years elapsed between `birth` and `today` (0 for future dates).
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// The birthday in a given year. Feb 29 falls on Mar 1 in common years.
fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Date of the next birthday on or after `today`.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birth, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birth, today.year() + 1)
    }
}

/// 0 when the birthday is today.
pub fn days_until_next_birthday(birth: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_birthday(birth, today).map(|d| (d - today).num_days())
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBirthday<'a> {
    pub friend: &'a FriendRecord,
    pub days_until: i64,
    /// Age reached on that birthday.
    pub next_age: u32,
    pub month: u32,
    pub day: u32,
}

/// Friends whose next birthday is within `window_days`, soonest first.
/// Records without a birth date are skipped.
pub fn upcoming_birthdays<'a, I>(
    friends: I,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday<'a>>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    let mut upcoming: Vec<UpcomingBirthday<'a>> = friends
        .into_iter()
        .filter_map(|friend| {
            let birth = friend.birth_date?;
            let next = next_birthday(birth, today)?;
            let days_until = (next - today).num_days();
            (days_until <= window_days).then(|| UpcomingBirthday {
                friend,
                days_until,
                next_age: age_on(birth, next),
                month: birth.month(),
                day: birth.day(),
            })
        })
        .collect();

    upcoming.sort_by_key(|b| b.days_until);
    upcoming
}
