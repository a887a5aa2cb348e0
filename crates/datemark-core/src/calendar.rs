//! Calendar helpers: the two-digit century pivot and month lengths.

use chrono::{Datelike, Months, NaiveDate};

/// Raw values below this pivot map into the 2000s, others into the 1900s.
pub const CENTURY_PIVOT: i32 = 20;

/// A leap year, used when asking how long a month can ever be.
pub const LEAP_REFERENCE_YEAR: i32 = 2004;

/// Maps a raw year value to a four-digit year.
///
/// # Examples
///
/// ```
/// use datemark_core::calendar::pivot_year;
///
/// assert_eq!(pivot_year(19), 2019);
/// assert_eq!(pivot_year(20), 1920);
/// assert_eq!(pivot_year(99), 1999);
/// ```
#[inline]
pub fn pivot_year(value: i32) -> i32 {
    if value < CENTURY_PIVOT {
        2000_i32.saturating_add(value)
    } else {
        1900_i32.saturating_add(value)
    }
}

/// The two trailing digits of `year`, if [`pivot_year`] maps them back to it.
///
/// Years outside 1920..=2019 have no two-digit spelling.
///
/// # Examples
///
/// ```
/// use datemark_core::calendar::trailing_year_digits;
///
/// assert_eq!(trailing_year_digits(2001), Some(1));
/// assert_eq!(trailing_year_digits(1995), Some(95));
/// assert_eq!(trailing_year_digits(1910), None);
/// ```
pub fn trailing_year_digits(year: i32) -> Option<i32> {
    let digits = year.rem_euclid(100);
    (pivot_year(digits) == year).then_some(digits)
}

/// Number of days in `month` of `year`.
///
/// Returns `None` when the month is not in 1..=12 or the year is outside the
/// range chrono can represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Longest possible length of `month` across all years.
#[inline]
pub fn max_days_in_month(month: u32) -> Option<u32> {
    days_in_month(LEAP_REFERENCE_YEAR, month)
}

/// Builds a calendar date from raw day/month values and a four-digit year.
pub fn calendar_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Day, month and year of `date` as raw `i32` values.
pub fn date_parts(date: NaiveDate) -> (i32, i32, i32) {
    // day() and month() are at most 31 and 12
    (date.day() as i32, date.month() as i32, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_boundary() {
        assert_eq!(pivot_year(19), 2019);
        assert_eq!(pivot_year(20), 1920);
        assert_eq!(pivot_year(0), 2000);
        assert_eq!(pivot_year(-5), 1995);
    }

    #[test]
    fn test_pivot_saturates() {
        assert_eq!(pivot_year(i32::MAX), i32::MAX);
        assert_eq!(pivot_year(i32::MIN), i32::MIN + 2000);
    }

    #[test]
    fn test_trailing_year_digits() {
        assert_eq!(trailing_year_digits(2001), Some(1));
        assert_eq!(trailing_year_digits(2019), Some(19));
        assert_eq!(trailing_year_digits(1920), Some(20));
        assert_eq!(trailing_year_digits(1999), Some(99));
        assert_eq!(trailing_year_digits(1910), None);
        assert_eq!(trailing_year_digits(2020), None);
        assert_eq!(trailing_year_digits(-5), None);
        for year in 1920..=2019 {
            let digits = trailing_year_digits(year).unwrap();
            assert!((0..100).contains(&digits));
            assert_eq!(pivot_year(digits), year);
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2001, 9), Some(30));
        assert_eq!(days_in_month(1999, 12), Some(31));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2001, 13), None);
        assert_eq!(days_in_month(2001, 0), None);
    }

    #[test]
    fn test_max_days_in_month_uses_leap_february() {
        assert_eq!(max_days_in_month(2), Some(29));
        assert_eq!(max_days_in_month(4), Some(30));
        assert_eq!(max_days_in_month(7), Some(31));
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(
            calendar_date(2001, 9, 11),
            NaiveDate::from_ymd_opt(2001, 9, 11)
        );
        assert_eq!(calendar_date(2001, 2, 31), None);
        assert_eq!(calendar_date(2001, -1, 3), None);
    }
}
