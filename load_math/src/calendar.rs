//! Calendar helpers used to lay out forecast horizons

use crate::{MathError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Move a date into `year`, keeping its month and day
///
/// Dates already in `year` are returned unchanged. A month/day that does not
/// exist in `year` (Feb 29 on a non-leap year) is an error rather than being
/// clamped.
pub fn renormalize_year(date: NaiveDate, year: i32) -> Result<NaiveDate> {
    if date.year() == year {
        return Ok(date);
    }

    date.with_year(year).ok_or_else(|| {
        MathError::InvalidDate(format!(
            "{:02}-{:02} does not exist in {}",
            date.month(),
            date.day(),
            year
        ))
    })
}

/// `count` consecutive calendar days starting at `start`
pub fn consecutive_days(start: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    let mut days = Vec::with_capacity(count);

    for offset in 0..count {
        let day = start
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| {
                MathError::InvalidDate(format!("{} + {} days is out of range", start, offset))
            })?;
        days.push(day);
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_renormalize_replaces_year() {
        assert_eq!(renormalize_year(date(2024, 6, 15), 2025).unwrap(), date(2025, 6, 15));
        assert_eq!(renormalize_year(date(2031, 12, 31), 2025).unwrap(), date(2025, 12, 31));
    }

    #[test]
    fn test_renormalize_same_year_is_identity() {
        assert_eq!(renormalize_year(date(2025, 2, 28), 2025).unwrap(), date(2025, 2, 28));
    }

    #[test]
    fn test_renormalize_leap_day_fails() {
        let err = renormalize_year(date(2024, 2, 29), 2025).unwrap_err();
        assert!(matches!(err, MathError::InvalidDate(_)));
        assert!(err.to_string().contains("02-29"));
    }

    #[test]
    fn test_consecutive_days_crosses_month_and_year() {
        let days = consecutive_days(date(2025, 12, 30), 4).unwrap();
        assert_eq!(
            days,
            vec![
                date(2025, 12, 30),
                date(2025, 12, 31),
                date(2026, 1, 1),
                date(2026, 1, 2)
            ]
        );
    }

    #[test]
    fn test_consecutive_days_empty() {
        assert!(consecutive_days(date(2025, 1, 1), 0).unwrap().is_empty());
    }

    #[test]
    fn test_consecutive_days_overflow() {
        let result = consecutive_days(NaiveDate::MAX, 2);
        assert!(result.is_err());
    }
}
