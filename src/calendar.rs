use chrono::{Datelike, NaiveDate};

use crate::error::{IrradianceError, Result};

/// Gregorian leap-year rule. Negative years are rejected.
pub fn is_leap_year(year: i32) -> Result<bool> {
    if year < 0 {
        return Err(IrradianceError::NegativeYear { year });
    }
    Ok((year % 400 == 0) || (year % 4 == 0 && year % 100 != 0))
}

pub fn days_in_year(year: i32) -> Result<i32> {
    Ok(if is_leap_year(year)? { 366 } else { 365 })
}

pub fn days_in_months(year: i32) -> Result<[u32; 12]> {
    Ok([
        31,
        if is_leap_year(year)? { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ])
}

/// 1-based day of year for a calendar date.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<i32> {
    if year < 0 {
        return Err(IrradianceError::NegativeYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| ordinal_day(&date))
        .ok_or(IrradianceError::InvalidDate { year, month, day })
}

pub fn ordinal_day<D: Datelike>(date: &D) -> i32 {
    date.ordinal() as i32
}
