use chrono::NaiveDate;
use solar_irradiance::calendar::*;
use solar_irradiance::IrradianceError;

// ── Leap years ──

#[test]
fn test_leap_year_known_years() {
    assert_eq!(is_leap_year(2000), Ok(true));
    assert_eq!(is_leap_year(1900), Ok(false));
    assert_eq!(is_leap_year(2024), Ok(true));
    assert_eq!(is_leap_year(2023), Ok(false));
    assert_eq!(is_leap_year(0), Ok(true));
}

#[test]
fn test_leap_year_rejects_negative() {
    assert_eq!(
        is_leap_year(-4),
        Err(IrradianceError::NegativeYear { year: -4 })
    );
    assert!(days_in_year(-1).is_err());
    assert!(days_in_months(-1).is_err());
}

#[test]
fn test_days_in_year() {
    assert_eq!(days_in_year(2021), Ok(365));
    assert_eq!(days_in_year(2020), Ok(366));
}

#[test]
fn test_days_in_months_sum_to_year() {
    for year in [1900, 2000, 2023, 2024] {
        let total: u32 = days_in_months(year).unwrap().iter().sum();
        assert_eq!(total as i32, days_in_year(year).unwrap(), "year {}", year);
    }
    assert_eq!(days_in_months(2024).unwrap()[1], 29);
    assert_eq!(days_in_months(2023).unwrap()[1], 28);
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1), Ok(1));
    assert_eq!(day_of_year(2026, 3, 21), Ok(80));
    assert_eq!(day_of_year(2026, 6, 21), Ok(172));
    assert_eq!(day_of_year(2026, 12, 31), Ok(365));
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(2024, 2, 29), Ok(60));
    assert_eq!(day_of_year(2024, 3, 1), Ok(61));
    assert_eq!(day_of_year(2024, 12, 31), Ok(366));
}

#[test]
fn test_first_day_of_each_month_non_leap() {
    let expected = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
    for (i, &exp) in expected.iter().enumerate() {
        let month = i as u32 + 1;
        assert_eq!(day_of_year(2026, month, 1), Ok(exp), "Month {}", month);
    }
}

#[test]
fn test_day_of_year_invalid_dates() {
    assert_eq!(
        day_of_year(2023, 2, 29),
        Err(IrradianceError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29
        })
    );
    assert!(day_of_year(2024, 13, 1).is_err());
    assert!(day_of_year(2024, 4, 31).is_err());
    assert_eq!(
        day_of_year(-10, 1, 1),
        Err(IrradianceError::NegativeYear { year: -10 })
    );
}

#[test]
fn test_invalid_date_message() {
    let err = day_of_year(2023, 2, 30).unwrap_err();
    assert_eq!(err.to_string(), "no such calendar date 2023-02-30");
}

#[test]
fn test_ordinal_day_from_chrono_date() {
    let date = NaiveDate::from_ymd_opt(1900, 12, 31).unwrap();
    assert_eq!(ordinal_day(&date), 365);
}
