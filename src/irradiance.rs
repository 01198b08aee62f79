use chrono::Datelike;
use tracing::{debug, trace};

use crate::calendar;
use crate::error::{IrradianceError, Result};
use crate::trig::{self, AngleUnit};
use crate::types::{
    DailyIrradiance, IrradianceConfig, DECLINATION_AMPLITUDE, DECLINATION_DAY_OFFSET,
    JOULES_PER_MEGAJOULE, RADIATION_SCALE, SECONDS_PER_DAY,
};

/// Converts a daily radiation total in MJ/m² to a mean flux in W/m².
pub fn to_watts_per_square_meter(mj_per_m2: f64) -> f64 {
    mj_per_m2 * JOULES_PER_MEGAJOULE / SECONDS_PER_DAY
}

/// Daily solar geometry and top-of-atmosphere radiation for one latitude and year.
///
/// Immutable once built. Every query validates the day of year and
/// recomputes its inputs, so a model can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceModel {
    latitude: f64,
    year: i32,
    days_in_year: i32,
}

impl IrradianceModel {
    /// Builds a model for `latitude` (degrees, [-90, 90]) in `year`.
    pub fn new(latitude: f64, year: i32) -> Result<Self> {
        // NaN fails the range check too.
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(IrradianceError::InvalidLatitude { latitude });
        }
        let days_in_year = calendar::days_in_year(year)?;
        debug!(latitude, year, days_in_year, "irradiance model ready");
        Ok(Self {
            latitude,
            year,
            days_in_year,
        })
    }

    pub fn from_config(config: &IrradianceConfig) -> Result<Self> {
        Self::new(config.latitude, config.year)
    }

    /// Model for the year `date` falls in.
    pub fn for_date<D: Datelike>(latitude: f64, date: &D) -> Result<Self> {
        Self::new(latitude, date.year())
    }

    pub fn config(&self) -> IrradianceConfig {
        IrradianceConfig {
            latitude: self.latitude,
            year: self.year,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days_in_year(&self) -> i32 {
        self.days_in_year
    }

    fn check_day(&self, day_of_year: i32) -> Result<()> {
        if day_of_year < 1 || day_of_year > self.days_in_year {
            debug!(day_of_year, days_in_year = self.days_in_year, "day of year rejected");
            return Err(IrradianceError::DayOfYearOutOfRange {
                day_of_year,
                days_in_year: self.days_in_year,
            });
        }
        Ok(())
    }

    /// Solar declination in degrees.
    pub fn declination_angle(&self, day_of_year: i32) -> Result<f64> {
        self.check_day(day_of_year)?;
        let angle = (360.0 / self.days_in_year as f64)
            * (DECLINATION_DAY_OFFSET + day_of_year) as f64;
        Ok(DECLINATION_AMPLITUDE * trig::sin(angle, AngleUnit::Degrees))
    }

    /// Sunset hour angle in degrees.
    ///
    /// NaN during polar day or night, where `-tan(φ)·tan(δ)` leaves [-1, 1].
    pub fn sunset_hour_angle(&self, day_of_year: i32) -> Result<f64> {
        self.check_day(day_of_year)?;
        let delta = self.declination_angle(day_of_year)?;
        let cos_h = -trig::tan(self.latitude, AngleUnit::Degrees)
            * trig::tan(delta, AngleUnit::Degrees);
        Ok(trig::arccos(cos_h, AngleUnit::Degrees))
    }

    /// Earth-Sun distance factor. The day angle is built directly in radians.
    pub fn earth_sun_distance(&self, day_of_year: i32) -> Result<f64> {
        self.check_day(day_of_year)?;
        let x = 2.0 * std::f64::consts::PI * (day_of_year - 1) as f64 / self.days_in_year as f64;
        let r = AngleUnit::Radians;
        Ok(1.000110
            + 0.34221 * trig::cos(x, r)
            + 0.01280 * trig::sin(x, r)
            + 0.000719 * trig::cos(2.0 * x, r)
            + 0.000077 * trig::sin(2.0 * x, r))
    }

    /// Daily extraterrestrial radiation in MJ/m².
    pub fn extraterrestrial_solar_radiation(&self, day_of_year: i32) -> Result<f64> {
        self.check_day(day_of_year)?;
        let delta = self.declination_angle(day_of_year)?;
        let e0 = self.earth_sun_distance(day_of_year)?;
        let h = self.sunset_hour_angle(day_of_year)?;
        trace!(day_of_year, delta, e0, h, "radiation inputs");

        let d = AngleUnit::Degrees;
        // The leading hour-angle factor is an arc length and must be in radians.
        let first_term = trig::deg_to_rad(h)
            * trig::sin(self.latitude, d)
            * trig::sin(delta, d);
        let second_term = trig::cos(self.latitude, d) * trig::cos(delta, d) * trig::sin(h, d);
        Ok(RADIATION_SCALE * e0 * (first_term + second_term))
    }

    pub fn daily_irradiance(&self, day_of_year: i32) -> Result<DailyIrradiance> {
        let radiation = self.extraterrestrial_solar_radiation(day_of_year)?;
        Ok(DailyIrradiance {
            day_of_year,
            declination: self.declination_angle(day_of_year)?,
            sunset_hour_angle: self.sunset_hour_angle(day_of_year)?,
            earth_sun_distance: self.earth_sun_distance(day_of_year)?,
            extraterrestrial_radiation: radiation,
            extraterrestrial_radiation_w_m2: to_watts_per_square_meter(radiation),
        })
    }
}
