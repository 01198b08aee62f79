use serde::{Deserialize, Serialize};

/// Amplitude of the declination approximation, in degrees.
pub const DECLINATION_AMPLITUDE: f64 = 23.45;
/// Offset added to the day of year in the declination formula.
pub const DECLINATION_DAY_OFFSET: i32 = 284;
/// 24*60/π times the solar constant in MJ m⁻² min⁻¹.
pub const RADIATION_SCALE: f64 = 37.60;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const JOULES_PER_MEGAJOULE: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrradianceConfig {
    pub latitude: f64,
    pub year: i32,
}

impl Default for IrradianceConfig {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            year: 2026,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyIrradiance {
    pub day_of_year: i32,
    pub declination: f64,
    pub sunset_hour_angle: f64,
    pub earth_sun_distance: f64,
    pub extraterrestrial_radiation: f64,
    pub extraterrestrial_radiation_w_m2: f64,
}
