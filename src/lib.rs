pub mod calendar;
pub mod error;
pub mod irradiance;
pub mod trig;
pub mod types;

pub use calendar::{day_of_year, days_in_months, days_in_year, is_leap_year, ordinal_day};

pub use error::{IrradianceError, Result};

pub use irradiance::{to_watts_per_square_meter, IrradianceModel};

pub use trig::{
    arccos, arccot, arccsc, arcsec, arcsin, arctan, cos, cot, csc, deg_to_rad, rad_to_deg, sec,
    sin, tan, AngleUnit,
};

pub use types::{
    DailyIrradiance, IrradianceConfig, DECLINATION_AMPLITUDE, DECLINATION_DAY_OFFSET,
    JOULES_PER_MEGAJOULE, RADIATION_SCALE, SECONDS_PER_DAY,
};
