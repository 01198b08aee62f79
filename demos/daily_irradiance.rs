use chrono::TimeZone;
use chrono_tz::America::Chicago;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use solar_irradiance::{ordinal_day, IrradianceModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let latitude = 39.8;
    let dt = Chicago.with_ymd_and_hms(2026, 6, 21, 12, 0, 0).unwrap();
    let date = dt.date_naive();

    let model = IrradianceModel::for_date(latitude, &date)?;
    let day = model.daily_irradiance(ordinal_day(&date))?;

    println!("=== Extraterrestrial Radiation Example ===");
    println!("Location: Springfield, IL ({:.1}°N)", latitude);
    println!("Date: {} ({} days in year)", date, model.days_in_year());
    println!();
    println!("Day of year: {}", day.day_of_year);
    println!("Declination: {:.2}°", day.declination);
    println!("Sunset hour angle: {:.2}°", day.sunset_hour_angle);
    println!("Earth-Sun distance factor: {:.5}", day.earth_sun_distance);
    println!(
        "Extraterrestrial radiation: {:.2} MJ/m² ({:.1} W/m²)",
        day.extraterrestrial_radiation, day.extraterrestrial_radiation_w_m2
    );
    Ok(())
}
