#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use sunrise_sunset::{calc, solar_noon, CalculationError, Coordinate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Caledonia, MI
    let coordinate = Coordinate::new(42.7892, -85.5167)?;
    let eastern = chrono_tz::America::Detroit;

    let now_timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| "System time is before Unix epoch")?
        .as_secs() as i64;
    let today = Utc
        .timestamp_opt(now_timestamp, 0)
        .single()
        .ok_or("Invalid timestamp")?;

    println!("Sunrise-Sunset Example - Caledonia, MI");
    println!(
        "Location: {:.4}°N, {:.4}°W",
        coordinate.latitude,
        coordinate.longitude.abs()
    );
    println!("Date: {}", today.format("%B %d, %Y"));
    println!("{:=<50}", "");

    match calc(today.naive_utc(), coordinate) {
        Ok(events) => {
            let sunrise = Utc.from_utc_datetime(&events.sunrise).with_timezone(&eastern);
            let sunset = Utc.from_utc_datetime(&events.sunset).with_timezone(&eastern);
            println!("Sunrise: {}", sunrise.format("%H:%M:%S %Z"));
            println!("Sunset:  {}", sunset.format("%H:%M:%S %Z"));

            let day_length = events.day_length();
            println!(
                "Day length: {}h {:02}m {:02}s",
                day_length.num_hours(),
                day_length.num_minutes() % 60,
                day_length.num_seconds() % 60
            );
        }
        Err(CalculationError::PolarDay) => println!("Sun never sets today (midnight sun)"),
        Err(CalculationError::PolarNight) => println!("Sun never rises today (polar night)"),
        Err(e) => return Err(e.into()),
    }

    let noon = solar_noon(today.naive_utc(), coordinate)?;
    let noon_local = Utc.from_utc_datetime(&noon).with_timezone(&eastern);
    println!("Solar noon: {}", noon_local.format("%H:%M:%S %Z"));

    Ok(())
}
