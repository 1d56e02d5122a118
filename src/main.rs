use csv::Writer;
use hifitime::Unit;
use log::{info, warn};
use orbitcore::coordinates::{Geodetic, Site};
use orbitcore::Satellite;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

const ISS_NAME: &str = "ISS (ZARYA)";
const ISS_LINE_1: &str = "1 25544U 98067A   19343.69339541  .00001764  00000-0  38792-4 0  9991";
const ISS_LINE_2: &str = "2 25544  51.6439 211.2001 0007417  17.6667  85.6398 15.50103472202482";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let satellite = Satellite::from_lines(&[ISS_NAME, ISS_LINE_1, ISS_LINE_2], None)?;
    info!(
        "Loaded {} ({}), epoch {}, period {:.2} min",
        satellite.name(),
        satellite.catalog_number(),
        satellite.epoch_string(),
        satellite.period_minutes()
    );

    // Ground station in Washington, DC
    let site = Site::from_degrees(38.8895, -77.0353, 0.02);

    // Two days at one-minute spacing
    let step = 1.0 * Unit::Minute;
    let states = satellite.ephemeris(satellite.epoch(), step, 2 * 1440 + 1);

    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("ephemeris.csv"))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([
        "UTC Time",
        "Minutes Since Epoch",
        "Position X (km)",
        "Position Y (km)",
        "Position Z (km)",
        "Velocity X (km/s)",
        "Velocity Y (km/s)",
        "Velocity Z (km/s)",
        "Latitude (deg)",
        "Longitude (deg)",
        "Altitude (km)",
        "Azimuth (deg)",
        "Elevation (deg)",
        "Range (km)",
    ])?;

    let mut visible = 0;
    for state in states {
        let state = match state {
            Ok(state) => state,
            Err(err) => {
                warn!("Skipping sample: {}", err);
                continue;
            }
        };
        let geodetic = Geodetic::from_eci(&state);
        let look = site.look_angle(&state);
        if look.is_visible() {
            visible += 1;
        }

        writer.write_record(&[
            state.julian_date.to_string(),
            state.minutes_since_epoch.to_string(),
            state.position.x.to_string(),
            state.position.y.to_string(),
            state.position.z.to_string(),
            state.velocity.x.to_string(),
            state.velocity.y.to_string(),
            state.velocity.z.to_string(),
            geodetic.latitude_deg().to_string(),
            geodetic.longitude_deg().to_string(),
            geodetic.altitude_km.to_string(),
            look.azimuth_deg().to_string(),
            look.elevation_deg().to_string(),
            look.range_km.to_string(),
        ])?;
    }

    writer.flush()?;
    info!("{} samples above the site horizon", visible);
    println!("Ephemeris written to {}", output_dir.join("ephemeris.csv").display());
    Ok(())
}
