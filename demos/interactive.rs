//! Interactive sun position lookup.
//!
//! Prompts for a UTC date and time plus observer coordinates, then prints the sun's
//! azimuth (0 = south, positive west) and altitude in radians.
//!
//! Run with `cargo run --example interactive`.

use chrono::NaiveDateTime;
use std::io::{self, BufRead, Write};
use sun_calculator::meeus;

fn prompt(lines: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    lines.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    // e.g. 2025-02-11 11:25:18
    let date = prompt(&mut lines, "Enter date and time (in format: 2025-02-11 11:25:18): ")?;
    // e.g. 51.21131496342009 (Bruges)
    let latitude = prompt(&mut lines, "Enter latitude: ")?;
    // e.g. 3.2258847770102235 (Bruges)
    let longitude = prompt(&mut lines, "Enter longitude: ")?;

    let datetime = NaiveDateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S")?.and_utc();
    let position = meeus::solar_position(datetime, latitude.parse()?, longitude.parse()?)?;

    println!(
        "On {date}, at latitude: {latitude} and longitude: {longitude}, the sun is at\n a) azimuth: {} \n b) altitude: {}",
        position.azimuth(),
        position.altitude()
    );

    Ok(())
}
