//! Running fix from a Venus and a Canopus sight
//!
//! Run with `cargo run --example running_fix`. The same sights as a JSON
//! session are in `demos/scenario_one.json`:
//! `cargo run -- demos/scenario_one.json`.

use celnav::api::{ReductionReport, TextFormatter};
use celnav::ephemeris::{ApparentPosition, TabulatedEphemeris};
use celnav::{EphemerisTarget, Fix, LineOfPosition, NavResult, Observer, Sight};
use chrono::{NaiveDate, NaiveDateTime};

fn ut(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 4, 14)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid log time")
}

fn main() -> NavResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ap = Observer::new(-8.233333333, -105.35)
        .with_height_of_eye(1.8)?
        .with_index_error(3.6)
        .with_weather(27.0, 1010.0);

    let mut venus = LineOfPosition::from_designator("Venus", None, ap.clone())?
        .with_sight(Sight::new(29.11666667, ut(1, 24, 29)));
    venus.select_sight(0)?;

    let mut canopus = LineOfPosition::from_designator("star", Some("Canopus"), ap)?
        .with_sight(Sight::new(41.53333333, ut(1, 29, 21)));
    canopus.select_sight(0)?;

    // Almanac altitudes and azimuths for the assumed position
    let mut almanac = TabulatedEphemeris::new("almanac");
    almanac.insert(
        EphemerisTarget::from_name("Venus")?,
        ut(1, 24, 29),
        ApparentPosition::new(29.192177286215557, 306.04014953),
    );
    almanac.insert(
        EphemerisTarget::from_name("Canopus")?,
        ut(1, 29, 21),
        ApparentPosition::new(41.58784706366889, 198.89034115),
    );

    let mut fix = Fix::new(5.5, 260.0, ut(1, 42, 0))
        .with_lop(venus)
        .with_lop(canopus);
    fix.reduce_lops(&almanac)?;
    let solution = fix.solve_two_lop_fix()?;

    let report = ReductionReport::new(&fix, Some(solution));
    println!("{}", TextFormatter::new().format_text(&report));
    Ok(())
}
