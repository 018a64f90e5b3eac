//! Worked running fixes shared by the fix and report tests
//!
//! Sights from the 2012-04-14 passage log, with ephemeris values tabulated
//! for the assumed position of each fix.

use chrono::{NaiveDate, NaiveDateTime};

use super::Fix;
use crate::core::EphemerisTarget;
use crate::ephemeris::{ApparentPosition, TabulatedEphemeris};
use crate::reduction::{LineOfPosition, Observer, Sight};

pub(crate) fn ut(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 4, 14)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn observer(lat: f64, lon: f64) -> Observer {
    Observer::new(lat, lon)
        .with_height_of_eye(1.8)
        .unwrap()
        .with_index_error(3.6)
        .with_weather(27.0, 1010.0)
}

fn lop(designator: &str, star: Option<&str>, observer: Observer, hs: f64, at: NaiveDateTime) -> LineOfPosition {
    let mut lop = LineOfPosition::from_designator(designator, star, observer)
        .unwrap()
        .with_sight(Sight::new(hs, at));
    lop.select_sight(0).unwrap();
    lop
}

/// Venus and Canopus before dawn, fix at 01:42 UT
pub(crate) fn scenario_one() -> (Fix, TabulatedEphemeris) {
    let ap = observer(-8.233333333, -105.35);
    let fix = Fix::new(5.5, 260.0, ut(1, 42, 0))
        .with_lop(lop("Venus", None, ap.clone(), 29.11666667, ut(1, 24, 29)))
        .with_lop(lop("star", Some("Canopus"), ap, 41.53333333, ut(1, 29, 21)));

    let mut table = TabulatedEphemeris::new("almanac");
    table.insert(
        EphemerisTarget::from_name("Venus").unwrap(),
        ut(1, 24, 29),
        ApparentPosition::new(29.192177286215557, 306.04014953),
    );
    table.insert(
        EphemerisTarget::from_name("Canopus").unwrap(),
        ut(1, 29, 21),
        ApparentPosition::new(41.58784706366889, 198.89034115),
    );
    (fix, table)
}

/// Moon lower limb and Rigil Kentaurus, fix at 12:45 UT
pub(crate) fn scenario_two() -> (Fix, TabulatedEphemeris) {
    let ap = observer(-8.316666667, -106.3666667);
    let fix = Fix::new(6.0, 260.0, ut(12, 45, 0))
        .with_lop(lop("Moon LL", None, ap.clone(), 66.49333333, ut(12, 39, 48)))
        .with_lop(lop("star", Some("Rigil Kentaurus"), ap, 19.58333333, ut(12, 31, 53)));

    let mut table = TabulatedEphemeris::new("almanac");
    table.insert(
        EphemerisTarget::Moon,
        ut(12, 39, 48),
        ApparentPosition::new(66.72632602933723, 105.870957909).with_radius(0.2555),
    );
    table.insert(
        EphemerisTarget::from_name("Rigil Kentaurus").unwrap(),
        ut(12, 31, 53),
        ApparentPosition::new(19.50331830702622, 207.774381873),
    );
    (fix, table)
}
