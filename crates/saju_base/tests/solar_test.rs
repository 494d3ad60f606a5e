//! Sun-longitude approximation properties.

use saju_base::{
    DEGREES_PER_DAY, ZodiacSign, approximate_sun_longitude, radial_placement, zodiac_sign,
};
use saju_time::days_in_month;

fn common_year_days() -> Vec<(u32, u32)> {
    let mut out = Vec::with_capacity(365);
    for m in 1..=12u32 {
        for d in 1..=days_in_month(2001, m).unwrap() {
            out.push((m, d));
        }
    }
    out
}

#[test]
fn equinox_is_zero_degrees() {
    let lon = approximate_sun_longitude(3, 20).unwrap();
    assert!(lon.abs() < 1e-12);
}

#[test]
fn always_in_range() {
    for (m, d) in common_year_days() {
        let lon = approximate_sun_longitude(m, d).unwrap();
        assert!((0.0..360.0).contains(&lon), "{m}/{d}: {lon}");
    }
    let leap = approximate_sun_longitude(2, 29).unwrap();
    assert!((0.0..360.0).contains(&leap));
}

#[test]
fn monotonic_except_single_wrap() {
    let days = common_year_days();
    let lons: Vec<f64> = days
        .iter()
        .map(|(m, d)| approximate_sun_longitude(*m, *d).unwrap())
        .collect();
    // Include the Dec 31 → Jan 1 transition.
    let mut drops = Vec::new();
    for i in 0..lons.len() {
        let next = (i + 1) % lons.len();
        if lons[next] <= lons[i] {
            drops.push(days[next]);
        } else {
            assert!((lons[next] - lons[i] - DEGREES_PER_DAY).abs() < 1e-9);
        }
    }
    assert_eq!(drops, vec![(3, 20)]);
}

#[test]
fn year_end_is_continuous() {
    let dec31 = approximate_sun_longitude(12, 31).unwrap();
    let jan1 = approximate_sun_longitude(1, 1).unwrap();
    assert!((jan1 - dec31 - DEGREES_PER_DAY).abs() < 1e-9);
}

#[test]
fn leap_day_matches_march_first() {
    assert_eq!(
        approximate_sun_longitude(2, 29),
        approximate_sun_longitude(3, 1)
    );
}

#[test]
fn placement_for_capricorn_birthday() {
    let sign = zodiac_sign(1, 15).unwrap();
    assert_eq!(sign, ZodiacSign::Capricorn);
    let lon = approximate_sun_longitude(1, 15).unwrap();
    let p = radial_placement(sign, lon);
    assert_eq!(p.segment_index, 9);
    assert!((p.segment_center_deg - 285.0).abs() < 1e-12);
    // (15 - 79 + 365) days past the equinox
    assert!((p.sun_marker_deg - 301.0 * DEGREES_PER_DAY).abs() < 1e-9);
}
