//! Regression tests for the four-pillar resolver.
//!
//! Expected values are fixed index pairs (stem, branch) produced by the
//! 1900-01-01 epoch formulas.

use saju_base::{
    ALL_STEMS, BirthTime, Branch, CivilDate, Pillar, Stem, chart_from_calendar, day_pillar,
    month_pillar, resolve_chart,
};

fn idx(p: Pillar) -> (u8, u8) {
    (p.stem.index(), p.branch.index())
}

// ---------------------------------------------------------------------------
// Whole-chart golden values
// ---------------------------------------------------------------------------

#[test]
fn chart_1990_01_15_14h() {
    let chart = chart_from_calendar(1990, 1, 15, 14).unwrap();
    assert_eq!(idx(chart.year), (6, 6)); // 庚午
    assert_eq!(idx(chart.month), (3, 2)); // 丁寅
    assert_eq!(idx(chart.day), (6, 4)); // 庚辰
    assert_eq!(idx(chart.hour), (9, 7)); // 癸未
    assert_eq!(chart.day.hanja(), "庚辰");
}

#[test]
fn chart_golden_table() {
    // (y, m, d, h) → [year, month, day, hour]
    let cases: [((i32, u32, u32, u32), [(u8, u8); 4]); 5] = [
        ((2000, 1, 1, 0), [(6, 4), (3, 2), (4, 6), (8, 0)]),
        ((2024, 2, 29, 23), [(0, 4), (2, 3), (9, 11), (8, 0)]),
        ((1984, 6, 15, 7), [(0, 0), (6, 7), (6, 4), (6, 4)]),
        ((1900, 1, 1, 12), [(6, 0), (3, 2), (0, 10), (6, 6)]),
        ((1850, 3, 3, 3), [(6, 10), (5, 4), (9, 1), (0, 2)]),
    ];
    for ((y, m, d, h), expected) in cases {
        let chart = chart_from_calendar(y, m, d, h).unwrap();
        let got = [
            idx(chart.year),
            idx(chart.month),
            idx(chart.day),
            idx(chart.hour),
        ];
        assert_eq!(got, expected, "{y}-{m}-{d} {h}h");
    }
}

#[test]
fn y2k_day_is_mu_o() {
    let chart = chart_from_calendar(2000, 1, 1, 12).unwrap();
    assert_eq!(chart.day, Pillar::new(Stem::Mu, Branch::O));
}

// ---------------------------------------------------------------------------
// Month-stem rotation table
// ---------------------------------------------------------------------------

#[test]
fn month_stem_rotation_all_year_stems() {
    // Rows keyed by year-stem index, columns Jan..Dec.
    let table: [[u8; 12]; 10] = [
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2],
        [3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4],
        [5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6],
        [7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8],
        [9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0],
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2],
        [3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4],
        [5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6],
        [7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8],
        [9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0],
    ];
    for stem in ALL_STEMS {
        for month in 1..=12u32 {
            let got = month_pillar(stem, month).stem.index();
            let want = table[stem.index() as usize][(month - 1) as usize];
            assert_eq!(got, want, "year stem {} month {month}", stem.hanja());
        }
    }
}

#[test]
fn month_branch_independent_of_year() {
    for stem in ALL_STEMS {
        for month in 1..=12u32 {
            assert_eq!(
                month_pillar(stem, month).branch.index() as u32,
                (month + 1) % 12
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Day-pillar periodicity
// ---------------------------------------------------------------------------

#[test]
fn consecutive_days_advance_by_one() {
    let mut date = CivilDate::new(1899, 11, 1).unwrap();
    let mut prev = resolve_chart(&BirthTime::from_date(date, 0).unwrap()).day;
    for _ in 0..2000 {
        date = date.succ().unwrap();
        let day = resolve_chart(&BirthTime::from_date(date, 0).unwrap()).day;
        assert_eq!(day.stem, prev.stem.step(1), "stem at {date}");
        assert_eq!(day.branch, prev.branch.step(1), "branch at {date}");
        prev = day;
    }
}

#[test]
fn day_pillar_depends_only_on_day_count() {
    let a = CivilDate::new(1950, 5, 17).unwrap();
    let b = CivilDate::new(2031, 8, 2).unwrap();
    let diff = b.days_since_epoch() - a.days_since_epoch();
    let pa = day_pillar(a.days_since_epoch());
    let pb = day_pillar(b.days_since_epoch());
    assert_eq!(pb.stem, pa.stem.step(diff));
    assert_eq!(pb.branch, pa.branch.step(diff));
}

#[test]
fn day_pillar_repeats_every_sixty_days() {
    for n in -120..120i64 {
        assert_eq!(day_pillar(n), day_pillar(n + 60));
    }
}

// ---------------------------------------------------------------------------
// Totality
// ---------------------------------------------------------------------------

#[test]
fn resolver_is_total_over_a_leap_year() {
    let mut date = CivilDate::new(2024, 1, 1).unwrap();
    loop {
        for hour in 0..24 {
            let birth = BirthTime::from_date(date, hour).unwrap();
            let chart = resolve_chart(&birth);
            assert_eq!(chart.pillars().len(), 4);
        }
        match date.succ() {
            Some(next) if next.year() == 2024 => date = next,
            _ => break,
        }
    }
}
