//! Daewoon sequence generation.

use crate::ganji::{Pillar, Stem};
use crate::pillars::Chart;

use super::types::{
    DECADE_YEARS, DaewoonConfig, DaewoonEntry, DaewoonSequence, Direction, FIRST_AGE, Gender,
};

/// Forward iff the year stem's polarity matches the gender (yang/male,
/// yin/female).
pub fn daewoon_direction(year_stem: Stem, gender: Gender) -> Direction {
    match (year_stem.is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// Generate the sequence starting one step past `month`.
///
/// Entry `i` (1-based) is `month` stepped `i` times in the chosen
/// direction, labelled with age `4 + (i - 1) * 10`.
pub fn daewoon_sequence(
    year_stem: Stem,
    month: Pillar,
    gender: Gender,
    config: &DaewoonConfig,
) -> DaewoonSequence {
    let direction = daewoon_direction(year_stem, gender);
    let n = config.length.count();
    let mut entries = Vec::with_capacity(n);
    let mut cursor = month;

    for i in 0..n as u16 {
        cursor = cursor.step(direction.step());
        entries.push(DaewoonEntry {
            order: i + 1,
            start_age: FIRST_AGE + i * DECADE_YEARS,
            pillar: cursor,
        });
    }

    DaewoonSequence { direction, entries }
}

/// Generate the sequence for a resolved chart.
pub fn daewoon_for_chart(chart: &Chart, gender: Gender, config: &DaewoonConfig) -> DaewoonSequence {
    daewoon_sequence(chart.year.stem, chart.month, gender, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daewoon::types::DaewoonLength;
    use crate::ganji::Branch;

    #[test]
    fn direction_truth_table() {
        assert_eq!(daewoon_direction(Stem::Gap, Gender::Male), Direction::Forward);
        assert_eq!(daewoon_direction(Stem::Gap, Gender::Female), Direction::Backward);
        assert_eq!(daewoon_direction(Stem::Eul, Gender::Male), Direction::Backward);
        assert_eq!(daewoon_direction(Stem::Eul, Gender::Female), Direction::Forward);
    }

    #[test]
    fn first_entry_is_one_step_from_month() {
        let month = Pillar::new(Stem::Byeong, Branch::In);
        let seq = daewoon_sequence(Stem::Gap, month, Gender::Male, &DaewoonConfig::default());
        assert_eq!(seq.entries[0].pillar, Pillar::new(Stem::Jeong, Branch::Myo));
        assert_eq!(seq.entries[0].start_age, 4);
        assert_eq!(seq.entries[0].order, 1);
    }

    #[test]
    fn backward_wraps_below_zero() {
        let month = Pillar::new(Stem::Gap, Branch::Ja);
        let seq = daewoon_sequence(Stem::Gap, month, Gender::Female, &DaewoonConfig::default());
        assert_eq!(seq.direction, Direction::Backward);
        assert_eq!(seq.entries[0].pillar, Pillar::new(Stem::Gye, Branch::Hae));
    }

    #[test]
    fn ages_step_by_decade() {
        let month = Pillar::new(Stem::Gap, Branch::In);
        let seq = daewoon_sequence(Stem::Gap, month, Gender::Male, &DaewoonConfig::default());
        let ages: Vec<u16> = seq.entries.iter().map(|e| e.start_age).collect();
        assert_eq!(ages, vec![4, 14, 24, 34, 44, 54, 64, 74, 84]);
    }

    #[test]
    fn compact_has_eight() {
        let config = DaewoonConfig {
            length: DaewoonLength::Compact,
        };
        let month = Pillar::new(Stem::Gap, Branch::In);
        let seq = daewoon_sequence(Stem::Gap, month, Gender::Male, &config);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.entries.last().map(|e| e.start_age), Some(74));
    }

    #[test]
    fn active_entry_lookup() {
        let month = Pillar::new(Stem::Gap, Branch::In);
        let seq = daewoon_sequence(Stem::Gap, month, Gender::Male, &DaewoonConfig::default());
        assert!(seq.active_entry(3).is_none());
        assert_eq!(seq.active_entry(4).map(|e| e.order), Some(1));
        assert_eq!(seq.active_entry(13).map(|e| e.order), Some(1));
        assert_eq!(seq.active_entry(14).map(|e| e.order), Some(2));
        assert_eq!(seq.active_entry(93).map(|e| e.order), Some(9));
        assert!(seq.active_entry(94).is_none());
    }
}
