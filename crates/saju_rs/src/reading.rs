//! Full reading assembly: validate input, resolve the chart, derive the rest.

use saju_base::{
    BirthTime, Chart, ChartRelations, DaewoonConfig, DaewoonSequence, Element, Gender,
    RadialPlacement, ZodiacSign, chart_relations, daewoon_for_chart, radial_placement,
    resolve_chart, sun_longitude_for_date, zodiac_sign_for_date,
};
use tracing::debug;

use crate::error::SajuError;
use crate::input::{BirthInput, CalendarSystem, LunarConverter, LunarDate, NoLunarConverter};

/// Parameters for [`reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingConfig {
    pub daewoon: DaewoonConfig,
}

/// Everything derived from one birth input.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub name: String,
    /// Gregorian birth moment the chart was resolved from.
    pub birth: BirthTime,
    /// Lunar date as entered, when the input was lunar.
    pub lunar_source: Option<LunarDate>,
    pub gender: Gender,
    pub chart: Chart,
    pub relations: ChartRelations,
    pub daewoon: DaewoonSequence,
    pub zodiac: ZodiacSign,
    /// Approximate sun longitude in degrees, [0, 360).
    pub sun_longitude_deg: f64,
    pub placement: RadialPlacement,
}

impl Reading {
    /// Element of the day master.
    pub fn self_element(&self) -> Element {
        self.chart.self_element()
    }
}

/// Build a reading from solar input. Lunar input fails with
/// [`SajuError::LunarUnsupported`].
pub fn reading(input: &BirthInput, config: &ReadingConfig) -> Result<Reading, SajuError> {
    reading_with_converter(input, config, &NoLunarConverter)
}

/// Build a reading, converting lunar input with `converter`.
pub fn reading_with_converter<C: LunarConverter>(
    input: &BirthInput,
    config: &ReadingConfig,
    converter: &C,
) -> Result<Reading, SajuError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(SajuError::EmptyName);
    }
    let gender: Gender = input.gender.parse()?;

    let (birth, lunar_source) = match input.calendar {
        CalendarSystem::Solar => (
            BirthTime::new(input.year, input.month, input.day, input.hour)?,
            None,
        ),
        CalendarSystem::Lunar { leap_month } => {
            if !converter.is_available() {
                return Err(SajuError::LunarUnsupported);
            }
            let (y, m, d) = converter
                .to_solar(input.year, input.month, input.day, leap_month)
                .map_err(|e| {
                    debug!(error = %e, "lunar conversion failed");
                    SajuError::LunarConversion(Box::new(e))
                })?;
            debug!(
                lunar_year = input.year,
                lunar_month = input.month,
                lunar_day = input.day,
                leap_month,
                solar_year = y,
                solar_month = m,
                solar_day = d,
                "converted lunar date"
            );
            let source = LunarDate {
                year: input.year,
                month: input.month,
                day: input.day,
                leap_month,
            };
            (BirthTime::new(y, m, d, input.hour)?, Some(source))
        }
    };

    let chart = resolve_chart(&birth);
    let relations = chart_relations(&chart);
    let daewoon = daewoon_for_chart(&chart, gender, &config.daewoon);
    let zodiac = zodiac_sign_for_date(&birth.date());
    let sun_longitude_deg = sun_longitude_for_date(&birth.date());
    let placement = radial_placement(zodiac, sun_longitude_deg);

    debug!(
        birth = %birth,
        year = %chart.year,
        month = %chart.month,
        day = %chart.day,
        hour = %chart.hour,
        direction = daewoon.direction.name(),
        zodiac = zodiac.name(),
        "resolved reading"
    );

    Ok(Reading {
        name: name.to_string(),
        birth,
        lunar_source,
        gender,
        chart,
        relations,
        daewoon,
        zodiac,
        sun_longitude_deg,
        placement,
    })
}
