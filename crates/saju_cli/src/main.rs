use clap::{Parser, Subcommand};
use saju_base::{
    ALL_ELEMENTS, Chart, ChartRelations, DaewoonConfig, DaewoonSequence, Element, Gender, Pillar,
    SlotRelation, approximate_sun_longitude, chart_relations, classify, daewoon_for_chart,
    radial_placement, resolve_chart, zodiac_sign,
};
use saju_rs::{BirthInput, ReadingConfig, reading};
use saju_time::{BirthTime, CivilDate};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (Saju) CLI")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth date and hour
    Chart {
        /// Gregorian date (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Clock hour (0-23)
        hour: u32,
    },
    /// Ten Relations of every chart slot against the day master
    Relations {
        /// Gregorian date (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Clock hour (0-23)
        hour: u32,
    },
    /// Daewoon (decade luck) sequence
    Daewoon {
        /// Gregorian date (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Gender token (male/female, m/f, 남자/여자)
        #[arg(long)]
        gender: String,
        /// Emit 8 entries instead of 9
        #[arg(long)]
        compact: bool,
    },
    /// Western sun sign for a date
    Zodiac {
        /// Date (YYYYMMDD or YYYY-MM-DD); the year is ignored
        date: String,
    },
    /// Approximate sun longitude and chart placement for a date
    Sun {
        /// Date (YYYYMMDD or YYYY-MM-DD); the year is ignored
        date: String,
    },
    /// Relation class of one element against a self element
    Relation {
        /// Self element (Wood, Fire, Earth, Metal, Water, or 木火土金水)
        self_element: String,
        /// Other element
        other: String,
    },
    /// Complete reading
    Reading {
        /// Name shown on the reading
        #[arg(long)]
        name: String,
        /// Gender token (male/female, m/f, 남자/여자)
        #[arg(long)]
        gender: String,
        /// Gregorian date (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Clock hour (0-23)
        hour: u32,
        /// Emit 8 Daewoon entries instead of 9
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart { date, hour } => {
            let birth = require_birth(&date, hour);
            let chart = resolve_chart(&birth);
            debug!(birth = %birth, "resolved chart");
            print_chart(&chart);
        }

        Commands::Relations { date, hour } => {
            let chart = resolve_chart(&require_birth(&date, hour));
            print_chart(&chart);
            println!();
            print_relations(&chart_relations(&chart));
        }

        Commands::Daewoon {
            date,
            gender,
            compact,
        } => {
            let birth = require_birth(&date, 0);
            let gender = require_gender(&gender);
            let chart = resolve_chart(&birth);
            print_daewoon(&daewoon_for_chart(&chart, gender, &daewoon_config(compact)));
        }

        Commands::Zodiac { date } => {
            let (_, month, day) = require_date_fields(&date);
            let sign = zodiac_sign(month, day).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("{} ({}) - {}", sign.name(), sign.korean(), sign.keyword());
        }

        Commands::Sun { date } => {
            let (_, month, day) = require_date_fields(&date);
            let (sign, lon) = match (zodiac_sign(month, day), approximate_sun_longitude(month, day))
            {
                (Ok(sign), Ok(lon)) => (sign, lon),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            let p = radial_placement(sign, lon);
            println!("Sun longitude: {:.4} deg (approximate)", lon);
            println!(
                "Segment: {} (index {}, centre {:.1} deg)",
                p.sign.name(),
                p.segment_index,
                p.segment_center_deg
            );
        }

        Commands::Relation {
            self_element,
            other,
        } => {
            let a = parse_element(&self_element);
            let b = parse_element(&other);
            let class = classify(a, b);
            println!("{} -> {}: {} ({})", a, b, class.name(), class.korean());
        }

        Commands::Reading {
            name,
            gender,
            date,
            hour,
            compact,
        } => {
            let (year, month, day) = require_date_fields(&date);
            let input = BirthInput::new(name, gender, year, month, day, hour);
            let config = ReadingConfig {
                daewoon: daewoon_config(compact),
            };
            let r = reading(&input, &config).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });

            println!("Name:    {}", r.name);
            println!("Birth:   {}", r.birth);
            println!("Gender:  {}", r.gender);
            let el = r.self_element();
            println!("Self:    {} {} ({})", el.hanja(), el.name(), el.korean());
            println!();
            print_chart(&r.chart);
            println!();
            print_relations(&r.relations);
            println!();
            print_daewoon(&r.daewoon);
            println!();
            println!(
                "Zodiac:  {} ({}) - {}",
                r.zodiac.name(),
                r.zodiac.korean(),
                r.zodiac.keyword()
            );
            println!(
                "Sun:     {:.4} deg (segment {}, centre {:.1} deg)",
                r.sun_longitude_deg, r.placement.segment_index, r.placement.segment_center_deg
            );
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn daewoon_config(compact: bool) -> DaewoonConfig {
    if compact {
        DaewoonConfig::compact()
    } else {
        DaewoonConfig::default()
    }
}

/// Parse `YYYYMMDD` or `YYYY-MM-DD` into raw fields (not range-checked).
fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let s = s.trim();
    let (y, m, d) = if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        (&s[0..4], &s[4..6], &s[6..8])
    } else {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(format!("expected YYYYMMDD or YYYY-MM-DD, got {s}"));
        }
        (parts[0], parts[1], parts[2])
    };
    let year: i32 = y.parse().map_err(|e| format!("year {y:?}: {e}"))?;
    let month: u32 = m.parse().map_err(|e| format!("month {m:?}: {e}"))?;
    let day: u32 = d.parse().map_err(|e| format!("day {d:?}: {e}"))?;
    Ok((year, month, day))
}

fn require_date_fields(s: &str) -> (i32, u32, u32) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_birth(date: &str, hour: u32) -> BirthTime {
    let (year, month, day) = require_date_fields(date);
    let date = CivilDate::new(year, month, day).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    BirthTime::from_date(date, hour).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_element(s: &str) -> Element {
    let t = s.trim();
    ALL_ELEMENTS
        .into_iter()
        .find(|e| e.name().eq_ignore_ascii_case(t) || e.hanja() == t || e.korean() == t)
        .unwrap_or_else(|| {
            eprintln!("Unknown element: {s}. Use Wood, Fire, Earth, Metal or Water.");
            std::process::exit(1);
        })
}

fn chart_row(chart: &Chart, cell: impl Fn(&Pillar) -> String) -> String {
    chart
        .pillars()
        .iter()
        .map(|(_, p)| format!("{:<6}", cell(p)))
        .collect()
}

fn print_chart(chart: &Chart) {
    println!("        Hour  Day   Month Year");
    println!("Hanja   {}", chart_row(chart, |p| p.hanja()));
    println!("Korean  {}", chart_row(chart, |p| p.korean()));
    println!(
        "Element {}",
        chart_row(chart, |p| format!(
            "{}/{}",
            p.stem.element().hanja(),
            p.branch.element().hanja()
        ))
    );
}

fn slot_text(rel: SlotRelation) -> String {
    match rel {
        SlotRelation::DayMaster => "일간 (The Self)".to_string(),
        SlotRelation::Related { class, ten_god } => format!(
            "{} {} ({})",
            class.name(),
            ten_god.korean(),
            ten_god.description()
        ),
    }
}

fn print_relations(relations: &ChartRelations) {
    for pr in relations.pillars {
        println!(
            "{:<6} stem: {:<28} branch: {}",
            pr.position.name(),
            slot_text(pr.stem),
            slot_text(pr.branch)
        );
    }
}

fn print_daewoon(seq: &DaewoonSequence) {
    println!("Daewoon ({}):", seq.direction.name());
    for e in &seq.entries {
        println!(
            "  {:>2}. age {:>2}  {} ({})",
            e.order,
            e.start_age,
            e.pillar.hanja(),
            e.pillar.korean()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_date() {
        assert_eq!(parse_date("19900115"), Ok((1990, 1, 15)));
    }

    #[test]
    fn parses_dashed_date() {
        assert_eq!(parse_date("1990-01-15"), Ok((1990, 1, 15)));
        assert_eq!(parse_date(" 2024-2-29 "), Ok((2024, 2, 29)));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("1990/01/15").is_err());
        assert!(parse_date("1990-01").is_err());
        assert!(parse_date("199001").is_err());
        assert!(parse_date("abcd-01-15").is_err());
    }

    #[test]
    fn daewoon_config_flag() {
        assert_eq!(daewoon_config(true).length.count(), 8);
        assert_eq!(daewoon_config(false).length.count(), 9);
    }
}
