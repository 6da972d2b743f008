mod config;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use saju_base::{
    Chart, ChartDocument, FortuneCascade, FortuneKind, GlyphKind, Pillar, PillarOrder, Script,
    format_pillars_text, ganji_attributes, resolve_index, resolve_stem,
};
use saju_oracle::{
    CachedOracle, FixedTermOracle, FortuneListRequest, NatalRequest, Sex, TimePrecision, natal_chart,
};
use saju_time::{LocalDateTime, TzOffset};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars chart and fortune CLI")]
struct Cli {
    /// Config file (TOML); `saju.toml` is used when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `saju_base=trace` (default: RUST_LOG, else saju=info)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a stem or branch glyph (hanja or hangul) to its index
    Resolve {
        glyph: String,
        /// Look the glyph up in the branch table
        #[arg(long)]
        branch: bool,
    },
    /// Attributes of one stem-branch pair
    Pillar {
        /// Two glyphs, e.g. 甲子 or 갑자
        pair: String,
        /// Day master stem glyph for Ten Gods and Twelve Fates
        #[arg(long)]
        day_master: Option<String>,
    },
    /// Pillars at a local date/time using the reference oracle
    PillarsAt {
        /// Local time (YYYY-MM-DDThh:mm or YYYY-MM-DD)
        #[arg(long, conflicts_with = "unix")]
        date: Option<String>,
        /// Unix seconds, read in the configured offset
        #[arg(long)]
        unix: Option<i64>,
        /// UTC offset in minutes
        #[arg(long, allow_hyphen_values = true)]
        tz_offset: Option<i32>,
        /// minute, hour, or unknown
        #[arg(long)]
        precision: Option<TimePrecision>,
    },
    /// Natal chart document (JSON) for a birth date/time
    Natal {
        /// Birth local time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// M, F, or unknown
        #[arg(long, default_value = "unknown")]
        sex: Sex,
        /// Reference time for current periods (default: birth)
        #[arg(long)]
        base: Option<String>,
        /// minute, hour, or unknown
        #[arg(long)]
        precision: Option<TimePrecision>,
        /// First year of an explicit year list (at most 30 years)
        #[arg(long)]
        years_from: Option<i32>,
        /// Last year of an explicit year list
        #[arg(long)]
        years_to: Option<i32>,
        /// List the 12 months of this year
        #[arg(long)]
        months_of: Option<i32>,
        /// List the days of this year (with --days-month)
        #[arg(long, requires = "days_month")]
        days_year: Option<i32>,
        /// List the days of this month, 1..=12 (with --days-year)
        #[arg(long, requires = "days_year")]
        days_month: Option<u32>,
        /// Write the document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Assemble and describe a chart document
    Chart {
        file: PathBuf,
        /// Print pillars in hanja
        #[arg(long)]
        hanja: bool,
    },
    /// Walk the decade → year → month → day cascade of a chart document
    Fortune {
        file: PathBuf,
        #[arg(long)]
        decade: Option<usize>,
        #[arg(long)]
        year: Option<usize>,
        #[arg(long)]
        month: Option<usize>,
        #[arg(long)]
        day: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    let config = CliConfig::load(cli.config.as_deref()).unwrap_or_else(|e| fail(&e));

    match cli.command {
        Commands::Resolve { glyph, branch } => {
            let kind = if branch { GlyphKind::Branch } else { GlyphKind::Stem };
            match resolve_index(&glyph, kind) {
                Some(i) => println!("{i}"),
                None => fail(&format!("Unknown {} glyph: {glyph}", if branch { "branch" } else { "stem" })),
            }
        }

        Commands::Pillar { pair, day_master } => {
            let pillar = require_pillar(&pair);
            let dm = day_master.as_deref().map(|g| {
                resolve_stem(g).unwrap_or_else(|| fail(&format!("Unknown day master glyph: {g}")))
            });
            for line in render::attributes_lines(&ganji_attributes(pillar, dm)) {
                println!("{line}");
            }
        }

        Commands::PillarsAt {
            date,
            unix,
            tz_offset,
            precision,
        } => {
            let mut oracle_config = config.oracle.clone();
            if let Some(m) = tz_offset {
                oracle_config.tz_offset = TzOffset::from_minutes(m).unwrap_or_else(|e| fail(&e.to_string()));
            }
            if let Some(p) = precision {
                oracle_config.time_precision = p;
            }
            let oracle = load_oracle(oracle_config);
            let (result, bounds) = match (date, unix) {
                (_, Some(ts)) => {
                    let local = LocalDateTime::from_unix_seconds(ts, oracle.config().tz_offset)
                        .unwrap_or_else(|e| fail(&e.to_string()));
                    oracle.compute_detailed(&local)
                }
                (Some(d), None) => oracle.compute_detailed(&require_local(&d)),
                (None, None) => fail("Give --date or --unix"),
            }
            .unwrap_or_else(|e| fail(&e.to_string()));
            println!("local: {} ({})", result.local, oracle.config().tz_offset);
            println!(
                "{}",
                format_pillars_text(&result.pillars, PillarOrder::Calendar, Script::Hanja)
            );
            println!("spring start: {}", bounds.spring_start);
            println!("month term start: {}", bounds.month_term_start);
            let dm = result.day_stem();
            for (slot, p) in result.pillars.present() {
                println!("{}:", slot.pillar_label());
                for line in render::attributes_lines(&ganji_attributes(p, dm)) {
                    println!("  {line}");
                }
            }
        }

        Commands::Natal {
            date,
            sex,
            base,
            precision,
            years_from,
            years_to,
            months_of,
            days_year,
            days_month,
            out,
        } => {
            let mut oracle_config = config.oracle.clone();
            if let Some(p) = precision {
                oracle_config.time_precision = p;
            }
            let oracle = load_oracle(oracle_config);
            let req = NatalRequest {
                sex,
                base: base.as_deref().map(require_local),
                lists: FortuneListRequest {
                    years_from,
                    years_to,
                    months_of,
                    days_of_year: days_year,
                    days_of_month: days_month,
                },
                ..NatalRequest::new(require_local(&date))
            };
            let chart = natal_chart(&oracle, &req).unwrap_or_else(|e| fail(&e.to_string()));
            let json = chart
                .to_document()
                .to_json_pretty()
                .unwrap_or_else(|e| fail(&e.to_string()));
            match out {
                Some(path) => std::fs::write(&path, json)
                    .unwrap_or_else(|e| fail(&format!("Cannot write {}: {e}", path.display()))),
                None => println!("{json}"),
            }
        }

        Commands::Chart { file, hanja } => {
            let chart = load_chart(&file);
            let script = if hanja { Script::Hanja } else { Script::Hangul };
            for line in render::chart_lines(&chart, script) {
                println!("{line}");
            }
        }

        Commands::Fortune {
            file,
            decade,
            year,
            month,
            day,
        } => {
            let chart = load_chart(&file);
            let oracle = CachedOracle::new(load_oracle(config.oracle.clone()));
            let mut cascade = FortuneCascade::new(chart.fortunes, &oracle, config.cascade);
            let picks = [
                (FortuneKind::Decade, decade),
                (FortuneKind::Year, year),
                (FortuneKind::Month, month),
                (FortuneKind::Day, day),
            ];
            for (level, index) in picks {
                if let Some(i) = index {
                    cascade.select(level, i).unwrap_or_else(|e| fail(&e.to_string()));
                }
            }
            for line in render::cascade_lines(&cascade) {
                println!("{line}");
            }
            tracing::debug!(cached = oracle.len(), hits = oracle.hits(), "oracle cache");
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("saju=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn require_pillar(pair: &str) -> Pillar {
    Pillar::parse(pair).unwrap_or_else(|| fail(&format!("Invalid stem-branch pair: {pair}")))
}

fn require_local(s: &str) -> LocalDateTime {
    LocalDateTime::parse(s).unwrap_or_else(|e| fail(&e.to_string()))
}

fn load_oracle(config: saju_oracle::OracleConfig) -> FixedTermOracle {
    FixedTermOracle::new(config).unwrap_or_else(|e| fail(&format!("Invalid oracle config: {e}")))
}

fn load_chart(path: &Path) -> Chart {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Cannot read {}: {e}", path.display())));
    let doc = ChartDocument::from_json(&text).unwrap_or_else(|e| fail(&e.to_string()));
    Chart::from_document(&doc)
}
