#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that analyzes the levels of a WAD archive.

mod config;
mod text;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dmon_core::{DisplayMode, DisplayPolicy};
use dmon_rendering::{
    render_csv, render_dump, render_json, render_legend, render_table, TableOptions,
};
use dmon_report::{ReportBuilder, ReportOptions};
use dmon_tables::{doom_classification, DEFAULT_BASELINE};
use dmon_wad::{MapPattern, Wad};

use crate::config::Config;

/// Output formats other than the default table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One comma separated row per map and skill.
    Csv,
    /// Complete report data.
    Json,
    /// Averages as a baseline profile for the configuration file.
    Dump,
}

/// WAD analysis and toughness estimation of DOOM maps.
#[derive(Debug, Parser)]
#[command(name = "dmon", version)]
struct Args {
    /// WAD or PWAD file to analyze.
    #[arg(required_unless_present_any = ["about", "license"])]
    wad: Option<PathBuf>,

    /// Map names to analyze; `?`, `*` and `[...]` are wildcards, e.g. E1M* or MAP0[135].
    #[arg(default_value = MapPattern::MATCH_ALL)]
    pattern: String,

    /// Combine the results of every matched map into averages.
    #[arg(short, long)]
    average: bool,

    /// Count berserk, soulsphere and megasphere pickups.
    #[arg(short = 'u', long)]
    bonus: bool,

    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Baseline to compare against: DOOM, DOOM2, SIGIL, AV, HR, DTWID or a configured one.
    #[arg(short, long, default_value = DEFAULT_BASELINE)]
    baseline: String,

    /// Show value/baseline pairs.
    #[arg(short, long, conflicts_with = "diff")]
    compare: bool,

    /// Show the difference from the baseline.
    #[arg(short, long)]
    diff: bool,

    /// Show one decimal place instead of whole numbers.
    #[arg(short = 'x', long)]
    fixed: bool,

    /// Explain the flag codes after the output.
    #[arg(short, long)]
    legend: bool,

    /// List skills as rows and statistics as columns in the table.
    #[arg(short, long)]
    pivot: bool,

    /// Configuration file; defaults to dmon.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print progress and diagnostic messages.
    #[arg(long)]
    verbose: bool,

    /// Explain how the statistics are gathered.
    #[arg(long)]
    about: bool,

    /// Print the license.
    #[arg(long)]
    license: bool,
}

impl Args {
    fn policy(&self) -> DisplayPolicy {
        let mode = if self.compare {
            DisplayMode::Compare
        } else if self.diff {
            DisplayMode::Diff
        } else {
            DisplayMode::Absolute
        };
        DisplayPolicy::new(self.fixed, mode)
    }
}

/// Entry point for the dmon command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.license {
        println!("{}", text::LICENSE);
        return Ok(());
    }
    if args.about {
        println!("{}", text::ABOUT);
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let registry = config.registry();
    let baseline = registry.resolve(&args.baseline)?;

    let Some(wad_path) = args.wad.as_deref() else {
        bail!("no WAD given");
    };
    if !wad_path.is_file() {
        bail!("WAD not found: {}", wad_path.display());
    }

    let pattern = MapPattern::new(&args.pattern)?;
    let wad = Wad::open(wad_path)?;
    let levels = wad
        .extract(&pattern)
        .with_context(|| format!("failed to read maps from {}", wad_path.display()))?;
    log::debug!("{} maps match {pattern}", levels.len());

    let table = doom_classification();
    let options = ReportOptions {
        include_bonus: args.bonus,
        average: args.average,
        policy: args.policy(),
    };
    let report = ReportBuilder::new(&table, config.damage, baseline, options)
        .build(&display_name(wad_path), levels);

    if report.is_empty() {
        println!("no matching data");
        return Ok(());
    }

    let output = match args.format {
        None => render_table(
            &report,
            TableOptions {
                pivot: args.pivot,
                average_flags: false,
            },
        ),
        Some(OutputFormat::Csv) => render_csv(&report),
        Some(OutputFormat::Json) => render_json(&report)?,
        Some(OutputFormat::Dump) => render_dump(&report, &profile_name(wad_path))?,
    };
    println!("{output}");

    if args.legend {
        print!("{}", render_legend());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        let _ = builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn profile_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "CUSTOM".to_owned(), |stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_and_diff_select_the_display_mode() {
        let args = Args::parse_from(["dmon", "doom2.wad", "-c", "-x"]);
        assert_eq!(args.policy(), DisplayPolicy::new(true, DisplayMode::Compare));

        let args = Args::parse_from(["dmon", "doom2.wad", "MAP0?", "--diff"]);
        assert_eq!(args.policy(), DisplayPolicy::new(false, DisplayMode::Diff));
        assert_eq!(args.pattern, "MAP0?");
    }

    #[test]
    fn compare_conflicts_with_diff() {
        assert!(Args::try_parse_from(["dmon", "doom2.wad", "-c", "-d"]).is_err());
    }

    #[test]
    fn about_does_not_need_a_wad() {
        let args = Args::parse_from(["dmon", "--about"]);
        assert!(args.about);
        assert!(args.wad.is_none());
        assert!(Args::try_parse_from(["dmon"]).is_err());
    }

    #[test]
    fn defaults_match_the_classic_tool() {
        let args = Args::parse_from(["dmon", "doom2.wad"]);
        assert_eq!(args.baseline, DEFAULT_BASELINE);
        assert_eq!(args.pattern, "*");
        assert_eq!(args.format, None);
        assert_eq!(args.policy(), DisplayPolicy::default());
    }

    #[test]
    fn names_derive_from_the_wad_path() {
        let path = Path::new("/wads/scythe.wad");
        assert_eq!(display_name(path), "scythe.wad");
        assert_eq!(profile_name(path), "scythe");
    }
}
