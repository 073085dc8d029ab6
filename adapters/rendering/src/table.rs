use std::fmt::Write as _;

use dmon_core::{DisplayMode, PerTier, Statistic, Tier};
use dmon_report::Report;
use dmon_system_formatter::FormattedTier;

const ROWS: [(&str, Statistic); 7] = [
    ("HIT SCAN %", Statistic::HitscanPercent),
    ("HEALTH ^", Statistic::HealthRatio),
    ("ARMOR ^", Statistic::ArmorRatio),
    ("BULLETS ^", Statistic::BulletRatio),
    ("SHELLS ^", Statistic::ShellRatio),
    ("ROCKETS ^", Statistic::RocketRatio),
    ("PLASMA ^", Statistic::PlasmaRatio),
];

const PIVOTED_HEADINGS: [&str; 8] = [
    "HSCAN%", "HEALTH^", "ARMOR^", "BULLET^", "SHELL^", "ROCKET^", "PLASMA^", "FLAGS",
];

const FLAGS_TITLE: &str = "FLAGS";
const COLUMN_WIDTH: usize = 9;
const TITLE_WIDTH: usize = 12;
const PIVOTED_TITLE_WIDTH: usize = 6;

/// Layout switches of the tabular renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// List tiers as rows and statistics as columns.
    pub pivot: bool,
    /// Keep the FLAGS row of the averages block.
    pub average_flags: bool,
}

/// Renders the ratio statistics as fixed-width text tables.
///
/// Each level gets its own block. When the report carries averages, only the
/// averages block is rendered.
#[must_use]
pub fn render_table(report: &Report, options: TableOptions) -> String {
    let blocks: Vec<(&str, &PerTier<FormattedTier>, bool)> = match &report.averages {
        Some(averages) => vec![(
            averages.dataset().name.as_str(),
            &averages.entry.results,
            options.average_flags,
        )],
        None => report
            .levels
            .iter()
            .map(|level| (level.dataset.name.as_str(), &level.results, true))
            .collect(),
    };

    let mut output = String::new();
    for (name, results, with_flags) in blocks {
        output.push('\n');
        output.push_str(&block_header(report, name));
        output.push('\n');
        if options.pivot {
            write_pivoted(&mut output, results, with_flags);
        } else {
            write_rows(&mut output, results, with_flags);
        }
    }
    output
}

fn block_header(report: &Report, name: &str) -> String {
    match report.policy.mode {
        DisplayMode::Absolute => format!("[{} {name}]", report.source),
        DisplayMode::Compare | DisplayMode::Diff => {
            format!("[{} {name} versus {}]", report.source, report.baseline)
        }
    }
}

fn write_rows(output: &mut String, results: &PerTier<FormattedTier>, with_flags: bool) {
    let headings = Tier::ALL.map(Tier::label);
    write_line(output, "", TITLE_WIDTH, headings);

    for (title, statistic) in ROWS {
        let cells = Tier::ALL.map(|tier| results[tier].get(statistic));
        write_line(output, title, TITLE_WIDTH, cells);
    }
    if with_flags {
        let cells = Tier::ALL.map(|tier| results[tier].flags_or_empty());
        write_line(output, FLAGS_TITLE, TITLE_WIDTH, cells);
    }
}

fn write_pivoted(output: &mut String, results: &PerTier<FormattedTier>, with_flags: bool) {
    let column_count = if with_flags {
        PIVOTED_HEADINGS.len()
    } else {
        PIVOTED_HEADINGS.len() - 1
    };
    write_line(
        output,
        "SKILL",
        PIVOTED_TITLE_WIDTH,
        PIVOTED_HEADINGS.iter().take(column_count).copied(),
    );

    for (tier, formatted) in results.iter() {
        let cells = ROWS
            .iter()
            .map(|(_, statistic)| formatted.get(*statistic))
            .chain(with_flags.then(|| formatted.flags_or_empty()));
        write_line(output, tier.name(), PIVOTED_TITLE_WIDTH, cells);
    }
}

fn write_line<'a>(
    output: &mut String,
    title: &str,
    title_width: usize,
    cells: impl IntoIterator<Item = &'a str>,
) {
    let _ = write!(output, "{title:<title_width$}");
    for cell in cells {
        let _ = write!(output, "{cell:>width$}", width = COLUMN_WIDTH);
    }
    output.push('\n');
}
