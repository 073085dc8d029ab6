use std::borrow::Cow;

use dmon_core::Statistic;
use dmon_report::Report;
use dmon_system_formatter::FormattedTier;

const HEADER: &str = "FILE,MAP,SKILL,MONSTERS,HITSCANNERS,HITSCANNER%,HEALTH POINTS,\
HEALTH RATIO,ARMOR POINTS,ARMOR RATIO,BULLETS,BULLET RATIO,SHELLS,SHELL RATIO,ROCKETS,\
ROCKET RATIO,PLASMA,PLASMA RATIO,FLAGS";

const COLUMNS: [Statistic; 15] = [
    Statistic::Monsters,
    Statistic::Hitscanners,
    Statistic::HitscanPercent,
    Statistic::HealthPoints,
    Statistic::HealthRatio,
    Statistic::ArmorPoints,
    Statistic::ArmorRatio,
    Statistic::Bullets,
    Statistic::BulletRatio,
    Statistic::Shells,
    Statistic::ShellRatio,
    Statistic::Rockets,
    Statistic::RocketRatio,
    Statistic::PlasmaCells,
    Statistic::PlasmaRatio,
];

/// Renders one CSV row per level and tier, followed by the averages rows.
#[must_use]
pub fn render_csv(report: &Report) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');

    let levels = report
        .levels
        .iter()
        .map(|level| (level.dataset.name.as_str(), &level.results));
    let averages = report
        .averages
        .iter()
        .map(|averages| (averages.dataset().name.as_str(), &averages.entry.results));

    for (name, results) in levels.chain(averages) {
        for (tier, formatted) in results.iter() {
            let fields = [
                field(&report.source),
                field(name),
                Cow::Borrowed(tier.name()),
            ]
            .into_iter()
            .chain(row(formatted));
            output.push_str(&fields.collect::<Vec<_>>().join(","));
            output.push('\n');
        }
    }
    output
}

fn row(formatted: &FormattedTier) -> impl Iterator<Item = Cow<'_, str>> {
    COLUMNS
        .iter()
        .map(|statistic| field(formatted.get(*statistic)))
        .chain(std::iter::once(field(formatted.flags_or_empty())))
}

fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
