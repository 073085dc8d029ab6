#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Assembles the statistics of every extracted level into a single report.
//!
//! The builder runs the pure systems in their fixed order: each level is
//! accumulated, its ratios derived and compared against the baseline, then
//! the averager runs over every accumulated level and the averages pass
//! through the same derivation and comparison. Formatting happens last.

use dmon_core::{
    AverageDataset, AveragedCounters, BaselineProfile, ClassificationTable, DamageConstants,
    DisplayPolicy, LevelDataset, PerTier, PlacementRecord, RawCounts, TierCounters,
    AVERAGES_LEVEL_NAME,
};
use dmon_system_accumulator::{self as accumulator, Accumulator};
use dmon_system_averager::{Averager, CounterTotals};
use dmon_system_comparator::Comparator;
use dmon_system_formatter::{FormattedTier, Formatter};
use dmon_system_ratios::Ratios;
use serde::Serialize;

/// Switches that shape a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Count bonus items towards health and armor.
    pub include_bonus: bool,
    /// Produce the averages pseudo-level.
    pub average: bool,
    /// Display policy used for comparison and formatting.
    pub policy: DisplayPolicy,
}

/// Statistics of one level together with their display strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LevelEntry<C = TierCounters> {
    /// Raw counters, derived metrics and flags.
    #[serde(flatten)]
    pub dataset: LevelDataset<C>,
    /// Display strings per tier.
    pub results: PerTier<FormattedTier>,
}

/// Averages pseudo-level with the sums it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AverageEntry {
    /// Averaged statistics, named [`AVERAGES_LEVEL_NAME`].
    #[serde(flatten)]
    pub entry: LevelEntry<AveragedCounters>,
    /// Number of levels that were averaged.
    pub level_count: usize,
    /// Per-tier sums of every counter.
    pub totals: PerTier<CounterTotals>,
}

impl AverageEntry {
    /// Averaged dataset.
    #[must_use]
    pub const fn dataset(&self) -> &AverageDataset {
        &self.entry.dataset
    }
}

/// Complete result of analyzing one archive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Name of the analyzed archive.
    pub source: String,
    /// Code of the baseline profile compared against.
    pub baseline: String,
    /// Display policy the results were formatted with.
    #[serde(skip)]
    pub policy: DisplayPolicy,
    /// Analyzed levels in archive order.
    pub levels: Vec<LevelEntry>,
    /// Averages across every analyzed level, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averages: Option<AverageEntry>,
    /// Levels without any classified entity.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl Report {
    /// Reports whether no level produced any statistics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Runs the statistics systems over a set of levels.
///
/// The baseline profile is resolved by the caller before the builder is
/// created, so an unknown baseline fails before any level is touched.
#[derive(Debug)]
pub struct ReportBuilder<'a> {
    accumulator: Accumulator<'a>,
    ratios: Ratios,
    comparator: Comparator<'a>,
    averager: Averager,
    formatter: Formatter,
    baseline: &'a BaselineProfile,
    average: bool,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a builder wired to the provided tables.
    #[must_use]
    pub fn new(
        table: &'a ClassificationTable,
        damage: DamageConstants,
        baseline: &'a BaselineProfile,
        options: ReportOptions,
    ) -> Self {
        Self {
            accumulator: Accumulator::new(table, accumulator::Config::new(options.include_bonus)),
            ratios: Ratios::new(damage),
            comparator: Comparator::new(baseline, options.policy),
            averager: Averager::new(),
            formatter: Formatter::new(options.policy),
            baseline,
            average: options.average,
        }
    }

    /// Builds the report for the `(name, placements)` pairs of `levels`.
    #[must_use]
    pub fn build<I>(&self, source: &str, levels: I) -> Report
    where
        I: IntoIterator<Item = (String, Vec<PlacementRecord>)>,
    {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for (name, records) in levels {
            if !self.accumulator.has_tracked_entities(&records) {
                log::info!("{source}: skipping {name}, no monsters or pickups found");
                skipped.push(name);
                continue;
            }

            let counters = self.accumulator.accumulate(&name, &records);
            log::debug!(
                "{source}: {name} has {} monsters on hard",
                counters.hard.monster_count()
            );
            entries.push(self.entry(name, counters));
        }

        let averages = if self.average {
            self.averages(&entries)
        } else {
            None
        };

        Report {
            source: source.to_owned(),
            baseline: self.baseline.name().to_owned(),
            policy: self.formatter.policy(),
            levels: entries,
            averages,
            skipped,
        }
    }

    fn entry<C: RawCounts>(&self, name: String, counters: PerTier<C>) -> LevelEntry<C> {
        let metrics = self.ratios.derive_all(&counters);
        let flags = self.comparator.compare_all(&metrics);
        let dataset = LevelDataset {
            name,
            counters,
            metrics,
            flags,
        };
        let results = self.formatter.format_level(&dataset, self.baseline).tiers;
        LevelEntry { dataset, results }
    }

    fn averages(&self, entries: &[LevelEntry]) -> Option<AverageEntry> {
        let averages = self
            .averager
            .average(entries.iter().map(|entry| &entry.dataset.counters))?;
        log::debug!("averaged {} levels", averages.level_count);

        Some(AverageEntry {
            entry: self.entry(AVERAGES_LEVEL_NAME.to_owned(), averages.means),
            level_count: averages.level_count,
            totals: averages.totals,
        })
    }
}
