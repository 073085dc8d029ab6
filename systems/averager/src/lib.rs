#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cross-level averaging system.
//!
//! The averager is a barrier over every analyzed level: it sums each raw
//! counter per tier and divides by the number of levels. Sums are kept as
//! exact integers so the result does not depend on the order of the levels.

use dmon_core::{AveragedCounters, PerTier, TierCounters};
use serde::Serialize;

/// Per-tier sums of every raw counter across the averaged levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CounterTotals {
    /// Sum of hitscan-class monsters.
    pub hitscan_monster_count: u64,
    /// Sum of meaty-class monsters.
    pub meaty_monster_count: u64,
    /// Sum of monster hit points.
    pub monster_hit_points_total: u64,
    /// Sum of health points.
    pub health_points_total: u64,
    /// Sum of armor points.
    pub armor_points_total: u64,
    /// Sum of bullets.
    pub bullets: u64,
    /// Sum of shells.
    pub shells: u64,
    /// Sum of rockets.
    pub rockets: u64,
    /// Sum of plasma cells.
    pub plasma_cells: u64,
}

impl CounterTotals {
    fn absorb(&mut self, counters: &TierCounters) {
        self.hitscan_monster_count += u64::from(counters.hitscan_monster_count);
        self.meaty_monster_count += u64::from(counters.meaty_monster_count);
        self.monster_hit_points_total += u64::from(counters.monster_hit_points_total);
        self.health_points_total += u64::from(counters.health_points_total);
        self.armor_points_total += u64::from(counters.armor_points_total);
        self.bullets += u64::from(counters.bullets);
        self.shells += u64::from(counters.shells);
        self.rockets += u64::from(counters.rockets);
        self.plasma_cells += u64::from(counters.plasma_cells);
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, level_count: usize) -> AveragedCounters {
        let divisor = level_count as f64;
        let mean = |total: u64| total as f64 / divisor;
        AveragedCounters {
            hitscan_monster_count: mean(self.hitscan_monster_count),
            meaty_monster_count: mean(self.meaty_monster_count),
            monster_hit_points_total: mean(self.monster_hit_points_total),
            health_points_total: mean(self.health_points_total),
            armor_points_total: mean(self.armor_points_total),
            bullets: mean(self.bullets),
            shells: mean(self.shells),
            rockets: mean(self.rockets),
            plasma_cells: mean(self.plasma_cells),
        }
    }
}

/// Result of averaging a non-empty set of levels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Averages {
    /// Number of levels that contributed.
    pub level_count: usize,
    /// Per-tier sums of every counter.
    pub totals: PerTier<CounterTotals>,
    /// Per-tier arithmetic means of every counter.
    pub means: PerTier<AveragedCounters>,
}

/// Pure averaging system.
#[derive(Debug, Default)]
pub struct Averager;

impl Averager {
    /// Creates a new averager.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Averages the counters of every level, tier by tier.
    ///
    /// Returns `None` when no level is supplied; no synthetic level exists
    /// in that case.
    #[must_use]
    pub fn average<'a, I>(&self, levels: I) -> Option<Averages>
    where
        I: IntoIterator<Item = &'a PerTier<TierCounters>>,
    {
        let mut totals = PerTier::<CounterTotals>::default();
        let mut level_count = 0_usize;

        for level in levels {
            level_count += 1;
            for (tier, counters) in level.iter() {
                totals[tier].absorb(counters);
            }
        }

        if level_count == 0 {
            return None;
        }

        let means = totals.as_ref().map(|_, total| total.mean(level_count));
        Some(Averages {
            level_count,
            totals,
            means,
        })
    }
}
