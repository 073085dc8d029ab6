#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure accumulation system that folds a level's placements into per-tier counters.

use dmon_core::{
    ClassificationEntry, ClassificationTable, PerTier, PlacementRecord, Tier, TierCounters,
};

/// Configuration parameters required to construct the accumulator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    include_bonus: bool,
}

impl Config {
    /// Creates a new configuration; `include_bonus` counts berserk, soulsphere
    /// and megasphere pickups towards health and armor.
    #[must_use]
    pub const fn new(include_bonus: bool) -> Self {
        Self { include_bonus }
    }
}

/// Pure system that turns placement records into raw tier counters.
#[derive(Debug)]
pub struct Accumulator<'table> {
    table: &'table ClassificationTable,
    include_bonus: bool,
}

impl<'table> Accumulator<'table> {
    /// Creates an accumulator that classifies entities with `table`.
    #[must_use]
    pub fn new(table: &'table ClassificationTable, config: Config) -> Self {
        Self {
            table,
            include_bonus: config.include_bonus,
        }
    }

    /// Reports whether any record resolves to a classified entity.
    ///
    /// Levels without a single classified entity carry no meaningful ratios
    /// and are expected to be skipped before accumulation.
    #[must_use]
    pub fn has_tracked_entities(&self, records: &[PlacementRecord]) -> bool {
        records
            .iter()
            .any(|record| self.table.lookup(record.type_code).is_some())
    }

    /// Accumulates the counters of every tier in a single forward pass.
    ///
    /// Type codes missing from the classification table contribute nothing.
    #[must_use]
    pub fn accumulate(&self, level: &str, records: &[PlacementRecord]) -> PerTier<TierCounters> {
        let mut counters = PerTier::from_fn(|_| TierCounters::new());
        let mut unknown = 0_usize;

        for record in records {
            let Some(entry) = self.table.lookup(record.type_code) else {
                unknown += 1;
                continue;
            };

            for tier in Tier::ALL {
                if record.active_in.contains(tier) {
                    absorb(&mut counters[tier], entry, self.include_bonus);
                }
            }
        }

        log::trace!(
            "{level}: {} placements, {unknown} without classification",
            records.len()
        );
        counters
    }
}

fn absorb(counters: &mut TierCounters, entry: &ClassificationEntry, include_bonus: bool) {
    if entry.is_hitscan {
        counters.hitscan_monster_count = counters.hitscan_monster_count.saturating_add(1);
    } else if entry.is_meaty {
        counters.meaty_monster_count = counters.meaty_monster_count.saturating_add(1);
    }

    counters.monster_hit_points_total = counters
        .monster_hit_points_total
        .saturating_add(entry.monster_hit_points);
    counters.health_points_total = counters
        .health_points_total
        .saturating_add(entry.health_for(include_bonus));
    counters.armor_points_total = counters
        .armor_points_total
        .saturating_add(entry.armor_for(include_bonus));
    counters.bullets = counters.bullets.saturating_add(entry.bullets);
    counters.shells = counters.shells.saturating_add(entry.shells);
    counters.rockets = counters.rockets.saturating_add(entry.rockets);
    counters.plasma_cells = counters.plasma_cells.saturating_add(entry.plasma);
}
