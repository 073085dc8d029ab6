#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that derives normalized metrics from raw tier counters.

use dmon_core::{
    rounding::{guarded_ratio, round_to, round_whole},
    DamageConstants, DerivedMetrics, PerTier, RawCounts,
};

/// Pure ratio deriver parameterized by the damage dealt per ammunition unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ratios {
    damage: DamageConstants,
}

impl Ratios {
    /// Creates a deriver that weights ammunition with `damage`.
    #[must_use]
    pub const fn new(damage: DamageConstants) -> Self {
        Self { damage }
    }

    /// Damage constants the deriver was created with.
    #[must_use]
    pub const fn damage(&self) -> &DamageConstants {
        &self.damage
    }

    /// Derives the metrics of a single tier.
    ///
    /// The hitscan share is kept as a whole percentage and every other ratio
    /// at one decimal place. A tier without monsters yields zero for every
    /// per-monster metric, and a tier without monster hit points yields zero
    /// for every damage ratio.
    #[must_use]
    pub fn derive<C>(&self, counts: &C) -> DerivedMetrics
    where
        C: RawCounts + ?Sized,
    {
        let monsters = counts.monsters();
        let hit_points = counts.monster_hit_points();
        let per_monster = |value: f64| round_to(guarded_ratio(value, monsters), 1);
        let damage_ratio = |units: f64, damage: u32| {
            round_to(guarded_ratio(units * f64::from(damage), hit_points), 1)
        };
        let hitscan_share = guarded_ratio(counts.hitscan_monsters(), monsters);

        DerivedMetrics {
            monster_count: monsters,
            hitscan_percent: round_whole(hitscan_share * 100.0),
            health_ratio: per_monster(counts.health_points()),
            armor_ratio: per_monster(counts.armor_points()),
            bullet_damage_ratio: damage_ratio(counts.bullets(), self.damage.bullet),
            shell_damage_ratio: damage_ratio(counts.shells(), self.damage.shell),
            rocket_damage_ratio: damage_ratio(counts.rockets(), self.damage.rocket),
            plasma_damage_ratio: damage_ratio(counts.plasma_cells(), self.damage.plasma),
        }
    }

    /// Derives the metrics of every tier.
    #[must_use]
    pub fn derive_all<C: RawCounts>(&self, counters: &PerTier<C>) -> PerTier<DerivedMetrics> {
        PerTier::from_fn(|tier| self.derive(&counters[tier]))
    }
}
