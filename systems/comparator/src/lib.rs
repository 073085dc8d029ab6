#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that raises advisory flags by checking derived metrics against
//! a baseline profile.
//!
//! Values on both sides are passed through [`DisplayPolicy::quantize`] first,
//! so a flag is raised only when the difference is visible in the report.

use dmon_core::{
    AdvisoryFlag, AdvisoryFlags, BaselineProfile, BaselineTier, DerivedMetrics, DisplayPolicy,
    PerTier, Tier,
};

/// Direction in which a metric is considered unfavourable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Threshold {
    Below,
    Above,
}

/// Baseline comparator bound to one profile and one display policy.
#[derive(Clone, Copy, Debug)]
pub struct Comparator<'profile> {
    baseline: &'profile BaselineProfile,
    policy: DisplayPolicy,
}

impl<'profile> Comparator<'profile> {
    /// Creates a comparator checking metrics against `baseline`.
    #[must_use]
    pub const fn new(baseline: &'profile BaselineProfile, policy: DisplayPolicy) -> Self {
        Self { baseline, policy }
    }

    /// Profile the comparator checks against.
    #[must_use]
    pub const fn baseline(&self) -> &'profile BaselineProfile {
        self.baseline
    }

    /// Raises the flags for one tier, in the fixed flag order.
    #[must_use]
    pub fn compare(&self, tier: Tier, metrics: &DerivedMetrics) -> AdvisoryFlags {
        let reference = self.baseline.tier(tier);
        AdvisoryFlag::ALL
            .into_iter()
            .filter(|&flag| self.is_raised(flag, metrics, reference))
            .collect()
    }

    /// Raises the flags of every tier.
    #[must_use]
    pub fn compare_all(&self, metrics: &PerTier<DerivedMetrics>) -> PerTier<AdvisoryFlags> {
        PerTier::from_fn(|tier| self.compare(tier, &metrics[tier]))
    }

    fn is_raised(
        &self,
        flag: AdvisoryFlag,
        metrics: &DerivedMetrics,
        reference: &BaselineTier,
    ) -> bool {
        let (value, baseline, threshold) = match flag {
            AdvisoryFlag::Health => (
                metrics.health_ratio,
                Some(reference.health_ratio),
                Threshold::Below,
            ),
            AdvisoryFlag::Armor => (
                metrics.armor_ratio,
                Some(reference.armor_ratio),
                Threshold::Below,
            ),
            AdvisoryFlag::Bullets => (
                metrics.bullet_damage_ratio,
                reference.bullet_damage_ratio,
                Threshold::Below,
            ),
            AdvisoryFlag::Shells => (
                metrics.shell_damage_ratio,
                reference.shell_damage_ratio,
                Threshold::Below,
            ),
            AdvisoryFlag::Rockets => (
                metrics.rocket_damage_ratio,
                reference.rocket_damage_ratio,
                Threshold::Below,
            ),
            AdvisoryFlag::Plasma => (
                metrics.plasma_damage_ratio,
                reference.plasma_damage_ratio,
                Threshold::Below,
            ),
            AdvisoryFlag::Hitscan => (
                metrics.hitscan_percent,
                Some(reference.hitscan_percent),
                Threshold::Above,
            ),
        };

        let Some(baseline) = baseline else {
            return false;
        };
        let value = self.policy.quantize(value);
        let baseline = self.policy.quantize(baseline);
        match threshold {
            Threshold::Below => value < baseline,
            Threshold::Above => value > baseline,
        }
    }
}

/// Flag codes paired with their explanation, in output order.
#[must_use]
pub fn legend() -> Vec<(char, &'static str)> {
    AdvisoryFlag::ALL
        .into_iter()
        .map(|flag| (flag.code(), flag.description()))
        .collect()
}
