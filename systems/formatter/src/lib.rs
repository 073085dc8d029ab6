#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Presentation system that applies the display policy to every statistic.
//!
//! The formatter is the single place where numbers become text. Renderers
//! only arrange the strings it produces.

use dmon_core::{
    rounding::{round_to, round_whole},
    AdvisoryFlags, BaselineProfile, BaselineTier, DerivedMetrics, DisplayMode, DisplayPolicy,
    LevelDataset, PerTier, RawCounts, Statistic,
};
use serde::Serialize;

/// Display strings of every statistic of one tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormattedTier {
    /// Total number of monsters.
    pub monsters: String,
    /// Number of hitscan-class monsters.
    pub hitscanners: String,
    /// Hitscan percentage.
    pub hitscan_percent: String,
    /// Sum of the health points.
    pub health_points: String,
    /// Health per monster.
    pub health_ratio: String,
    /// Sum of the armor points.
    pub armor_points: String,
    /// Armor per monster.
    pub armor_ratio: String,
    /// Bullets available.
    pub bullets: String,
    /// Bullet damage ratio.
    pub bullet_ratio: String,
    /// Shells available.
    pub shells: String,
    /// Shell damage ratio.
    pub shell_ratio: String,
    /// Rockets available.
    pub rockets: String,
    /// Rocket damage ratio.
    pub rocket_ratio: String,
    /// Plasma cells available.
    pub plasma_cells: String,
    /// Plasma damage ratio.
    pub plasma_ratio: String,
    /// Sum of monster hit points.
    pub monster_hit_points: String,
    /// Raised advisory flags, absent when none was raised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl FormattedTier {
    /// Display string of `statistic`.
    #[must_use]
    pub fn get(&self, statistic: Statistic) -> &str {
        match statistic {
            Statistic::Monsters => &self.monsters,
            Statistic::Hitscanners => &self.hitscanners,
            Statistic::HitscanPercent => &self.hitscan_percent,
            Statistic::HealthPoints => &self.health_points,
            Statistic::HealthRatio => &self.health_ratio,
            Statistic::ArmorPoints => &self.armor_points,
            Statistic::ArmorRatio => &self.armor_ratio,
            Statistic::Bullets => &self.bullets,
            Statistic::BulletRatio => &self.bullet_ratio,
            Statistic::Shells => &self.shells,
            Statistic::ShellRatio => &self.shell_ratio,
            Statistic::Rockets => &self.rockets,
            Statistic::RocketRatio => &self.rocket_ratio,
            Statistic::PlasmaCells => &self.plasma_cells,
            Statistic::PlasmaRatio => &self.plasma_ratio,
            Statistic::MonsterHitPoints => &self.monster_hit_points,
        }
    }

    /// Flag codes, or an empty string when no flag was raised.
    #[must_use]
    pub fn flags_or_empty(&self) -> &str {
        self.flags.as_deref().unwrap_or_default()
    }
}

/// Display strings of every tier of one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedLevel {
    /// Level name.
    pub name: String,
    /// Formatted statistics per tier.
    pub tiers: PerTier<FormattedTier>,
}

/// Formatter bound to a display policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter {
    policy: DisplayPolicy,
}

impl Formatter {
    /// Creates a formatter applying `policy`.
    #[must_use]
    pub const fn new(policy: DisplayPolicy) -> Self {
        Self { policy }
    }

    /// Policy applied by the formatter.
    #[must_use]
    pub const fn policy(&self) -> DisplayPolicy {
        self.policy
    }

    /// Renders a bare number according to the precision of the policy.
    ///
    /// Fixed precision always shows one decimal place. Otherwise the value
    /// is rounded to a whole number, unless that would hide a nonzero value
    /// as `0`; such values keep one or two decimals without the leading
    /// zero, e.g. `.4` or `-.04`.
    #[must_use]
    pub fn format_digit(&self, value: f64) -> String {
        if self.policy.fixed {
            return format!("{:.1}", round_to(value, 1));
        }

        let whole = round_whole(value);
        if whole != 0.0 || value == 0.0 {
            return format!("{whole:.0}");
        }

        let tenths = round_to(value, 1);
        if tenths != 0.0 {
            return strip_leading_zero(&format!("{tenths:.1}"));
        }
        let hundredths = round_to(value, 2);
        if hundredths != 0.0 {
            return strip_leading_zero(&format!("{hundredths:.2}"));
        }
        "0".to_owned()
    }

    /// Renders a value in relation to its baseline counterpart.
    ///
    /// Without a counterpart the plain value is shown in every mode.
    #[must_use]
    pub fn format_value(&self, value: f64, baseline: Option<f64>) -> String {
        let Some(baseline) = baseline else {
            return self.format_digit(value);
        };

        match self.policy.mode {
            DisplayMode::Absolute => self.format_digit(value),
            DisplayMode::Compare => format!(
                "{}/{}",
                self.format_digit(value),
                self.format_digit(baseline)
            ),
            DisplayMode::Diff => {
                let delta = value - baseline;
                let digits = self.format_digit(delta);
                if delta > 0.0 {
                    format!("+{digits}")
                } else {
                    digits
                }
            }
        }
    }

    /// Formats every statistic of one tier against its baseline counterpart.
    #[must_use]
    pub fn format_tier<C>(
        &self,
        counts: &C,
        metrics: &DerivedMetrics,
        flags: AdvisoryFlags,
        baseline: &BaselineTier,
    ) -> FormattedTier
    where
        C: RawCounts + ?Sized,
    {
        let cell = |statistic: Statistic| {
            self.format_value(
                statistic.measure(counts, metrics),
                baseline.counterpart(statistic),
            )
        };

        FormattedTier {
            monsters: cell(Statistic::Monsters),
            hitscanners: cell(Statistic::Hitscanners),
            hitscan_percent: cell(Statistic::HitscanPercent),
            health_points: cell(Statistic::HealthPoints),
            health_ratio: cell(Statistic::HealthRatio),
            armor_points: cell(Statistic::ArmorPoints),
            armor_ratio: cell(Statistic::ArmorRatio),
            bullets: cell(Statistic::Bullets),
            bullet_ratio: cell(Statistic::BulletRatio),
            shells: cell(Statistic::Shells),
            shell_ratio: cell(Statistic::ShellRatio),
            rockets: cell(Statistic::Rockets),
            rocket_ratio: cell(Statistic::RocketRatio),
            plasma_cells: cell(Statistic::PlasmaCells),
            plasma_ratio: cell(Statistic::PlasmaRatio),
            monster_hit_points: cell(Statistic::MonsterHitPoints),
            flags: (!flags.is_empty()).then(|| flags.to_string()),
        }
    }

    /// Formats every tier of a level, or of the averages pseudo-level.
    #[must_use]
    pub fn format_level<C: RawCounts>(
        &self,
        level: &LevelDataset<C>,
        baseline: &BaselineProfile,
    ) -> FormattedLevel {
        FormattedLevel {
            name: level.name.clone(),
            tiers: PerTier::from_fn(|tier| {
                self.format_tier(
                    &level.counters[tier],
                    &level.metrics[tier],
                    level.flags[tier],
                    baseline.tier(tier),
                )
            }),
        }
    }
}

fn strip_leading_zero(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(magnitude) => format!("-{}", magnitude.trim_start_matches('0')),
        None => text.trim_start_matches('0').to_owned(),
    }
}
