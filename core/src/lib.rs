#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the dmon level analysis engine.
//!
//! This crate defines the data that flows between the level reader, the pure
//! statistics systems and the presentation adapters. Readers produce
//! [`PlacementRecord`] sequences, the accumulator folds them into
//! [`TierCounters`], the ratio deriver turns any [`RawCounts`] into
//! [`DerivedMetrics`], and the comparator checks those metrics against a
//! [`BaselineProfile`] to produce [`AdvisoryFlags`]. Every lookup table is an
//! explicit value handed to the systems that need it; nothing here is global.

pub mod rounding;

use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Bullets every player starts a level with.
pub const STARTING_BULLETS: u32 = 50;

/// Name given to the synthetic level that holds cross-level averages.
pub const AVERAGES_LEVEL_NAME: &str = "AVERAGES";

/// Difficulty tiers under which a level can expose different entity sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Skill levels one and two.
    Easy,
    /// Skill level three.
    Medium,
    /// Skill levels four and five.
    Hard,
}

impl Tier {
    /// All tiers in presentation order.
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    /// Lowercase name used in data formats.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Uppercase label used as a table heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Holds exactly one value per difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerTier<T> {
    /// Value associated with [`Tier::Easy`].
    pub easy: T,
    /// Value associated with [`Tier::Medium`].
    pub medium: T,
    /// Value associated with [`Tier::Hard`].
    pub hard: T,
}

impl<T> PerTier<T> {
    /// Creates a new container from explicit per-tier values.
    #[must_use]
    pub const fn new(easy: T, medium: T, hard: T) -> Self {
        Self { easy, medium, hard }
    }

    /// Builds a container by invoking `build` once per tier in presentation order.
    #[must_use]
    pub fn from_fn(mut build: impl FnMut(Tier) -> T) -> Self {
        let easy = build(Tier::Easy);
        let medium = build(Tier::Medium);
        let hard = build(Tier::Hard);
        Self { easy, medium, hard }
    }

    /// Returns the value stored for `tier`.
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    /// Returns a mutable reference to the value stored for `tier`.
    #[must_use]
    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::Easy => &mut self.easy,
            Tier::Medium => &mut self.medium,
            Tier::Hard => &mut self.hard,
        }
    }

    /// Transforms every value, passing the tier it belongs to.
    #[must_use]
    pub fn map<U>(self, mut transform: impl FnMut(Tier, T) -> U) -> PerTier<U> {
        PerTier {
            easy: transform(Tier::Easy, self.easy),
            medium: transform(Tier::Medium, self.medium),
            hard: transform(Tier::Hard, self.hard),
        }
    }

    /// Borrows every value, preserving the per-tier layout.
    #[must_use]
    pub const fn as_ref(&self) -> PerTier<&T> {
        PerTier {
            easy: &self.easy,
            medium: &self.medium,
            hard: &self.hard,
        }
    }

    /// Iterates over the stored values in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

impl<T> Index<Tier> for PerTier<T> {
    type Output = T;

    fn index(&self, tier: Tier) -> &T {
        self.get(tier)
    }
}

impl<T> IndexMut<Tier> for PerTier<T> {
    fn index_mut(&mut self, tier: Tier) -> &mut T {
        self.get_mut(tier)
    }
}

/// Tiers under which a placed entity is present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierActivity {
    /// Entity is present on easy skills.
    pub easy: bool,
    /// Entity is present on the medium skill.
    pub medium: bool,
    /// Entity is present on hard skills.
    pub hard: bool,
}

impl TierActivity {
    /// Activity covering every tier.
    pub const ALL: Self = Self::new(true, true, true);

    /// Creates a new activity description.
    #[must_use]
    pub const fn new(easy: bool, medium: bool, hard: bool) -> Self {
        Self { easy, medium, hard }
    }

    /// Reports whether the entity is present on `tier`.
    #[must_use]
    pub const fn contains(&self, tier: Tier) -> bool {
        match tier {
            Tier::Easy => self.easy,
            Tier::Medium => self.medium,
            Tier::Hard => self.hard,
        }
    }
}

/// Single entity placed in a level, as supplied by a level reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Numeric type code of the entity.
    pub type_code: u16,
    /// Tiers under which the entity is present.
    pub active_in: TierActivity,
}

impl PlacementRecord {
    /// Creates a new placement record.
    #[must_use]
    pub const fn new(type_code: u16, active_in: TierActivity) -> Self {
        Self {
            type_code,
            active_in,
        }
    }
}

/// Category and numeric contributions of a single entity type.
///
/// The hitscan and meaty categories are mutually exclusive; an entry that is
/// neither describes a pickup or a decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    /// Monster attacks with an instant-hit ranged weapon.
    pub is_hitscan: bool,
    /// Monster attacks with melee or projectiles.
    pub is_meaty: bool,
    /// Hit points of the monster itself.
    pub monster_hit_points: u32,
    /// Health granted to the player by the pickup.
    pub health_points: u32,
    /// Health granted only when bonus items are counted.
    pub bonus_health_points: u32,
    /// Armor granted to the player by the pickup.
    pub armor_points: u32,
    /// Armor granted only when bonus items are counted.
    pub bonus_armor_points: u32,
    /// Bullets granted by the pickup or dropped by the monster.
    pub bullets: u32,
    /// Shells granted by the pickup or dropped by the monster.
    pub shells: u32,
    /// Rockets granted by the pickup.
    pub rockets: u32,
    /// Plasma cells granted by the pickup.
    pub plasma: u32,
}

impl ClassificationEntry {
    /// Entry that contributes nothing to any counter.
    pub const EMPTY: Self = Self {
        is_hitscan: false,
        is_meaty: false,
        monster_hit_points: 0,
        health_points: 0,
        bonus_health_points: 0,
        armor_points: 0,
        bonus_armor_points: 0,
        bullets: 0,
        shells: 0,
        rockets: 0,
        plasma: 0,
    };

    /// Health contributed by the entity, including bonus items when requested.
    #[must_use]
    pub const fn health_for(&self, include_bonus: bool) -> u32 {
        if include_bonus {
            self.health_points.saturating_add(self.bonus_health_points)
        } else {
            self.health_points
        }
    }

    /// Armor contributed by the entity, including bonus items when requested.
    #[must_use]
    pub const fn armor_for(&self, include_bonus: bool) -> u32 {
        if include_bonus {
            self.armor_points.saturating_add(self.bonus_armor_points)
        } else {
            self.armor_points
        }
    }
}

/// Immutable mapping from entity type codes to their classification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassificationTable {
    entries: HashMap<u16, ClassificationEntry>,
}

impl ClassificationTable {
    /// Creates an empty table; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(type code, entry)` pairs. Later duplicates win.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u16, ClassificationEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolves the classification of `type_code`, if the table knows it.
    #[must_use]
    pub fn lookup(&self, type_code: u16) -> Option<&ClassificationEntry> {
        self.entries.get(&type_code)
    }

    /// Number of type codes described by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the table describes no type codes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Damage dealt per unit of each ammunition kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DamageConstants {
    /// Damage per bullet.
    pub bullet: u32,
    /// Damage per shell.
    pub shell: u32,
    /// Damage per rocket.
    pub rocket: u32,
    /// Damage per plasma cell.
    pub plasma: u32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        Self {
            bullet: 20,
            shell: 75,
            rocket: 100,
            plasma: 25,
        }
    }
}

/// Read access to the raw counters of a tier, whether measured or averaged.
pub trait RawCounts {
    /// Number of hitscan-class monsters.
    fn hitscan_monsters(&self) -> f64;
    /// Number of meaty-class monsters.
    fn meaty_monsters(&self) -> f64;
    /// Sum of the hit points of every monster.
    fn monster_hit_points(&self) -> f64;
    /// Sum of the health granted by pickups.
    fn health_points(&self) -> f64;
    /// Sum of the armor granted by pickups.
    fn armor_points(&self) -> f64;
    /// Bullets available, including the starting allowance.
    fn bullets(&self) -> f64;
    /// Shells available.
    fn shells(&self) -> f64;
    /// Rockets available.
    fn rockets(&self) -> f64;
    /// Plasma cells available.
    fn plasma_cells(&self) -> f64;

    /// Total number of monsters.
    fn monsters(&self) -> f64 {
        self.hitscan_monsters() + self.meaty_monsters()
    }
}

/// Raw aggregate counts gathered for one tier of one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounters {
    /// Number of hitscan-class monsters.
    pub hitscan_monster_count: u32,
    /// Number of meaty-class monsters.
    pub meaty_monster_count: u32,
    /// Sum of the hit points of every monster.
    pub monster_hit_points_total: u32,
    /// Sum of the health granted by pickups.
    pub health_points_total: u32,
    /// Sum of the armor granted by pickups.
    pub armor_points_total: u32,
    /// Bullets available, including [`STARTING_BULLETS`].
    pub bullets: u32,
    /// Shells available.
    pub shells: u32,
    /// Rockets available.
    pub rockets: u32,
    /// Plasma cells available.
    pub plasma_cells: u32,
}

impl TierCounters {
    /// Creates counters for a tier with nothing placed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hitscan_monster_count: 0,
            meaty_monster_count: 0,
            monster_hit_points_total: 0,
            health_points_total: 0,
            armor_points_total: 0,
            bullets: STARTING_BULLETS,
            shells: 0,
            rockets: 0,
            plasma_cells: 0,
        }
    }

    /// Total number of monsters present on the tier.
    #[must_use]
    pub const fn monster_count(&self) -> u32 {
        self.hitscan_monster_count
            .saturating_add(self.meaty_monster_count)
    }
}

impl Default for TierCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl RawCounts for TierCounters {
    fn hitscan_monsters(&self) -> f64 {
        f64::from(self.hitscan_monster_count)
    }

    fn meaty_monsters(&self) -> f64 {
        f64::from(self.meaty_monster_count)
    }

    fn monster_hit_points(&self) -> f64 {
        f64::from(self.monster_hit_points_total)
    }

    fn health_points(&self) -> f64 {
        f64::from(self.health_points_total)
    }

    fn armor_points(&self) -> f64 {
        f64::from(self.armor_points_total)
    }

    fn bullets(&self) -> f64 {
        f64::from(self.bullets)
    }

    fn shells(&self) -> f64 {
        f64::from(self.shells)
    }

    fn rockets(&self) -> f64 {
        f64::from(self.rockets)
    }

    fn plasma_cells(&self) -> f64 {
        f64::from(self.plasma_cells)
    }
}

/// Arithmetic mean of [`TierCounters`] across several levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AveragedCounters {
    /// Mean number of hitscan-class monsters.
    pub hitscan_monster_count: f64,
    /// Mean number of meaty-class monsters.
    pub meaty_monster_count: f64,
    /// Mean sum of monster hit points.
    pub monster_hit_points_total: f64,
    /// Mean sum of health points.
    pub health_points_total: f64,
    /// Mean sum of armor points.
    pub armor_points_total: f64,
    /// Mean bullets available.
    pub bullets: f64,
    /// Mean shells available.
    pub shells: f64,
    /// Mean rockets available.
    pub rockets: f64,
    /// Mean plasma cells available.
    pub plasma_cells: f64,
}

impl RawCounts for AveragedCounters {
    fn hitscan_monsters(&self) -> f64 {
        self.hitscan_monster_count
    }

    fn meaty_monsters(&self) -> f64 {
        self.meaty_monster_count
    }

    fn monster_hit_points(&self) -> f64 {
        self.monster_hit_points_total
    }

    fn health_points(&self) -> f64 {
        self.health_points_total
    }

    fn armor_points(&self) -> f64 {
        self.armor_points_total
    }

    fn bullets(&self) -> f64 {
        self.bullets
    }

    fn shells(&self) -> f64 {
        self.shells
    }

    fn rockets(&self) -> f64 {
        self.rockets
    }

    fn plasma_cells(&self) -> f64 {
        self.plasma_cells
    }
}

/// Normalized metrics derived from the raw counters of one tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Total number of monsters.
    pub monster_count: f64,
    /// Share of monsters that are hitscan-class, as a whole percentage.
    pub hitscan_percent: f64,
    /// Health points per monster.
    pub health_ratio: f64,
    /// Armor points per monster.
    pub armor_ratio: f64,
    /// Potential bullet damage per monster hit point.
    pub bullet_damage_ratio: f64,
    /// Potential shell damage per monster hit point.
    pub shell_damage_ratio: f64,
    /// Potential rocket damage per monster hit point.
    pub rocket_damage_ratio: f64,
    /// Potential plasma damage per monster hit point.
    pub plasma_damage_ratio: f64,
}

/// Metric found on the unfavourable side of its baseline counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdvisoryFlag {
    /// Health ratio below baseline.
    Health,
    /// Armor ratio below baseline.
    Armor,
    /// Bullet damage ratio below baseline.
    Bullets,
    /// Shell damage ratio below baseline.
    Shells,
    /// Rocket damage ratio below baseline.
    Rockets,
    /// Plasma damage ratio below baseline.
    Plasma,
    /// Hitscan percentage above baseline.
    Hitscan,
}

impl AdvisoryFlag {
    /// Every flag in its fixed output order.
    pub const ALL: [AdvisoryFlag; 7] = [
        AdvisoryFlag::Health,
        AdvisoryFlag::Armor,
        AdvisoryFlag::Bullets,
        AdvisoryFlag::Shells,
        AdvisoryFlag::Rockets,
        AdvisoryFlag::Plasma,
        AdvisoryFlag::Hitscan,
    ];

    /// Single-character code used in reports.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Health => 'H',
            Self::Armor => 'A',
            Self::Bullets => 'b',
            Self::Shells => 's',
            Self::Rockets => 'r',
            Self::Plasma => 'p',
            Self::Hitscan => '!',
        }
    }

    /// Human readable explanation printed by the legend.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Health => "Health ratio is too low",
            Self::Armor => "Armor ratio is too low",
            Self::Bullets => "Bullet ratio is too low",
            Self::Shells => "Shell ratio is too low",
            Self::Rockets => "Rocket ratio is too low",
            Self::Plasma => "Plasma ratio is too low",
            Self::Hitscan => "Hitscanner percentage is too high",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Ordered set of advisory flags raised for one tier.
///
/// Iteration and display always follow [`AdvisoryFlag::ALL`], independent of
/// the order in which flags were inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdvisoryFlags(u8);

impl AdvisoryFlags {
    /// Set without any flags.
    pub const NONE: Self = Self(0);

    /// Adds `flag` to the set.
    pub fn insert(&mut self, flag: AdvisoryFlag) {
        self.0 |= flag.bit();
    }

    /// Reports whether `flag` is raised.
    #[must_use]
    pub const fn contains(&self, flag: AdvisoryFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Reports whether no flag is raised.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over raised flags in output order.
    pub fn iter(&self) -> impl Iterator<Item = AdvisoryFlag> + '_ {
        AdvisoryFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl FromIterator<AdvisoryFlag> for AdvisoryFlags {
    fn from_iter<I: IntoIterator<Item = AdvisoryFlag>>(iter: I) -> Self {
        let mut flags = Self::NONE;
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl fmt::Display for AdvisoryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag.code())?;
        }
        Ok(())
    }
}

impl Serialize for AdvisoryFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How numbers are rendered and how strictly baselines are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Plain values.
    Absolute,
    /// `value/baseline` pairs.
    Compare,
    /// Signed difference from the baseline.
    Diff,
}

/// Numeric presentation policy applied once to displayed and compared values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayPolicy {
    /// Keep one decimal place instead of rounding to whole numbers.
    pub fixed: bool,
    /// Relationship to the baseline shown alongside each value.
    pub mode: DisplayMode,
}

impl DisplayPolicy {
    /// Creates a new display policy.
    #[must_use]
    pub const fn new(fixed: bool, mode: DisplayMode) -> Self {
        Self { fixed, mode }
    }

    /// Applies the policy's precision to a value prior to comparison.
    ///
    /// Fixed-point policy leaves the value untouched; the rounded policy snaps
    /// it to the nearest whole number so flags agree with what is displayed.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        if self.fixed {
            value
        } else {
            rounding::round_whole(value)
        }
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::new(false, DisplayMode::Absolute)
    }
}

/// Statistic reported for every tier of every level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    /// Total number of monsters.
    Monsters,
    /// Number of hitscan-class monsters.
    Hitscanners,
    /// Hitscan percentage.
    HitscanPercent,
    /// Sum of the health points.
    HealthPoints,
    /// Health per monster.
    HealthRatio,
    /// Sum of the armor points.
    ArmorPoints,
    /// Armor per monster.
    ArmorRatio,
    /// Bullets available.
    Bullets,
    /// Bullet damage per monster hit point.
    BulletRatio,
    /// Shells available.
    Shells,
    /// Shell damage per monster hit point.
    ShellRatio,
    /// Rockets available.
    Rockets,
    /// Rocket damage per monster hit point.
    RocketRatio,
    /// Plasma cells available.
    PlasmaCells,
    /// Plasma damage per monster hit point.
    PlasmaRatio,
    /// Sum of monster hit points.
    MonsterHitPoints,
}

impl Statistic {
    /// Every statistic in report order.
    pub const ALL: [Statistic; 16] = [
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
        Statistic::MonsterHitPoints,
    ];

    /// Reads the statistic from a tier's raw counts and derived metrics.
    #[must_use]
    pub fn measure<C>(self, counts: &C, metrics: &DerivedMetrics) -> f64
    where
        C: RawCounts + ?Sized,
    {
        match self {
            Self::Monsters => counts.monsters(),
            Self::Hitscanners => counts.hitscan_monsters(),
            Self::HitscanPercent => metrics.hitscan_percent,
            Self::HealthPoints => counts.health_points(),
            Self::HealthRatio => metrics.health_ratio,
            Self::ArmorPoints => counts.armor_points(),
            Self::ArmorRatio => metrics.armor_ratio,
            Self::Bullets => counts.bullets(),
            Self::BulletRatio => metrics.bullet_damage_ratio,
            Self::Shells => counts.shells(),
            Self::ShellRatio => metrics.shell_damage_ratio,
            Self::Rockets => counts.rockets(),
            Self::RocketRatio => metrics.rocket_damage_ratio,
            Self::PlasmaCells => counts.plasma_cells(),
            Self::PlasmaRatio => metrics.plasma_damage_ratio,
            Self::MonsterHitPoints => counts.monster_hit_points(),
        }
    }
}

/// Reference raw counts sampled alongside a baseline's metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceCounts {
    /// Mean number of monsters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monsters: Option<f64>,
    /// Mean number of hitscan-class monsters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hitscanners: Option<f64>,
    /// Mean sum of monster hit points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monster_hit_points: Option<f64>,
    /// Mean sum of health points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_points: Option<f64>,
    /// Mean sum of armor points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_points: Option<f64>,
    /// Mean bullets available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<f64>,
    /// Mean shells available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shells: Option<f64>,
    /// Mean rockets available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rockets: Option<f64>,
    /// Mean plasma cells available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plasma_cells: Option<f64>,
    /// Mean bullets per monster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets_per_monster: Option<f64>,
    /// Mean shells per monster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shells_per_monster: Option<f64>,
}

impl ReferenceCounts {
    /// Reference without any sampled counts.
    pub const NONE: Self = Self {
        monsters: None,
        hitscanners: None,
        monster_hit_points: None,
        health_points: None,
        armor_points: None,
        bullets: None,
        shells: None,
        rockets: None,
        plasma_cells: None,
        bullets_per_monster: None,
        shells_per_monster: None,
    };
}

/// Reference values a single tier is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineTier {
    /// Reference hitscan percentage.
    pub hitscan_percent: f64,
    /// Reference health per monster.
    pub health_ratio: f64,
    /// Reference armor per monster.
    pub armor_ratio: f64,
    /// Reference bullet damage ratio, when the profile sampled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_damage_ratio: Option<f64>,
    /// Reference shell damage ratio, when the profile sampled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_damage_ratio: Option<f64>,
    /// Reference rocket damage ratio, when the profile sampled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_damage_ratio: Option<f64>,
    /// Reference plasma damage ratio, when the profile sampled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plasma_damage_ratio: Option<f64>,
    /// Raw counts sampled alongside the metrics.
    #[serde(default)]
    pub reference: ReferenceCounts,
}

impl BaselineTier {
    /// Baseline counterpart of `statistic`, if the profile provides one.
    #[must_use]
    pub const fn counterpart(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::Monsters => self.reference.monsters,
            Statistic::Hitscanners => self.reference.hitscanners,
            Statistic::HitscanPercent => Some(self.hitscan_percent),
            Statistic::HealthPoints => self.reference.health_points,
            Statistic::HealthRatio => Some(self.health_ratio),
            Statistic::ArmorPoints => self.reference.armor_points,
            Statistic::ArmorRatio => Some(self.armor_ratio),
            Statistic::Bullets => self.reference.bullets,
            Statistic::BulletRatio => self.bullet_damage_ratio,
            Statistic::Shells => self.reference.shells,
            Statistic::ShellRatio => self.shell_damage_ratio,
            Statistic::Rockets => self.reference.rockets,
            Statistic::RocketRatio => self.rocket_damage_ratio,
            Statistic::PlasmaCells => self.reference.plasma_cells,
            Statistic::PlasmaRatio => self.plasma_damage_ratio,
            Statistic::MonsterHitPoints => self.reference.monster_hit_points,
        }
    }
}

/// Named set of per-tier reference values representing a design norm.
#[derive(Clone, Debug, PartialEq)]
pub struct BaselineProfile {
    name: String,
    tiers: PerTier<BaselineTier>,
}

impl BaselineProfile {
    /// Creates a profile; the name is normalized to uppercase.
    #[must_use]
    pub fn new(name: &str, tiers: PerTier<BaselineTier>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            tiers,
        }
    }

    /// Uppercase code identifying the profile.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference values for every tier.
    #[must_use]
    pub const fn tiers(&self) -> &PerTier<BaselineTier> {
        &self.tiers
    }

    /// Reference values for `tier`.
    #[must_use]
    pub const fn tier(&self, tier: Tier) -> &BaselineTier {
        self.tiers.get(tier)
    }
}

/// Errors raised while selecting a baseline profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaselineError {
    /// No profile with the requested code exists.
    #[error("{name} is not a valid baseline code (choose from {available})")]
    Unknown {
        /// Code that was requested.
        name: String,
        /// Comma separated list of known codes.
        available: String,
    },
}

/// Registry of baseline profiles addressable by case-insensitive code.
#[derive(Clone, Debug, Default)]
pub struct BaselineRegistry {
    profiles: Vec<BaselineProfile>,
}

impl BaselineRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `profile`, returning the profile it replaced, if any.
    pub fn insert(&mut self, profile: BaselineProfile) -> Option<BaselineProfile> {
        match self
            .profiles
            .iter_mut()
            .find(|existing| existing.name == profile.name)
        {
            Some(existing) => Some(std::mem::replace(existing, profile)),
            None => {
                self.profiles.push(profile);
                None
            }
        }
    }

    /// Looks up the profile identified by `name`.
    pub fn resolve(&self, name: &str) -> Result<&BaselineProfile, BaselineError> {
        let code = name.trim().to_ascii_uppercase();
        self.profiles
            .iter()
            .find(|profile| profile.name == code)
            .ok_or_else(|| BaselineError::Unknown {
                name: code,
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Codes of the registered profiles in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(BaselineProfile::name)
    }
}

/// Fully derived statistics of one level (or of the averages pseudo-level).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LevelDataset<C = TierCounters> {
    /// Level name as found in the archive.
    pub name: String,
    /// Raw counters per tier.
    pub counters: PerTier<C>,
    /// Metrics derived from the counters.
    pub metrics: PerTier<DerivedMetrics>,
    /// Advisory flags raised against the selected baseline.
    pub flags: PerTier<AdvisoryFlags>,
}

/// Dataset holding the cross-level averages.
pub type AverageDataset = LevelDataset<AveragedCounters>;

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_tier() -> BaselineTier {
        BaselineTier {
            hitscan_percent: 38.5,
            health_ratio: 8.1,
            armor_ratio: 5.6,
            bullet_damage_ratio: Some(2.7),
            shell_damage_ratio: None,
            rocket_damage_ratio: None,
            plasma_damage_ratio: None,
            reference: ReferenceCounts {
                monsters: Some(42.6),
                ..ReferenceCounts::NONE
            },
        }
    }

    #[test]
    fn tier_counters_start_with_player_bullets() {
        let counters = TierCounters::new();
        assert_eq!(counters.bullets, STARTING_BULLETS);
        assert_eq!(counters.monster_count(), 0);
        assert_eq!(counters.shells, 0);
    }

    #[test]
    fn monster_count_sums_both_classes() {
        let counters = TierCounters {
            hitscan_monster_count: 5,
            meaty_monster_count: 13,
            ..TierCounters::new()
        };
        assert_eq!(counters.monster_count(), 18);
        assert_eq!(counters.monsters(), 18.0);
    }

    #[test]
    fn per_tier_indexes_by_tier() {
        let mut values = PerTier::from_fn(|tier| tier as u8);
        assert_eq!(values[Tier::Hard], 2);
        values[Tier::Medium] = 7;
        let collected: Vec<_> = values.iter().map(|(tier, value)| (tier, *value)).collect();
        assert_eq!(
            collected,
            vec![(Tier::Easy, 0), (Tier::Medium, 7), (Tier::Hard, 2)]
        );
    }

    #[test]
    fn flags_render_in_fixed_order() {
        let flags: AdvisoryFlags = [
            AdvisoryFlag::Hitscan,
            AdvisoryFlag::Shells,
            AdvisoryFlag::Health,
            AdvisoryFlag::Plasma,
        ]
        .into_iter()
        .collect();
        assert_eq!(flags.to_string(), "Hsp!");
        assert!(AdvisoryFlags::NONE.to_string().is_empty());
    }

    #[test]
    fn bonus_overlay_only_applies_when_requested() {
        let megasphere = ClassificationEntry {
            bonus_health_points: 200,
            bonus_armor_points: 200,
            ..ClassificationEntry::EMPTY
        };
        assert_eq!(megasphere.health_for(false), 0);
        assert_eq!(megasphere.health_for(true), 200);
        assert_eq!(megasphere.armor_for(true), 200);
    }

    #[test]
    fn quantize_respects_fixed_policy() {
        let fixed = DisplayPolicy::new(true, DisplayMode::Absolute);
        let rounded = DisplayPolicy::default();
        assert_eq!(fixed.quantize(16.7), 16.7);
        assert_eq!(rounded.quantize(16.7), 17.0);
    }

    #[test]
    fn registry_resolves_case_insensitively() {
        let mut registry = BaselineRegistry::new();
        assert!(registry
            .insert(BaselineProfile::new(
                "doom2",
                PerTier::from_fn(|_| baseline_tier())
            ))
            .is_none());

        let profile = registry.resolve("Doom2").expect("profile resolves");
        assert_eq!(profile.name(), "DOOM2");
        assert_eq!(profile.tier(Tier::Easy).health_ratio, 8.1);
    }

    #[test]
    fn registry_reports_unknown_codes() {
        let mut registry = BaselineRegistry::new();
        let _ = registry.insert(BaselineProfile::new(
            "DOOM",
            PerTier::from_fn(|_| baseline_tier()),
        ));
        let error = registry.resolve("heretic").unwrap_err();
        assert_eq!(
            error,
            BaselineError::Unknown {
                name: "HERETIC".to_owned(),
                available: "DOOM".to_owned(),
            }
        );
    }

    #[test]
    fn counterpart_is_missing_for_unsampled_metrics() {
        let tier = baseline_tier();
        assert_eq!(tier.counterpart(Statistic::HealthRatio), Some(8.1));
        assert_eq!(tier.counterpart(Statistic::Monsters), Some(42.6));
        assert_eq!(tier.counterpart(Statistic::RocketRatio), None);
        assert_eq!(tier.counterpart(Statistic::BulletRatio), Some(2.7));
        assert_eq!(tier.counterpart(Statistic::ShellRatio), None);
        assert_eq!(tier.counterpart(Statistic::Shells), None);
    }

    #[test]
    fn tier_counters_round_trip_through_bincode() {
        let counters = PerTier::new(
            TierCounters::new(),
            TierCounters {
                shells: 24,
                ..TierCounters::new()
            },
            TierCounters {
                hitscan_monster_count: 5,
                ..TierCounters::new()
            },
        );
        let bytes = bincode::serialize(&counters).expect("serialize");
        let restored: PerTier<TierCounters> = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, counters);
    }
}
