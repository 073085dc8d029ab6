use dmon_core::{
    AdvisoryFlag, AdvisoryFlags, BaselineProfile, BaselineTier, DerivedMetrics, DisplayMode,
    DisplayPolicy, LevelDataset, PerTier, ReferenceCounts, Statistic, Tier, TierCounters,
};
use dmon_system_formatter::{FormattedLevel, Formatter};

fn rounded(mode: DisplayMode) -> Formatter {
    Formatter::new(DisplayPolicy::new(false, mode))
}

fn fixed(mode: DisplayMode) -> Formatter {
    Formatter::new(DisplayPolicy::new(true, mode))
}

fn baseline_tier() -> BaselineTier {
    BaselineTier {
        hitscan_percent: 38.5,
        health_ratio: 8.1,
        armor_ratio: 5.6,
        bullet_damage_ratio: None,
        shell_damage_ratio: Some(0.1),
        rocket_damage_ratio: None,
        plasma_damage_ratio: None,
        reference: ReferenceCounts {
            monsters: Some(42.6),
            ..ReferenceCounts::NONE
        },
    }
}

fn showcase_dataset() -> LevelDataset {
    let counters = TierCounters {
        hitscan_monster_count: 5,
        meaty_monster_count: 13,
        monster_hit_points_total: 11_760,
        health_points_total: 36,
        armor_points_total: 301,
        bullets: 145,
        shells: 48,
        ..TierCounters::new()
    };
    let metrics = DerivedMetrics {
        monster_count: 18.0,
        hitscan_percent: 28.0,
        health_ratio: 2.0,
        armor_ratio: 16.7,
        bullet_damage_ratio: 0.2,
        shell_damage_ratio: 0.3,
        rocket_damage_ratio: 0.0,
        plasma_damage_ratio: 0.0,
    };
    let flags: AdvisoryFlags = [AdvisoryFlag::Health, AdvisoryFlag::Bullets]
        .into_iter()
        .collect();

    LevelDataset {
        name: "MAP01".to_owned(),
        counters: PerTier::from_fn(|_| counters),
        metrics: PerTier::from_fn(|_| metrics),
        flags: PerTier::new(flags, AdvisoryFlags::NONE, flags),
    }
}

#[test]
fn rounded_digits_keep_small_values_visible() {
    let formatter = rounded(DisplayMode::Absolute);

    assert_eq!(formatter.format_digit(0.42), ".4");
    assert_eq!(formatter.format_digit(0.04), ".04");
    assert_eq!(formatter.format_digit(-0.4), "-.4");
    assert_eq!(formatter.format_digit(0.0), "0");
    assert_eq!(formatter.format_digit(0.001), "0");
    assert_eq!(formatter.format_digit(16.7), "17");
    assert_eq!(formatter.format_digit(2.5), "2");
    assert_eq!(formatter.format_digit(-3.2), "-3");
}

#[test]
fn fixed_digits_show_one_decimal() {
    let formatter = fixed(DisplayMode::Absolute);

    assert_eq!(formatter.format_digit(2.0), "2.0");
    assert_eq!(formatter.format_digit(16.7), "16.7");
    assert_eq!(formatter.format_digit(28.0), "28.0");
    assert_eq!(formatter.format_digit(-0.04), "0.0");
}

#[test]
fn diff_mode_prefixes_positive_deltas() {
    let formatter = fixed(DisplayMode::Diff);

    assert_eq!(formatter.format_value(16.7, Some(5.6)), "+11.1");
    assert_eq!(formatter.format_value(2.0, Some(8.1)), "-6.1");
    assert_eq!(formatter.format_value(8.0, Some(8.0)), "0.0");
}

#[test]
fn rounded_diff_keeps_small_deltas() {
    let formatter = rounded(DisplayMode::Diff);

    assert_eq!(formatter.format_value(0.6, Some(0.2)), "+.4");
    assert_eq!(formatter.format_value(2.0, Some(8.1)), "-6");
}

#[test]
fn compare_mode_pairs_value_and_baseline() {
    assert_eq!(
        rounded(DisplayMode::Compare).format_value(2.0, Some(8.1)),
        "2/8"
    );
    assert_eq!(
        fixed(DisplayMode::Compare).format_value(16.7, Some(5.6)),
        "16.7/5.6"
    );
}

#[test]
fn missing_baseline_shows_plain_value() {
    for mode in [DisplayMode::Absolute, DisplayMode::Compare, DisplayMode::Diff] {
        assert_eq!(fixed(mode).format_value(1.5, None), "1.5");
    }
}

#[test]
fn formats_every_statistic_of_a_level() {
    let profile = BaselineProfile::new("doom2", PerTier::from_fn(|_| baseline_tier()));
    let level = fixed(DisplayMode::Compare).format_level(&showcase_dataset(), &profile);
    let easy = &level.tiers[Tier::Easy];

    assert_eq!(level.name, "MAP01");
    assert_eq!(easy.monsters, "18.0/42.6");
    assert_eq!(easy.hitscan_percent, "28.0/38.5");
    assert_eq!(easy.armor_ratio, "16.7/5.6");
    assert_eq!(easy.bullets, "145.0", "no reference bullets sampled");
    assert_eq!(easy.bullet_ratio, "0.2", "no reference bullet ratio sampled");
    assert_eq!(easy.shell_ratio, "0.3/0.1");
    assert_eq!(easy.rocket_ratio, "0.0", "no reference rocket ratio sampled");
    assert_eq!(easy.monster_hit_points, "11760.0");
    assert_eq!(easy.get(Statistic::HealthRatio), "2.0/8.1");
    assert_eq!(easy.flags.as_deref(), Some("Hb"));
    assert_eq!(level.tiers[Tier::Medium].flags, None);
    assert_eq!(level.tiers[Tier::Medium].flags_or_empty(), "");
}

#[test]
fn formatted_level_serializes_without_empty_flags() {
    let profile = BaselineProfile::new("doom2", PerTier::from_fn(|_| baseline_tier()));
    let level = rounded(DisplayMode::Absolute).format_level(&showcase_dataset(), &profile);
    let json = serde_json::to_value(&level).expect("serializes");

    assert_eq!(json["tiers"]["easy"]["flags"], "Hb");
    assert!(json["tiers"]["medium"].get("flags").is_none());
    assert_eq!(json["tiers"]["hard"]["bullet_ratio"], ".2");
}

#[test]
fn formatted_levels_compare_by_value() {
    fn total_equality<T: Eq>(_: &T) {}

    let profile = BaselineProfile::new("doom2", PerTier::from_fn(|_| baseline_tier()));
    let formatter = rounded(DisplayMode::Diff);
    let level: FormattedLevel = formatter.format_level(&showcase_dataset(), &profile);

    total_equality(&level);
    assert_eq!(level, formatter.format_level(&showcase_dataset(), &profile));
    assert_ne!(level.tiers.easy, level.tiers.medium, "flags differ");
}
