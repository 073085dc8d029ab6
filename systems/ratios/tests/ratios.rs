use dmon_core::{AveragedCounters, DamageConstants, PerTier, Tier, TierCounters};
use dmon_system_ratios::Ratios;

fn showcase_counters() -> TierCounters {
    TierCounters {
        hitscan_monster_count: 5,
        meaty_monster_count: 13,
        monster_hit_points_total: 11_760,
        health_points_total: 36,
        armor_points_total: 301,
        bullets: 145,
        shells: 48,
        rockets: 0,
        plasma_cells: 0,
    }
}

#[test]
fn derives_showcase_level_metrics() {
    let ratios = Ratios::new(DamageConstants::default());
    let metrics = ratios.derive(&showcase_counters());

    assert_eq!(metrics.monster_count, 18.0);
    assert_eq!(metrics.hitscan_percent, 28.0);
    assert_eq!(metrics.health_ratio, 2.0);
    assert_eq!(metrics.armor_ratio, 16.7);
    assert_eq!(metrics.bullet_damage_ratio, 0.2);
    assert_eq!(metrics.shell_damage_ratio, 0.3);
    assert_eq!(metrics.rocket_damage_ratio, 0.0);
    assert_eq!(metrics.plasma_damage_ratio, 0.0);
}

#[test]
fn level_without_monsters_yields_zero_ratios() {
    let ratios = Ratios::default();
    let counters = TierCounters {
        health_points_total: 125,
        armor_points_total: 200,
        shells: 40,
        ..TierCounters::new()
    };
    let metrics = ratios.derive(&counters);

    assert_eq!(metrics.monster_count, 0.0);
    assert_eq!(metrics.hitscan_percent, 0.0);
    assert_eq!(metrics.health_ratio, 0.0);
    assert_eq!(metrics.armor_ratio, 0.0);
    assert_eq!(metrics.bullet_damage_ratio, 0.0);
    assert_eq!(metrics.shell_damage_ratio, 0.0);
}

#[test]
fn ratios_round_the_stored_quotient() {
    let ratios = Ratios::default();
    let counters = TierCounters {
        meaty_monster_count: 20,
        monster_hit_points_total: 1_200,
        health_points_total: 7,
        armor_points_total: 5,
        ..TierCounters::new()
    };
    let metrics = ratios.derive(&counters);

    assert_eq!(metrics.health_ratio, 0.3, "7 / 20 is stored just below 0.35");
    assert_eq!(metrics.armor_ratio, 0.2, "5 / 20 is an exact tie");
}

#[test]
fn monsters_without_hit_points_yield_zero_damage_ratios() {
    let ratios = Ratios::new(DamageConstants::default());
    let counters = TierCounters {
        meaty_monster_count: 4,
        health_points_total: 10,
        shells: 8,
        rockets: 5,
        ..TierCounters::new()
    };
    let metrics = ratios.derive(&counters);

    assert_eq!(metrics.health_ratio, 2.5);
    assert_eq!(metrics.bullet_damage_ratio, 0.0);
    assert_eq!(metrics.shell_damage_ratio, 0.0);
    assert_eq!(metrics.rocket_damage_ratio, 0.0);
}

#[test]
fn damage_constants_weight_ammunition() {
    let counters = TierCounters {
        meaty_monster_count: 1,
        monster_hit_points_total: 1_000,
        bullets: 0,
        rockets: 10,
        plasma_cells: 40,
        ..TierCounters::new()
    };
    let custom = DamageConstants {
        rocket: 200,
        plasma: 50,
        ..DamageConstants::default()
    };

    let stock = Ratios::default().derive(&counters);
    let tuned = Ratios::new(custom).derive(&counters);

    assert_eq!(stock.rocket_damage_ratio, 1.0);
    assert_eq!(stock.plasma_damage_ratio, 1.0);
    assert_eq!(tuned.rocket_damage_ratio, 2.0);
    assert_eq!(tuned.plasma_damage_ratio, 2.0);
}

#[test]
fn averaged_counters_derive_like_measured_ones() {
    let averaged = AveragedCounters {
        hitscan_monster_count: 5.0,
        meaty_monster_count: 13.0,
        monster_hit_points_total: 11_760.0,
        health_points_total: 36.0,
        armor_points_total: 301.0,
        bullets: 145.0,
        shells: 48.0,
        ..AveragedCounters::default()
    };
    let ratios = Ratios::default();

    assert_eq!(ratios.derive(&averaged), ratios.derive(&showcase_counters()));
}

#[test]
fn derive_all_keeps_tiers_apart() {
    let ratios = Ratios::default();
    let counters = PerTier::new(
        showcase_counters(),
        TierCounters {
            hitscan_monster_count: 1,
            meaty_monster_count: 1,
            ..TierCounters::new()
        },
        TierCounters::new(),
    );
    let metrics = ratios.derive_all(&counters);

    assert_eq!(metrics[Tier::Easy].hitscan_percent, 28.0);
    assert_eq!(metrics[Tier::Medium].hitscan_percent, 50.0);
    assert_eq!(metrics[Tier::Hard].monster_count, 0.0);
}
