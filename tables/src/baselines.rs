use dmon_core::{BaselineProfile, BaselineRegistry, BaselineTier, PerTier, ReferenceCounts};

/// Profile selected when the caller does not ask for one.
pub const DEFAULT_BASELINE: &str = "DOOM2";

// Sampled by averaging every map of each release. The ammo samples count
// rounds per monster, not damage per hit point, so every damage ratio is
// left unset and the rounds are kept as reference data.
#[derive(Clone, Copy)]
struct Sample {
    hitscan_percent: f64,
    health_ratio: f64,
    armor_ratio: f64,
    bullets_per_monster: f64,
    shells_per_monster: f64,
    monsters: f64,
    hitscanners: f64,
    health_points: f64,
    armor_points: f64,
    bullets: f64,
    shells: f64,
}

impl Sample {
    const fn into_tier(self) -> BaselineTier {
        BaselineTier {
            hitscan_percent: self.hitscan_percent,
            health_ratio: self.health_ratio,
            armor_ratio: self.armor_ratio,
            bullet_damage_ratio: None,
            shell_damage_ratio: None,
            rocket_damage_ratio: None,
            plasma_damage_ratio: None,
            reference: ReferenceCounts {
                monsters: Some(self.monsters),
                hitscanners: Some(self.hitscanners),
                health_points: Some(self.health_points),
                armor_points: Some(self.armor_points),
                bullets: Some(self.bullets),
                shells: Some(self.shells),
                bullets_per_monster: Some(self.bullets_per_monster),
                shells_per_monster: Some(self.shells_per_monster),
                ..ReferenceCounts::NONE
            },
        }
    }
}

const PROFILE_DOOM: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 34.5,
        health_ratio: 9.4,
        armor_ratio: 9.1,
        bullets_per_monster: 9.1,
        shells_per_monster: 4.0,
        monsters: 38.3,
        hitscanners: 13.2,
        health_points: 359.1,
        armor_points: 348.1,
        bullets: 348.8,
        shells: 154.1,
    },
    Sample {
        hitscan_percent: 33.5,
        health_ratio: 5.4,
        armor_ratio: 5.2,
        bullets_per_monster: 5.5,
        shells_per_monster: 2.6,
        monsters: 65.6,
        hitscanners: 22.0,
        health_points: 354.7,
        armor_points: 339.9,
        bullets: 358.6,
        shells: 171.2,
    },
    Sample {
        hitscan_percent: 32.1,
        health_ratio: 3.8,
        armor_ratio: 3.7,
        bullets_per_monster: 4.0,
        shells_per_monster: 2.2,
        monsters: 90.1,
        hitscanners: 28.9,
        health_points: 340.1,
        armor_points: 329.1,
        bullets: 362.2,
        shells: 195.0,
    },
);

const PROFILE_DOOM2: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 38.5,
        health_ratio: 8.1,
        armor_ratio: 5.6,
        bullets_per_monster: 8.0,
        shells_per_monster: 3.6,
        monsters: 42.6,
        hitscanners: 16.4,
        health_points: 343.4,
        armor_points: 240.8,
        bullets: 339.1,
        shells: 151.9,
    },
    Sample {
        hitscan_percent: 34.9,
        health_ratio: 4.3,
        armor_ratio: 2.9,
        bullets_per_monster: 4.3,
        shells_per_monster: 2.2,
        monsters: 82.9,
        hitscanners: 28.9,
        health_points: 355.6,
        armor_points: 240.9,
        bullets: 353.9,
        shells: 178.5,
    },
    Sample {
        hitscan_percent: 32.3,
        health_ratio: 3.0,
        armor_ratio: 2.0,
        bullets_per_monster: 3.1,
        shells_per_monster: 1.6,
        monsters: 117.0,
        hitscanners: 37.8,
        health_points: 354.1,
        armor_points: 237.7,
        bullets: 358.0,
        shells: 190.9,
    },
);

const PROFILE_SIGIL: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 31.2,
        health_ratio: 6.0,
        armor_ratio: 12.0,
        bullets_per_monster: 9.3,
        shells_per_monster: 4.7,
        monsters: 39.2,
        hitscanners: 12.2,
        health_points: 235.8,
        armor_points: 470.3,
        bullets: 363.3,
        shells: 183.1,
    },
    Sample {
        hitscan_percent: 32.6,
        health_ratio: 3.4,
        armor_ratio: 6.9,
        bullets_per_monster: 5.1,
        shells_per_monster: 3.3,
        monsters: 68.2,
        hitscanners: 22.2,
        health_points: 234.7,
        armor_points: 470.3,
        bullets: 349.4,
        shells: 221.8,
    },
    Sample {
        hitscan_percent: 32.0,
        health_ratio: 2.1,
        armor_ratio: 4.9,
        bullets_per_monster: 3.9,
        shells_per_monster: 2.8,
        monsters: 84.8,
        hitscanners: 27.1,
        health_points: 178.1,
        armor_points: 413.1,
        bullets: 334.4,
        shells: 233.3,
    },
);

const PROFILE_AV: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 26.4,
        health_ratio: 3.4,
        armor_ratio: 2.5,
        bullets_per_monster: 2.3,
        shells_per_monster: 2.5,
        monsters: 171.5,
        hitscanners: 45.2,
        health_points: 590.8,
        armor_points: 424.1,
        bullets: 392.0,
        shells: 424.5,
    },
    Sample {
        hitscan_percent: 24.7,
        health_ratio: 2.5,
        armor_ratio: 1.7,
        bullets_per_monster: 1.7,
        shells_per_monster: 2.1,
        monsters: 251.5,
        hitscanners: 62.1,
        health_points: 626.9,
        armor_points: 427.1,
        bullets: 435.0,
        shells: 540.0,
    },
    Sample {
        hitscan_percent: 23.7,
        health_ratio: 1.8,
        armor_ratio: 1.3,
        bullets_per_monster: 1.3,
        shells_per_monster: 1.8,
        monsters: 342.0,
        hitscanners: 80.9,
        health_points: 627.0,
        armor_points: 455.3,
        bullets: 455.8,
        shells: 608.4,
    },
);

const PROFILE_HR: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 16.3,
        health_ratio: 5.1,
        armor_ratio: 2.8,
        bullets_per_monster: 3.8,
        shells_per_monster: 5.5,
        monsters: 112.2,
        hitscanners: 18.3,
        health_points: 577.5,
        armor_points: 308.7,
        bullets: 424.4,
        shells: 617.5,
    },
    Sample {
        hitscan_percent: 14.3,
        health_ratio: 3.3,
        armor_ratio: 1.8,
        bullets_per_monster: 2.4,
        shells_per_monster: 3.5,
        monsters: 181.8,
        hitscanners: 26.1,
        health_points: 600.9,
        armor_points: 327.5,
        bullets: 432.0,
        shells: 640.1,
    },
    Sample {
        hitscan_percent: 13.0,
        health_ratio: 2.5,
        armor_ratio: 1.4,
        bullets_per_monster: 1.9,
        shells_per_monster: 2.8,
        monsters: 224.2,
        hitscanners: 29.1,
        health_points: 570.9,
        armor_points: 315.0,
        bullets: 425.0,
        shells: 638.0,
    },
);

const PROFILE_DTWID: PerTier<Sample> = PerTier::new(
    Sample {
        hitscan_percent: 32.6,
        health_ratio: 6.9,
        armor_ratio: 7.2,
        bullets_per_monster: 11.5,
        shells_per_monster: 4.1,
        monsters: 65.6,
        hitscanners: 21.4,
        health_points: 449.6,
        armor_points: 473.7,
        bullets: 754.8,
        shells: 266.5,
    },
    Sample {
        hitscan_percent: 31.4,
        health_ratio: 5.0,
        armor_ratio: 5.2,
        bullets_per_monster: 8.5,
        shells_per_monster: 3.2,
        monsters: 90.8,
        hitscanners: 28.5,
        health_points: 450.7,
        armor_points: 470.2,
        bullets: 769.8,
        shells: 287.9,
    },
    Sample {
        hitscan_percent: 32.3,
        health_ratio: 4.1,
        armor_ratio: 4.3,
        bullets_per_monster: 7.1,
        shells_per_monster: 2.8,
        monsters: 108.9,
        hitscanners: 35.1,
        health_points: 447.3,
        armor_points: 470.2,
        bullets: 775.2,
        shells: 307.4,
    },
);

const PROFILES: [(&str, PerTier<Sample>); 6] = [
    ("DOOM", PROFILE_DOOM),
    ("DOOM2", PROFILE_DOOM2),
    ("SIGIL", PROFILE_SIGIL),
    ("AV", PROFILE_AV),
    ("HR", PROFILE_HR),
    ("DTWID", PROFILE_DTWID),
];

/// Registry holding the profiles sampled from DOOM, DOOM II, SIGIL, Alien
/// Vendetta, Hell Revealed and Doom the Way id Did.
#[must_use]
pub fn builtin_baselines() -> BaselineRegistry {
    let mut registry = BaselineRegistry::new();
    for (name, samples) in PROFILES {
        let tiers = samples.map(|_, sample| sample.into_tier());
        let _ = registry.insert(BaselineProfile::new(name, tiers));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmon_core::{Statistic, Tier};

    #[test]
    fn every_builtin_profile_resolves() {
        let registry = builtin_baselines();
        for name in ["doom", "DOOM2", "Sigil", "av", "hr", "dtwid"] {
            assert!(registry.resolve(name).is_ok(), "{name} should resolve");
        }
        assert!(registry.resolve(DEFAULT_BASELINE).is_ok());
    }

    #[test]
    fn doom2_easy_matches_sample() {
        let registry = builtin_baselines();
        let easy = registry
            .resolve("DOOM2")
            .expect("DOOM2 is built in")
            .tier(Tier::Easy);
        assert_eq!(easy.hitscan_percent, 38.5);
        assert_eq!(easy.health_ratio, 8.1);
        assert_eq!(easy.counterpart(Statistic::Monsters), Some(42.6));
        assert_eq!(easy.counterpart(Statistic::PlasmaRatio), None);
        assert_eq!(easy.reference.bullets_per_monster, Some(8.0));
        assert_eq!(easy.reference.shells_per_monster, Some(3.6));
    }

    #[test]
    fn ammo_samples_are_not_damage_ratios() {
        let registry = builtin_baselines();
        for name in registry.names() {
            let tiers = registry.resolve(name).expect("registered").tiers();
            for (tier, reference) in tiers.iter() {
                assert_eq!(reference.bullet_damage_ratio, None, "{name} {tier}");
                assert_eq!(reference.shell_damage_ratio, None, "{name} {tier}");
                assert!(reference.reference.bullets_per_monster.is_some(), "{name} {tier}");
            }
        }
    }

    #[test]
    fn harder_tiers_field_more_monsters() {
        let registry = builtin_baselines();
        for name in registry.names() {
            let tiers = registry.resolve(name).expect("registered").tiers();
            let easy = tiers.easy.reference.monsters.unwrap_or_default();
            let hard = tiers.hard.reference.monsters.unwrap_or_default();
            assert!(hard > easy, "{name}: {hard} <= {easy}");
        }
    }
}
