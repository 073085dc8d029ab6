use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use dmon_core::{BaselineProfile, BaselineRegistry, BaselineTier, DamageConstants, PerTier};
use dmon_tables::builtin_baselines;
use serde::Deserialize;

/// Configuration file picked up from the working directory.
const DEFAULT_CONFIG_PATH: &str = "dmon.toml";

/// Settings loaded from the optional TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Damage dealt per ammunition unit.
    pub(crate) damage: DamageConstants,
    /// Additional baseline profiles keyed by code.
    baselines: BTreeMap<String, PerTier<BaselineTier>>,
}

impl Config {
    /// Loads `explicit`, or the default file when it exists.
    ///
    /// A missing explicit file is an error; a missing default file yields the
    /// built-in settings.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if path.is_file() {
                    Self::from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        let config = parse_config(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Built-in baselines extended with the configured profiles.
    ///
    /// A configured profile replaces a built-in one with the same code.
    pub(crate) fn registry(&self) -> BaselineRegistry {
        let mut registry = builtin_baselines();
        for (name, tiers) in &self.baselines {
            if let Some(replaced) = registry.insert(BaselineProfile::new(name, *tiers)) {
                log::info!("configured baseline {} replaces the built-in one", replaced.name());
            }
        }
        registry
    }
}

fn parse_config(contents: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(contents).context("failed to parse configuration toml contents")?;

    for name in config.baselines.keys() {
        if name.trim().is_empty() || name.contains(char::is_whitespace) {
            bail!("baseline code `{name}` must be a single word");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmon_core::Tier;

    const CUSTOM_PROFILE: &str = r#"
        [damage]
        shell = 70

        [baselines.mywad.easy]
        hitscan_percent = 30.0
        health_ratio = 6.0
        armor_ratio = 4.0
        bullet_damage_ratio = 5.0
        shell_damage_ratio = 3.0

        [baselines.mywad.medium]
        hitscan_percent = 32.0
        health_ratio = 4.0
        armor_ratio = 3.0
        bullet_damage_ratio = 4.0
        shell_damage_ratio = 2.0
        rocket_damage_ratio = 0.5

        [baselines.mywad.hard]
        hitscan_percent = 35.0
        health_ratio = 3.0
        armor_ratio = 2.0
        bullet_damage_ratio = 3.0
        shell_damage_ratio = 1.5

        [baselines.mywad.hard.reference]
        monsters = 120.0
    "#;

    #[test]
    fn empty_configuration_keeps_defaults() {
        let config = parse_config("").expect("empty configuration parses");
        assert_eq!(config.damage, DamageConstants::default());
        assert!(config.baselines.is_empty());
    }

    #[test]
    fn configured_profiles_join_the_registry() {
        let config = parse_config(CUSTOM_PROFILE).expect("configuration parses");
        assert_eq!(config.damage.shell, 70);
        assert_eq!(config.damage.bullet, 20);

        let registry = config.registry();
        let profile = registry.resolve("MYWAD").expect("configured profile resolves");
        assert_eq!(profile.tier(Tier::Medium).rocket_damage_ratio, Some(0.5));
        assert_eq!(profile.tier(Tier::Hard).reference.monsters, Some(120.0));
        assert!(registry.resolve("DOOM2").is_ok(), "built-in profiles remain");
    }

    #[test]
    fn configured_profile_replaces_builtin() {
        let replacement = CUSTOM_PROFILE.replace("mywad", "doom2");
        let config = parse_config(&replacement).expect("configuration parses");
        let registry = config.registry();

        let profile = registry.resolve("doom2").expect("profile resolves");
        assert_eq!(profile.tier(Tier::Easy).health_ratio, 6.0);
        assert_eq!(registry.names().filter(|name| *name == "DOOM2").count(), 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("[damage]\nchainsaw = 10\n").is_err());
        assert!(parse_config("verbose = true\n").is_err());
    }

    #[test]
    fn incomplete_profiles_are_rejected() {
        let missing_tier = r#"
            [baselines.partial.easy]
            hitscan_percent = 30.0
            health_ratio = 6.0
            armor_ratio = 4.0
            bullet_damage_ratio = 5.0
            shell_damage_ratio = 3.0
        "#;
        assert!(parse_config(missing_tier).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/dmon.toml"))).is_err());
    }
}
