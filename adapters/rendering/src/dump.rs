use std::collections::BTreeMap;

use dmon_core::{
    rounding::{guarded_ratio, round_to},
    AverageDataset, BaselineTier, PerTier, RawCounts, ReferenceCounts,
};
use dmon_report::Report;
use serde::Serialize;

use crate::RenderError;

#[derive(Serialize)]
struct BaselineFile<'a> {
    baselines: BTreeMap<&'a str, PerTier<BaselineTier>>,
}

/// Renders the averages as a baseline profile named `name`.
///
/// The output uses the `[baselines.NAME.<tier>]` layout of the configuration
/// file so it can be pasted there as is. Every value is rounded to one
/// decimal place.
pub fn render_dump(report: &Report, name: &str) -> Result<String, RenderError> {
    let averages = report.averages.as_ref().ok_or(RenderError::MissingAverages)?;
    let code = name.trim().to_ascii_uppercase();
    let file = BaselineFile {
        baselines: BTreeMap::from([(code.as_str(), sample(averages.dataset()))]),
    };
    Ok(toml::to_string(&file)?)
}

fn sample(averages: &AverageDataset) -> PerTier<BaselineTier> {
    PerTier::from_fn(|tier| {
        let counts = &averages.counters[tier];
        let metrics = &averages.metrics[tier];
        let one_place = |value: f64| round_to(value, 1);
        let per_monster = |value: f64| guarded_ratio(value, counts.monsters());

        BaselineTier {
            hitscan_percent: one_place(metrics.hitscan_percent),
            health_ratio: one_place(metrics.health_ratio),
            armor_ratio: one_place(metrics.armor_ratio),
            bullet_damage_ratio: Some(one_place(metrics.bullet_damage_ratio)),
            shell_damage_ratio: Some(one_place(metrics.shell_damage_ratio)),
            rocket_damage_ratio: Some(one_place(metrics.rocket_damage_ratio)),
            plasma_damage_ratio: Some(one_place(metrics.plasma_damage_ratio)),
            reference: ReferenceCounts {
                monsters: Some(one_place(counts.monsters())),
                hitscanners: Some(one_place(counts.hitscan_monsters())),
                monster_hit_points: Some(one_place(counts.monster_hit_points())),
                health_points: Some(one_place(counts.health_points())),
                armor_points: Some(one_place(counts.armor_points())),
                bullets: Some(one_place(counts.bullets())),
                shells: Some(one_place(counts.shells())),
                rockets: Some(one_place(counts.rockets())),
                plasma_cells: Some(one_place(counts.plasma_cells())),
                bullets_per_monster: Some(one_place(per_monster(counts.bullets()))),
                shells_per_monster: Some(one_place(per_monster(counts.shells()))),
            },
        }
    })
}
