use dmon_core::{
    DamageConstants, DisplayMode, DisplayPolicy, PlacementRecord, Tier, TierActivity,
    AVERAGES_LEVEL_NAME,
};
use dmon_report::{Report, ReportBuilder, ReportOptions};
use dmon_tables::{builtin_baselines, doom_classification};

fn level(name: &str, codes: &[u16]) -> (String, Vec<PlacementRecord>) {
    let records = codes
        .iter()
        .map(|&code| PlacementRecord::new(code, TierActivity::ALL))
        .collect();
    (name.to_owned(), records)
}

fn archive() -> Vec<(String, Vec<PlacementRecord>)> {
    vec![
        // two imps, a zombieman, a medikit and a shotgun
        level("MAP01", &[3001, 3001, 3004, 2012, 2001]),
        // player starts and a floor lamp only
        level("MAP02", &[1, 2, 2028]),
        // a chaingunner guarding a box of shells
        level("MAP03", &[65, 2049]),
    ]
}

fn build(options: ReportOptions) -> Report {
    let table = doom_classification();
    let registry = builtin_baselines();
    let baseline = registry.resolve("doom2").expect("built-in profile");
    ReportBuilder::new(&table, DamageConstants::default(), baseline, options)
        .build("TEST.WAD", archive())
}

#[test]
fn levels_are_analyzed_in_archive_order() {
    let report = build(ReportOptions::default());

    assert_eq!(report.source, "TEST.WAD");
    assert_eq!(report.baseline, "DOOM2");
    let names: Vec<_> = report
        .levels
        .iter()
        .map(|entry| entry.dataset.name.as_str())
        .collect();
    assert_eq!(names, ["MAP01", "MAP03"]);
    assert_eq!(report.skipped, ["MAP02"]);
    assert!(report.averages.is_none(), "averaging was not requested");
}

#[test]
fn level_metrics_and_flags_follow_the_pipeline() {
    let report = build(ReportOptions::default());
    let map01 = &report.levels[0];
    let easy = &map01.dataset.metrics[Tier::Easy];

    assert_eq!(map01.dataset.counters[Tier::Easy].bullets, 55);
    assert_eq!(easy.hitscan_percent, 33.0);
    assert_eq!(easy.health_ratio, 8.3);
    assert_eq!(easy.bullet_damage_ratio, 7.9);
    assert_eq!(easy.shell_damage_ratio, 4.3);
    assert_eq!(map01.dataset.flags[Tier::Easy].to_string(), "A");
    assert_eq!(map01.results[Tier::Easy].health_ratio, "8");
    assert_eq!(map01.results[Tier::Easy].flags.as_deref(), Some("A"));
}

#[test]
fn averages_cover_every_analyzed_level() {
    let report = build(ReportOptions {
        average: true,
        policy: DisplayPolicy::new(true, DisplayMode::Absolute),
        ..ReportOptions::default()
    });
    let averages = report.averages.as_ref().expect("averages requested");
    let means = &averages.dataset().counters[Tier::Medium];

    assert_eq!(averages.dataset().name, AVERAGES_LEVEL_NAME);
    assert_eq!(averages.level_count, 2);
    assert_eq!(means.shells, 14.0);
    assert_eq!(means.hitscan_monster_count, 1.0);
    assert_eq!(means.meaty_monster_count, 1.0);
    assert_eq!(averages.totals[Tier::Medium].shells, 28);
    assert_eq!(averages.dataset().metrics[Tier::Medium].hitscan_percent, 50.0);
    assert_eq!(averages.entry.results[Tier::Medium].shells, "14.0");
}

#[test]
fn archive_without_scored_levels_is_empty() {
    let table = doom_classification();
    let registry = builtin_baselines();
    let baseline = registry.resolve("DOOM").expect("built-in profile");
    let options = ReportOptions {
        average: true,
        ..ReportOptions::default()
    };
    let report = ReportBuilder::new(&table, DamageConstants::default(), baseline, options)
        .build("DECOR.WAD", vec![level("E1M1", &[1, 2028])]);

    assert!(report.is_empty());
    assert!(report.averages.is_none());
    assert_eq!(report.skipped, ["E1M1"]);
}

#[test]
fn report_serializes_levels_with_results() {
    let report = build(ReportOptions {
        average: true,
        ..ReportOptions::default()
    });
    let json = serde_json::to_value(&report).expect("serializes");

    assert_eq!(json["levels"][0]["name"], "MAP01");
    assert_eq!(json["levels"][0]["counters"]["easy"]["shells"], 8);
    assert_eq!(json["levels"][0]["flags"]["hard"], "A!");
    assert_eq!(json["levels"][1]["results"]["easy"]["hitscan_percent"], "100");
    assert_eq!(json["averages"]["name"], "AVERAGES");
    assert_eq!(json["averages"]["totals"]["easy"]["bullets"], 105);
    assert!(json.get("policy").is_none());
}
