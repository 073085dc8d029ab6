use dmon_core::{ClassificationEntry, ClassificationTable};

const EMPTY: ClassificationEntry = ClassificationEntry::EMPTY;

const fn hitscan(monster_hit_points: u32) -> ClassificationEntry {
    ClassificationEntry {
        is_hitscan: true,
        monster_hit_points,
        ..EMPTY
    }
}

const fn meaty(monster_hit_points: u32) -> ClassificationEntry {
    ClassificationEntry {
        is_meaty: true,
        monster_hit_points,
        ..EMPTY
    }
}

const fn health(points: u32) -> ClassificationEntry {
    ClassificationEntry {
        health_points: points,
        ..EMPTY
    }
}

const fn armor(points: u32) -> ClassificationEntry {
    ClassificationEntry {
        armor_points: points,
        ..EMPTY
    }
}

const fn bonus_health(points: u32) -> ClassificationEntry {
    ClassificationEntry {
        bonus_health_points: points,
        ..EMPTY
    }
}

const fn ammo(bullets: u32, shells: u32, rockets: u32, plasma: u32) -> ClassificationEntry {
    ClassificationEntry {
        bullets,
        shells,
        rockets,
        plasma,
        ..EMPTY
    }
}

// Hitscanners that drop a weapon on death also carry its ammo.
const DOOM_THINGS: [(u16, ClassificationEntry); 42] = [
    // hitscan monsters
    (7, hitscan(3000)), // spider mastermind
    (
        9, // shotgun guy
        ClassificationEntry {
            shells: 4,
            ..hitscan(30)
        },
    ),
    (65, hitscan(70)), // chaingunner
    (
        3004, // zombieman
        ClassificationEntry {
            bullets: 5,
            ..hitscan(20)
        },
    ),
    (84, hitscan(50)), // wolfenstein ss
    // meaty monsters
    (3001, meaty(60)),  // imp
    (3002, meaty(150)), // demon
    (58, meaty(150)),   // spectre
    (3006, meaty(100)), // lost soul
    (3005, meaty(400)), // cacodemon
    (69, meaty(500)),   // hell knight
    (3003, meaty(1000)), // baron of hell
    (66, meaty(30)),    // revenant
    (67, meaty(600)),   // mancubus
    (68, meaty(500)),   // arachnotron
    (71, meaty(400)),   // pain elemental
    (64, meaty(700)),   // arch-vile
    (16, meaty(4000)),  // cyberdemon
    // health
    (2011, health(10)), // stimpack
    (2012, health(25)), // medikit
    (2014, health(1)),  // health bonus
    (2023, bonus_health(100)), // berserk
    (2013, bonus_health(100)), // soulsphere
    (
        83, // megasphere
        ClassificationEntry {
            bonus_armor_points: 200,
            ..bonus_health(200)
        },
    ),
    // armor
    (2015, armor(1)),   // armor bonus
    (2018, armor(100)), // green armor
    (2019, armor(200)), // blue armor
    // ammo
    (8, ammo(10, 4, 0, 0)),    // backpack
    (2008, ammo(0, 4, 0, 0)),  // shells
    (2049, ammo(0, 20, 0, 0)), // box of shells
    (2001, ammo(0, 8, 0, 0)),  // shotgun
    (82, ammo(0, 8, 0, 0)),    // super shotgun
    (2002, ammo(20, 0, 0, 0)), // chaingun
    (2007, ammo(10, 0, 0, 0)), // clip
    (2048, ammo(50, 0, 0, 0)), // box of bullets
    (2003, ammo(0, 0, 2, 0)),  // rocket launcher
    (2010, ammo(0, 0, 1, 0)),  // rocket
    (2046, ammo(0, 0, 5, 0)),  // box of rockets
    (2006, ammo(0, 0, 0, 40)), // bfg9000
    (2004, ammo(0, 0, 0, 40)), // plasma rifle
    (2047, ammo(0, 0, 0, 20)), // energy cell
    (17, ammo(0, 0, 0, 100)),  // energy cell pack
];

/// Classification of every DOOM and DOOM II thing that contributes to the metrics.
#[must_use]
pub fn doom_classification() -> ClassificationTable {
    ClassificationTable::from_entries(DOOM_THINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_are_unique() {
        let table = doom_classification();
        assert_eq!(table.len(), DOOM_THINGS.len());
    }

    #[test]
    fn monster_classes_are_exclusive() {
        for (code, entry) in DOOM_THINGS {
            assert!(
                !(entry.is_hitscan && entry.is_meaty),
                "type {code} is both hitscan and meaty"
            );
            if entry.monster_hit_points > 0 {
                assert!(entry.is_hitscan || entry.is_meaty, "type {code}");
            }
        }
    }

    #[test]
    fn monster_class_sizes_match_roster() {
        let hitscan = DOOM_THINGS.iter().filter(|(_, e)| e.is_hitscan).count();
        let meaty = DOOM_THINGS.iter().filter(|(_, e)| e.is_meaty).count();
        assert_eq!((hitscan, meaty), (5, 13));
    }

    #[test]
    fn decorations_are_unknown() {
        let table = doom_classification();
        assert!(table.lookup(2028).is_none(), "floor lamp is not scored");
        assert!(table.lookup(1).is_none(), "player start is not scored");
    }
}
