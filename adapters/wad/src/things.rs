use dmon_core::{PlacementRecord, TierActivity};

use crate::WadError;

/// Size in bytes of a DOOM format thing.
pub const DOOM_THING_SIZE: usize = 10;
/// Size in bytes of a Hexen format thing.
pub const HEXEN_THING_SIZE: usize = 20;

const FLAG_EASY: u16 = 0x0001;
const FLAG_MEDIUM: u16 = 0x0002;
const FLAG_HARD: u16 = 0x0004;

/// Binary layout of the records stored in a `THINGS` lump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThingLayout {
    /// `x, y, angle, type, flags`.
    Doom,
    /// `tid, x, y, z, angle, type, flags, special, args[5]`.
    Hexen,
}

impl ThingLayout {
    /// Size in bytes of one record.
    #[must_use]
    pub const fn record_size(self) -> usize {
        match self {
            Self::Doom => DOOM_THING_SIZE,
            Self::Hexen => HEXEN_THING_SIZE,
        }
    }

    // Offsets of the type and flags fields within a record.
    const fn field_offsets(self) -> (usize, usize) {
        match self {
            Self::Doom => (6, 8),
            Self::Hexen => (10, 12),
        }
    }
}

/// Decodes the contents of the `THINGS` lump of `map`.
///
/// Skill flags 1, 2 and 4 select the easy, medium and hard tiers. Every other
/// flag is ignored.
pub fn decode_things(
    map: &str,
    bytes: &[u8],
    layout: ThingLayout,
) -> Result<Vec<PlacementRecord>, WadError> {
    let record = layout.record_size();
    if bytes.len() % record != 0 {
        return Err(WadError::MalformedThings {
            map: map.to_owned(),
            size: bytes.len(),
            record,
        });
    }

    let (type_offset, flags_offset) = layout.field_offsets();
    Ok(bytes
        .chunks_exact(record)
        .map(|thing| {
            let type_code = read_u16(thing, type_offset);
            let flags = read_u16(thing, flags_offset);
            PlacementRecord::new(
                type_code,
                TierActivity::new(
                    flags & FLAG_EASY != 0,
                    flags & FLAG_MEDIUM != 0,
                    flags & FLAG_HARD != 0,
                ),
            )
        })
        .collect())
}

fn read_u16(record: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([record[offset], record[offset + 1]])
}
