#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level reader for DOOM-format WAD archives.
//!
//! The reader loads the whole archive into memory, walks its lump directory
//! to find map markers and decodes each map's `THINGS` lump into
//! [`PlacementRecord`](dmon_core::PlacementRecord)s for the statistics
//! systems. Only binary map formats are decoded; UDMF maps are reported and
//! skipped.

mod archive;
mod error;
mod pattern;
mod things;

pub use archive::{Lump, MapEntry, MapFormat, Wad, WadKind};
pub use error::WadError;
pub use pattern::MapPattern;
pub use things::{decode_things, ThingLayout, DOOM_THING_SIZE, HEXEN_THING_SIZE};
