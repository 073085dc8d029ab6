use std::{fs, path::Path};

use dmon_core::PlacementRecord;

use crate::{
    things::{decode_things, ThingLayout},
    MapPattern, WadError,
};

const HEADER_SIZE: usize = 12;
const DIRECTORY_ENTRY_SIZE: usize = 16;
const LUMP_NAME_SIZE: usize = 8;

// Lumps that may follow a map marker in a binary format map.
const BINARY_MAP_LUMPS: [&str; 12] = [
    "THINGS", "LINEDEFS", "SIDEDEFS", "VERTEXES", "SEGS", "SSECTORS", "NODES", "SECTORS",
    "REJECT", "BLOCKMAP", "BEHAVIOR", "SCRIPTS",
];

/// Kind of archive announced by the header magic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WadKind {
    /// Complete game data.
    Iwad,
    /// Patch archive, typically a custom level set.
    Pwad,
}

/// Entry of the lump directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lump {
    /// Uppercase lump name.
    pub name: String,
    /// Offset of the lump data within the archive.
    pub offset: usize,
    /// Size of the lump data in bytes.
    pub size: usize,
}

/// Storage format of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapFormat {
    /// Binary DOOM format.
    Doom,
    /// Binary Hexen format, recognised by its `BEHAVIOR` lump.
    Hexen,
    /// Textual UDMF format.
    Udmf,
}

impl MapFormat {
    /// Layout of the `THINGS` lump, if the format has one.
    #[must_use]
    pub const fn thing_layout(self) -> Option<ThingLayout> {
        match self {
            Self::Doom => Some(ThingLayout::Doom),
            Self::Hexen => Some(ThingLayout::Hexen),
            Self::Udmf => None,
        }
    }
}

/// Map found in the lump directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapEntry {
    /// Name of the map marker, e.g. `MAP01` or `E1M1`.
    pub name: String,
    /// Storage format of the map.
    pub format: MapFormat,
    /// Directory index of the lump holding the map's things.
    pub things_lump: usize,
}

/// WAD archive held in memory.
#[derive(Clone, Debug)]
pub struct Wad {
    kind: WadKind,
    data: Vec<u8>,
    lumps: Vec<Lump>,
}

impl Wad {
    /// Reads and parses the archive stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| WadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::from_bytes(data)
    }

    /// Parses an archive from its raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, WadError> {
        if data.len() < HEADER_SIZE {
            return Err(WadError::TruncatedHeader { len: data.len() });
        }

        let kind = match &data[0..4] {
            b"IWAD" => WadKind::Iwad,
            b"PWAD" => WadKind::Pwad,
            other => {
                return Err(WadError::BadMagic {
                    found: String::from_utf8_lossy(other).into_owned(),
                })
            }
        };
        let lump_count = read_header_field(&data, 4, "lump count")?;
        let directory_offset = read_header_field(&data, 8, "directory offset")?;

        let directory_end = lump_count
            .checked_mul(DIRECTORY_ENTRY_SIZE)
            .and_then(|size| size.checked_add(directory_offset))
            .filter(|end| *end <= data.len())
            .ok_or(WadError::TruncatedDirectory {
                lumps: lump_count,
                offset: directory_offset,
                len: data.len(),
            })?;

        let lumps = data[directory_offset..directory_end]
            .chunks_exact(DIRECTORY_ENTRY_SIZE)
            .map(|entry| parse_directory_entry(entry, data.len()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { kind, data, lumps })
    }

    /// Kind of archive.
    #[must_use]
    pub const fn kind(&self) -> WadKind {
        self.kind
    }

    /// Lump directory in archive order.
    #[must_use]
    pub fn lumps(&self) -> &[Lump] {
        &self.lumps
    }

    /// Data of `lump`; empty for marker lumps.
    #[must_use]
    pub fn lump_data(&self, lump: &Lump) -> &[u8] {
        self.data
            .get(lump.offset..lump.offset + lump.size)
            .unwrap_or_default()
    }

    /// Maps in archive order.
    #[must_use]
    pub fn maps(&self) -> Vec<MapEntry> {
        self.lumps
            .iter()
            .zip(self.lumps.iter().skip(1))
            .enumerate()
            .filter_map(|(index, (marker, next))| {
                let format = match next.name.as_str() {
                    "THINGS" if self.has_behavior(index + 1) => MapFormat::Hexen,
                    "THINGS" => MapFormat::Doom,
                    "TEXTMAP" => MapFormat::Udmf,
                    _ => return None,
                };
                Some(MapEntry {
                    name: marker.name.clone(),
                    format,
                    things_lump: index + 1,
                })
            })
            .collect()
    }

    /// Decodes the placements of every map whose name matches `pattern`.
    ///
    /// UDMF maps are skipped with a warning.
    pub fn extract(
        &self,
        pattern: &MapPattern,
    ) -> Result<Vec<(String, Vec<PlacementRecord>)>, WadError> {
        let mut levels = Vec::new();

        for map in self.maps() {
            if !pattern.matches(&map.name) {
                continue;
            }
            let Some(layout) = map.format.thing_layout() else {
                log::warn!("{} is a UDMF map, which is not supported; skipping", map.name);
                continue;
            };

            let things = self.lump_data(&self.lumps[map.things_lump]);
            let records = decode_things(&map.name, things, layout)?;
            log::debug!(
                "{}: {:?} map with {} things",
                map.name,
                map.format,
                records.len()
            );
            levels.push((map.name, records));
        }

        Ok(levels)
    }

    fn has_behavior(&self, first_map_lump: usize) -> bool {
        self.lumps[first_map_lump..]
            .iter()
            .take_while(|lump| BINARY_MAP_LUMPS.contains(&lump.name.as_str()))
            .any(|lump| lump.name == "BEHAVIOR")
    }
}

fn read_word(bytes: &[u8], offset: usize) -> [u8; 4] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

fn read_header_field(data: &[u8], offset: usize, field: &'static str) -> Result<usize, WadError> {
    let value = i32::from_le_bytes(read_word(data, offset));
    usize::try_from(value).map_err(|_| WadError::InvalidHeader { field, value })
}

fn parse_directory_entry(entry: &[u8], archive_len: usize) -> Result<Lump, WadError> {
    let raw_name = &entry[8..8 + LUMP_NAME_SIZE];
    let name_len = raw_name
        .iter()
        .position(|byte| *byte == 0)
        .unwrap_or(LUMP_NAME_SIZE);
    let name = String::from_utf8_lossy(&raw_name[..name_len]).to_ascii_uppercase();

    let offset = u32::from_le_bytes(read_word(entry, 0)) as usize;
    let size = u32::from_le_bytes(read_word(entry, 4)) as usize;

    if size > 0 && offset.checked_add(size).map_or(true, |end| end > archive_len) {
        return Err(WadError::LumpOutOfBounds { name, offset, size });
    }
    Ok(Lump { name, offset, size })
}
