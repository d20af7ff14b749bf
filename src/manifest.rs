// ── Atlas frame manifest ──────────────────────────────────────────────────────
//
// JSON sidecar read by the game's sprite loader:
//
//   { "frames": { "pacman_open": { "x": 0, "y": 0, "w": 8, "h": 8 }, ... } }
//
// Frame rectangles are in atlas pixels, origin top-left.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};
use crate::tiles::{TILE_SIZE, TileSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// Keyed by frame name. Sorted, so output is stable across runs.
    pub frames: BTreeMap<String, Frame>,
}

impl AtlasManifest {
    /// One frame per tile, tile `i` at column `i * TILE_SIZE` of a single row.
    pub fn from_tiles(tiles: &[TileSpec]) -> Self {
        let frames = (0u32..)
            .zip(tiles)
            .map(|(index, tile)| {
                let frame = Frame { x: index * TILE_SIZE, y: 0, w: TILE_SIZE, h: TILE_SIZE };
                (tile.name.to_string(), frame)
            })
            .collect();
        Self { frames }
    }

    pub fn get(&self, name: &str) -> Option<&Frame> {
        self.frames.get(name)
    }

    pub fn to_json_pretty(&self) -> AtlasResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> AtlasResult<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| AtlasError::io(path, e))?;
        tracing::info!(path = %path.display(), frames = self.frames.len(), "wrote manifest");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
