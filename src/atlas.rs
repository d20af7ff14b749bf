// =============================================================================
// ATLAS.RS — Generate-and-write pipeline
//
// One linear pass: allocate the canvas, draw all tiles, encode the bitmap,
// write it, then write the frame manifest beside it.
// =============================================================================

use std::fs;
use std::path::PathBuf;

use crate::bmp;
use crate::config::GeneratorConfig;
use crate::error::{AtlasError, AtlasResult};
use crate::manifest::AtlasManifest;
use crate::tiles::{self, ATLAS_TILES};

/// What `generate` wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateReport {
    pub image_path: PathBuf,
    /// `None` when the manifest is disabled in the config.
    pub manifest_path: Option<PathBuf>,
    pub image_bytes: u64,
}

/// Run the whole pipeline for `config`.
///
/// Fails with `AtlasError::Io` when an output file cannot be created or
/// written (missing directory, permissions, full disk).
pub fn generate(config: &GeneratorConfig) -> AtlasResult<GenerateReport> {
    if config.create_dirs {
        fs::create_dir_all(&config.output_dir).map_err(|e| AtlasError::io(&config.output_dir, e))?;
    }

    let canvas = tiles::rasterize_atlas();

    let image_path = config.image_path();
    let image_bytes = bmp::write_bitmap(&image_path, &canvas)?;

    let manifest_path = if config.write_manifest {
        let path = config.manifest_path();
        AtlasManifest::from_tiles(&ATLAS_TILES).write(&path)?;
        Some(path)
    } else {
        None
    };

    Ok(GenerateReport { image_path, manifest_path, image_bytes })
}
