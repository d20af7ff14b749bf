use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "assets/sprites";
pub const DEFAULT_IMAGE_NAME: &str = "atlas.bmp";
pub const DEFAULT_MANIFEST_NAME: &str = "atlas.json";

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Where the generated atlas lands.
///
/// The defaults match the layout the game resolves at startup:
/// `assets/sprites/atlas.bmp` with `assets/sprites/atlas.json` beside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving both output files.
    pub output_dir: PathBuf,
    /// File name of the bitmap inside `output_dir`.
    pub image_name: String,
    /// File name of the JSON frame manifest inside `output_dir`.
    pub manifest_name: String,
    /// Also write the frame manifest.
    pub write_manifest: bool,
    /// Create `output_dir` when it is missing instead of failing.
    pub create_dirs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir:     PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_name:     DEFAULT_IMAGE_NAME.to_string(),
            manifest_name:  DEFAULT_MANIFEST_NAME.to_string(),
            write_manifest: true,
            create_dirs:    false,
        }
    }
}

impl GeneratorConfig {
    /// Defaults with a different output directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }

    pub fn image_path(&self) -> PathBuf {
        self.output_dir.join(&self.image_name)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest_name)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
