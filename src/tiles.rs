// =============================================================================
// TILES.RS — Procedural 8×8 character tiles
//
// Every tile is rasterized from a closed-form shape test evaluated per pixel
// at the pixel's centered offset from the tile middle (3.5, 3.5):
// - RoundOpen:   disc with a mouth wedge cut out toward +x
// - RoundClosed: plain disc
// - Ghost:       disc head over a flat rectangular skirt, plus two eyes
// =============================================================================

use glam::DVec2;

use crate::canvas::{Canvas, Rgb};

/// Edge length of one square tile, in pixels.
pub const TILE_SIZE: u32 = 8;
/// Number of tiles laid out left-to-right in the atlas.
pub const TILE_COUNT: u32 = 8;

pub const ATLAS_WIDTH: u32 = TILE_SIZE * TILE_COUNT;
pub const ATLAS_HEIGHT: u32 = TILE_SIZE;

pub const BACKGROUND: Rgb = Rgb::BLACK;
pub const EYE_COLOR: Rgb = Rgb::WHITE;

/// Inclusive disc radius. Leaves the tile corners empty.
pub const DISC_RADIUS: f64 = 3.3;
/// Half-opening of the mouth wedge: |dy| < dx * slope.
pub const MOUTH_SLOPE: f64 = 0.9;
/// First row of the ghost skirt. Rows at or below it are solid.
pub const SKIRT_TOP: u32 = 3;
/// Local pixel positions forced to `EYE_COLOR` on ghost tiles.
pub const EYES: [(u32, u32); 2] = [(2, 3), (5, 3)];

const CENTER: DVec2 = DVec2::new(3.5, 3.5);

// ── ShapeKind ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Disc with the mouth open, facing +x.
    RoundOpen,
    /// Disc with the mouth shut.
    RoundClosed,
    /// Rounded head, flat skirt, two white eyes.
    Ghost,
}

// ── Tile table ────────────────────────────────────────────────────────────────

/// One atlas entry: frame name, fill color and silhouette.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub name: &'static str,
    pub color: Rgb,
    pub kind: ShapeKind,
}

const PAC_YELLOW: Rgb = Rgb::new(255, 230, 40);

/// The fixed atlas contents, in tile-index order.
pub const ATLAS_TILES: [TileSpec; TILE_COUNT as usize] = [
    TileSpec { name: "pacman_open",   color: PAC_YELLOW,               kind: ShapeKind::RoundOpen },
    TileSpec { name: "pacman_closed", color: PAC_YELLOW,               kind: ShapeKind::RoundClosed },
    TileSpec { name: "ghost_red",     color: Rgb::new(255, 60, 60),    kind: ShapeKind::Ghost },
    TileSpec { name: "ghost_pink",    color: Rgb::new(255, 140, 200),  kind: ShapeKind::Ghost },
    TileSpec { name: "ghost_cyan",    color: Rgb::new(60, 230, 230),   kind: ShapeKind::Ghost },
    TileSpec { name: "ghost_orange",  color: Rgb::new(255, 170, 40),   kind: ShapeKind::Ghost },
    TileSpec { name: "ghost_fright",  color: Rgb::new(60, 60, 255),    kind: ShapeKind::Ghost },
    TileSpec { name: "ghost_eaten",   color: Rgb::new(220, 220, 255),  kind: ShapeKind::Ghost },
];

// ── Shape tests ───────────────────────────────────────────────────────────────

/// Offset of local pixel (`x`, `y`) from the tile center.
#[inline]
fn centered(x: u32, y: u32) -> DVec2 {
    DVec2::new(x as f64, y as f64) - CENTER
}

#[inline]
fn in_disc(offset: DVec2) -> bool {
    offset.length_squared() <= DISC_RADIUS * DISC_RADIUS
}

/// Wedge opening toward +x, widening with distance from the center.
#[inline]
fn in_mouth(offset: DVec2) -> bool {
    offset.x > 0.0 && offset.y.abs() < offset.x * MOUTH_SLOPE
}

/// Color of local pixel (`x`, `y`) for a tile of the given `kind`.
pub fn shape_pixel(kind: ShapeKind, x: u32, y: u32, fill: Rgb, background: Rgb) -> Rgb {
    let offset = centered(x, y);
    match kind {
        ShapeKind::RoundClosed => {
            if in_disc(offset) { fill } else { background }
        }
        ShapeKind::RoundOpen => {
            if in_disc(offset) && !in_mouth(offset) { fill } else { background }
        }
        ShapeKind::Ghost => {
            if EYES.contains(&(x, y)) {
                EYE_COLOR
            } else if y >= SKIRT_TOP || in_disc(offset) {
                fill
            } else {
                background
            }
        }
    }
}

// ── Rasterization ─────────────────────────────────────────────────────────────

/// Draw tile `index` into its 8×8 block at column `index * TILE_SIZE`.
/// Pixels outside that block are left untouched.
pub fn render_tile(canvas: &mut Canvas, index: u32, color: Rgb, kind: ShapeKind) {
    let ox = index * TILE_SIZE;
    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            canvas.set(ox + x, y, shape_pixel(kind, x, y, color, BACKGROUND));
        }
    }
}

/// Allocate the atlas canvas and draw every entry of `ATLAS_TILES` into it.
pub fn rasterize_atlas() -> Canvas {
    let mut canvas = Canvas::new(ATLAS_WIDTH, ATLAS_HEIGHT, BACKGROUND);
    for (index, tile) in (0u32..).zip(ATLAS_TILES.iter()) {
        render_tile(&mut canvas, index, tile.color, tile.kind);
        tracing::debug!(index, name = tile.name, kind = ?tile.kind, "rendered tile");
    }
    canvas
}

// ── Tests ─────────────────────────────────────────────────────────────────────
