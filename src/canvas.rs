// =============================================================================
// CANVAS.RS — Owned RGB pixel buffer shared by the rasterizer and the encoder
//
// The atlas is drawn into one row-major buffer (origin top-left). Tiles write
// disjoint column ranges; the encoder only reads.
// =============================================================================

// ── Rgb ──────────────────────────────────────────────────────────────────────

/// 24-bit color, channels in red, green, blue order. No alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Byte order used by bitmap pixel data.
    #[inline]
    pub fn to_bgr(self) -> [u8; 3] {
        [self.b(), self.g(), self.r()]
    }
}

// ── Canvas ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, pixels: vec![background; len] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Returns `false` (and writes nothing) when out of range.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb]> + ExactSizeIterator {
        // chunks_exact panics on a zero chunk size; a zero-width canvas has no pixels anyway.
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Copy out a `w × h` block starting at (`x`, `y`), row-major.
    /// Cells falling outside the canvas are skipped.
    pub fn sub_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Vec<Rgb> {
        let cap = w.min(self.width) as usize * h.min(self.height) as usize;
        let mut out = Vec::with_capacity(cap);
        for dy in 0..h {
            let Some(py) = y.checked_add(dy) else { break };
            for dx in 0..w {
                let Some(px) = x.checked_add(dx) else { break };
                if let Some(c) = self.get(px, py) {
                    out.push(c);
                }
            }
        }
        out
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
