// =============================================================================
// BMP.RS — Minimal uncompressed 24-bit bitmap writer
//
// Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
// stored bottom-up, each pixel as B, G, R. Rows are zero-padded to a 4-byte
// boundary. All multi-byte fields are little-endian. No palette, no
// compression, write-only.
// =============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::{AtlasError, AtlasResult};

pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: u32 = 3;
/// 2835 px/m, roughly 72 DPI.
pub const PIXELS_PER_METER: i32 = 2835;

// ── FileHeader ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
}

impl FileHeader {
    pub const SIZE: usize = 14;
    pub const MAGIC: [u8; 2] = *b"BM";

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&Self::MAGIC);
        bytes[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10: two reserved u16 fields, left zero.
        bytes[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        bytes
    }
}

// ── InfoHeader ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: i32,
    /// Positive: rows are stored bottom-up.
    pub height: i32,
    pub image_size: u32,
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&(Self::SIZE as u32).to_le_bytes());
        bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
        bytes[12..14].copy_from_slice(&1u16.to_le_bytes()); // color planes
        bytes[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        bytes[16..20].copy_from_slice(&0u32.to_le_bytes()); // BI_RGB
        bytes[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        bytes[24..28].copy_from_slice(&PIXELS_PER_METER.to_le_bytes());
        bytes[28..32].copy_from_slice(&PIXELS_PER_METER.to_le_bytes());
        // 32..40: palette size and important colors, both zero.
        bytes
    }
}

// ── Encoding ──────────────────────────────────────────────────────────────────

/// Bytes per stored row: `width * 3` rounded up to a multiple of 4.
#[inline]
pub fn row_stride(width: u32) -> u32 {
    (width * BYTES_PER_PIXEL).next_multiple_of(4)
}

/// Both headers for a `width × height` 24-bit image.
pub fn headers(width: u32, height: u32) -> (FileHeader, InfoHeader) {
    let image_size = row_stride(width) * height;
    let pixel_offset = (FileHeader::SIZE + InfoHeader::SIZE) as u32;
    (
        FileHeader { file_size: pixel_offset + image_size, pixel_offset },
        InfoHeader { width: width as i32, height: height as i32, image_size },
    )
}

/// Serialize `canvas` as a complete bitmap file image.
pub fn encode_bitmap(canvas: &Canvas) -> Vec<u8> {
    let (file, info) = headers(canvas.width(), canvas.height());
    let stride = row_stride(canvas.width()) as usize;
    let padding = stride - (canvas.width() * BYTES_PER_PIXEL) as usize;

    let mut out = Vec::with_capacity(file.file_size as usize);
    out.extend_from_slice(&file.to_bytes());
    out.extend_from_slice(&info.to_bytes());

    for row in canvas.rows().rev() {
        for px in row {
            out.extend_from_slice(&px.to_bgr());
        }
        out.extend(std::iter::repeat_n(0u8, padding));
    }

    debug_assert_eq!(out.len(), file.file_size as usize);
    out
}

/// Encode `canvas` and write it to `path`, replacing any existing file.
/// Returns the number of bytes written. The parent directory must exist.
pub fn write_bitmap(path: impl AsRef<Path>, canvas: &Canvas) -> AtlasResult<u64> {
    let path = path.as_ref();
    let bytes = encode_bitmap(canvas);

    let file = File::create(path).map_err(|e| AtlasError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| AtlasError::io(path, e))?;
    writer.flush().map_err(|e| AtlasError::io(path, e))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote bitmap");
    Ok(bytes.len() as u64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
