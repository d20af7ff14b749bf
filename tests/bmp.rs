use image::ImageFormat;
use pacatlas::bmp::{FileHeader, InfoHeader, encode_bitmap};
use pacatlas::canvas::{Canvas, Rgb};
use pacatlas::tiles::rasterize_atlas;

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

fn decode(bytes: &[u8]) -> image::RgbImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Bmp)
        .expect("standard reader rejected the bitmap")
        .to_rgb8()
}

// ── Size and headers ──────────────────────────────────────────────────────

#[test]
fn atlas_file_is_1590_bytes() {
    let bytes = encode_bitmap(&rasterize_atlas());
    assert_eq!(bytes.len(), 14 + 40 + 64 * 3 * 8);
    assert_eq!(bytes.len(), 1590);
}

#[test]
fn file_header_fields() {
    let bytes = encode_bitmap(&rasterize_atlas());
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(le_u32(&bytes, 2), 1590);
    assert_eq!(le_u32(&bytes, 6), 0, "reserved fields");
    assert_eq!(le_u32(&bytes, 10), 54);
}

#[test]
fn info_header_fields() {
    let bytes = encode_bitmap(&rasterize_atlas());
    let info = &bytes[FileHeader::SIZE..FileHeader::SIZE + InfoHeader::SIZE];
    assert_eq!(le_u32(info, 0), 40);
    assert_eq!(le_u32(info, 4), 64);
    assert_eq!(le_u32(info, 8), 8);
    assert_eq!(le_u32(info, 20), 1536);
}

// ── Pixel data ────────────────────────────────────────────────────────────

#[test]
fn first_stored_pixel_is_bottom_left_in_bgr() {
    let mut c = Canvas::new(4, 2, Rgb::BLACK);
    c.set(0, 1, Rgb::new(10, 20, 30));
    c.set(0, 0, Rgb::new(40, 50, 60));
    let bytes = encode_bitmap(&c);
    assert_eq!(&bytes[54..57], &[30, 20, 10]);
    assert_eq!(&bytes[54 + 12..54 + 15], &[60, 50, 40]);
}

#[test]
fn standard_reader_sees_top_left_of_tile_zero() {
    let canvas = rasterize_atlas();
    let img = decode(&encode_bitmap(&canvas));
    assert_eq!(img.dimensions(), (64, 8));
    assert_eq!(img.get_pixel(0, 0).0, canvas.get(0, 0).unwrap().0);
}

#[test]
fn standard_reader_sees_ghost_skirt_at_bottom() {
    let img = decode(&encode_bitmap(&rasterize_atlas()));
    assert_eq!(img.get_pixel(16, 7).0, [255, 60, 60]);
    assert_eq!(img.get_pixel(16, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(18, 3).0, [255, 255, 255]);
}

#[test]
fn standard_reader_matches_whole_canvas() {
    let canvas = rasterize_atlas();
    let img = decode(&encode_bitmap(&canvas));
    for (x, y, p) in img.enumerate_pixels() {
        assert_eq!(p.0, canvas.get(x, y).unwrap().0, "pixel ({x},{y})");
    }
}

#[test]
fn padded_width_decodes_cleanly() {
    // 5 × 3 = 15 bytes per row, padded to 16.
    let mut c = Canvas::new(5, 3, Rgb::BLACK);
    c.set(4, 0, Rgb::new(255, 0, 0));
    c.set(0, 2, Rgb::new(0, 0, 255));
    let bytes = encode_bitmap(&c);
    assert_eq!(bytes.len(), 54 + 16 * 3);
    let img = decode(&bytes);
    assert_eq!(img.get_pixel(4, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(0, 2).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0]);
}
