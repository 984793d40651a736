//! Pixel-format conversion for captured frames.

use image::{Rgb, RgbImage};

/// Converts a raw top-down 32-bit BGRA frame into a contiguous RGB image,
/// dropping the alpha channel.
///
/// Downstream template matching rejects 4-channel or strided inputs, so the
/// result is always exactly `height` rows of `width * 3` bytes.
///
/// `row_pitch` is the source stride in bytes; for the 32-bit DIBs produced by
/// `GetDIBits` it equals `width * 4`.
pub fn bgra_to_rgb(raw: &[u8], width: u32, height: u32, row_pitch: usize) -> RgbImage {
    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        let row = y as usize * row_pitch;
        for x in 0..width {
            let offset = row + x as usize * 4;
            // BGRA -> RGB
            let b = raw[offset];
            let g = raw[offset + 1];
            let r = raw[offset + 2];
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_swapped_and_alpha_dropped() {
        // One pixel: B=1, G=2, R=3, A=255.
        let img = bgra_to_rgb(&[1, 2, 3, 255], 1, 1, 4);
        assert_eq!(img.get_pixel(0, 0), &Rgb([3, 2, 1]));
    }

    #[test]
    fn test_output_is_contiguous_three_channel() {
        let raw = vec![0u8; 5 * 3 * 4];
        let img = bgra_to_rgb(&raw, 5, 3, 5 * 4);
        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 3);
        // Row-major, stride == width * 3, no alpha channel.
        assert_eq!(img.as_raw().len(), 5 * 3 * 3);
        assert_eq!(img.sample_layout().height_stride, 5 * 3);
    }

    #[test]
    fn test_row_pitch_padding_skipped() {
        // 2x2 frame with 4 bytes of padding per row (pitch 12 instead of 8).
        let mut raw = vec![0u8; 2 * 12];
        raw[0] = 10; // (0,0) blue
        raw[12 + 4] = 20; // (1,1) blue
        let img = bgra_to_rgb(&raw, 2, 2, 12);
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 10]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 20]));
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let raw = vec![7u8; 4 * 2 * 4];
        let a = bgra_to_rgb(&raw, 4, 2, 16);
        let b = bgra_to_rgb(&raw, 4, 2, 16);
        assert_eq!(a.dimensions(), b.dimensions());
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
