use log::debug;

use super::DitheringMethod;
use crate::image::*;

const BW_THRESHOLD: i32 = 128;
const WHITE: i32 = 0xff;

// 4x4 threshold matrices, row major, indexed by (y % 4) * 4 + (x % 4)
const BAYERS4_THRESHOLDS: [u8; 16] = [
    0, 128, 32, 160, 192, 64, 224, 96, 48, 176, 16, 144, 240, 112, 208, 80,
];

const BAYERS2_THRESHOLDS: [u8; 16] = [
    0, 128, 0, 128, 192, 64, 192, 64, 0, 128, 0, 128, 192, 64, 192, 64,
];

const NO_DITHERING_THRESHOLDS: [u8; 16] = [BW_THRESHOLD as u8; 16];

/// Reduce an 8bpp intensity image to 1bpp, "on" meaning lit.
pub fn dither(grey_src: &impl ConstImage, method: DitheringMethod) -> ImageBuffer {
    assert_eq!(grey_src.format(), ImageFormat::Mono8Bpp);
    debug!("Dithering {} image with {:?}", grey_src.size(), method);
    match method {
        DitheringMethod::FloydSteinberg => floyd_steinberg(grey_src),
        DitheringMethod::Bayers2 => ordered(grey_src, &BAYERS2_THRESHOLDS),
        DitheringMethod::Bayers4 => ordered(grey_src, &BAYERS4_THRESHOLDS),
        DitheringMethod::NoDithering => ordered(grey_src, &NO_DITHERING_THRESHOLDS),
    }
}

fn find_nearest_and_residual(src: i32) -> (bool, i32) {
    let on = src > BW_THRESHOLD;
    (on, if on { src - WHITE } else { src })
}

pub fn floyd_steinberg(grey_src: &impl ConstImage) -> ImageBuffer {
    let mut dst = ImageBuffer::new(ImageFormat::Mono1Bpp, grey_src.width(), grey_src.height(), None);

    // one slot of padding on both sides, so col-1 and col+1 never go out of range
    let mut current_row_additions: Vec<i32> = vec![0; (grey_src.width() as usize) + 2];
    let mut next_row_additions: Vec<i32> = vec![0; (grey_src.width() as usize) + 2];

    for row in 0..grey_src.height() {
        let src_row = grey_src.row(row);
        for col in 0..(grey_src.width() as usize) {
            let i = col + 1;
            let (on, residual) = find_nearest_and_residual(
                (src_row[col] as i32 + current_row_additions[i] / 256).clamp(0, WHITE),
            );
            dst.set_pixel_on(col as i32, row, on);

            // row_additions are scaled by 256 to preserve precision
            let residual_16th = residual * 16;
            current_row_additions[i + 1] += residual_16th * 7;
            next_row_additions[i - 1] += residual_16th * 3;
            next_row_additions[i] += residual_16th * 5;
            next_row_additions[i + 1] += residual_16th;
        }
        std::mem::swap(&mut current_row_additions, &mut next_row_additions);
        next_row_additions.fill(0);
    }
    dst
}

fn ordered(grey_src: &impl ConstImage, thresholds: &[u8; 16]) -> ImageBuffer {
    let mut dst = ImageBuffer::new(ImageFormat::Mono1Bpp, grey_src.width(), grey_src.height(), None);
    for y in 0..grey_src.height() {
        let src_row = grey_src.row(y);
        let threshold_row = &thresholds[((y % 4) * 4) as usize..][..4];
        for x in 0..grey_src.width() {
            let on = src_row[x as usize] > threshold_row[(x % 4) as usize];
            dst.set_pixel_on(x, y, on);
        }
    }
    dst
}
