//! Packing between a 720x256 1bpp canvas and the PCW screen memory dump.
//!
//! Screen memory is a sequence of 8x8 pixel cells. Cells run left to right,
//! then top to bottom. Each cell is 8 bytes, one per pixel row, and inside a
//! byte the leftmost pixel is bit 7.

use crate::error::{Result, SpcError};
use crate::image::*;
use crate::spc::{SpcBitmap, CELL_DIM, SCREEN_SIZE, SPC_FILE_LEN, X_CELLS, Y_CELLS};

pub fn pack_spc(image: &impl ConstImage) -> Result<SpcBitmap> {
    if image.format() != ImageFormat::Mono1Bpp || image.size() != SCREEN_SIZE {
        return Err(SpcError::InvalidDimensions {
            expected: SCREEN_SIZE,
            actual: image.size(),
        });
    }

    let mut packed: Vec<u8> = Vec::with_capacity(SPC_FILE_LEN);
    for y0 in 0..Y_CELLS {
        for x0 in 0..X_CELLS {
            for y1 in 0..CELL_DIM {
                let y = y0 * CELL_DIM + y1;
                let mut byte = 0u8;
                for bit in 0..8 {
                    let x = x0 * CELL_DIM + (7 - bit);
                    if image.pixel_on(x, y) {
                        byte |= 1 << bit;
                    }
                }
                packed.push(byte);
            }
        }
    }
    SpcBitmap::from_bytes(packed)
}

pub fn unpack_spc(bitmap: &SpcBitmap) -> ImageBuffer {
    let mut image = ImageBuffer::new(ImageFormat::Mono1Bpp, SCREEN_SIZE.width, SCREEN_SIZE.height, None);
    let mut bytes = bitmap.as_bytes().iter();
    for y0 in 0..Y_CELLS {
        for x0 in 0..X_CELLS {
            for y1 in 0..CELL_DIM {
                let y = y0 * CELL_DIM + y1;
                // length is checked by SpcBitmap
                let byte = bytes.next().copied().unwrap_or_default();
                for bit in 0..8 {
                    let x = x0 * CELL_DIM + (7 - bit);
                    image.set_pixel_on(x, y, (byte >> bit) & 0x1 == 1);
                }
            }
        }
    }
    image
}
