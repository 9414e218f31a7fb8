use ::image as imagex; // external, for IO

use super::*;

pub fn from_gray_image(img: &imagex::GrayImage) -> ImageBuffer {
    let (width, height) = img.dimensions();
    ImageBuffer::from_vec(
        ImageFormat::Mono8Bpp,
        img.as_raw().clone(),
        width as i32,
        height as i32,
    )
}

/// Render any mono image as 8bit grey, 1bpp "on" pixels become white.
pub fn to_gray_image(image: &impl ConstImage) -> imagex::GrayImage {
    let mut gray = imagex::GrayImage::new(image.width() as u32, image.height() as u32);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let val = match image.format() {
                ImageFormat::Mono1Bpp => {
                    if image.pixel_on(x, y) {
                        0xff
                    } else {
                        0
                    }
                }
                ImageFormat::Mono8Bpp => image.sample(x, y),
            };
            gray.put_pixel(x as u32, y as u32, imagex::Luma([val]));
        }
    }
    gray
}
