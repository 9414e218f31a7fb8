use ::image as imagex; // external, for IO
use imagex::imageops::FilterType;
use log::debug;

use crate::image::{convert, ImageBuffer, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Stretch `img` to exactly `size` (aspect ratio is not kept) and take its luminance.
pub fn resize_to_canvas(img: &imagex::DynamicImage, size: Size, filter: ResizeFilter) -> ImageBuffer {
    debug!(
        "Resizing {}x{} image to {} with {:?}",
        img.width(),
        img.height(),
        size,
        filter
    );
    let resized = img.resize_exact(size.width as u32, size.height as u32, filter.into());
    convert::from_gray_image(&resized.to_luma8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ConstImage, ImageFormat};

    #[test]
    fn test_resize_to_canvas() {
        let src = imagex::DynamicImage::ImageRgb8(imagex::RgbImage::from_pixel(
            31,
            17,
            imagex::Rgb([255, 255, 255]),
        ));
        for filter in [ResizeFilter::Nearest, ResizeFilter::Triangle, ResizeFilter::Lanczos3] {
            let canvas = resize_to_canvas(&src, (720, 256).into(), filter);
            assert_eq!(canvas.format(), ImageFormat::Mono8Bpp);
            assert_eq!(canvas.size(), (720, 256).into());
            assert_eq!(canvas.sample(0, 0), 0xff);
            assert_eq!(canvas.sample(719, 255), 0xff);
        }
    }

    #[test]
    fn test_color_becomes_luma() {
        let src = imagex::DynamicImage::ImageRgba8(imagex::RgbaImage::from_pixel(
            8,
            8,
            imagex::Rgba([0, 0, 0, 255]),
        ));
        let canvas = resize_to_canvas(&src, (16, 8).into(), ResizeFilter::Nearest);
        assert_eq!(canvas.sample(15, 7), 0);
    }
}
