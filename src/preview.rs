use std::path::Path;

use ::image as imagex; // external, for IO
use log::info;

use crate::error::{Result, SpcError};
use crate::image::{convert, ConstImage};

/// Render a mono canvas as a viewable image, lit pixels white.
///
/// With `double_height` every row is repeated once, which approximates the
/// PCW's tall pixels on a square-pixel display.
pub fn render_preview(image: &impl ConstImage, double_height: bool) -> imagex::GrayImage {
    let gray = convert::to_gray_image(image);
    if !double_height {
        return gray;
    }
    let (width, height) = gray.dimensions();
    imagex::GrayImage::from_fn(width, height * 2, |x, y| *gray.get_pixel(x, y / 2))
}

/// Encode the preview to `path`, format picked from the extension.
pub fn write_preview(image: &impl ConstImage, path: &Path, double_height: bool) -> Result<()> {
    let preview = render_preview(image, double_height);
    info!("Writing {}", path.display());
    let saved = match imagex::ImageFormat::from_path(path) {
        // the gif encoder only takes rgb(a)
        Ok(imagex::ImageFormat::Gif) => imagex::DynamicImage::ImageLuma8(preview).to_rgba8().save(path),
        _ => preview.save(path),
    };
    saved.map_err(|err| SpcError::encode(path, err))
}
