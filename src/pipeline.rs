use std::path::{Path, PathBuf};

use ::image as imagex; // external, for IO
use log::{debug, info};

use crate::error::{Result, SpcError};
use crate::image::{ConstImage, ImageBuffer};
use crate::imgproc::{bitpack, dithering, linear, resize};
use crate::options::ConvertOptions;
use crate::preview;
use crate::spc::{SpcBitmap, SCREEN_SIZE};

#[derive(Debug)]
pub struct ConversionReport {
    pub preview_path: PathBuf,
    pub output_path: PathBuf,
    /// Number of lit pixels in the converted canvas.
    pub lit_pixels: usize,
}

/// Run the in-memory stages: resize, optional linearization, dithering, packing.
pub fn convert_image(img: &imagex::DynamicImage, options: &ConvertOptions) -> Result<(ImageBuffer, SpcBitmap)> {
    options.validate()?;
    let t_start = std::time::Instant::now();

    let mut canvas = resize::resize_to_canvas(img, SCREEN_SIZE, options.filter);
    let t_resized = std::time::Instant::now();

    if options.linear_correction {
        linear::apply(&mut canvas, options.gamma);
    }
    let t_linear = std::time::Instant::now();

    let mono = dithering::dither(&canvas, options.dithering);
    let t_dithered = std::time::Instant::now();

    let bitmap = bitpack::pack_spc(&mono)?;
    let t_packed = std::time::Instant::now();

    debug!(
        "Converted. Cost: resize: {:?}, linear: {:?}, dither: {:?}, pack: {:?}",
        t_resized - t_start,
        t_linear - t_resized,
        t_dithered - t_linear,
        t_packed - t_dithered
    );
    Ok((mono, bitmap))
}

pub fn decode_image(input: &Path) -> Result<imagex::DynamicImage> {
    imagex::io::Reader::open(input)
        .map_err(imagex::ImageError::IoError)
        .and_then(|reader| reader.with_guessed_format().map_err(imagex::ImageError::IoError))
        .and_then(|reader| reader.decode())
        .map_err(|source| SpcError::Decode {
            path: input.to_path_buf(),
            source,
        })
}

/// Convert `input` to .spc, also writing a preview image.
///
/// The preview is written first. If writing the .spc then fails the preview
/// is left in place and the error is returned.
pub fn convert_to_spc(
    input: &Path,
    preview_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    info!("Converting {}", input.display());
    let img = decode_image(input)?;
    let (mono, bitmap) = convert_image(&img, options)?;

    preview::write_preview(&mono, preview_path, options.preview_double_height)?;
    bitmap.write_to(output_path)?;

    Ok(ConversionReport {
        preview_path: preview_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        lit_pixels: mono.count_on(),
    })
}

/// Render an existing .spc file back to a viewable image.
pub fn render_spc(spc_path: &Path, image_path: &Path, double_height: bool) -> Result<()> {
    let bitmap = SpcBitmap::read_from(spc_path)?;
    let mono = bitpack::unpack_spc(&bitmap);
    preview::write_preview(&mono, image_path, double_height)
}
