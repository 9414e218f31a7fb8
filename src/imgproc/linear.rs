use log::debug;

use crate::image::*;

/// Convert a perceptual (sRGB-ish) intensity in [0, 255] to a linear one.
///
/// Dithering treats intensity as pixel coverage, which only holds for linear
/// values. Out-of-range input is clamped first.
pub fn linearize(sample: f32, gamma: f32) -> f32 {
    let s = sample.clamp(0.0, 255.0);
    (255.0 * (s / 255.0).powf(gamma)).clamp(0.0, 255.0)
}

fn requantize(val: f32) -> u8 {
    val.round().clamp(0.0, 255.0) as u8
}

/// Linearize every sample of an 8bpp image in place.
pub fn apply(image: &mut impl Image, gamma: f32) {
    assert_eq!(image.format(), ImageFormat::Mono8Bpp);
    debug!("Linearizing {} image, gamma {}", image.size(), gamma);

    // only 256 possible inputs
    let lut: Vec<u8> = (0..=255u8)
        .map(|s| requantize(linearize(s as f32, gamma)))
        .collect();
    for y in 0..image.height() {
        for val in image.row_mut(y) {
            *val = lut[*val as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_GAMMA;

    #[test]
    fn test_fixed_points() {
        assert_eq!(linearize(0.0, DEFAULT_GAMMA), 0.0);
        assert_eq!(linearize(255.0, DEFAULT_GAMMA), 255.0);
    }

    #[test]
    fn test_mid_grey() {
        let v = linearize(128.0, DEFAULT_GAMMA);
        // 255 * (128/255)^2.2 = 55.98
        assert!((v - 55.98).abs() < 0.01, "got {}", v);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(linearize(-12.0, DEFAULT_GAMMA), 0.0);
        assert_eq!(linearize(300.0, DEFAULT_GAMMA), 255.0);
    }

    #[test]
    fn test_apply() {
        let mut img = ImageBuffer::new(ImageFormat::Mono8Bpp, 3, 2, Some(4));
        img.set_sample(0, 0, 0);
        img.set_sample(1, 0, 128);
        img.set_sample(2, 0, 255);
        img.set_sample(0, 1, 200);
        apply(&mut img, DEFAULT_GAMMA);
        assert_eq!(img.row(0), &[0, 56, 255]);
        // 255 * (200/255)^2.2 = 149.42
        assert_eq!(img.sample(0, 1), 149);
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let mut img = ImageBuffer::new(ImageFormat::Mono8Bpp, 256, 1, None);
        for x in 0..256 {
            img.set_sample(x, 0, x as u8);
        }
        apply(&mut img, 1.0);
        for x in 0..256 {
            assert_eq!(img.sample(x, 0), x as u8);
        }
    }
}
