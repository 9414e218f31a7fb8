#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Mono1Bpp, // 1 bit per pixel, on/off
    Mono8Bpp, // 8 bits per pixel, intensity
}

impl ImageFormat {
    pub fn bpp(&self) -> i32 {
        match self {
            Self::Mono1Bpp => 1,
            Self::Mono8Bpp => 8,
        }
    }
}

fn minimum_pitch(bpp: i32, width: i32) -> i32 {
    (width * bpp + 7) / 8
}

#[derive(Clone, Copy, Debug)]
pub struct ImageHeader {
    format: ImageFormat,
    width: i32,
    pitch: i32,
    height: i32,
}

impl ImageHeader {
    pub fn new(format: ImageFormat, data_len: usize, width: i32, height: i32, pitch: Option<i32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        assert!(
            pitch >= minimum_pitch,
            "invalid pitch {} for width {} with format {:?}",
            pitch,
            width,
            format
        );
        assert!(
            width > 0 && height > 0,
            "invalid width {} and height {}",
            width,
            height
        );
        assert!(
            data_len >= (height * pitch) as usize,
            "invalid data len {} for height {} and pitch {}",
            data_len,
            height,
            pitch
        );
        ImageHeader {
            format,
            width,
            pitch,
            height,
        }
    }
}

pub trait HasImageHeader {
    fn header(&self) -> ImageHeader;
}

/// Read access to a row-major pixel buffer.
///
/// 1bpp rows store pixels LSB first: pixel `x` is bit `x % 8` of byte `x / 8`.
pub trait ConstImage: HasImageHeader {
    fn data(&self) -> &[u8];

    fn bpp(&self) -> i32 {
        self.header().format.bpp()
    }
    fn format(&self) -> ImageFormat {
        self.header().format
    }
    fn width(&self) -> i32 {
        self.header().width
    }
    fn height(&self) -> i32 {
        self.header().height
    }
    fn pitch(&self) -> i32 {
        self.header().pitch
    }
    fn is_continuous(&self) -> bool {
        self.pitch() == minimum_pitch(self.bpp(), self.width())
    }
    fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }
    fn row(&self, y: i32) -> &[u8] {
        let start = (y * self.pitch()) as usize;
        let len = minimum_pitch(self.bpp(), self.width()) as usize;
        &self.data()[start..start + len]
    }

    fn pixel_on(&self, x: i32, y: i32) -> bool {
        debug_assert_eq!(self.format(), ImageFormat::Mono1Bpp);
        (self.row(y)[(x / 8) as usize] >> (x % 8)) & 0x1 == 1
    }
    fn sample(&self, x: i32, y: i32) -> u8 {
        debug_assert_eq!(self.format(), ImageFormat::Mono8Bpp);
        self.row(y)[x as usize]
    }

    fn count_on(&self) -> usize {
        assert_eq!(self.format(), ImageFormat::Mono1Bpp);
        let tail_bits = self.width() % 8;
        (0..self.height())
            .map(|y| {
                let row = self.row(y);
                row.iter()
                    .enumerate()
                    .map(|(i, b)| {
                        // ignore padding bits past the last pixel
                        let mask = if tail_bits != 0 && i == row.len() - 1 {
                            (1u8 << tail_bits) - 1
                        } else {
                            0xff
                        };
                        (b & mask).count_ones() as usize
                    })
                    .sum::<usize>()
            })
            .sum()
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u8];

    fn row_mut(&mut self, y: i32) -> &mut [u8] {
        let start = (y * self.pitch()) as usize;
        let len = minimum_pitch(self.bpp(), self.width()) as usize;
        &mut self.mut_data()[start..start + len]
    }

    fn set_pixel_on(&mut self, x: i32, y: i32, on: bool) {
        debug_assert_eq!(self.format(), ImageFormat::Mono1Bpp);
        let byte = &mut self.row_mut(y)[(x / 8) as usize];
        if on {
            *byte |= 1 << (x % 8);
        } else {
            *byte &= !(1 << (x % 8));
        }
    }
    fn set_sample(&mut self, x: i32, y: i32, val: u8) {
        debug_assert_eq!(self.format(), ImageFormat::Mono8Bpp);
        self.row_mut(y)[x as usize] = val;
    }

    fn fill(&mut self, val: u8) {
        for y in 0..self.height() {
            self.row_mut(y).fill(val);
        }
    }
}

pub struct ConstImageView<'a> {
    header: ImageHeader,
    data: &'a [u8],
}

impl<'a> ConstImageView<'a> {
    pub fn new(format: ImageFormat, data: &'a [u8], width: i32, height: i32, pitch: Option<i32>) -> Self {
        let header = ImageHeader::new(format, data.len(), width, height, pitch);
        ConstImageView { header, data }
    }
}

impl<'a> HasImageHeader for ConstImageView<'a> {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl<'a> ConstImage for ConstImageView<'a> {
    fn data(&self) -> &[u8] {
        self.data
    }
}

pub struct ImageBuffer {
    data: Vec<u8>,
    header: ImageHeader,
}

impl ImageBuffer {
    pub fn new(format: ImageFormat, width: i32, height: i32, pitch: Option<i32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        let data = vec![0; (pitch * height) as usize];
        let header = ImageHeader::new(format, data.len(), width, height, Some(pitch));
        Self { data, header }
    }

    pub fn from_vec(format: ImageFormat, data: Vec<u8>, width: i32, height: i32) -> Self {
        let header = ImageHeader::new(format, data.len(), width, height, None);
        Self { data, header }
    }
}

impl HasImageHeader for ImageBuffer {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1bpp() {
        let mut buf = ImageBuffer::new(ImageFormat::Mono1Bpp, 100, 100, None);
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 100);
        assert_eq!(buf.pitch(), 13);
        assert_eq!(buf.row(0).len(), 13);

        buf.set_pixel_on(9, 2, true);
        assert_eq!(buf.row(2)[1], 0b10);
        assert!(buf.pixel_on(9, 2));
        assert!(!buf.pixel_on(8, 2));

        buf.set_pixel_on(9, 2, false);
        assert_eq!(buf.row(2)[1], 0);
    }

    #[test]
    fn test_8bpp_with_pitch() {
        let mut buf = ImageBuffer::new(ImageFormat::Mono8Bpp, 3, 2, Some(4));
        assert!(!buf.is_continuous());
        buf.set_sample(2, 1, 42);
        assert_eq!(buf.sample(2, 1), 42);
        assert_eq!(buf.data()[6], 42);
        assert_eq!(buf.row(1), &[0, 0, 42]);
    }

    #[test]
    fn test_count_on_ignores_padding() {
        let mut buf = ImageBuffer::new(ImageFormat::Mono1Bpp, 10, 2, None);
        buf.fill(0xff);
        assert_eq!(buf.count_on(), 20);
    }

    #[test]
    #[should_panic]
    fn test_view_rejects_short_data() {
        let data = [0u8; 10];
        ConstImageView::new(ImageFormat::Mono8Bpp, &data, 4, 4, None);
    }
}

pub mod convert;
