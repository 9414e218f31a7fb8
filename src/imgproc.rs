pub mod bitpack;
pub mod dithering;
pub mod linear;
pub mod resize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DitheringMethod {
    /// Floyd-Steinberg error diffusion
    FloydSteinberg,
    Bayers2,
    Bayers4,
    /// Plain threshold at mid grey
    NoDithering,
}
