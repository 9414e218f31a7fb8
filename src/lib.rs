//! Convert images to the Stop Press Canvas .SPC format used on the Amstrad
//! PCW8256 and friends.

pub mod error;
pub mod image;
pub mod imgproc;
pub mod options;
pub mod pipeline;
pub mod preview;
pub mod spc;
pub mod upload;

pub use error::{Result, SpcError};
pub use options::ConvertOptions;
pub use pipeline::{convert_to_spc, render_spc};
