//! Stop Press Canvas (.SPC) files.
//!
//! An .SPC file is a headerless dump of the Amstrad PCW8256 video memory:
//! 720x256 pixels, one bit each, 23040 bytes. See [`crate::imgproc::bitpack`]
//! for the byte order.

use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::{Result, SpcError};
use crate::image::Size;

pub const SCREEN_WIDTH: i32 = 720;
pub const SCREEN_HEIGHT: i32 = 256;
pub const SCREEN_SIZE: Size = Size {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
};

/// Screen memory is laid out in 8x8 pixel cells.
pub const CELL_DIM: i32 = 8;
pub const X_CELLS: i32 = SCREEN_WIDTH / CELL_DIM;
pub const Y_CELLS: i32 = SCREEN_HEIGHT / CELL_DIM;

pub const SPC_FILE_LEN: usize = (SCREEN_WIDTH / 8 * SCREEN_HEIGHT) as usize;

#[derive(Clone, PartialEq, Eq)]
pub struct SpcBitmap {
    data: Vec<u8>,
}

impl std::fmt::Debug for SpcBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpcBitmap [{} bytes]", self.data.len())
    }
}

impl SpcBitmap {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() != SPC_FILE_LEN {
            return Err(SpcError::InvalidLength {
                expected: SPC_FILE_LEN,
                actual: data.len(),
            });
        }
        Ok(SpcBitmap { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| SpcError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }

    /// Write the raw dump to `path`.
    ///
    /// Data goes to a sibling temp file first and is renamed over `path`, so
    /// a failed write never leaves a truncated .spc behind.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        info!("Writing {}", path.display());
        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".part");
        let tmp_path = path.with_file_name(tmp_name);

        let write_tmp = || -> std::io::Result<()> {
            let mut f = std::fs::File::create(&tmp_path)?;
            f.write_all(&self.data)?;
            f.sync_all()
        };
        if let Err(err) = write_tmp().and_then(|_| std::fs::rename(&tmp_path, path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(SpcError::write(path, err));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(X_CELLS, 90);
        assert_eq!(Y_CELLS, 32);
        assert_eq!(SPC_FILE_LEN, 23040);
    }

    #[test]
    fn test_from_bytes_checks_length() {
        assert!(SpcBitmap::from_bytes(vec![0; SPC_FILE_LEN]).is_ok());
        match SpcBitmap::from_bytes(vec![0; 100]) {
            Err(SpcError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 23040);
                assert_eq!(actual, 100);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_write_to_missing_dir() {
        let bitmap = SpcBitmap::from_bytes(vec![0x5a; SPC_FILE_LEN]).unwrap();
        let path = std::env::temp_dir()
            .join("makespc-no-such-dir-for-test")
            .join("out.spc");
        match bitmap.write_to(&path) {
            Err(SpcError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!path.exists());
    }
}
