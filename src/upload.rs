//! File naming for conversions.
//!
//! Works out where a conversion reads from and writes to, either beside the
//! input file or, for uploaded files, in separate upload/preview/output
//! directories. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SpcError};

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];
pub const PREVIEW_EXTENSION: &str = "png";
pub const OUTPUT_EXTENSION: &str = "spc";

pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap())
}

/// Reduce a client supplied filename to something safe to join onto a directory.
///
/// Accented letters are decomposed and keep their ASCII base letter. Path
/// separators and whitespace become underscores, anything outside
/// `[A-Za-z0-9_.-]` is dropped, and leading/trailing dots and underscores are
/// stripped. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename.nfkd().filter(char::is_ascii).collect();
    let words: Vec<&str> = ascii
        .split(|c: char| c == '/' || c == '\\' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    let joined = words.join("_");
    unsafe_chars()
        .replace_all(&joined, "")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionPaths {
    pub input: PathBuf,
    pub preview: PathBuf,
    pub output: PathBuf,
}

impl ConversionPaths {
    /// Outputs next to the input: `<base>.png` and `<base>.spc`.
    ///
    /// If the input is itself a .png the preview becomes `<base>.preview.png`
    /// so the source is never overwritten.
    pub fn beside_input(input: &Path) -> Self {
        let mut preview = input.with_extension(PREVIEW_EXTENSION);
        if preview == input {
            preview = input.with_extension(format!("preview.{}", PREVIEW_EXTENSION));
        }
        ConversionPaths {
            input: input.to_path_buf(),
            preview,
            output: input.with_extension(OUTPUT_EXTENSION),
        }
    }

    /// Paths for an uploaded file, named after its sanitized basename.
    pub fn for_upload(upload_dir: &Path, preview_dir: &Path, output_dir: &Path, filename: &str) -> Result<Self> {
        if !allowed_file(filename) {
            return Err(SpcError::UnsupportedFormat(filename.to_string()));
        }
        let input_name = secure_filename(filename);
        let base = match Path::new(&input_name).file_stem() {
            Some(stem) if !input_name.is_empty() => stem.to_os_string(),
            _ => return Err(SpcError::UnsupportedFormat(filename.to_string())),
        };
        let mut preview_name = base.clone();
        preview_name.push(format!(".{}", PREVIEW_EXTENSION));
        let mut output_name = base;
        output_name.push(format!(".{}", OUTPUT_EXTENSION));

        Ok(ConversionPaths {
            input: upload_dir.join(&input_name),
            preview: preview_dir.join(preview_name),
            output: output_dir.join(output_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("cat.png"));
        assert!(allowed_file("CAT.JPeG"));
        assert!(allowed_file("a.b.gif"));
        assert!(!allowed_file("cat"));
        assert!(!allowed_file("cat.tiff"));
        assert!(!allowed_file("png"));
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My cool movie.mov"), "My_cool_movie.mov");
        assert_eq!(secure_filename("../../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("i contain cool \u{fc}ml\u{e4}uts.txt"), "i_contain_cool_umlauts.txt");
        assert_eq!(secure_filename("..."), "");
        assert_eq!(secure_filename("Caf\u{e9} cr\u{e8}me.png"), "Cafe_creme.png");
    }

    #[test]
    fn test_beside_input() {
        let paths = ConversionPaths::beside_input(Path::new("/tmp/pics/cat.jpg"));
        assert_eq!(paths.preview, PathBuf::from("/tmp/pics/cat.png"));
        assert_eq!(paths.output, PathBuf::from("/tmp/pics/cat.spc"));

        let paths = ConversionPaths::beside_input(Path::new("dog.png"));
        assert_eq!(paths.preview, PathBuf::from("dog.preview.png"));
        assert_eq!(paths.output, PathBuf::from("dog.spc"));
    }

    #[test]
    fn test_for_upload() {
        let paths = ConversionPaths::for_upload(
            Path::new("uploads"),
            Path::new("previews"),
            Path::new("output"),
            "../holiday snap.JPG",
        )
        .unwrap();
        assert_eq!(paths.input, PathBuf::from("uploads/holiday_snap.JPG"));
        assert_eq!(paths.preview, PathBuf::from("previews/holiday_snap.png"));
        assert_eq!(paths.output, PathBuf::from("output/holiday_snap.spc"));

        assert!(matches!(
            ConversionPaths::for_upload(Path::new("u"), Path::new("p"), Path::new("o"), "notes.txt"),
            Err(SpcError::UnsupportedFormat(_))
        ));
        let paths =
            ConversionPaths::for_upload(Path::new("u"), Path::new("p"), Path::new("o"), "\u{e4}x.png").unwrap();
        assert_eq!(paths.input, PathBuf::from("u/ax.png"));
    }
}
