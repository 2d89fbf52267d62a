//! Derived output filenames.
//!
//! Single downloads get a timestamped name; batch archive entries keep the
//! original file stem so the user can match them up after extraction.

use chrono::Local;

use crate::encode::OutputFormat;

/// Timestamp format used in download filenames, e.g. `20260823_142501`.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Filename for a single processed download:
/// `processed_{width}x{height}_{timestamp}.{ext}`.
pub fn single_filename(width: u32, height: u32, format: OutputFormat) -> String {
    format!(
        "processed_{}x{}_{}.{}",
        width,
        height,
        Local::now().format(TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Filename for one entry inside a batch archive:
/// `{stem}_processed_{width}x{height}.{ext}`.
///
/// The stem is the original upload name with its extension removed.
pub fn batch_entry_filename(
    original_name: &str,
    width: u32,
    height: u32,
    format: OutputFormat,
) -> String {
    format!(
        "{}_processed_{}x{}.{}",
        file_stem(original_name),
        width,
        height,
        format.extension()
    )
}

/// Filename for the batch archive itself:
/// `batch_processed_images_{timestamp}.zip`.
pub fn batch_archive_filename() -> String {
    format!(
        "batch_processed_images_{}.zip",
        Local::now().format(TIMESTAMP_FORMAT)
    )
}

/// Strip the final extension from an upload name, if any.
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_filename_shape() {
        let name = single_filename(800, 400, OutputFormat::Jpeg);
        assert!(name.starts_with("processed_800x400_"), "{}", name);
        assert!(name.ends_with(".jpeg"), "{}", name);

        // processed_WxH_YYYYmmdd_HHMMSS.ext
        let timestamp = name
            .strip_prefix("processed_800x400_")
            .unwrap()
            .strip_suffix(".jpeg")
            .unwrap();
        assert_eq!(timestamp.len(), 15);
    }

    #[test]
    fn test_batch_entry_filename() {
        let name = batch_entry_filename("vacation.jpg", 1080, 1080, OutputFormat::WebP);
        assert_eq!(name, "vacation_processed_1080x1080.webp");
    }

    #[test]
    fn test_batch_entry_keeps_inner_dots() {
        let name = batch_entry_filename("my.photo.final.png", 100, 50, OutputFormat::Png);
        assert_eq!(name, "my.photo.final_processed_100x50.png");
    }

    #[test]
    fn test_batch_entry_without_extension() {
        let name = batch_entry_filename("scan", 10, 10, OutputFormat::Jpeg);
        assert_eq!(name, "scan_processed_10x10.jpeg");
    }

    #[test]
    fn test_hidden_file_stem_untouched() {
        // ".bashrc"-style names have no real stem to strip
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("photo.jpg"), "photo");
        assert_eq!(file_stem("noext"), "noext");
    }

    #[test]
    fn test_batch_archive_filename_shape() {
        let name = batch_archive_filename();
        assert!(name.starts_with("batch_processed_images_"), "{}", name);
        assert!(name.ends_with(".zip"), "{}", name);
    }
}
