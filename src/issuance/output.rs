use crate::core::error::IssueError;
use crate::models::member::MemberRecord;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// File name for a member's pass: uppercased first initial, last
/// name, member number, `.png`. "Anna Muster" #71400 becomes
/// `AMuster71400.png`.
pub fn pass_filename(member: &MemberRecord) -> String {
    let initial: String = member
        .first_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    format!("{}{}{}.png", initial, member.last_name, member.member_number)
}

/// Write a composed pass under the output directory, creating it on
/// first use.
pub fn save_pass(output_dir: &Path, filename: &str, pass: &RgbImage) -> Result<PathBuf, IssueError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(filename);
    pass.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_format() {
        let member = MemberRecord::new(71400, "Anna", "Muster");
        assert_eq!(pass_filename(&member), "AMuster71400.png");
    }

    #[test]
    fn test_filename_uppercases_initial() {
        let member = MemberRecord::new(7, "max", "mustermann");
        assert_eq!(pass_filename(&member), "Mmustermann7.png");
    }

    #[test]
    fn test_filename_with_umlaut_initial() {
        let member = MemberRecord::new(123, "ümit", "Yilmaz");
        assert_eq!(pass_filename(&member), "ÜYilmaz123.png");
    }

    #[test]
    fn test_filename_with_empty_first_name() {
        let member = MemberRecord::new(5, "", "Muster");
        assert_eq!(pass_filename(&member), "Muster5.png");
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("passes/2026");
        let pass = RgbImage::from_pixel(8, 8, image::Rgb([0, 128, 0]));

        let path = save_pass(&nested, "AMuster71400.png", &pass).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), "AMuster71400.png");
    }

    #[test]
    fn test_save_to_unwritable_location_is_io_error() {
        let pass = RgbImage::from_pixel(8, 8, image::Rgb([0, 128, 0]));
        let err = save_pass(Path::new("/proc/definitely-not-writable"), "x.png", &pass).unwrap_err();
        assert!(matches!(err, IssueError::Io(_) | IssueError::Image(_)));
    }
}
