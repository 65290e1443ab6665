use crate::compose::font::PassFont;
use crate::core::error::IssueError;
use image::RgbaImage;
use std::path::PathBuf;
use tracing::warn;

/// Source of the caption font and the optional center logo.
///
/// Loaded fresh for each pass so a broken asset fails exactly the
/// passes composed against it, and so tests can inject faults.
pub trait AssetSource: Send + Sync {
    fn font(&self) -> Result<PassFont, IssueError>;

    /// A missing or unreadable logo is not an error; the pass is
    /// simply composed without one.
    fn logo(&self) -> Option<RgbaImage>;
}

/// Disk-backed assets as configured under `[assets]`
pub struct FileAssets {
    font_path: PathBuf,
    logo_path: Option<PathBuf>,
}

impl FileAssets {
    pub fn new(font_path: PathBuf, logo_path: Option<PathBuf>) -> Self {
        Self {
            font_path,
            logo_path,
        }
    }
}

impl AssetSource for FileAssets {
    fn font(&self) -> Result<PassFont, IssueError> {
        PassFont::load(&self.font_path)
    }

    fn logo(&self) -> Option<RgbaImage> {
        let path = self.logo_path.as_ref()?;
        match image::open(path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Logo unusable, composing without it");
                None
            }
        }
    }
}
