use crate::compose::fit::MeasureText;
use crate::core::error::IssueError;
use ab_glyph::{FontVec, PxScale};
use imageproc::drawing::text_size;
use std::path::Path;

/// A loaded caption font
#[derive(Debug)]
pub struct PassFont {
    font: FontVec,
}

impl PassFont {
    /// Load a TrueType/OpenType font from disk.
    ///
    /// Failure is an `AssetMissing` error, fatal for the pass being
    /// composed.
    pub fn load(path: &Path) -> Result<Self, IssueError> {
        let data = std::fs::read(path).map_err(|e| IssueError::AssetMissing {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_bytes(data).map_err(|_| IssueError::AssetMissing {
            path: path.to_path_buf(),
            reason: "not a valid font".to_string(),
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        Ok(Self {
            font: FontVec::try_from_vec(data)?,
        })
    }

    pub fn inner(&self) -> &FontVec {
        &self.font
    }
}

impl MeasureText for PassFont {
    fn text_width(&self, size: u32, text: &str) -> u32 {
        let (width, _height) = text_size(PxScale::from(size as f32), &self.font, text);
        width
    }
}
