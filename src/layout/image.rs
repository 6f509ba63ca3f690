//! Photo and signature loading.
//!
//! Images are embedded at their original bytes; only the drawing extent is
//! scaled, preserving aspect ratio against a target width in pixels.

use crate::error::{QuestionnaireError, Result};
use image::ImageReader;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ScaledImage {
    pub name: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// `floor(orig_h * target_w / orig_w)`.
pub fn scaled_height(orig_width: u32, orig_height: u32, target_width: u32) -> u32 {
    if orig_width == 0 {
        return 0;
    }
    (u64::from(orig_height) * u64::from(target_width) / u64::from(orig_width)) as u32
}

/// Reads image bytes and probes their pixel size.
pub fn load_scaled(path: &Path, target_width: u32) -> Result<ScaledImage> {
    let bytes = std::fs::read(path)?;
    let (orig_width, orig_height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|source| QuestionnaireError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let height = scaled_height(orig_width, orig_height, target_width);
    debug!(
        path = %path.display(),
        orig_width,
        orig_height,
        width = target_width,
        height,
        "image scaled"
    );

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_string());

    Ok(ScaledImage {
        name,
        bytes,
        width: target_width,
        height,
    })
}

/// Resolves candidate image paths against a media root.
#[derive(Debug, Clone, Default)]
pub struct MediaStore {
    root: Option<PathBuf>,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Paths resolve relative to the working directory.
    pub fn unrooted() -> Self {
        Self::default()
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn load(&self, path: &Path, target_width: u32) -> Result<ScaledImage> {
        load_scaled(&self.resolve(path), target_width)
    }
}
