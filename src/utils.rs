//! Utility functions

use crate::constants::APP_NAME;
use std::path::{Path, PathBuf};

/// Get the per-user data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Scale an image of `size` pixels to `width` points, keeping its aspect ratio
pub fn fit_width(size: [usize; 2], width: f32) -> [f32; 2] {
    if size[0] == 0 {
        return [width, width];
    }
    let aspect = size[1] as f32 / size[0] as f32;
    [width, width * aspect]
}

/// Resolve an icon file inside the images directory
pub fn icon_path(images_dir: &Path, file_name: &str) -> PathBuf {
    images_dir.join(file_name)
}
