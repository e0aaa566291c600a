//! Icon image loading

use crate::types::IconKind;
use crate::utils::icon_path;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Lazily decoded icon textures. Misses are cached too, so a missing file is
/// only looked up once and the glyph is used from then on.
pub struct IconCache {
    images_dir: PathBuf,
    textures: HashMap<IconKind, Option<egui::TextureHandle>>,
}

impl IconCache {
    pub fn new(images_dir: PathBuf) -> Self {
        Self { images_dir, textures: HashMap::new() }
    }

    pub fn texture(&mut self, ctx: &egui::Context, kind: IconKind) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(&kind) {
            return cached.clone();
        }

        let texture = kind.file_name().and_then(|name| self.load(ctx, name));
        self.textures.insert(kind, texture.clone());
        texture
    }

    #[cfg(test)]
    pub fn is_cached(&self, kind: IconKind) -> bool {
        self.textures.contains_key(&kind)
    }

    fn load(&self, ctx: &egui::Context, file_name: &str) -> Option<egui::TextureHandle> {
        let path = icon_path(&self.images_dir, file_name);
        if !path.exists() {
            debug!(path = %path.display(), "Icon image not found, using glyph");
            return None;
        }

        match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                debug!(path = %path.display(), width = size[0], height = size[1], "Icon loaded");
                Some(ctx.load_texture(
                    format!("icon_{}", file_name),
                    egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to decode icon image");
                None
            }
        }
    }
}
