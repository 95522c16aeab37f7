//! Photo decoding and texture caching.
//!
//! Photo references from the content document resolve relative to the
//! document's directory. Decoding happens once per file (keyed by path
//! and mtime) and failures render as placeholders rather than errors.

use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use eframe::egui;
use image::GenericImageView;

const MAX_TEXTURE_SIDE: f32 = 512.0;

#[derive(Clone, Eq)]
struct PhotoKey {
    path: PathBuf,
    modified: Option<SystemTime>,
}

impl PartialEq for PhotoKey {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.modified == other.modified
    }
}

impl Hash for PhotoKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.modified.hash(state);
    }
}

#[derive(Clone)]
enum PhotoState {
    Ready {
        texture: egui::TextureHandle,
        size: egui::Vec2,
    },
    DecodeFailed,
}

pub struct PhotoStore {
    root: PathBuf,
    cache: HashMap<PhotoKey, PhotoState>,
}

impl PhotoStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            cache: HashMap::new(),
        }
    }

    /// Texture for a photo reference, or `None` when the file is missing
    /// or undecodable (the caller draws a placeholder).
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        reference: &str,
    ) -> Option<(egui::TextureHandle, egui::Vec2)> {
        let path = self.root.join(reference);
        let key = photo_key(&path);
        if let Some(state) = self.cache.get(&key) {
            return match state {
                PhotoState::Ready { texture, size } => Some((texture.clone(), *size)),
                PhotoState::DecodeFailed => None,
            };
        }

        let state = decode_photo(ctx, &path);
        if matches!(state, PhotoState::DecodeFailed) {
            tracing::warn!(path = %path.display(), "photo unavailable; rendering placeholder");
        }
        self.cache.insert(key, state.clone());
        match state {
            PhotoState::Ready { texture, size } => Some((texture, size)),
            PhotoState::DecodeFailed => None,
        }
    }
}

fn photo_key(path: &Path) -> PhotoKey {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok();
    PhotoKey {
        path: path.to_path_buf(),
        modified,
    }
}

fn decode_photo(ctx: &egui::Context, path: &Path) -> PhotoState {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return PhotoState::DecodeFailed,
    };
    let decoded = match image::load_from_memory(&bytes) {
        Ok(image) => image,
        Err(_) => return PhotoState::DecodeFailed,
    };

    let (orig_w, orig_h) = decoded.dimensions();
    let scale = (MAX_TEXTURE_SIDE / (orig_w.max(orig_h) as f32)).min(1.0);
    let resized = if scale < 1.0 {
        decoded.resize(
            (orig_w as f32 * scale).max(1.0) as u32,
            (orig_h as f32 * scale).max(1.0) as u32,
            image::imageops::FilterType::Triangle,
        )
    } else {
        decoded
    };

    let rgba = resized.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
    let texture = ctx.load_texture(
        format!("photo:{}", path.display()),
        color_image,
        egui::TextureOptions::LINEAR,
    );
    PhotoState::Ready {
        texture,
        size: egui::vec2(w as f32, h as f32),
    }
}
