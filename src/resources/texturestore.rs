//! Texture registry.
//!
//! Loads image files into GPU textures and keeps them alive for the lifetime
//! of the store, keyed by string IDs. The store is dropped at shutdown,
//! which releases every texture exactly once.

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error loading an image file into a texture.
///
/// Carries the offending path and the underlying raylib message so callers
/// can emit a useful diagnostic before aborting.
#[derive(Debug, Error)]
#[error("failed to load texture from '{path}': {message}")]
pub struct TextureLoadError {
    pub path: String,
    pub message: String,
}

/// Loaded textures keyed by string IDs.
///
/// `Texture2D` is not `Send`, so the store lives in the world as a non-send
/// resource.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file and store it under `key`.
    ///
    /// On success returns the texture's native pixel dimensions. On failure
    /// nothing is stored; the caller decides whether to abort or substitute
    /// a placeholder.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<(u32, u32), TextureLoadError> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|message| TextureLoadError {
                path: path.to_string(),
                message: message.to_string(),
            })?;
        let dims = (texture.width as u32, texture.height as u32);
        self.map.insert(key.into(), texture);
        Ok(dims)
    }

    /// Look up a texture by key.
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
