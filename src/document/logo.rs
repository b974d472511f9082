//! Logo loading.
//!
//! The logo is decoded once per generation and embedded as a Flate compressed
//! RGB image XObject, with the alpha channel split out into a soft mask when the
//! image has any transparency (PDF image XObjects cannot carry alpha directly).

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded logo, ready to be written as an image XObject
#[derive(Clone, Debug)]
pub struct Logo {
    pub width: u32,
    pub height: u32,
    /// zlib compressed RGB samples
    pub rgb: Vec<u8>,
    /// zlib compressed alpha samples, if the image isn't fully opaque
    pub alpha: Option<Vec<u8>>,
}

impl Logo {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Logo> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read logo from {}", path.display()))?;
        Logo::from_bytes(&bytes)
            .with_context(|| format!("Failed to decode logo {}", path.display()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Logo> {
        let decoded = image::load_from_memory(bytes).with_context(|| "Unsupported image data")?;
        let rgba = decoded.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        if width == 0 || height == 0 {
            anyhow::bail!("Logo has no pixels");
        }

        let rgb: Vec<u8> = rgba
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);
        let alpha = has_alpha.then(|| {
            let alpha: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
            miniz_oxide::deflate::compress_to_vec_zlib(&alpha, 6)
        });

        Ok(Logo {
            width,
            height,
            rgb: miniz_oxide::deflate::compress_to_vec_zlib(&rgb, 6),
            alpha,
        })
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
