//! Decode-ready page images keyed by URL.
//!
//! Pages are fetched over HTTP(S) or read from disk, decoded to RGBA up
//! front and kept as image handles, so a turning leaf never shows a
//! half-loaded bitmap. Failures are remembered and not retried until the
//! cache is cleared. Clearing starts a new generation so fetches still in
//! flight from before cannot repopulate it.

use crate::catalog::is_remote;
use anyhow::{Context, Result};
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(DecodedPage),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DecodedPage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
    generation: u64,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as in flight. Returns `false` if it is already known.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Loading);
        true
    }

    /// Tag carried by fetches started now; bumped by [`ImageCache::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a fetch result. Returns `false` and drops it when the fetch
    /// belongs to an older generation or the URL is no longer loading.
    pub fn finish(
        &mut self,
        url: String,
        generation: u64,
        result: Result<DecodedPage, String>,
    ) -> bool {
        if generation != self.generation {
            debug!(%url, generation, current = self.generation, "Dropping stale page image");
            return false;
        }
        if !matches!(self.slots.get(&url), Some(ImageSlot::Loading)) {
            debug!(%url, "Dropping page image nobody is waiting for");
            return false;
        }
        let slot = match result {
            Ok(page) => {
                debug!(%url, width = page.width, height = page.height, "Page image ready");
                ImageSlot::Ready(page)
            }
            Err(err) => {
                warn!(%url, "Page image failed to load: {err}");
                ImageSlot::Failed(err)
            }
        };
        self.slots.insert(url, slot);
        debug!(cached = self.len(), "Image cache updated");
        true
    }

    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(ImageSlot::Ready(page)) => Some(&page.handle),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Fetch and decode one page image.
pub async fn load_page_image(
    client: reqwest::Client,
    url: String,
    timeout: Duration,
) -> Result<DecodedPage> {
    let bytes = if is_remote(&url) {
        let response = client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .with_context(|| format!("Request for {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Server refused {url}"))?;
        response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?
            .to_vec()
    } else {
        fs::read(Path::new(&url)).with_context(|| format!("Failed to read {url}"))?
    };
    decode_page(&bytes).with_context(|| format!("Failed to decode {url}"))
}

pub fn decode_page(bytes: &[u8]) -> Result<DecodedPage> {
    let rgba = image::load_from_memory(bytes)
        .context("Unsupported or corrupt image data")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedPage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]))
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_dimensions() {
        let page = decode_page(&png_bytes(3, 5)).unwrap();
        assert_eq!((page.width, page.height), (3, 5));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_page(b"not an image").is_err());
    }

    #[test]
    fn begin_only_once_per_url() {
        let mut cache = ImageCache::new();
        assert!(cache.begin("a.png"));
        assert!(!cache.begin("a.png"));
        assert!(matches!(cache.slot("a.png"), Some(ImageSlot::Loading)));
        assert!(cache.handle("a.png").is_none());
    }

    #[test]
    fn finished_slots_are_kept() {
        let mut cache = ImageCache::new();
        cache.begin("ok.png");
        cache.begin("bad.png");
        let generation = cache.generation();
        assert!(cache.finish(
            "ok.png".to_string(),
            generation,
            Ok(decode_page(&png_bytes(1, 1)).unwrap())
        ));
        assert!(cache.finish("bad.png".to_string(), generation, Err("404".to_string())));

        assert!(cache.handle("ok.png").is_some());
        assert!(matches!(cache.slot("bad.png"), Some(ImageSlot::Failed(_))));
        assert!(!cache.begin("bad.png"));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.begin("bad.png"));
    }

    #[test]
    fn results_from_before_a_clear_are_dropped() {
        let mut cache = ImageCache::new();
        cache.begin("a.png");
        let before = cache.generation();
        cache.clear();
        assert!(!cache.finish("a.png".to_string(), before, Err("timeout".to_string())));
        assert!(cache.slot("a.png").is_none());
        assert!(cache.begin("a.png"));

        let current = cache.generation();
        assert!(!cache.finish("c.png".to_string(), current, Err("x".to_string())));
        assert!(cache.slot("c.png").is_none());
    }

    #[test]
    fn local_files_load_through_the_same_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        fs::write(&path, png_bytes(4, 2)).unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let page = runtime
            .block_on(load_page_image(
                reqwest::Client::new(),
                path.to_string_lossy().into_owned(),
                Duration::from_secs(1),
            ))
            .unwrap();
        assert_eq!((page.width, page.height), (4, 2));
    }
}
