//! Catalog manifest loading.
//!
//! This is the data layer the viewer leans on: it reads a JSON manifest,
//! resolves page image locations and hands over pages in ascending `order`.
//! The viewer itself never sorts or validates pages.

use anyhow::{Context, Result, bail};
use flipbook_core::Page;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A loaded catalog ready for the viewer.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub pages: Vec<Page>,
    pub source: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pages: Vec<Page>,
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    info!(path = %path.display(), "Loading catalog manifest");
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog manifest {}", path.display()))?;
    let catalog = parse_catalog(&data, path)
        .with_context(|| format!("Invalid catalog manifest {}", path.display()))?;
    info!(
        title = %catalog.title,
        pages = catalog.pages.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Parse manifest JSON read from `source`. Relative image paths resolve
/// against the manifest's directory.
pub fn parse_catalog(data: &str, source: &Path) -> Result<Catalog> {
    let base_dir = source.parent().unwrap_or_else(|| Path::new("."));
    let manifest: Manifest = serde_json::from_str(data).context("Malformed manifest JSON")?;

    let mut seen = HashSet::new();
    for page in &manifest.pages {
        if page.image_url.trim().is_empty() {
            bail!("Page {} has no image URL", page.id);
        }
        if !seen.insert(page.id.as_str()) {
            bail!("Duplicate page id {}", page.id);
        }
    }

    let mut pages = manifest.pages;
    pages.sort_by_key(|page| page.order);
    for page in &mut pages {
        page.image_url = resolve_image_url(&page.image_url, base_dir);
    }
    debug!(pages = pages.len(), "Sorted catalog pages by order");

    Ok(Catalog {
        title: manifest
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Catalog".to_string()),
        pages,
        source: source.to_path_buf(),
    })
}

pub fn is_remote(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn resolve_image_url(url: &str, base_dir: &Path) -> String {
    if is_remote(url) {
        return url.to_string();
    }
    let local = url.strip_prefix("file://").unwrap_or(url);
    let path = Path::new(local);
    if path.is_absolute() {
        local.to_string()
    } else {
        base_dir.join(path).to_string_lossy().into_owned()
    }
}
