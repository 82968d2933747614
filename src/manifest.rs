//! The gallery manifest: the JSON contract between the build step and the
//! published page.
//!
//! The builder owns creation, the viewer owns consumption, and this module
//! owns the schema both sides agree on.
//!
//! ## Written shape (canonical)
//!
//! ```json
//! {
//!   "images": [
//!     { "source": "static/uploads/wax.jpg", "title": "Wax", "caption": "" }
//!   ]
//! }
//! ```
//!
//! ## Accepted shapes (reader)
//!
//! Earlier builds of the site shipped several manifest variants, and admin
//! tooling still produces some of them. The reader tolerates all of those and
//! normalizes to the canonical [`GalleryItem`] at the input boundary:
//!
//! - a bare array of items, or an object wrapping the array under `images`
//!   (canonical) or `items` (legacy)
//! - `source` may appear as `src` or `url`; `caption` may appear as `desc`.
//!   First present wins, in that order.
//! - unknown fields are ignored
//!
//! Items without a usable (non-empty) source are dropped during
//! normalization: the invariant is that every `GalleryItem.source` resolves,
//! so a record that cannot satisfy it never reaches rendering.
//!
//! The manifest is regenerated wholesale on every build. [`write`] replaces
//! the file completely and always emits a well-formed document, including the
//! zero-item case.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One gallery entry. Manifest order is display order; nothing downstream
/// re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    /// Path or URL to the full-resolution image. Never empty.
    pub source: String,
    /// Display label. Empty means untitled.
    pub title: String,
    /// Secondary descriptive text. Empty means none.
    pub caption: String,
}

/// The persisted artifact, canonical wrapped shape.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub images: Vec<GalleryItem>,
}

/// A raw item as found on disk, before alias resolution.
///
/// Every field is optional so the same record type absorbs all historical
/// variants; [`normalize`] collapses it to the canonical form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawItem {
    source: Option<String>,
    src: Option<String>,
    url: Option<String>,
    title: Option<String>,
    caption: Option<String>,
    desc: Option<String>,
}

/// The two accepted top-level shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawManifest {
    Bare(Vec<RawItem>),
    Wrapped {
        #[serde(default)]
        images: Option<Vec<RawItem>>,
        #[serde(default)]
        items: Option<Vec<RawItem>>,
    },
}

/// Resolve one raw record to a canonical item. Pure alias mapping, isolated
/// from parsing and rendering.
///
/// Returns `None` when no source alias carries a non-empty value.
fn normalize(raw: RawItem) -> Option<GalleryItem> {
    let source = [raw.source, raw.src, raw.url]
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())?;

    let caption = [raw.caption, raw.desc]
        .into_iter()
        .flatten()
        .next()
        .unwrap_or_default();

    Some(GalleryItem {
        source,
        title: raw.title.unwrap_or_default(),
        caption,
    })
}

/// Parse manifest JSON into the canonical ordered item sequence.
///
/// Accepts every shape documented in the module docs; malformed JSON is an
/// error, a recognizable document with zero usable items is not.
pub fn parse(json: &str) -> Result<Vec<GalleryItem>, ManifestError> {
    let raw: RawManifest = serde_json::from_str(json)?;
    let raw_items = match raw {
        RawManifest::Bare(items) => items,
        RawManifest::Wrapped { images, items } => images.or(items).unwrap_or_default(),
    };
    Ok(raw_items.into_iter().filter_map(normalize).collect())
}

/// Write the manifest, fully replacing any previous file at `path`.
///
/// The write is total: zero items still produce a complete, well-formed
/// document.
pub fn write(path: &Path, items: &[GalleryItem]) -> Result<(), ManifestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let manifest = Manifest {
        images: items.to_vec(),
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(path, json)?;
    Ok(())
}
