//! Uploads scanning: stage 1 of the build pipeline.
//!
//! Walks the admin uploads directory and produces the ordered gallery item
//! list that [`crate::manifest`] persists. Zero side effects; the single
//! output file is written by the caller.
//!
//! ## Directory layout
//!
//! The uploads folder is flat or nested; nesting is preserved in the emitted
//! web paths:
//!
//! ```text
//! uploads/
//! ├── ceramic-coat.jpg             → static/uploads/ceramic-coat.jpg
//! ├── interior/
//! │   └── full_detail.jpg          → static/uploads/interior/full_detail.jpg
//! └── notes.txt                    (ignored, not an image)
//! ```
//!
//! ## Ordering policy
//!
//! Newest first: descending file-modification-time, ties broken by ascending
//! relative path. The admin workflow is append-only uploads, so the most
//! recent work leads the gallery. Modification time is a sort key only and
//! never appears in the emitted record.
//!
//! ## Missing uploads directory
//!
//! Not an error. A site that has never had an upload still builds: the scan
//! reports zero items and flags the absence so the CLI can mention it.

use crate::manifest::GalleryItem;
use crate::naming;
use std::path::Path;
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Image extensions accepted into the gallery, compared case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Outcome of scanning the uploads directory.
#[derive(Debug)]
pub struct ScanResult {
    /// Gallery items in display order (newest upload first).
    pub items: Vec<GalleryItem>,
    /// The uploads directory did not exist. Zero items, success.
    pub missing_source: bool,
}

/// One discovered file, before it becomes a [`GalleryItem`].
struct Discovered {
    /// Path relative to the uploads root, `/`-separated.
    rel_path: String,
    filename: String,
    modified: SystemTime,
}

/// Scan `uploads_dir` into gallery items, prefixing every source with
/// `public_prefix`.
pub fn scan(uploads_dir: &Path, public_prefix: &str) -> Result<ScanResult, ScanError> {
    if !uploads_dir.is_dir() {
        return Ok(ScanResult {
            items: Vec::new(),
            missing_source: true,
        });
    }

    let mut discovered = Vec::new();
    let walker = WalkDir::new(uploads_dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }

        // Every walked entry sits under the uploads root
        let Ok(rel) = entry.path().strip_prefix(uploads_dir) else {
            continue;
        };
        let rel_path = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let filename = entry.file_name().to_string_lossy().to_string();
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);

        discovered.push(Discovered {
            rel_path,
            filename,
            modified,
        });
    }

    // Newest first; path tiebreak keeps builds deterministic on filesystems
    // with coarse mtime resolution
    discovered.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.rel_path.cmp(&b.rel_path))
    });

    let items = discovered
        .into_iter()
        .map(|d| GalleryItem {
            source: format!("{}/{}", public_prefix, d.rel_path),
            title: naming::humanize_stem(&d.filename),
            caption: String::new(),
        })
        .collect();

    Ok(ScanResult {
        items,
        missing_source: false,
    })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
