//! Gallery viewer: manifest loading and thumbnail-grid rendering.
//!
//! The viewer consumes the manifest the builder wrote, through two seams:
//!
//! - [`ManifestSource`] abstracts where manifest bytes come from. The
//!   shipped [`FileSource`] re-reads the file on every call, so a rebuilt
//!   manifest is always picked up fresh; tests substitute an in-memory
//!   source.
//! - [`GridView`] is what loading produces: the grid is rendered from a
//!   view state, never directly from I/O results, so every failure mode has
//!   exactly one user-visible shape.
//!
//! ## Failure taxonomy
//!
//! | Condition | View | User sees |
//! |---|---|---|
//! | source unreadable | `Failed` | single fallback message |
//! | malformed JSON | `Failed` | same fallback message |
//! | zero usable items | `Empty` | distinct "no photos yet" guidance |
//! | otherwise | `Loaded` | the thumbnail grid |
//!
//! Load errors are logged to stderr and converted to view state; nothing
//! propagates past [`load`]. There is no retry.
//!
//! Rendering is a pure function of the view: re-rendering the same view
//! yields identical markup, and the grid container is always replaced
//! wholesale, never appended to.

use crate::manifest::{self, GalleryItem};
use maud::{Markup, html};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("manifest read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("manifest parse failed: {0}")]
    Parse(#[from] manifest::ManifestError),
}

/// Where manifest JSON comes from. Implementations must return the current
/// contents on every call; caching belongs to no one on this path.
pub trait ManifestSource {
    /// Fetch the manifest text.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
}

/// Reads the manifest from a file, fresh on every call.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// The grid's render state. Every load resolves to exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loaded(Vec<GalleryItem>),
    Empty,
    Failed,
}

/// Message rendered when loading or parsing the manifest fails.
pub const FALLBACK_MESSAGE: &str = "Couldn\u{2019}t load the gallery.";
/// Message rendered for a valid manifest with no items. Distinct from the
/// failure message, and tells the owner where content comes from.
pub const EMPTY_MESSAGE: &str = "No photos yet. Photos appear here once they are uploaded to the uploads folder in the site admin.";

/// Load the manifest through `source` and resolve it to a [`GridView`].
///
/// All errors are caught here: they are logged to stderr and become
/// `GridView::Failed`.
pub fn load(source: &dyn ManifestSource) -> GridView {
    let json = match source.fetch() {
        Ok(json) => json,
        Err(err) => {
            eprintln!("gallery: {} ({})", err, source.location());
            return GridView::Failed;
        }
    };
    let items = match manifest::parse(&json) {
        Ok(items) => items,
        Err(err) => {
            eprintln!("gallery: {} ({})", err, source.location());
            return GridView::Failed;
        }
    };
    if items.is_empty() {
        GridView::Empty
    } else {
        GridView::Loaded(items)
    }
}

/// Render the contents of the `#gallery-grid` container for a view.
///
/// Loaded entries carry `data-index` with their position in the normalized
/// sequence; the lightbox maps clicks back through it.
pub fn render_grid(view: &GridView) -> Markup {
    match view {
        GridView::Loaded(items) => html! {
            @for (index, item) in items.iter().enumerate() {
                (render_card(index, item))
            }
        },
        GridView::Empty => html! {
            p.muted { (EMPTY_MESSAGE) }
        },
        GridView::Failed => html! {
            p.muted { (FALLBACK_MESSAGE) }
        },
    }
}

/// One thumbnail card.
fn render_card(index: usize, item: &GalleryItem) -> Markup {
    let alt = if item.title.is_empty() {
        "Gallery photo"
    } else {
        &item.title
    };
    html! {
        figure.card data-index=(index) {
            img src=(item.source) alt=(alt) loading="lazy";
            @if !item.title.is_empty() || !item.caption.is_empty() {
                figcaption {
                    @if !item.title.is_empty() {
                        strong { (item.title) }
                    }
                    @if !item.caption.is_empty() {
                        div.caption { (item.caption) }
                    }
                }
            }
        }
    }
}
