//! HTML site generation: stage 2 of the build pipeline.
//!
//! Takes the manifest written by the scan stage and produces the published
//! site:
//!
//! ```text
//! dist/
//! ├── index.html               # grid + lightbox overlay, CSS/JS inlined
//! ├── gallery.json             # the manifest (written by stage 1)
//! └── static/uploads/...       # uploads tree, copied verbatim
//! ```
//!
//! The manifest is read back through [`crate::viewer::load`], so generation
//! exercises the same tolerance and failure contracts the viewer promises:
//! a missing or malformed manifest produces a page carrying the fallback
//! message, an empty one the "no photos yet" notice — never a half-rendered
//! grid.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/gallery.js`: lightbox/menu/scroll runtime; its interaction
//!   constants are substituted from [`crate::lightbox`] at build time so the
//!   browser glue and the tested state machine share one source of truth.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The
//! lightbox overlay is rendered exactly once per page, in the projection of
//! the closed state.

use crate::config::{self, SiteConfig};
use crate::lightbox::{self, LightboxState};
use crate::viewer::{self, FileSource, GridView};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS_TEMPLATE: &str = include_str!("../static/gallery.js");

/// What generation produced, for CLI reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    /// The grid state the page was rendered from.
    pub view: GridView,
    /// An `about.md` was found and rendered.
    pub about_rendered: bool,
    /// The uploads tree was copied into the output directory.
    pub uploads_copied: bool,
}

/// Generate the site into `output_dir`.
///
/// Expects the manifest to already exist at its configured path inside
/// `output_dir` (the scan stage writes it there); its absence is not an
/// error but renders the fallback page state.
pub fn generate(
    site_root: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;

    // Publish the uploads so emitted source paths resolve
    let uploads_dir = site_root.join(&config.gallery.uploads_dir);
    let uploads_copied = uploads_dir.is_dir();
    if uploads_copied {
        let public_dir = output_dir.join(&config.gallery.public_prefix);
        fs::create_dir_all(&public_dir)?;
        copy_dir_recursive(&uploads_dir, &public_dir)?;
    }

    let manifest_path = output_dir.join(&config.gallery.manifest_file);
    let view = viewer::load(&FileSource::new(manifest_path));

    let about_html = read_about(site_root)?;
    let about_rendered = about_html.is_some();

    let page = render_index(config, &view, about_html.as_deref());
    fs::write(output_dir.join("index.html"), page.into_string())?;

    Ok(GenerateSummary {
        view,
        about_rendered,
        uploads_copied,
    })
}

/// Read and convert `about.md` from the site root, if present.
fn read_about(site_root: &Path) -> Result<Option<String>, GenerateError> {
    let path = site_root.join("about.md");
    if !path.exists() {
        return Ok(None);
    }
    let markdown = fs::read_to_string(&path)?;
    let mut body = String::new();
    md_html::push_html(&mut body, Parser::new(&markdown));
    Ok(Some(body))
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The embedded JS runtime with interaction constants substituted in.
fn runtime_js() -> String {
    JS_TEMPLATE
        .replace("__MIN_ZOOM__", &lightbox::MIN_ZOOM.to_string())
        .replace("__MAX_ZOOM__", &lightbox::MAX_ZOOM.to_string())
        .replace("__ZOOM_STEP__", &lightbox::ZOOM_STEP.to_string())
        .replace(
            "__SWIPE_THRESHOLD_PX__",
            &lightbox::SWIPE_THRESHOLD_PX.to_string(),
        )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css.to_string())) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: business identity plus collapsible nav.
fn site_header(config: &SiteConfig, has_about: bool) -> Markup {
    html! {
        header.site-header {
            div {
                h1 { (config.business.name) }
                @if !config.business.tagline.is_empty() {
                    p.tagline { (config.business.tagline) }
                }
            }
            button.menu-toggle aria-expanded="false" aria-label="Menu" { "\u{2630}" }
            nav.main-nav data-collapsible {
                ul {
                    li { a href="#gallery" { "Gallery" } }
                    @if has_about {
                        li { a href="#about" { "About" } }
                    }
                }
            }
            div.nav-backdrop hidden {}
        }
    }
}

/// Renders the lightbox overlay in its closed projection. Called exactly
/// once per page; the runtime's get-or-create accessor guards the rest.
pub fn render_lightbox_overlay() -> Markup {
    let closed = lightbox::project(LightboxState::default());
    let img_style = format!(
        "transform: {}; transform-origin: {}",
        closed.transform, closed.transform_origin
    );

    html! {
        div #lightbox .lightbox.open[closed.overlay_open] aria-hidden="true" {
            div.lightbox-backdrop {}
            figure.lightbox-stage {
                img src="" alt="" style=(img_style);
            }
            button.lightbox-close aria-label="Close" { "\u{00d7}" }
            button.lightbox-prev aria-label="Previous image" { "\u{2039}" }
            button.lightbox-next aria-label="Next image" { "\u{203a}" }
            div.lightbox-zoom {
                button.zoom-out aria-label="Zoom out" { "\u{2212}" }
                button.zoom-reset aria-label="Reset zoom" { "1:1" }
                button.zoom-in aria-label="Zoom in" { "+" }
                a.lightbox-source href="#" target="_blank" rel="noopener" { "Original" }
            }
            figcaption.lightbox-caption {}
        }
    }
}

/// Renders the full index page.
fn render_index(config: &SiteConfig, view: &GridView, about_html: Option<&str>) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    let content = html! {
        (site_header(config, about_html.is_some()))
        main {
            section #gallery {
                div #gallery-grid {
                    (viewer::render_grid(view))
                }
            }
            @if let Some(about) = about_html {
                section #about .about-section {
                    (PreEscaped(about.to_string()))
                }
            }
        }
        (render_lightbox_overlay())
        script { (PreEscaped(runtime_js())) }
    };

    base_document(&config.business.name, &css, content)
}

// ============================================================================
// Tests
// ============================================================================
