//! # Storefront Gal
//!
//! A minimal static site generator for small-business marketing sites with a
//! photo gallery. The admin uploads folder is the data source: every image in
//! it becomes a gallery entry, newest upload first, titled after its filename.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! The build runs two independent stages joined by a JSON manifest:
//!
//! ```text
//! 1. Manifest   uploads/  →  gallery.json    (filesystem → structured data)
//! 2. Generate   manifest  →  dist/           (single-page HTML site)
//! ```
//!
//! The manifest is the public contract between the stages, and it is written
//! where the published page reads it. That buys:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Interchangeability**: anything that writes valid manifest JSON (an
//!   admin panel, a hand edit) feeds the same generate stage.
//! - **Testability**: each stage is exercised in isolation through the
//!   manifest, without ever building a whole site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the uploads directory into an ordered item list |
//! | [`manifest`] | The manifest contract: strict canonical writer, tolerant reader |
//! | [`viewer`] | Manifest loading with a failure taxonomy, thumbnail-grid rendering |
//! | [`lightbox`] | Lightbox interaction state machine: navigation, zoom, swipe |
//! | [`generate`] | Stage 2 — renders the site from the manifest using Maud |
//! | [`config`] | `config.toml` loading, validation, and color CSS generation |
//! | [`naming`] | Filename → display title derivation |
//! | [`output`] | CLI output formatting — information-first display of stage results |
//!
//! # Design Decisions
//!
//! ## Tolerant Reader, Strict Writer
//!
//! The manifest writer emits exactly one canonical shape. The reader accepts
//! every shape the manifest has historically taken — bare arrays, `items`
//! wrappers, `src`/`url` source aliases, `desc` captions — so a site with an
//! old manifest keeps rendering after an upgrade. Normalization lives in one
//! pure function in [`manifest`] and everything downstream sees only the
//! canonical [`manifest::GalleryItem`].
//!
//! ## Lightbox Semantics as Data
//!
//! The lightbox is a pure state machine in [`lightbox`]: a transition
//! function over value-type states, with zoom clamping, wraparound
//! navigation, and swipe thresholds as tested Rust. The generated page
//! embeds a small JS runtime whose numeric constants are substituted from
//! the same module at build time, so the browser glue cannot drift from the
//! tested transitions.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, and all
//! interpolation is auto-escaped — gallery titles and captions come from
//! filenames and hand-edited JSON, so escaping by default matters.
//!
//! ## Zero Server Requirements
//!
//! The output is one HTML page with CSS and JavaScript inlined, a JSON file,
//! and a copied image tree. It can be dropped on any static file host — no
//! Node, no PHP, no database.

pub mod config;
pub mod generate;
pub mod lightbox;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
