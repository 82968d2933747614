//! CLI output formatting for the build stages.
//!
//! Output is information-centric, not file-centric: each photo leads with
//! its positional index and display title, with the emitted source path as
//! an indented context line. Each stage has a `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure.
//!
//! ## Manifest stage
//!
//! ```text
//! Photos
//!     001 Hand Wash
//!         Source: static/uploads/hand-wash.jpg
//!     002 Seats
//!         Source: static/uploads/interior/seats.jpg
//!
//! Wrote 2 items to dist/gallery.json
//! ```
//!
//! ## Generate stage
//!
//! ```text
//! Gallery -> index.html (2 photos)
//! About -> index.html#about
//! Uploads -> static/uploads/
//! ```

use crate::generate::GenerateSummary;
use crate::scan::ScanResult;
use crate::viewer::GridView;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One photo line: titled photos lead with the title, untitled with the
/// source path in parens.
fn photo_line(index: usize, title: &str, source: &str) -> String {
    if title.is_empty() {
        format!("{} ({})", format_index(index), source)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

// ============================================================================
// Manifest stage
// ============================================================================

/// The photo listing shared by the manifest and check displays.
fn photo_listing(result: &ScanResult, uploads_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    if result.missing_source {
        lines.push(format!(
            "No uploads directory yet: {}",
            uploads_dir.display()
        ));
    }

    if !result.items.is_empty() {
        lines.push("Photos".to_string());
        for (i, item) in result.items.iter().enumerate() {
            lines.push(format!(
                "    {}",
                photo_line(i + 1, &item.title, &item.source)
            ));
            lines.push(format!("        Source: {}", item.source));
        }
        lines.push(String::new());
    }

    lines
}

/// Format manifest stage output: discovered photos plus the written count.
pub fn format_manifest_output(
    result: &ScanResult,
    uploads_dir: &Path,
    manifest_path: &Path,
) -> Vec<String> {
    let mut lines = photo_listing(result, uploads_dir);

    let noun = if result.items.len() == 1 {
        "item"
    } else {
        "items"
    };
    lines.push(format!(
        "Wrote {} {} to {}",
        result.items.len(),
        noun,
        manifest_path.display()
    ));

    lines
}

/// Print manifest stage output to stdout.
pub fn print_manifest_output(result: &ScanResult, uploads_dir: &Path, manifest_path: &Path) {
    for line in format_manifest_output(result, uploads_dir, manifest_path) {
        println!("{}", line);
    }
}

/// Format check output: the photo listing with a validity summary instead of
/// a write report. The check command never writes.
pub fn format_check_output(result: &ScanResult, uploads_dir: &Path) -> Vec<String> {
    let mut lines = photo_listing(result, uploads_dir);
    let noun = if result.items.len() == 1 {
        "photo"
    } else {
        "photos"
    };
    lines.push(format!("Site is valid ({} {})", result.items.len(), noun));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(result: &ScanResult, uploads_dir: &Path) {
    for line in format_check_output(result, uploads_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate stage
// ============================================================================

/// Format generate stage output showing what landed in the site.
pub fn format_generate_output(summary: &GenerateSummary, public_prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();

    let gallery_state = match &summary.view {
        GridView::Loaded(items) => {
            let noun = if items.len() == 1 { "photo" } else { "photos" };
            format!("({} {})", items.len(), noun)
        }
        GridView::Empty => "(no photos yet)".to_string(),
        GridView::Failed => "(manifest unavailable, fallback rendered)".to_string(),
    };
    lines.push(format!("Gallery \u{2192} index.html {}", gallery_state));

    if summary.about_rendered {
        lines.push("About \u{2192} index.html#about".to_string());
    }
    if summary.uploads_copied {
        lines.push(format!("Uploads \u{2192} {}/", public_prefix));
    }

    lines
}

/// Print generate stage output to stdout.
pub fn print_generate_output(summary: &GenerateSummary, public_prefix: &str) {
    for line in format_generate_output(summary, public_prefix) {
        println!("{}", line);
    }
}
