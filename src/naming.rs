//! Centralized filename-to-title derivation.
//!
//! Admins upload files straight from phones and cameras, so filenames arrive
//! as `wax_and_seal-detail.jpg` or `IMG 2041.png`. Every place that needs a
//! display label (manifest titles, alt text, CLI listings) goes through the
//! same derivation so the site never shows two spellings of the same name.
//!
//! ## Derivation
//!
//! - strip the extension
//! - `_` and `-` become spaces
//! - repeated whitespace collapses to a single space, ends trimmed
//! - the first letter of each word is capitalized
//!
//! `my_photo-one.jpg` → "My Photo One"

/// Derive a display title from an uploaded file's name.
///
/// Operates on the full filename (extension included); pass a bare stem and
/// it is treated as already extension-free.
pub fn humanize_stem(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        // A leading dot is a hidden-file marker, not an extension separator
        Some(0) | None => filename,
        Some(pos) => &filename[..pos],
    };

    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    spaced
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest untouched.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
