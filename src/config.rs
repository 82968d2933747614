//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the site root. All
//! options have stock defaults; a config file only needs the values it wants
//! to override. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [business]
//! name = "Your Business"        # Shown in the header and page title
//! tagline = ""                  # Optional strapline under the name
//!
//! [gallery]
//! uploads_dir = "uploads"       # Admin upload folder, relative to site root
//! public_prefix = "static/uploads"  # Web path prefix for emitted sources
//! manifest_file = "gallery.json"    # Manifest path inside the output dir
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! accent = "#0a6cff"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! accent = "#4d94ff"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Business identity shown in the page chrome.
    pub business: BusinessConfig,
    /// Gallery pipeline paths.
    pub gallery: GalleryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.uploads_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.uploads_dir must not be empty".into(),
            ));
        }
        if self.gallery.manifest_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.manifest_file must not be empty".into(),
            ));
        }
        if Path::new(&self.gallery.uploads_dir).is_absolute() {
            return Err(ConfigError::Validation(
                "gallery.uploads_dir must be relative to the site root".into(),
            ));
        }
        if self.gallery.public_prefix.starts_with('/') || self.gallery.public_prefix.ends_with('/')
        {
            return Err(ConfigError::Validation(
                "gallery.public_prefix must not start or end with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Business identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessConfig {
    /// Shown in the header and the page title.
    pub name: String,
    /// Optional strapline under the name. Empty hides it.
    pub tagline: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Your Business".to_string(),
            tagline: String::new(),
        }
    }
}

/// Gallery pipeline paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Admin upload folder, relative to the site root.
    pub uploads_dir: String,
    /// Web path prefix prepended to every emitted `source`. Also the
    /// location the uploads tree is copied to inside the output directory.
    pub public_prefix: String,
    /// Manifest path inside the output directory.
    pub manifest_file: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            uploads_dir: "uploads".to_string(),
            public_prefix: "static/uploads".to_string(),
            manifest_file: "gallery.json".to_string(),
        }
    }
}

/// Color schemes for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    #[serde(default = "dark_defaults")]
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default(),
            dark: dark_defaults(),
        }
    }
}

/// A single mode's palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Nav links, captions, the empty-gallery notice.
    pub text_muted: String,
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        // Light palette; ColorConfig::default swaps in the dark one below
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            accent: "#0a6cff".to_string(),
        }
    }
}

fn dark_defaults() -> ColorScheme {
    ColorScheme {
        background: "#0a0a0a".to_string(),
        text: "#eeeeee".to_string(),
        text_muted: "#999999".to_string(),
        accent: "#4d94ff".to_string(),
    }
}

/// Load `config.toml` from the site root, falling back to stock defaults
/// when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config: SiteConfig = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Generate CSS custom properties from the color config, with the dark
/// palette applied under `prefers-color-scheme`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_vars(scheme: &ColorScheme) -> String {
        format!(
            "  --color-background: {};\n  --color-text: {};\n  --color-text-muted: {};\n  --color-accent: {};\n",
            scheme.background, scheme.text, scheme.text_muted, scheme.accent
        )
    }
    format!(
        ":root {{\n{}}}\n\n@media (prefers-color-scheme: dark) {{\n  :root {{\n{}  }}\n}}",
        scheme_vars(&colors.light),
        scheme_vars(&colors.dark)
    )
}

/// A stock `config.toml` with every option documented. Printed by the
/// `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let module_doc = "# All options are optional - defaults shown below

[business]
name = \"Your Business\"        # Shown in the header and page title
tagline = \"\"                  # Optional strapline under the name

[gallery]
uploads_dir = \"uploads\"       # Admin upload folder, relative to site root
public_prefix = \"static/uploads\"  # Web path prefix for emitted sources
manifest_file = \"gallery.json\"    # Manifest path inside the output dir

[colors.light]
background = \"#ffffff\"
text = \"#111111\"
text_muted = \"#666666\"
accent = \"#0a6cff\"

[colors.dark]
background = \"#0a0a0a\"
text = \"#eeeeee\"
text_muted = \"#999999\"
accent = \"#4d94ff\"
";
    module_doc.to_string()
}
