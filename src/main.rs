use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_gal::{config, generate, manifest, output, scan};

/// Release builds report the crate version; anything else reports the
/// commit it was built from.
fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once, at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "storefront-gal")]
#[command(about = "Static marketing-site generator for small businesses")]
#[command(long_about = "\
Static marketing-site generator for small businesses

The admin uploads folder is the data source. Every image in it becomes a
gallery entry, newest upload first, with a display title derived from its
filename.

Site structure:

  site/
  ├── config.toml                  # Business name, paths, colors (optional)
  ├── about.md                     # About section, markdown (optional)
  └── uploads/                     # Admin upload folder
      ├── ceramic-coat.jpg         # → titled \"Ceramic Coat\"
      └── interior/
          └── full_detail.jpg      # Nesting preserved in web paths

The build writes a single-page site:

  dist/
  ├── index.html                   # Grid, about, lightbox; CSS/JS inlined
  ├── gallery.json                 # Gallery manifest (the page reads this)
  └── static/uploads/...           # Uploads, copied verbatim

Run 'storefront-gal gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root directory (contains config.toml, about.md, uploads/)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the uploads folder and write the gallery manifest
    Manifest,
    /// Produce the HTML site from an existing manifest
    Generate,
    /// Run the full pipeline: manifest → generate
    Build,
    /// Validate config and report uploads without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Manifest => {
            let config = config::load_config(&cli.source)?;
            run_manifest(&cli, &config)?;
        }
        Command::Generate => {
            let config = config::load_config(&cli.source)?;
            run_generate(&cli, &config)?;
        }
        Command::Build => {
            let config = config::load_config(&cli.source)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            run_manifest(&cli, &config)?;

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            run_generate(&cli, &config)?;

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let uploads_dir = cli.source.join(&config.gallery.uploads_dir);
            let result = scan::scan(&uploads_dir, &config.gallery.public_prefix)?;
            output::print_check_output(&result, &uploads_dir);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Scan uploads and write the manifest into the output directory.
fn run_manifest(cli: &Cli, config: &config::SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let uploads_dir = cli.source.join(&config.gallery.uploads_dir);
    let result = scan::scan(&uploads_dir, &config.gallery.public_prefix)?;
    let manifest_path = cli.output.join(&config.gallery.manifest_file);
    manifest::write(&manifest_path, &result.items)?;
    output::print_manifest_output(&result, &uploads_dir, &manifest_path);
    Ok(())
}

/// Generate the site from whatever manifest the output directory holds.
fn run_generate(cli: &Cli, config: &config::SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let summary = generate::generate(&cli.source, &cli.output, config)?;
    output::print_generate_output(&summary, &config.gallery.public_prefix);
    Ok(())
}
