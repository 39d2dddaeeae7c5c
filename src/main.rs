use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paltone::models::AppConfig;

#[derive(Parser)]
#[command(name = "paltone")]
#[command(about = "Ordered-dither image converter for custom threshold matrices and palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to a palette-restricted, dithered version
    Convert {
        /// Source image (any format the image crate can decode)
        input: PathBuf,

        /// Output file path (default: <output_dir>/<input>-<matrix>-<palette>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Threshold matrix: an asset name (e.g. bayer_4x4) or a CSV file path
        #[arg(short, long)]
        matrix: Option<String>,

        /// Palette: an asset name (e.g. gameboy) or a hex file path
        #[arg(short, long)]
        palette: Option<String>,

        /// Named matrix+palette preset from config.yaml
        #[arg(long)]
        preset: Option<String>,

        /// Conf directory overriding embedded matrices/palettes (also: CONF_DIR)
        #[arg(long)]
        conf_dir: Option<PathBuf>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract threshold matrix files (CSV)
        #[arg(long)]
        matrices: bool,

        /// Extract palette files (hex)
        #[arg(long)]
        palettes: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            matrix,
            palette,
            preset,
            conf_dir,
        }) => run_convert_command(&input, output, matrix, palette, preset, conf_dir),
        Some(Commands::Init {
            matrices,
            palettes,
            config,
            all,
            force,
            list,
        }) => run_init_command(matrices, palettes, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert one image against a matrix and palette
fn run_convert_command(
    input: &Path,
    output: Option<PathBuf>,
    matrix: Option<String>,
    palette: Option<String>,
    preset: Option<String>,
    conf_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    use paltone::assets::AssetLoader;
    use paltone::services::{resolve_selection, ConversionService};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paltone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // The --conf-dir flag wins over the env var
    let conf_dir = conf_dir.or_else(|| std::env::var("CONF_DIR").ok().map(PathBuf::from));
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);

    let loader = AssetLoader::new(conf_dir, config_file);
    let config = AppConfig::load_from_assets(&loader);

    let (matrix_spec, palette_spec) = resolve_selection(
        matrix.as_deref(),
        palette.as_deref(),
        preset.as_deref(),
        &config,
    )?;

    let service = ConversionService::new(loader);
    let summary = service.convert(
        input,
        &matrix_spec,
        &palette_spec,
        output,
        &config.output_dir,
    )?;

    println!(
        "Wrote {} ({}x{}, matrix {}, palette {})",
        summary.output.display(),
        summary.width,
        summary.height,
        summary.matrix,
        summary.palette
    );

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    matrices: bool,
    palettes: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    use paltone::assets::{AssetCategory, AssetLoader};

    if list {
        println!("Embedded assets:\n");
        println!("Matrices:");
        for f in AssetLoader::list_embedded(AssetCategory::Matrices) {
            println!("  {f}");
        }
        println!("\nPalettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || matrices {
        categories.push(AssetCategory::Matrices);
    }
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --matrices, --palettes, or --config");
        eprintln!("\nRun 'paltone init --list' to see embedded assets.");
        std::process::exit(1);
    }

    // Create asset loader with paths from env vars (or defaults)
    let conf_dir = std::env::var("CONF_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);

    let loader = AssetLoader::new(conf_dir, config_file);

    // Extract assets
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    use paltone::assets::{AssetCategory, AssetLoader};

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let conf_dir = std::env::var("CONF_DIR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Paltone v{VERSION} - ordered-dither image converter");
    println!("Converts images to custom palettes with Bayer-matrix dithering\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONF_DIR    = {}",
        conf_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");

    // Create asset loader to check actual sources
    let loader = AssetLoader::new(
        conf_dir.clone().map(PathBuf::from),
        config_file.clone().map(PathBuf::from),
    );

    // Config source
    let config_source = match loader.config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("embedded ({} not found)", path.display()),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    // Helper for pluralization
    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    // Matrix source
    let matrices_count = loader.list_matrices().len();
    let embedded_matrices = AssetLoader::list_embedded(AssetCategory::Matrices).len();

    match conf_dir {
        Some(ref path) if Path::new(path).exists() => {
            println!(
                "  Matrices: {path} ({matrices_count} {}, {embedded_matrices} embedded)",
                plural(matrices_count)
            );
        }
        _ => println!(
            "  Matrices: embedded ({embedded_matrices} {})",
            plural(embedded_matrices)
        ),
    }

    // Palette source
    let palettes_count = loader.list_palettes().len();
    let embedded_palettes = AssetLoader::list_embedded(AssetCategory::Palettes).len();

    match conf_dir {
        Some(ref path) if Path::new(path).exists() => {
            println!(
                "  Palettes: {path} ({palettes_count} {}, {embedded_palettes} embedded)",
                plural(palettes_count)
            );
        }
        _ => println!(
            "  Palettes: embedded ({embedded_palettes} {})",
            plural(embedded_palettes)
        ),
    }

    // Commands section
    println!("\nCommands:");
    println!("  paltone convert  Convert an image against a matrix and palette");
    println!("  paltone init     Extract embedded assets");
    println!("\nRun 'paltone --help' for more details.");
}
