use clap::{Parser, Subcommand, ValueEnum};
use figmagen_scene::{GenerateConfig, Scene, StyleMode, UnitType};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figmagen")]
#[command(about = "figmagen: React component generator for exported design documents")]
#[command(version)]
struct Cli {
    /// Log classification decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a .tsx component and .css stylesheet from a design node
    Build {
        /// Input .json file (one exported design node)
        path: String,

        #[arg(long, value_enum, default_value_t = Style::ComponentLibrary)]
        style: Style,

        #[arg(long, value_enum, default_value_t = Unit::Px)]
        unit: Unit,

        /// Output directory (defaults to the input file's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Check that a design node can be read, without writing output
    Check {
        /// Input .json file
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    SemanticMarkup,
    ComponentLibrary,
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    Px,
    Rem,
    #[value(name = "rem-as-10px")]
    RemAs10px,
}

impl From<Style> for StyleMode {
    fn from(style: Style) -> Self {
        match style {
            Style::SemanticMarkup => StyleMode::SemanticMarkup,
            Style::ComponentLibrary => StyleMode::ComponentLibrary,
        }
    }
}

impl From<Unit> for UnitType {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Px => UnitType::Px,
            Unit::Rem => UnitType::Rem,
            Unit::RemAs10px => UnitType::RemAs10px,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            style,
            unit,
            out_dir,
        } => cmd_build(
            &path,
            GenerateConfig::new(style.into(), unit.into()),
            out_dir.as_deref(),
        ),
        Command::Check { path } => cmd_check(&path),
    }
}

fn install_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_scene(path: &str) -> Scene {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    let source = match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    };
    match Scene::from_json(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str, config: GenerateConfig, out_dir: Option<&Path>) {
    let scene = read_scene(path);
    debug!(path, nodes = scene.len(), ?config, "building");

    let output = figmagen_codegen::generate(&scene, config);
    if output.code.is_empty() {
        eprintln!("Nothing to generate: root node of {path} is invisible");
        return;
    }

    // Write output files next to the source unless told otherwise
    let input = Path::new(path);
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("component");
    let dir = out_dir.unwrap_or_else(|| input.parent().unwrap_or(Path::new(".")));

    let code_path = dir.join(format!("{stem}.tsx"));
    let css_path = dir.join(format!("{stem}.css"));

    if let Err(e) = std::fs::write(&code_path, format!("{}\n", output.code)) {
        eprintln!("Error writing {}: {e}", code_path.display());
        std::process::exit(1);
    }
    if !output.css.is_empty() {
        if let Err(e) = std::fs::write(&css_path, format!("{}\n", output.css)) {
            eprintln!("Error writing {}: {e}", css_path.display());
            std::process::exit(1);
        }
    }

    eprintln!("Built: {}", code_path.display());
}

fn cmd_check(path: &str) {
    let scene = read_scene(path);

    let Some(root) = figmagen_tree::build_tag_tree(&scene, GenerateConfig::default()) else {
        eprintln!("OK: {path} (root is invisible)");
        return;
    };
    let components = root.walk().filter(|tag| tag.kind.is_some()).count();
    eprintln!(
        "OK: {path} ({} nodes, {components} recognized components)",
        scene.len()
    );
}
