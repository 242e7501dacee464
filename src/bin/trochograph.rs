use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "trochograph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene file to SVG (and optionally PNG).
    Render(RenderArgs),
    /// List the module types the registry knows.
    Modules,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene file (TOML, or JSON with a .json extension).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG output width in pixels.
    #[arg(long, default_value_t = 800)]
    png_width: u32,

    /// PNG output height in pixels (defaults to the width).
    #[arg(long)]
    png_height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Modules => cmd_modules(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = trochograph::Scene::from_path(&args.in_path)?;
    let output = trochograph::run_scene(&scene)?;
    let svg = trochograph::svg_document(&output.points, &output.frame);

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(&args.out, &svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png_path) = args.png {
        let height = args.png_height.unwrap_or(args.png_width);
        trochograph::write_png(&svg, &png_path, args.png_width, height)?;
        eprintln!("wrote {}", png_path.display());
    }

    Ok(())
}

fn cmd_modules() -> anyhow::Result<()> {
    for type_name in trochograph::known_types() {
        let (role, _) = trochograph::lookup(type_name)
            .with_context(|| format!("registry entry for '{type_name}'"))?;
        println!("{type_name:<16} {role}");
    }
    Ok(())
}
