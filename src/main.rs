use anyhow::Context as _;
use clap::{Parser as ClapParser, Subcommand};
use console::style;
use devlog::config::Config;
use devlog::{export, theme};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(RustEmbed)]
#[folder = "assets/default_site/"]
struct Asset;

#[derive(ClapParser)]
#[command(author, version, about = "devlog - static export for a personal developer blog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Assemble the static site into the output directory
    Build,
    /// Validate devlog.toml and the content layout
    Check,
    /// Scaffold a starter site in the current directory
    Init,
}

fn main() -> anyhow::Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        println!("devlog init v{}", env!("CARGO_PKG_VERSION"));
        init_project()?;
        println!("{} Project initialized.", style("success").cyan());
        println!("Done in {:.2}s.", start.elapsed().as_secs_f32());
        return Ok(());
    }

    let config = Config::load(Path::new("devlog.toml"))
        .context("devlog.toml not found or invalid. Run 'devlog init' to begin.")?;

    match cli.command {
        Commands::Build => {
            let summary = export::perform_export(&config, cli.verbose)?;
            println!(
                "{} Exported {} posts and {} pages in {:.2}s.",
                style("success").cyan(),
                summary.posts,
                summary.pages,
                start.elapsed().as_secs_f32()
            );
        }
        Commands::Check => check(&config)?,
        _ => unreachable!(),
    }
    Ok(())
}

/// Configuration and layout checks, without touching the output directory.
fn check(config: &Config) -> anyhow::Result<()> {
    export::validate_build_settings(config)?;
    theme::resolve(&config.theme, &config.site)?;

    for (label, dir) in [
        ("pages", &config.pages_dir),
        ("posts", &config.posts_dir),
        ("static", &config.static_dir),
    ] {
        if dir.exists() {
            println!("  {} {} -> {}", style("ok").green(), label, dir.display());
        } else {
            println!(
                "  {} {} directory missing: {}",
                style("warn").yellow(),
                label,
                dir.display()
            );
        }
    }

    for pattern in &config.style.content {
        println!("  {} style source {}", style("ok").green(), pattern);
    }

    println!("{} Configuration is valid.", style("success").cyan());
    Ok(())
}

fn init_project() -> anyhow::Result<()> {
    println!("{} Extracting default assets...", style("[1/1]").dim());

    for file in Asset::iter() {
        let path = Path::new(file.as_ref());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = Asset::get(file.as_ref()).expect("failed to read embedded asset");

        if !path.exists() {
            fs::write(path, content.data)?;
        }
    }
    Ok(())
}
