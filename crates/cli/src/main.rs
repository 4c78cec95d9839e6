use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::{fs_store, scene};
use organiser_core::config::{self, AppConfig};
use organiser_core::organiser::{self, OrganiseLayout};
use organiser_core::{rules, scanner, tagger};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "quickorg", about = "Organise asset files and tag scene objects by rule")]
struct Cli {
    /// Path to a config file (defaults to config/default.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move asset files into the type-based folder hierarchy
    Organise {
        /// Report what would happen without touching disk
        #[arg(long)]
        dry_run: bool,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tag scene objects using the configured rule set
    Tag {
        /// Scene file to tag (overrides tagging.scene_path)
        #[arg(long)]
        scene: Option<PathBuf>,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded tag rule set
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Organise { dry_run, json } => run_organise(cfg, dry_run, json),
        Commands::Tag { scene, json } => run_tag(cfg, scene, json),
        Commands::Rules => run_rules(cfg),
    }
}

fn run_organise(cfg: AppConfig, dry_run: bool, json: bool) -> Result<()> {
    let layout = OrganiseLayout {
        root: PathBuf::from(&cfg.organise.root),
        organised_root: cfg.organise.organised_root.clone(),
        duplicates_folder: cfg.organise.duplicates_folder.clone(),
    };

    let files = scanner::discover(&layout.root, &cfg.organise.exclude)
        .with_context(|| format!("failed to scan {}", layout.root.display()))?;
    info!("discovered {} files under {}", files.len(), layout.root.display());

    let mut store = fs_store::FsAssetStore::new(dry_run);
    let report = organiser::organise(&files, &mut store, &layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if dry_run {
            println!("(dry run, nothing moved)");
        }
        print!("{report}");
    }
    Ok(())
}

fn run_tag(cfg: AppConfig, scene_override: Option<PathBuf>, json: bool) -> Result<()> {
    // Missing rule configuration aborts before any subject is touched.
    let rule_set = rules::load_rule_set(Path::new(&cfg.tagging.rules_path))?;
    let known_tags: HashSet<String> = cfg.tagging.known_tags.iter().cloned().collect();

    let scene_path = scene_override
        .or_else(|| cfg.tagging.scene_path.as_ref().map(PathBuf::from))
        .context("no scene file given (use --scene or set tagging.scene_path)")?;

    let mut doc = scene::load(&scene_path)?;
    let report = tagger::tag_all(&mut doc.objects, &rule_set, &known_tags);
    scene::save(&scene_path, &doc)?;
    info!("tagged {} of {} objects", report.tagged, doc.objects.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn run_rules(cfg: AppConfig) -> Result<()> {
    let rule_set = rules::load_rule_set(Path::new(&cfg.tagging.rules_path))?;
    println!("{}", serde_json::to_string_pretty(&rule_set)?);
    Ok(())
}
