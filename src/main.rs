mod config;
mod report;
mod signs;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use lockstone_blocks::BlockRegistry;
use lockstone_geom::BlockPos;
use lockstone_world::{SceneConfig, SparseWorld};

use crate::config::AppConfig;
use crate::report::Finder;
use crate::signs::HeaderSignParser;

#[derive(Parser, Debug)]
#[command(name = "lockstone", version, about = "Find the blocks and signs that make up a protection")]
struct Cli {
    /// Settings file; defaults apply when it is missing
    #[arg(long, default_value = "lockstone.toml")]
    config: PathBuf,

    /// Block type registry
    #[arg(long, default_value = "assets/blocks.toml")]
    blocks: PathBuf,

    /// Treat every container on its own, overriding `connect_containers`
    #[arg(long)]
    separate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the container group, protection signs, and support of one block
    Inspect {
        #[arg(long, default_value = "assets/scene.toml")]
        scene: PathBuf,
        /// Block position as x,y,z
        #[arg(long, value_parser = parse_pos, allow_hyphen_values = true)]
        at: BlockPos,
    },
    /// List every container group in a scene with its protection signs
    Scan {
        #[arg(long, default_value = "assets/scene.toml")]
        scene: PathBuf,
    },
}

fn parse_pos(s: &str) -> Result<BlockPos, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got `{}`", s));
    };
    let num = |v: &str| v.parse::<i32>().map_err(|e| format!("`{}`: {}", v, e));
    let pos = BlockPos::new(num(*x)?, num(*y)?, num(*z)?);
    if !pos.in_bounds() {
        return Err(format!("{} is outside the world limit of {}", pos, BlockPos::LIMIT));
    }
    Ok(pos)
}

fn load_world(blocks: &Path, scene: &Path) -> Result<SparseWorld, Box<dyn Error>> {
    let registry = BlockRegistry::load_from_path(blocks)?;
    SceneConfig::load(scene)?.build(registry)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let loaded = AppConfig::load(&cli.config)?;
    let found = loaded.is_some();
    let mut cfg = loaded.unwrap_or_default();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cfg.log_level.as_str()))
        .init();
    if !found {
        log::info!("{} not found; using defaults", cli.config.display());
    }
    if cli.separate {
        cfg.connect_containers = false;
    }

    let finder = Finder::new(HeaderSignParser::new(&cfg.headers), cfg.connect_containers);
    match cli.command {
        Command::Inspect { scene, at } => {
            let world = load_world(&cli.blocks, &scene)?;
            print!("{}", report::inspect(&finder, &world, at));
        }
        Command::Scan { scene } => {
            let world = load_world(&cli.blocks, &scene)?;
            let groups = report::scan(&finder, &world);
            let protected = groups.iter().filter(|g| !g.signs.is_empty()).count();
            for g in &groups {
                print!("{}", g);
            }
            log::info!("{} group(s), {} protected", groups.len(), protected);
        }
    }
    Ok(())
}
