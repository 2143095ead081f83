use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use annokit_canvas::{AnnotationSession, ImageSource};
use annokit_settings::Config;

use crate::image_files::PathImageSource;

#[derive(Debug, Parser)]
#[command(name = "annokit", version, about = "Rectangle annotation for image sequences")]
pub struct Args {
    /// Config file (default: <config dir>/annokit/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log as JSON lines regardless of the config file
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Show how each image would be fitted into the display box
    Inspect {
        /// Image files, in annotation order
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Resolves the config path from the flag or the platform default.
pub fn config_path(args: &Args) -> anyhow::Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::default_path()?),
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path).with_context(|| format!("loading {}", path.display()))
}

pub fn run(cmd: Cmd, config: &Config, config_path: &Path) -> anyhow::Result<()> {
    match cmd {
        Cmd::Inspect { images } => inspect(images, config),
        Cmd::InitConfig { force } => init_config(config_path, force),
    }
}

fn inspect(images: Vec<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let mut session = AnnotationSession::new(PathImageSource::new(images), config);

    for index in 0..session.image_count() {
        session.switch_image(index)?;
        let path = session
            .images()
            .path(index)
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        if session.is_image_loading() {
            println!("{}  {}  (unreadable)", session.position_label(), path);
            continue;
        }

        let info = session.images().image_info(index);
        let fit = session.fit_scale();
        println!(
            "{}  {}  {}x{} -> {:.0}x{:.0} (scale {:.4})",
            session.position_label(),
            path,
            info.width,
            info.height,
            fit.stage_width,
            fit.stage_height,
            fit.scale
        );
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
