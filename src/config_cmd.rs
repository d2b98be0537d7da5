use anyhow::Result;
use clap::Subcommand;
use console::{style, Emoji};
use reflow::AppConfig;
use std::path::{Path, PathBuf};

static CHECKMARK: Emoji = Emoji("✓", "+");
static INFO: Emoji = Emoji("ℹ", "i");

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(AppConfig::config_path()?),
    }
}

pub fn run(action: &ConfigAction, config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;

    match action {
        ConfigAction::Show => {
            if !path.exists() {
                eprintln!(
                    "{} {}",
                    INFO,
                    style(format!("No config file at {}, showing defaults", path.display())).dim()
                );
            }
            let config = AppConfig::load_or_default(&path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            AppConfig::init_at(&path, *force)?;
            println!(
                "{} Configuration saved to: {}",
                style(CHECKMARK.to_string()).green(),
                path.display()
            );
        }
    }

    Ok(())
}
