//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod presets;
pub(crate) mod sidebar;

use std::path::PathBuf;

use bunsite_config::{CliSettings, Config, Preset};
use clap::Args;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use sidebar::SidebarArgs;

/// Configuration selection shared by all commands.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover bunsite.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in configuration to use or to layer the config file on
    /// (bun-time, bun-js).
    #[arg(long, global = true)]
    pub preset: Option<Preset>,
}

impl ConfigArgs {
    /// Load the configuration selected by these arguments.
    pub(crate) fn load(&self, source_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let settings = CliSettings {
            preset: self.preset,
            source_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        config.validate()?;
        Ok(config)
    }
}
