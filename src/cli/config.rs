use std::path::Path;

use payroll::{Config, domain::config::CONFIG_FILE};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or initialise the tool configuration
///
/// Configuration is read from `payroll.toml` in the root directory. Missing
/// files fall back to the defaults.
///
/// Available configuration keys:
///   format      Record format when a file has no recognised extension (yaml, json)
///   `fail_fast`   Stop checking at the first invalid record (default: false)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Write the current configuration to `payroll.toml`
    Init,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, root: &Path, config: &Config) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                Self::show(root, config);
                Ok(())
            }
            ConfigCommand::Init => Self::init(root, config),
        }
    }

    fn show(root: &Path, config: &Config) {
        let path = root.join(CONFIG_FILE);
        let source = if path.exists() {
            path.display().to_string()
        } else {
            "defaults".to_string()
        };

        println!("Configuration {}", format!("({source})").dim());
        println!("  format:    {}", config.format);
        println!("  fail_fast: {}", config.fail_fast);
    }

    fn init(root: &Path, config: &Config) -> anyhow::Result<()> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }

        config.save(&path)?;
        tracing::info!("Wrote {}", path.display());
        println!("{} {}", "Created".success(), path.display());
        Ok(())
    }
}
