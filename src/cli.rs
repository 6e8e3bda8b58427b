use std::path::PathBuf;

mod check;
mod config;
mod new;
mod terminal;

use check::Check;
use clap::ArgAction;
use new::New;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory holding `payroll.toml`
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Build a single employee record and print it
    New(New),

    /// Check a file of employee records
    ///
    /// Every record is validated field by field. The command fails if any
    /// record is invalid.
    Check(Check),

    /// Show the effective configuration
    Config(config::Command),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let settings = payroll::Config::load_or_default(&root)?;

        match self {
            Self::New(command) => command.run(),
            Self::Check(command) => command.run(&settings),
            Self::Config(command) => command.run(&root, &settings),
        }
    }
}
