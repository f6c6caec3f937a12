//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{self, Connection};
use shellpane::models::EnvOverride;
use shellpane::output::OutputMode;

/// shellpane - Run views on a shellpane server and read their output
#[derive(Parser, Debug)]
#[command(
    name = "shellpane",
    version,
    about = "Run views on a shellpane server and read their output",
    long_about = "Query a shellpane server.\n\n\
                  Views are named command templates defined on the server.\n\
                  Each view accepts a declared set of environment variables\n\
                  that can be overridden per invocation."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.shellpane/client.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server host, overrides the config file
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the views the server offers
    Views,

    /// Run a step and print its output
    Output {
        /// View name
        view: String,

        /// Step name
        step: String,

        /// Override a view env var (repeatable)
        #[arg(long = "view-env", value_name = "NAME=VALUE")]
        view_env: Vec<EnvOverride>,

        /// Override a step env var (repeatable)
        #[arg(long = "step-env", value_name = "NAME=VALUE")]
        step_env: Vec<EnvOverride>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let connection = Connection {
        config: cli.config,
        host: cli.host,
    };

    match cli.command {
        Some(Command::Views) => commands::views(&connection, output_mode).await,
        Some(Command::Output {
            view,
            step,
            view_env,
            step_env,
        }) => commands::step_output(&connection, view, step, view_env, step_env, output_mode).await,
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("shellpane v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            Cli::command().print_help()?;
            Ok(())
        },
    }
}
