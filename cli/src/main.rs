//! employee-cli: command-line front end for the employee REST API.

mod commands;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use employee_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use employee_core::{ClientConfig, EmployeeService};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "employee-cli")]
#[command(about = "List, inspect, create, update and delete employees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API host, without the /api/v1 prefix
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = TIMEOUT_ENV, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List all employees
    List,

    /// Show one employee
    Get {
        /// Employee id
        id: u64,
    },

    /// Create an employee
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        salary: u64,

        /// Profile image URI
        #[arg(long)]
        image: String,
    },

    /// Change fields of an existing employee
    Update {
        /// Employee id
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        salary: Option<u64>,

        /// Profile image URI
        #[arg(long)]
        image: Option<String>,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: u64,
    },
}

impl Cli {
    fn config(&self) -> anyhow::Result<ClientConfig> {
        let config = ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        };
        config.validate().context("invalid client configuration")?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    let service = EmployeeService::from_config(&config);
    let output = commands::execute(cli.command, &service)?;
    let text = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{text}");
    Ok(())
}
