//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use gitprovider::output::OutputMode;

/// gitprovider - Validate and default git hosting resource manifests
#[derive(Parser, Debug)]
#[command(
    name = "gitprovider",
    version,
    about = "Validate and default git hosting resource manifests",
    long_about = "Check repository, deploy key and team access declarations before\n\
                  they are sent to a git hosting provider.\n\n\
                  Unset optional fields are filled with their defaults, then every\n\
                  field is validated and all violations are reported at once."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply defaults to a manifest and validate every resource
    Check {
        /// Path to the manifest
        manifest: PathBuf,
    },

    /// Print a manifest with defaults applied
    Defaults {
        /// Path to the manifest
        manifest: PathBuf,
    },

    /// List legal enum values
    Values {
        /// One of: transport, credential, visibility, permission, license
        kind: Option<String>,
    },

    /// Print the clone URL of a repository
    CloneUrl {
        /// Host, e.g. github.com
        #[arg(long)]
        domain: String,

        /// Organization or user
        #[arg(long)]
        org: String,

        /// Nested group, may be repeated
        #[arg(long = "sub-org")]
        sub_orgs: Vec<String>,

        /// Repository name
        #[arg(long)]
        repo: String,

        /// Transport: https, git, ssh
        #[arg(short, long, default_value = "https")]
        transport: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { manifest }) => commands::check(&manifest, output_mode),
        Some(Command::Defaults { manifest }) => commands::defaults(&manifest, output_mode),
        Some(Command::Values { kind }) => commands::values(kind.as_deref(), output_mode),
        Some(Command::CloneUrl {
            domain,
            org,
            sub_orgs,
            repo,
            transport,
        }) => commands::clone_url(domain, org, sub_orgs, repo, &transport, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("gitprovider v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            println!("gitprovider v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'gitprovider --help' for usage");
            Ok(())
        },
    }
}
