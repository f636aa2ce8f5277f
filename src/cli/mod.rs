pub mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ProviderConfig;
use crate::error::{DokployError, Result};

#[derive(Parser)]
#[command(name = "dokploy")]
#[command(version)]
#[command(about = "Manage Dokploy resources from the command line")]
#[command(long_about = "Drive the Dokploy API the way the Terraform provider does.\n\nResources and data sources take and return JSON state keyed by attribute name.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the Dokploy host and API key
    Init,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Send a raw request to the API and print the response body
    Request {
        /// HTTP method (GET, POST, ...)
        method: String,

        /// Endpoint path relative to the host, e.g. certificates.all
        path: String,

        /// JSON body, or @file to read it from a file
        #[arg(short, long)]
        body: Option<String>,
    },

    /// List registered resource and data source types
    Types,

    /// Run a resource lifecycle operation
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Read a data source
    Data {
        /// Data source type, e.g. dokploy_deployments
        type_name: String,

        /// Configuration attribute (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Convert between environment text and JSON
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },

    /// Infer the source type for an application or compose plan
    SourceType {
        /// Resource family: application or compose
        family: String,

        /// Source attribute with a known value (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Source attribute whose value is not known yet (repeatable)
        #[arg(short, long, value_name = "FIELD")]
        pending: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (host or api_key)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Create a resource from a planned state
    Create {
        type_name: String,
        /// Planned state as JSON, or @file
        #[arg(long)]
        plan: String,
    },

    /// Refresh a resource state
    Read {
        type_name: String,
        /// Current state as JSON, or @file
        #[arg(long)]
        state: String,
    },

    /// Update a resource in place
    Update {
        type_name: String,
        /// Prior state as JSON, or @file
        #[arg(long)]
        prior: String,
        /// Planned state as JSON, or @file
        #[arg(long)]
        plan: String,
    },

    /// Delete a resource
    Delete {
        type_name: String,
        /// Current state as JSON, or @file
        #[arg(long)]
        state: String,
    },

    /// Import an existing resource by id
    Import { type_name: String, id: String },
}

#[derive(Subcommand)]
pub enum EnvCommands {
    /// Parse KEY=VALUE text into a JSON object
    Parse {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Format a JSON object as KEY=VALUE text
    Format {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init => commands::init::execute().await,
            Commands::Config { command } => match command {
                ConfigCommands::Show => commands::config::show().await,
                ConfigCommands::Set { key, value } => commands::config::set(key, value).await,
            },
            Commands::Request { method, path, body } => {
                let config = ProviderConfig::load()?;
                commands::request::execute(&config, &method, &path, body.as_deref()).await
            }
            Commands::Types => commands::resource::types().await,
            Commands::Resource { command } => {
                let config = ProviderConfig::load()?;
                match command {
                    ResourceCommands::Create { type_name, plan } => {
                        commands::resource::create(&config, &type_name, &plan).await
                    }
                    ResourceCommands::Read { type_name, state } => {
                        commands::resource::read(&config, &type_name, &state).await
                    }
                    ResourceCommands::Update {
                        type_name,
                        prior,
                        plan,
                    } => commands::resource::update(&config, &type_name, &prior, &plan).await,
                    ResourceCommands::Delete { type_name, state } => {
                        commands::resource::delete(&config, &type_name, &state).await
                    }
                    ResourceCommands::Import { type_name, id } => {
                        commands::resource::import(&config, &type_name, &id).await
                    }
                }
            }
            Commands::Data { type_name, set } => {
                let config = ProviderConfig::load()?;
                commands::data::execute(&config, &type_name, &set).await
            }
            Commands::Env { command } => match command {
                EnvCommands::Parse { file } => commands::env::parse(file).await,
                EnvCommands::Format { file } => commands::env::format(file).await,
            },
            Commands::SourceType {
                family,
                set,
                pending,
            } => commands::source_type::execute(&family, &set, &pending).await,
        }
    }
}

/// Spinner shown while waiting on the API.
pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Inline JSON, or `@path` to read JSON from a file.
pub(crate) fn read_json_arg(arg: &str) -> Result<serde_json::Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(shellexpand::tilde(path).as_ref())?,
        None => arg.to_string(),
    };
    Ok(serde_json::from_str(&text)?)
}

/// Split `KEY=VALUE` arguments.
pub(crate) fn parse_assignments(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| DokployError::InvalidArgument(format!("expected KEY=VALUE, got '{}'", arg)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_resource_create() {
        let cli = Cli::try_parse_from([
            "dokploy",
            "resource",
            "create",
            "dokploy_certificate",
            "--plan",
            "{}",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Resource {
                command: ResourceCommands::Create { .. }
            }
        ));
    }

    #[test]
    fn test_cli_parses_repeated_sets() {
        let cli = Cli::try_parse_from([
            "dokploy",
            "-v",
            "data",
            "dokploy_deployments",
            "--set",
            "server_id=srv",
            "-s",
            "compose_id=c",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Data { type_name, set } => {
                assert_eq!(type_name, "dokploy_deployments");
                assert_eq!(set, vec!["server_id=srv", "compose_id=c"]);
            }
            _ => panic!("expected data command"),
        }
    }

    #[test]
    fn test_parse_assignments() {
        let parsed = parse_assignments(&["a=1".to_string(), "b=x=y".to_string(), "c=".to_string()]).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x=y".to_string()),
                ("c".to_string(), String::new()),
            ]
        );

        assert!(parse_assignments(&["novalue".to_string()]).is_err());
        assert!(parse_assignments(&["=1".to_string()]).is_err());
    }

    #[test]
    fn test_read_json_arg() {
        assert_eq!(read_json_arg(r#"{"id": "x"}"#).unwrap()["id"], "x");

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, r#"{"id": "from-file"}"#).unwrap();
        let arg = format!("@{}", path.display());
        assert_eq!(read_json_arg(&arg).unwrap()["id"], "from-file");

        assert!(read_json_arg("not json").is_err());
    }
}
