use crate::config::{BackendKind, ENV_BACKEND, ENV_PORT};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "medic-assist")]
#[command(about = "Clinical case analysis form backed by a hosted language model")]
pub struct CliArgs {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Listening port (overrides PORT)")]
    pub port: Option<u16>,

    #[arg(long, value_enum, help = "Completion backend (overrides MEDIC_BACKEND)")]
    pub backend: Option<BackendKind>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Flags take precedence over the config file and the environment.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            ENV_PORT => self.port.map(|p| p.to_string()),
            ENV_BACKEND => self.backend.map(|b| b.as_str().to_string()),
            _ => None,
        }
    }
}
