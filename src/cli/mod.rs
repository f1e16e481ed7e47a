use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::application::ExpenseService;
use crate::config::{load_config, ServerConfig};
use crate::{logging, web};

/// Expenses - in-memory expense tracker served over HTTP
#[derive(Debug, Parser)]
#[command(name = "expenses")]
#[command(about = "Track expenses per category from a web form and a dashboard")]
#[command(version)]
pub struct Cli {
    /// TOML config file (host, port, log_filter)
    #[arg(short, long, env = "EXPENSES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides the config file)
    #[arg(long, env = "EXPENSES_HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "EXPENSES_PORT")]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the config file with command-line overrides.
    pub fn server_config(&self) -> Result<ServerConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }

    pub async fn run(self) -> Result<()> {
        let config = self.server_config()?;
        logging::init(&config.log_filter, self.verbose)?;

        let addr = config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        web::serve(listener, ExpenseService::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["expenses", "--host", "0.0.0.0", "-p", "8000"]).unwrap();
        let config = cli.server_config().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["expenses", "--port", "http"]).is_err());
    }
}
