// NameChanger server - starts the gRPC endpoint and blocks until shutdown

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use cli::Cli;
use namechanger::cfg::{AppConfig, FileSource, FileSourceConfig};
use namechanger::server::{install_shutdown_hook, Endpoint, EndpointConfig};
use namechanger::EndpointError;

/// Build the configuration: defaults < config file < CLI flags / env
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match cli.config {
        Some(ref dir) => {
            let source = FileSource::new(FileSourceConfig {
                base_path: dir.clone(),
            });
            AppConfig::load(&source, &cli.config_key)
                .with_context(|| format!("Failed to load config from {}", dir))?
        }
        None => AppConfig::default(),
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref host) = cli.host {
        config.server.host = host.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.log.level = level.clone();
    }

    Ok(config)
}

/// Pick the diagnostic printed when the endpoint cannot start
fn startup_failure_context(err: &EndpointError, server: &EndpointConfig) -> String {
    if err.is_bind_error() {
        format!(
            "Failed to bind {}:{}: the port is invalid or already in use",
            server.host, server.port
        )
    } else {
        format!("Failed to start server on {}:{}", server.host, server.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    namechanger::log::init(&config.log)?;

    let endpoint = match Endpoint::start(config.server.clone()).await {
        Ok(endpoint) => endpoint,
        Err(e) => {
            let context = startup_failure_context(&e, &config.server);
            return Err(anyhow::Error::new(e).context(context));
        }
    };
    let endpoint = Arc::new(endpoint);

    install_shutdown_hook(Arc::clone(&endpoint));
    endpoint.await_termination().await;

    Ok(())
}
