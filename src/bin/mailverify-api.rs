use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use mailverify_lib::{ConfigFile, DisposableDomains, LogFormat, Verifier, VerifyOptions, api, init_logging};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "mailverify-api", version, about = "API HTTP de vérification e-mail")]
struct Args {
    /// adresse d'écoute complète (prend le pas sur --port)
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// port d'écoute sur 0.0.0.0
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// fichier de configuration TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// format des logs: human|json
    #[arg(long, default_value = "human")]
    log_format: String,

    /// niveau de log (RUST_LOG prend le pas)
    #[arg(long, env = "MAILVERIFY_LOG", default_value = "info")]
    log_level: String,
}

impl Args {
    fn listen_addr(&self) -> SocketAddr {
        self.listen
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_format = LogFormat::from_name(&args.log_format)
        .ok_or_else(|| anyhow!("unknown --log-format '{}', use: human|json", args.log_format))?;
    init_logging(log_format, &args.log_level).context("install log subscriber")?;

    let (options, disposable) = match &args.config {
        Some(path) => {
            let file = ConfigFile::load(path).context("load configuration")?;
            (file.verify_options(), file.disposable_domains())
        }
        None => (VerifyOptions::default(), DisposableDomains::builtin()),
    };
    info!(
        dns_timeout_ms = options.dns_timeout.as_millis() as u64,
        connect_timeout_ms = options.connect_timeout.as_millis() as u64,
        smtp_port = options.smtp_port,
        disposable_domains = disposable.len(),
        "verifier configured"
    );

    let verifier = Verifier::from_system_conf(options)
        .context("initialise DNS resolver")?
        .with_disposable(disposable);

    let addr = args.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    api::serve(listener, Arc::new(verifier), shutdown_signal())
        .await
        .context("HTTP server")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_4000_on_all_interfaces() {
        let args = Args::try_parse_from(["mailverify-api", "--port", "4000"]).unwrap();
        assert_eq!(args.listen_addr(), "0.0.0.0:4000".parse().unwrap());
    }

    #[test]
    fn listen_overrides_port() {
        let args =
            Args::try_parse_from(["mailverify-api", "--listen", "127.0.0.1:8080", "--port", "9"])
                .unwrap();
        assert_eq!(args.listen_addr(), "127.0.0.1:8080".parse().unwrap());
    }
}
