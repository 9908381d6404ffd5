#[cfg(feature = "with-serde")]
use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use mailverify_lib::{MxOrdering, VerifyOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    /// nécessite la feature `with-serde`
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mailverify-cli", version, about = "Vérifie la délivrabilité d'une adresse e-mail")]
pub struct Cli {
    /// adresse e-mail à vérifier
    pub email: String,

    /// format: human|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// fichier de configuration TOML
    #[cfg(feature = "with-serde")]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// timeout DNS (ms)
    #[arg(long = "dns-timeout-ms", value_parser = clap::value_parser!(u64).range(1..))]
    pub dns_timeout_ms: Option<u64>,

    /// timeout de connexion TCP (ms)
    #[arg(long = "connect-timeout-ms", value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout_ms: Option<u64>,

    /// port SMTP sondé
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// trie les MX par préférence avant de choisir la cible
    #[arg(long)]
    pub sort_mx: bool,

    /// désactive l'heuristique catch-all (seconde connexion)
    #[arg(long)]
    pub no_catch_all: bool,

    /// niveau de log (RUST_LOG prend le pas)
    #[arg(long, env = "MAILVERIFY_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// clap sortirait en 2, code réservé ici aux adresses invalides.
    pub fn usage_exit_status(err: &clap::Error) -> u8 {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        }
    }

    /// Les options passées en ligne de commande écrasent le fichier.
    pub fn apply_overrides(&self, options: &mut VerifyOptions) {
        if let Some(ms) = self.dns_timeout_ms {
            options.dns_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.connect_timeout_ms {
            options.connect_timeout = Duration::from_millis(ms);
        }
        if let Some(port) = self.port {
            options.smtp_port = port;
        }
        if self.sort_mx {
            options.mx_ordering = MxOrdering::Preference;
        }
        if self.no_catch_all {
            options.catch_all_heuristic = false;
        }
    }
}
