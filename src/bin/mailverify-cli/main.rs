mod args;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use mailverify_lib::{DisposableDomains, LogFormat, Verifier, VerifyOptions, init_logging};

use crate::args::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(ExitCode::from(Cli::usage_exit_status(&err)));
        }
    };
    init_logging(LogFormat::Human, &cli.log_level).context("install log subscriber")?;

    let (mut options, disposable) = load_config(&cli)?;
    cli.apply_overrides(&mut options);

    let verifier = Verifier::from_system_conf(options)
        .context("initialise DNS resolver")?
        .with_disposable(disposable);
    let result = verifier.verify(&cli.email).await;

    output::write_result(&result, cli.format)?;

    // codes de sortie : 0 OK, 2 invalide, 1 fatal
    if result.checks_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

#[cfg(feature = "with-serde")]
fn load_config(cli: &Cli) -> Result<(VerifyOptions, DisposableDomains)> {
    let Some(path) = &cli.config else {
        return Ok((VerifyOptions::default(), DisposableDomains::builtin()));
    };
    let file = mailverify_lib::ConfigFile::load(path).context("load configuration")?;
    Ok((file.verify_options(), file.disposable_domains()))
}

#[cfg(not(feature = "with-serde"))]
fn load_config(_: &Cli) -> Result<(VerifyOptions, DisposableDomains)> {
    Ok((VerifyOptions::default(), DisposableDomains::builtin()))
}
