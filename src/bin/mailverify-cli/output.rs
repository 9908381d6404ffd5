use anyhow::Result;
#[cfg(not(feature = "with-serde"))]
use anyhow::bail;
use mailverify_lib::VerificationResult;

use crate::args::OutputFormat;

pub fn write_result(result: &VerificationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", render_human(result)),
        OutputFormat::Json => write_json(result)?,
    }
    Ok(())
}

pub fn render_human(result: &VerificationResult) -> String {
    [
        "Email Verification Result".to_string(),
        "-".repeat(25),
        format!("Email   : {}", result.email),
        format!("Syntax  : {}", result.syntax_valid),
        format!("Domain  : {}", result.domain_valid),
        format!("MX      : {}", result.mx_present),
        format!("SMTP    : {}", result.smtp_state),
        format!("Status  : {}", result.status),
    ]
    .join("\n")
}

#[cfg(feature = "with-serde")]
fn write_json(result: &VerificationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &VerificationResult) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}
