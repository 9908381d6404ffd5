//! Mailbox syntax check (RFC 5322 `mailbox`, UTF-8 atext per RFC 6532).
//!
//! [`parse_mailbox`] accepts a bare `local-part@domain` or the
//! `display-name <local-part@domain>` form, each optionally surrounded by
//! whitespace and `(comments)`. Obsolete forms and groups are rejected.

mod cfws;
mod domain;
mod local;
mod types;

pub use types::{Mailbox, SyntaxError};

use cfws::{skip_cfws, trim_wsp};
use domain::split_domain;
use local::{is_atext, scan_quoted, split_local_part};

/// Parses `input` as a mailbox address.
pub fn parse_mailbox(input: &str) -> Result<Mailbox<'_>, SyntaxError> {
    if input.is_empty() {
        return Err(SyntaxError::Empty);
    }

    let start = skip_cfws(input)?;
    // addr-spec d'abord, plus restrictif que name-addr
    let (mailbox, rest) = match addr_spec(start) {
        Ok(parsed) => parsed,
        Err(err) if !start.contains('<') => return Err(err),
        Err(_) => name_addr(start)?,
    };

    let rest = skip_cfws(rest)?;
    if !rest.is_empty() {
        return Err(SyntaxError::TrailingCharacters(rest.to_string()));
    }
    Ok(mailbox)
}

fn addr_spec(input: &str) -> Result<(Mailbox<'_>, &str), SyntaxError> {
    let (local, rest) = split_local_part(input)?;
    let rest = rest.strip_prefix('@').ok_or(SyntaxError::MissingAt)?;
    let (domain, rest) = split_domain(rest)?;
    let mailbox = Mailbox {
        display_name: None,
        local,
        domain,
    };
    Ok((mailbox, rest))
}

/// `[display-name] "<" addr-spec ">"`
fn name_addr(input: &str) -> Result<(Mailbox<'_>, &str), SyntaxError> {
    let (display_name, rest) = split_display_name(input)?;

    let inner = skip_cfws(&rest[1..])?;
    let (mut mailbox, rest) = addr_spec(inner)?;
    let rest = skip_cfws(rest)?;
    let rest = rest
        .strip_prefix('>')
        .ok_or(SyntaxError::UnterminatedAngleAddr)?;

    mailbox.display_name = display_name;
    Ok((mailbox, rest))
}

/// Phrase (atoms et quoted-strings) jusqu'au '<'. Le reste commence par '<'.
fn split_display_name(input: &str) -> Result<(Option<&str>, &str), SyntaxError> {
    let mut rest = input;
    loop {
        rest = skip_cfws(rest)?;
        if rest.starts_with('<') {
            break;
        }
        let word = if rest.starts_with('"') {
            scan_quoted(rest)?
        } else {
            // obs-phrase: '.' admis
            rest.find(|c: char| c != '.' && !is_atext(c))
                .unwrap_or(rest.len())
        };
        if word == 0 {
            return Err(SyntaxError::InvalidDisplayName(rest.to_string()));
        }
        rest = &rest[word..];
    }

    let name = trim_wsp(&input[..input.len() - rest.len()]);
    Ok(((!name.is_empty()).then_some(name), rest))
}
