use super::local::{is_atext, is_dot_atom};
use super::types::SyntaxError;

/// Sépare le domaine en tête de `input` (juste après '@') du reste.
pub(crate) fn split_domain(input: &str) -> Result<(&str, &str), SyntaxError> {
    let end = if input.starts_with('[') {
        input.find(']').map_or(input.len(), |i| i + 1)
    } else {
        input
            .find(|c: char| c != '.' && !is_atext(c))
            .unwrap_or(input.len())
    };
    let (domain, rest) = input.split_at(end);
    check_domain(domain)?;
    Ok((domain, rest))
}

/// Valide le domaine: dot-atom ou domain-literal (`[...]`).
pub(crate) fn check_domain(domain: &str) -> Result<(), SyntaxError> {
    if domain.is_empty() {
        return Err(SyntaxError::EmptyDomain);
    }

    let ok = if let Some(inner) = domain.strip_prefix('[') {
        inner
            .strip_suffix(']')
            .is_some_and(|literal| literal.chars().all(is_dtext))
    } else {
        is_dot_atom(domain)
    };

    if ok {
        Ok(())
    } else {
        Err(SyntaxError::InvalidDomain(domain.to_string()))
    }
}

fn is_dtext(c: char) -> bool {
    (c.is_ascii_graphic() && !matches!(c, '[' | ']' | '\\')) || (!c.is_ascii() && !c.is_control())
}
