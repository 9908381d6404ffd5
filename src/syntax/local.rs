use super::types::SyntaxError;

/// atext (RFC 5322 §3.2.3), élargi aux caractères non-ASCII (RFC 6532).
pub(crate) fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (!c.is_ascii() && !c.is_control())
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// dot-atom: atext + '.' non initial/terminal, pas de ".."
pub(crate) fn is_dot_atom(s: &str) -> bool {
    if s.is_empty() || s.starts_with('.') || s.ends_with('.') || s.contains("..") {
        return false;
    }
    s.chars().all(|c| c == '.' || is_atext(c))
}

fn is_vchar(c: char) -> bool {
    c.is_ascii_graphic() || (!c.is_ascii() && !c.is_control())
}

fn is_qtext(c: char) -> bool {
    is_vchar(c) && c != '"' && c != '\\'
}

/// Splits `input` into `(local_part, rest)`, `rest` starting at the '@'
/// that ends the local part.
pub(crate) fn split_local_part(input: &str) -> Result<(&str, &str), SyntaxError> {
    if input.starts_with('"') {
        let end = scan_quoted(input)?;
        // "" n'est pas une partie locale
        if end == 2 {
            return Err(SyntaxError::EmptyLocalPart);
        }
        return Ok(input.split_at(end));
    }

    let at = input.find('@').ok_or(SyntaxError::MissingAt)?;
    let (local, rest) = input.split_at(at);
    if local.is_empty() {
        return Err(SyntaxError::EmptyLocalPart);
    }
    if !is_dot_atom(local) {
        return Err(SyntaxError::InvalidLocalPart(local.to_string()));
    }
    Ok((local, rest))
}

/// Returns the byte offset just past the closing quote.
pub(crate) fn scan_quoted(input: &str) -> Result<usize, SyntaxError> {
    let mut chars = input.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok(i + 1),
            '\\' => match chars.next() {
                Some((_, escaped)) if is_vchar(escaped) || escaped == ' ' || escaped == '\t' => {}
                _ => return Err(SyntaxError::InvalidQuotedPair),
            },
            ' ' | '\t' => {}
            c if is_qtext(c) => {}
            other => return Err(SyntaxError::InvalidQuotedChar { ch: other }),
        }
    }
    Err(SyntaxError::UnterminatedQuotedString)
}
