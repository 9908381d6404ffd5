use super::types::SyntaxError;

fn is_wsp(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Saute espaces et commentaires (imbriqués) en tête de `input`.
pub(crate) fn skip_cfws(mut input: &str) -> Result<&str, SyntaxError> {
    loop {
        input = input.trim_start_matches(is_wsp);
        if input.starts_with('(') {
            input = skip_comment(input)?;
        } else {
            return Ok(input);
        }
    }
}

pub(crate) fn trim_wsp(input: &str) -> &str {
    input.trim_matches(is_wsp)
}

/// `input` commence par '('; renvoie ce qui suit la ')' correspondante.
fn skip_comment(input: &str) -> Result<&str, SyntaxError> {
    let mut depth = 0usize;
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&input[i + 1..]);
                }
            }
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            }
            _ => {}
        }
    }
    Err(SyntaxError::UnterminatedComment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_spaces_and_nested_comments() {
        assert_eq!(skip_cfws("  (a (b) c)\t x").unwrap(), "x");
        assert_eq!(skip_cfws("(\\)) y").unwrap(), "y");
        assert_eq!(skip_cfws("z").unwrap(), "z");
    }

    #[test]
    fn unterminated_comment() {
        assert_eq!(skip_cfws(" (a (b)"), Err(SyntaxError::UnterminatedComment));
    }
}
