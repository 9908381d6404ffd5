use thiserror::Error;

/// A syntactically valid mailbox, borrowed from the checked input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mailbox<'a> {
    /// Display name of a `name <addr>` form, as written (quotes and
    /// comments kept).
    pub display_name: Option<&'a str>,
    /// Local part as written, quotes included when quoted.
    pub local: &'a str,
    /// Domain as written (case preserved).
    pub domain: &'a str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("address is empty")]
    Empty,
    #[error("missing '@' separator")]
    MissingAt,
    #[error("local part is empty")]
    EmptyLocalPart,
    #[error("invalid local part '{0}'")]
    InvalidLocalPart(String),
    #[error("unterminated quoted string in local part")]
    UnterminatedQuotedString,
    #[error("invalid quoted-pair in local part")]
    InvalidQuotedPair,
    #[error("invalid character {ch:?} in quoted local part")]
    InvalidQuotedChar { ch: char },
    #[error("domain is empty")]
    EmptyDomain,
    #[error("invalid domain '{0}'")]
    InvalidDomain(String),
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("invalid display name before '{0}'")]
    InvalidDisplayName(String),
    #[error("missing '>' after address")]
    UnterminatedAngleAddr,
    #[error("unexpected trailing characters '{0}'")]
    TrailingCharacters(String),
}
