use std::fmt;

/// What the SMTP stage observed.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SmtpState {
    #[default]
    #[cfg_attr(feature = "with-serde", serde(rename = "unchecked"))]
    Unchecked,
    #[cfg_attr(feature = "with-serde", serde(rename = "unreachable"))]
    Unreachable,
    #[cfg_attr(feature = "with-serde", serde(rename = "reachable"))]
    Reachable,
    #[cfg_attr(feature = "with-serde", serde(rename = "reachable (catch-all domain)"))]
    ReachableCatchAll,
    #[cfg_attr(feature = "with-serde", serde(rename = "disposable email"))]
    Disposable,
}

impl SmtpState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Unreachable => "unreachable",
            Self::Reachable => "reachable",
            Self::ReachableCatchAll => "reachable (catch-all domain)",
            Self::Disposable => "disposable email",
        }
    }
}

impl fmt::Display for SmtpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final classification. `Risky` and `Deliverable` are terminal.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Invalid,
    Risky,
    Deliverable,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Risky => "Risky",
            Self::Deliverable => "Deliverable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one [`Verifier::verify`](super::Verifier::verify) call.
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// The input, verbatim.
    pub email: String,
    pub syntax_valid: bool,
    pub domain_valid: bool,
    pub mx_present: bool,
    pub smtp_state: SmtpState,
    pub status: Status,
}

impl VerificationResult {
    /// Syntax, domain and MX checks all passed.
    pub fn checks_passed(&self) -> bool {
        self.syntax_valid && self.domain_valid && self.mx_present
    }
}

/// In-progress result of a single call. Only forward transitions exist:
/// flags are set, never cleared, and the status leaves `Invalid` at most once.
#[derive(Debug)]
pub(crate) struct Evaluation {
    result: VerificationResult,
}

impl Evaluation {
    pub(crate) fn new(email: &str) -> Self {
        Self {
            result: VerificationResult {
                email: email.to_string(),
                syntax_valid: false,
                domain_valid: false,
                mx_present: false,
                smtp_state: SmtpState::Unchecked,
                status: Status::Invalid,
            },
        }
    }

    pub(crate) fn mark_syntax_valid(&mut self) {
        self.result.syntax_valid = true;
    }

    /// The domain is known to take mail; both flags move together.
    pub(crate) fn confirm_mail_domain(&mut self) {
        self.result.domain_valid = true;
        self.result.mx_present = true;
    }

    pub(crate) fn set_smtp_state(&mut self, state: SmtpState) {
        self.result.smtp_state = state;
    }

    pub(crate) fn mark_risky(&mut self) {
        self.upgrade(Status::Risky);
    }

    /// Upgrades to `Deliverable` when every check passed.
    pub(crate) fn promote_deliverable(&mut self) {
        if self.result.checks_passed() {
            self.upgrade(Status::Deliverable);
        }
    }

    fn upgrade(&mut self, next: Status) {
        if self.result.status == Status::Invalid {
            self.result.status = next;
        }
    }

    pub(crate) fn finish(self) -> VerificationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_never_downgrades() {
        let mut eval = Evaluation::new("a@b.c");
        eval.mark_syntax_valid();
        eval.confirm_mail_domain();
        eval.mark_risky();
        eval.promote_deliverable();
        assert_eq!(eval.finish().status, Status::Risky);
    }

    #[test]
    fn deliverable_requires_all_checks() {
        let mut eval = Evaluation::new("a@b.c");
        eval.mark_syntax_valid();
        eval.promote_deliverable();
        assert_eq!(eval.finish().status, Status::Invalid);
    }

    #[test]
    fn tags_match_wire_names() {
        assert_eq!(SmtpState::ReachableCatchAll.to_string(), "reachable (catch-all domain)");
        assert_eq!(SmtpState::Disposable.as_str(), "disposable email");
        assert_eq!(Status::Deliverable.to_string(), "Deliverable");
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn serializes_with_camel_case_keys() {
        let result = Evaluation::new("user@mailinator.com").finish();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "user@mailinator.com",
                "syntaxValid": false,
                "domainValid": false,
                "mxPresent": false,
                "smtpState": "unchecked",
                "status": "Invalid",
            })
        );
    }
}
