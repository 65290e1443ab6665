use crate::models::roster::RosterSnapshot;
use serde::Serialize;

/// Outcome of a membership lookup.
///
/// Carries only fields that are already safe to display publicly;
/// never the member number or email. Escaping for a concrete output
/// format is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl VerificationResult {
    fn unmatched() -> Self {
        Self {
            matched: false,
            first_name: None,
            last_name: None,
        }
    }
}

/// Look up a presented identifier in the roster.
///
/// Exact, case-sensitive comparison of the presented value (no
/// normalization) against each record's stored-or-derived
/// identifier; the first matching row wins. A blank input, an empty
/// roster, or no matching row all resolve to an unmatched result --
/// never an error, and with no hint as to which case applied. No
/// mutation, no side effects; safe to call concurrently.
pub fn verify(identifier: &str, roster: &RosterSnapshot) -> VerificationResult {
    if identifier.trim().is_empty() {
        return VerificationResult::unmatched();
    }

    for member in roster.members() {
        if member.effective_identifier() == identifier {
            return VerificationResult {
                matched: true,
                first_name: Some(member.first_name.clone()),
                last_name: Some(member.last_name.clone()),
            };
        }
    }

    VerificationResult::unmatched()
}
