use crate::identity::hasher::derive_identifier;
use serde::Deserialize;
use std::borrow::Cow;

/// One roster entry, materialized fresh from each roster load.
///
/// `member_number`, `first_name` and `last_name` together form the
/// hash input; the identifier must never depend on mutable fields
/// such as email, so credentials survive unrelated roster edits.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRecord {
    /// Unique, stable membership number
    pub member_number: u32,

    /// First name exactly as stored (case and accents preserved)
    pub first_name: String,

    /// Last name exactly as stored
    pub last_name: String,

    /// Precomputed hash from the roster preparation step, if any
    #[serde(rename = "hash", default)]
    pub identifier: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl MemberRecord {
    pub fn new(
        member_number: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            member_number,
            first_name: first_name.into(),
            last_name: last_name.into(),
            identifier: None,
            email: None,
        }
    }

    /// The credential identifier for this record.
    ///
    /// A non-blank stored hash is used verbatim and never recomputed;
    /// otherwise the identifier is derived from the hash input fields.
    pub fn effective_identifier(&self) -> Cow<'_, str> {
        match self.identifier.as_deref() {
            Some(hash) if !hash.trim().is_empty() => Cow::Borrowed(hash),
            _ => Cow::Owned(derive_identifier(
                self.member_number,
                &self.first_name,
                &self.last_name,
            )),
        }
    }

    /// Display name as printed on the pass caption
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
