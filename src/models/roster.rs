use crate::models::member::MemberRecord;

/// An ordered roster snapshot, unique by member number.
///
/// Immutable for the duration of one pipeline run; the loader is
/// responsible for dropping duplicate member numbers.
#[derive(Debug, Default)]
pub struct RosterSnapshot {
    members: Vec<MemberRecord>,
}

impl RosterSnapshot {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
