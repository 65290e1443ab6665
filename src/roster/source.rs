use crate::models::member::MemberRecord;
use crate::models::roster::RosterSnapshot;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Load the member roster from a CSV file.
///
/// Expected header: `member_number,first_name,last_name,hash,email`
/// (`hash` and `email` may be blank). Malformed rows and duplicate
/// member numbers are logged and skipped; only an unreadable file is
/// an error. An empty roster is valid and logged as a warning.
pub fn load_roster(path: &Path) -> Result<RosterSnapshot> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open roster file {}", path.display()))?;

    let mut members = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped = 0usize;

    for (row, result) in reader.deserialize::<MemberRecord>().enumerate() {
        let line = row + 2; // 1-based, after the header
        match result {
            Ok(member) => {
                if !seen.insert(member.member_number) {
                    warn!(
                        line = line,
                        member_number = member.member_number,
                        "Skipping duplicate member number"
                    );
                    skipped += 1;
                    continue;
                }
                members.push(member);
            }
            Err(e) => {
                warn!(line = line, error = %e, "Skipping malformed roster row");
                skipped += 1;
            }
        }
    }

    if members.is_empty() {
        warn!(path = %path.display(), "Roster file contains no usable members");
    } else {
        info!(
            path = %path.display(),
            members = members.len(),
            skipped = skipped,
            "Roster loaded"
        );
    }

    Ok(RosterSnapshot::new(members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_well_formed_roster() {
        let file = write_csv(
            "member_number,first_name,last_name,hash,email\n\
             71400,Anna,Muster,,anna@example.org\n\
             2,Max,Mustermann,deadbeefdeadbeefdeadbeefdeadbeef,\n",
        );

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.members()[0].first_name, "Anna");
        assert_eq!(
            roster.members()[1].identifier.as_deref(),
            Some("deadbeefdeadbeefdeadbeefdeadbeef")
        );
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let file = write_csv(
            "member_number,first_name,last_name,hash,email\n\
             71400,Anna,Muster,,\n\
             not-a-number,Broken,Row,,\n\
             2,Max,Mustermann,,\n",
        );

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.members()[1].first_name, "Max");
    }

    #[test]
    fn test_duplicate_member_numbers_keep_first_row() {
        let file = write_csv(
            "member_number,first_name,last_name,hash,email\n\
             5,First,Kept,,\n\
             5,Second,Dropped,,\n",
        );

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.members()[0].first_name, "First");
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let file = write_csv("member_number,first_name,last_name,hash,email\n");
        let roster = load_roster(file.path()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_roster(Path::new("/nonexistent/roster.csv")).is_err());
    }

    #[test]
    fn test_umlauts_survive_loading() {
        let file = write_csv(
            "member_number,first_name,last_name,hash,email\n\
             123,Jürgen,Müller,,\n",
        );

        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.members()[0].first_name, "Jürgen");
        assert_eq!(roster.members()[0].last_name, "Müller");
    }
}
