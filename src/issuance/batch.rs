use crate::compose::pass::compose_pass;
use crate::core::error::IssueError;
use crate::issuance::assets::AssetSource;
use crate::issuance::output::{pass_filename, save_pass};
use crate::models::member::MemberRecord;
use crate::models::roster::RosterSnapshot;
use crate::payload::builder::build_payload;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// A pass that was composed and written successfully
#[derive(Debug)]
pub struct IssuedPass {
    pub member_number: u32,
    pub path: PathBuf,
}

/// A member whose pass could not be produced
#[derive(Debug)]
pub struct BatchFailure {
    pub member_number: u32,
    pub display_name: String,
    pub error: String,
}

/// Tally of a full issuance run
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub generated: Vec<IssuedPass>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    pub fn succeeded(&self) -> usize {
        self.generated.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Produce one member's pass end to end: derive the identifier,
/// build the code payload, compose the image, write the file.
pub fn issue_one(
    member: &MemberRecord,
    base_url: &str,
    output_dir: &Path,
    assets: &dyn AssetSource,
) -> Result<PathBuf, IssueError> {
    let identifier = member.effective_identifier();
    let payload = build_payload(&identifier, base_url)?;

    let font = assets.font()?;
    let logo = assets.logo();
    let caption = member.display_name();
    let pass = compose_pass(&payload.code_image, logo.as_ref(), &caption, &font);

    save_pass(output_dir, &pass_filename(member), &pass)
}

/// Issue passes for the whole roster.
///
/// Composition is CPU-bound, so each member runs on the blocking
/// pool, with at most `concurrency` in flight. A failed member is
/// recorded and never aborts the run; the outcome tallies both sides.
pub async fn issue_all(
    roster: &RosterSnapshot,
    base_url: &str,
    output_dir: &Path,
    concurrency: usize,
    assets: Arc<dyn AssetSource>,
) -> BatchOutcome {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for member in roster.members() {
        let member = member.clone();
        let base_url = base_url.to_string();
        let output_dir = output_dir.to_path_buf();
        let assets = Arc::clone(&assets);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            // The semaphore is never closed while tasks run
            let _permit = semaphore.acquire_owned().await;
            tokio::task::spawn_blocking(move || {
                let result = issue_one(&member, &base_url, &output_dir, assets.as_ref());
                (member, result.map_err(|e| e.to_string()))
            })
            .await
        });
    }

    let mut outcome = BatchOutcome::default();
    while let Some(joined) = tasks.join_next().await {
        match joined.map_err(|e| e.to_string()).and_then(|inner| inner.map_err(|e| e.to_string())) {
            Ok((member, Ok(path))) => {
                outcome.generated.push(IssuedPass {
                    member_number: member.member_number,
                    path,
                });
            }
            Ok((member, Err(error))) => {
                warn!(
                    member_number = member.member_number,
                    name = %member.display_name(),
                    error = %error,
                    "Pass issuance failed for member"
                );
                outcome.failures.push(BatchFailure {
                    member_number: member.member_number,
                    display_name: member.display_name(),
                    error,
                });
            }
            Err(e) => {
                warn!(error = %e, "Pass issuance task failed to complete");
            }
        }
    }

    info!(
        total = outcome.total(),
        succeeded = outcome.succeeded(),
        failed = outcome.failed(),
        "Issuance run complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::font::PassFont;
    use crate::issuance::assets::FileAssets;

    fn bundled_assets() -> Arc<dyn AssetSource> {
        Arc::new(FileAssets::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/DejaVuSans.ttf"),
            None,
        ))
    }

    struct BrokenFontAssets;

    impl AssetSource for BrokenFontAssets {
        fn font(&self) -> Result<PassFont, IssueError> {
            Err(IssueError::AssetMissing {
                path: PathBuf::from("/missing/font.ttf"),
                reason: "injected".to_string(),
            })
        }

        fn logo(&self) -> Option<image::RgbaImage> {
            None
        }
    }

    #[tokio::test]
    async fn test_issue_all_writes_every_pass() {
        let dir = tempfile::tempdir().unwrap();
        let roster = RosterSnapshot::new(vec![
            MemberRecord::new(71400, "Anna", "Muster"),
            MemberRecord::new(2, "Max", "Mustermann"),
        ]);

        let outcome = issue_all(
            &roster,
            "https://verify.example.org/membercheck",
            dir.path(),
            4,
            bundled_assets(),
        )
        .await;

        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failed(), 0);
        assert!(dir.path().join("AMuster71400.png").exists());
        assert!(dir.path().join("MMustermann2.png").exists());
    }

    #[tokio::test]
    async fn test_one_bad_record_does_not_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();

        // A stored identifier too large for any code version fails
        // exactly this member's encoding step
        let mut poisoned = MemberRecord::new(3, "Kaputt", "Datensatz");
        poisoned.identifier = Some("x".repeat(8000));

        let roster = RosterSnapshot::new(vec![
            MemberRecord::new(71400, "Anna", "Muster"),
            poisoned,
            MemberRecord::new(2, "Max", "Mustermann"),
        ]);

        let outcome = issue_all(
            &roster,
            "https://verify.example.org/membercheck",
            dir.path(),
            4,
            bundled_assets(),
        )
        .await;

        assert_eq!(outcome.total(), 3);
        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failed(), 1);
        assert_eq!(outcome.failures[0].member_number, 3);
        assert!(dir.path().join("AMuster71400.png").exists());
        assert!(dir.path().join("MMustermann2.png").exists());
    }

    #[tokio::test]
    async fn test_broken_font_fails_each_member_individually() {
        let dir = tempfile::tempdir().unwrap();
        let roster = RosterSnapshot::new(vec![
            MemberRecord::new(1, "Anna", "Muster"),
            MemberRecord::new(2, "Max", "Mustermann"),
        ]);

        let outcome = issue_all(
            &roster,
            "https://verify.example.org/membercheck",
            dir.path(),
            2,
            Arc::new(BrokenFontAssets),
        )
        .await;

        assert_eq!(outcome.succeeded(), 0);
        assert_eq!(outcome.failed(), 2);
        for failure in &outcome.failures {
            assert!(failure.error.contains("/missing/font.ttf"));
        }
    }

    #[tokio::test]
    async fn test_empty_roster_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = issue_all(
            &RosterSnapshot::default(),
            "https://verify.example.org/membercheck",
            dir.path(),
            4,
            bundled_assets(),
        )
        .await;

        assert_eq!(outcome.total(), 0);
    }

    #[test]
    fn test_issue_one_returns_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let member = MemberRecord::new(71400, "Anna", "Muster");

        let path = issue_one(
            &member,
            "https://verify.example.org/membercheck",
            dir.path(),
            bundled_assets().as_ref(),
        )
        .unwrap();

        assert_eq!(path, dir.path().join("AMuster71400.png"));
        assert!(path.exists());
    }
}
