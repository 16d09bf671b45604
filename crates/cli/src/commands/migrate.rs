//! SQLite → PostgreSQL migration command.
//!
//! Copies every user's data from the local SQLite database to PostgreSQL.
//! Re-running is safe: logs already present are skipped, current-state rows
//! are upserted, and append-only history is copied only into an empty target.

use anyhow::Result;
use founderos_storage::{
    ActivityStore, ChatterStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
    StorageBackend,
};

#[derive(Debug, Default)]
struct Tally {
    copied: usize,
    skipped: usize,
}

impl Tally {
    fn print(&self, what: &str) {
        println!("  {what}: {} copied, {} skipped", self.copied, self.skipped);
    }
}

pub(crate) async fn run() -> Result<()> {
    let db_path = crate::get_db_path();
    crate::ensure_db_dir(&db_path)?;
    let sqlite = StorageBackend::new_sqlite(&db_path)?;

    let pg_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for migration target"))?;
    let pg = StorageBackend::new_postgres(&pg_url).await?;

    let users = ActivityStore::list_user_ids(&sqlite).await?;
    println!("Migrating {} users...", users.len());

    let mut logs = Tally::default();
    let mut history = Tally::default();
    let mut chatter = Tally::default();
    let mut current = Tally::default();

    for user_id in &users {
        for log in ActivityStore::list_logs(&sqlite, user_id, None).await? {
            match ActivityStore::save_log(&pg, &log).await {
                Ok(()) => logs.copied += 1,
                Err(err) if err.is_duplicate() => logs.skipped += 1,
                Err(err) => {
                    tracing::warn!(id = %log.id, "Failed to migrate log: {err}");
                    logs.skipped += 1;
                },
            }
        }

        for pattern in PatternStore::list_patterns(&sqlite, user_id).await? {
            PatternStore::upsert_pattern(&pg, &pattern).await?;
            current.copied += 1;
        }
        if let Some(profile) = ProfileStore::get_profile(&sqlite, user_id).await? {
            ProfileStore::upsert_profile(&pg, &profile).await?;
            current.copied += 1;
        }
        if let Some(drift) = DriftStore::get_drift(&sqlite, user_id).await? {
            DriftStore::upsert_drift(&pg, &drift).await?;
            current.copied += 1;
        }

        let snapshots = SnapshotStore::list_snapshots(&sqlite, user_id, usize::MAX).await?;
        if SnapshotStore::most_recent_snapshot(&pg, user_id).await?.is_some() {
            history.skipped += snapshots.len();
        } else {
            // Oldest first so the chain keeps its order.
            for snapshot in snapshots.iter().rev() {
                SnapshotStore::append_snapshot(&pg, snapshot).await?;
                history.copied += 1;
            }
        }

        let sessions = ChatterStore::list_chatter_sessions(&sqlite, user_id, None).await?;
        if ChatterStore::list_chatter_sessions(&pg, user_id, None).await?.is_empty() {
            for session in &sessions {
                ChatterStore::save_chatter_session(&pg, session).await?;
                chatter.copied += 1;
            }
        } else {
            chatter.skipped += sessions.len();
        }
    }

    logs.print("activity logs");
    current.print("patterns/profiles/drift");
    history.print("profile snapshots");
    chatter.print("chatter sessions");
    println!("\nMigration complete!");
    Ok(())
}
