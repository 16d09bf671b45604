//! Migration v2: indexes for per-user reads

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_activity_user_created ON activity_logs(user_id, created_at DESC);
CREATE INDEX IF NOT EXISTS idx_activity_user_project ON activity_logs(user_id, project_id);
CREATE INDEX IF NOT EXISTS idx_snapshots_user_recorded ON profile_snapshots(user_id, recorded_at DESC, id DESC);
CREATE INDEX IF NOT EXISTS idx_chatter_user_date ON chatter_sessions(user_id, session_date);
";
