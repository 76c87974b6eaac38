//! Last-updated resolution
//!
//! Best effort: the committer date of the last commit touching the skill
//! directory, falling back to the directory mtime, falling back to today.
//! Never fatal.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

/// Resolve the last-updated date for a skill directory as `YYYY-MM-DD`.
pub fn last_updated(dir: &Path) -> String {
    if let Some(date) = git_commit_date(dir) {
        return date;
    }
    if let Some(date) = mtime_date(dir) {
        return date;
    }
    debug!("No git or mtime date for {:?}, using today", dir);
    Utc::now().format("%Y-%m-%d").to_string()
}

/// `git log -1 --format=%cI -- <dir-name>`, run from the parent directory.
/// Returns `None` when git is missing, the path is not in a repository, or
/// the directory has no commits yet.
fn git_commit_date(dir: &Path) -> Option<String> {
    let parent = dir.parent()?;
    let name = dir.file_name()?;

    let output = std::process::Command::new("git")
        .args(["log", "-1", "--format=%cI", "--"])
        .arg(name)
        .current_dir(parent)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.trim();
    if line.is_empty() {
        return None;
    }

    let committed = DateTime::parse_from_rfc3339(line).ok()?;
    Some(committed.format("%Y-%m-%d").to_string())
}

fn mtime_date(dir: &Path) -> Option<String> {
    let modified = std::fs::metadata(dir).ok()?.modified().ok()?;
    let modified: DateTime<Utc> = modified.into();
    Some(modified.format("%Y-%m-%d").to_string())
}
