//! Skills root scanner
//!
//! Iterates the child directories of the skills root in sorted order and
//! loads each one, collecting successes and per-skill failures separately.
//! An unreadable root is the only fatal error here.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use skillmart_types::SkillRecord;

use crate::loader;

/// A skill directory that did not produce a record.
#[derive(Debug, Clone)]
pub struct SkippedSkill {
    /// Directory name under the skills root.
    pub directory: String,
    /// Human-readable reason the skill was skipped.
    pub reason: String,
}

/// Result of scanning the skills root.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Successfully loaded records, in sorted directory order.
    pub records: Vec<SkillRecord>,
    /// Directories skipped, with reasons, for the build report.
    pub skipped: Vec<SkippedSkill>,
}

/// Scan `root` for skill directories and load each one.
///
/// Ids must be unique in the output; when a name override collides with an
/// already-collected id, the first record (scan order) wins and the later
/// directory is skipped with a warning.
pub fn scan_skills(root: &Path) -> Result<ScanOutcome> {
    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read skills root {:?}", root))?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    let mut outcome = ScanOutcome::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for dir in dirs {
        let directory = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match loader::load_skill(&dir) {
            Ok(record) => {
                if !seen_ids.insert(record.id.clone()) {
                    warn!(
                        "Duplicate skill id '{}' from {:?}, keeping the first occurrence",
                        record.id, dir
                    );
                    outcome.skipped.push(SkippedSkill {
                        directory,
                        reason: format!("duplicate id '{}'", record.id),
                    });
                    continue;
                }
                debug!("Loaded skill '{}' from {:?}", record.id, dir);
                outcome.records.push(record);
            }
            Err(e) => {
                warn!("Skipping {:?}: {:#}", dir, e);
                outcome.skipped.push(SkippedSkill {
                    directory,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    Ok(outcome)
}
