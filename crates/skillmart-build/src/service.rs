//! Build service - main orchestrator
//!
//! Scans the skills root, sorts the records, writes the artifacts, and
//! returns a [`BuildReport`] instead of exiting — the binary entry point
//! turns the report into console output and the exit code.

use std::path::{Path, PathBuf};

use tracing::info;

use skillmart_skills::{scan_skills, SkippedSkill};
use skillmart_types::SkillRecord;

use crate::{config::Config, error::Result, outputs};

/// Outcome of one build invocation.
#[derive(Debug)]
pub struct BuildReport {
    /// Ids of the skills written to the artifacts, in output order.
    pub built: Vec<String>,
    /// Skill directories skipped, with reasons.
    pub skipped: Vec<SkippedSkill>,
    /// Paths of the artifacts written.
    pub artifacts: Vec<PathBuf>,
}

/// Marketplace build service
pub struct BuildService {
    config: Config,
}

impl BuildService {
    /// Create a new build service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the build: scan, sort, write artifacts.
    pub fn run(&self) -> Result<BuildReport> {
        info!("Starting skillmart marketplace build");
        info!("Skills root: {}", self.config.paths.skills_dir);

        let outcome = scan_skills(Path::new(&self.config.paths.skills_dir))?;
        let mut records = outcome.records;
        sort_records(&mut records);

        info!(
            "Loaded {} skills ({} skipped)",
            records.len(),
            outcome.skipped.len()
        );

        let artifacts = outputs::write_artifacts(&self.config, &records)?;
        info!("Wrote {} artifacts", artifacts.len());

        Ok(BuildReport {
            built: records.iter().map(|r| r.id.clone()).collect(),
            skipped: outcome.skipped,
            artifacts,
        })
    }
}

/// Marketplace ordering: featured first, then install count descending.
/// Stable sort, so ties keep scan order and repeat builds are idempotent.
pub fn sort_records(records: &mut [SkillRecord]) {
    records.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then(b.install_count.cmp(&a.install_count))
    });
}
