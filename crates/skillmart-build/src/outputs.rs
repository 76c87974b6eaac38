//! Artifact writers
//!
//! Three JSON files per build: the full records for the frontend, the
//! condensed index and the plugin manifest for the Claude CLI. Writes are
//! atomic (temp file + rename) and any failure here aborts the build.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use skillmart_types::{
    IndexEntry, MarketplaceManifest, MarketplaceOwner, MarketplacePlugin, SkillRecord,
};

use crate::{config::Config, error::Result};

/// Write all three artifacts, returning the paths written.
pub fn write_artifacts(config: &Config, records: &[SkillRecord]) -> Result<Vec<PathBuf>> {
    let skills_json = Path::new(&config.paths.frontend_data_dir).join("skills.json");
    let plugin_dir = Path::new(&config.paths.plugin_dir);
    let index_json = plugin_dir.join("index.json");
    let marketplace_json = plugin_dir.join("marketplace.json");

    write_json(&skills_json, &records)?;

    let index: Vec<IndexEntry> = records.iter().map(IndexEntry::from).collect();
    write_json(&index_json, &index)?;

    let manifest = MarketplaceManifest {
        name: config.marketplace.name.clone(),
        owner: MarketplaceOwner {
            name: config.marketplace.owner.clone(),
        },
        plugins: records.iter().map(MarketplacePlugin::from_record).collect(),
    };
    write_json(&marketplace_json, &manifest)?;

    Ok(vec![skills_json, index_json, marketplace_json])
}

/// Serialize pretty JSON atomically via temp file + rename, creating parent
/// directories as needed.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, MarketplaceConfig, PathsConfig};

    fn test_config(root: &Path) -> Config {
        Config {
            paths: PathsConfig {
                skills_dir: root.join("skills").to_string_lossy().into_owned(),
                frontend_data_dir: root.join("data").to_string_lossy().into_owned(),
                plugin_dir: root.join(".claude-plugin").to_string_lossy().into_owned(),
            },
            marketplace: MarketplaceConfig {
                name: "test-market".into(),
                owner: "Tests".into(),
            },
            logging: LoggingConfig {
                level: "info".into(),
                json: false,
            },
        }
    }

    #[test]
    fn test_writes_all_three_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        let records = vec![SkillRecord {
            id: "foo".into(),
            name: "foo".into(),
            display_name: "foo".into(),
            path: "skills/foo".into(),
            ..SkillRecord::default()
        }];

        let written = write_artifacts(&config, &records).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.is_file(), "missing artifact {:?}", path);
        }

        // No stray temp files left behind.
        assert!(!tmp.path().join("data/skills.json.tmp").exists());

        let index: Vec<IndexEntry> =
            serde_json::from_str(&fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].id, "foo");

        let manifest: MarketplaceManifest =
            serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
        assert_eq!(manifest.name, "test-market");
        assert_eq!(manifest.plugins[0].source, "./skills/foo");
    }

    #[test]
    fn test_empty_record_set_still_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        let written = write_artifacts(&config, &[]).unwrap();
        let skills: Vec<SkillRecord> =
            serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert!(skills.is_empty());
    }
}
