//! Output artifact types
//!
//! `skills.json` is a plain array of [`crate::SkillRecord`]; the two
//! `.claude-plugin` artifacts get their own condensed shapes here.

use serde::{Deserialize, Serialize};

use crate::record::SkillRecord;

/// Condensed entry for `.claude-plugin/index.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub emoji: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub category: String,
    pub data_level: String,
    /// At most the first five tags.
    pub tags: Vec<String>,
    pub featured: bool,
    pub path: String,
}

impl From<&SkillRecord> for IndexEntry {
    fn from(record: &SkillRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            description: record.description.clone(),
            emoji: record.emoji.clone(),
            version: record.version.clone(),
            author: record.author.clone(),
            category: record.category.clone(),
            data_level: record.data_level.clone(),
            tags: record.tags.iter().take(5).cloned().collect(),
            featured: record.featured,
            path: record.path.clone(),
        }
    }
}

/// `.claude-plugin/marketplace.json` — the manifest consumed by the Claude
/// CLI's `/plugin marketplace add` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceManifest {
    pub name: String,
    pub owner: MarketplaceOwner,
    pub plugins: Vec<MarketplacePlugin>,
}

/// Marketplace owner block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceOwner {
    pub name: String,
}

/// One plugin source entry per skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplacePlugin {
    pub name: String,
    /// Repo-relative source path, e.g. `./skills/cpi-pce-divergence`.
    pub source: String,
    pub description: String,
    pub version: String,
    pub category: String,
}

impl MarketplacePlugin {
    pub fn from_record(record: &SkillRecord) -> Self {
        Self {
            name: record.id.clone(),
            source: format!("./skills/{}", record.id),
            description: record.description.clone(),
            version: record.version.clone(),
            category: record.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SkillRecord {
        SkillRecord {
            id: "wasde-check".into(),
            name: "wasde-check".into(),
            display_name: "WASDE Balance Check".into(),
            description: "Validates WASDE balance sheets".into(),
            tags: (1..=8).map(|i| format!("tag{i}")).collect(),
            path: "skills/wasde-check".into(),
            ..SkillRecord::default()
        }
    }

    #[test]
    fn test_index_entry_truncates_tags_to_five() {
        let entry = IndexEntry::from(&sample_record());
        assert_eq!(entry.tags.len(), 5);
        assert_eq!(entry.tags[0], "tag1");
        assert_eq!(entry.tags[4], "tag5");
    }

    #[test]
    fn test_marketplace_plugin_source_path() {
        let plugin = MarketplacePlugin::from_record(&sample_record());
        assert_eq!(plugin.source, "./skills/wasde-check");
        assert_eq!(plugin.name, "wasde-check");
    }

    #[test]
    fn test_manifest_serialization() {
        let manifest = MarketplaceManifest {
            name: "skillmart".into(),
            owner: MarketplaceOwner {
                name: "Skillmart Maintainers".into(),
            },
            plugins: vec![MarketplacePlugin::from_record(&sample_record())],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("\"owner\":{\"name\":\"Skillmart Maintainers\"}"));
        assert!(json.contains("\"source\":\"./skills/wasde-check\""));
    }
}
