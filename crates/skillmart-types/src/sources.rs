//! Per-source metadata structs
//!
//! One explicit optional-field struct per input file. The merge in
//! skillmart-skills combines them with a fixed precedence; keeping the
//! sources separate makes that precedence testable in isolation.

use serde::Deserialize;
use serde_json::Value;

/// YAML frontmatter block at the head of `SKILL.md`.
///
/// All fields optional; skills written by hand often carry only
/// `name` and `description`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    pub name: Option<String>,
    #[serde(default, alias = "displayName", alias = "display-name")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    #[serde(default, alias = "dataLevel", alias = "data-level")]
    pub data_level: Option<String>,
}

/// `manifest.json` — the canonical metadata file for a skill.
///
/// Wins over frontmatter for every field it carries (see the merge table).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillManifest {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub data_level: Option<String>,
}

/// `skill.yaml` — frontend cosmetics and documentation content.
///
/// The documentation fields are deliberately untyped: their shape is not
/// validated and whatever parses flows to the output JSON unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillYaml {
    #[serde(default, alias = "display_name")]
    pub display_name: Option<String>,
    pub emoji: Option<String>,
    pub tools: Option<Vec<String>>,
    pub featured: Option<bool>,
    #[serde(default, alias = "install_count")]
    pub install_count: Option<u64>,
    pub rating: Option<f64>,
    #[serde(default, alias = "test_questions")]
    pub test_questions: Option<Value>,
    #[serde(default, alias = "quality_score")]
    pub quality_score: Option<Value>,
    #[serde(default, alias = "best_practices")]
    pub best_practices: Option<Value>,
    pub pitfalls: Option<Value>,
    pub faq: Option<Value>,
    pub about: Option<Value>,
}
