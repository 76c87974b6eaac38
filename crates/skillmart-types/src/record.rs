//! The merged skill record written to `skills.json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fully merged skill, assembled fresh on every build.
///
/// Serialized with camelCase keys for the frontend. `Default` carries the
/// documented fallback values, so the merge can start from it and apply
/// sources on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRecord {
    /// Stable identifier — the directory name unless overridden.
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub data_level: String,
    pub emoji: String,
    pub tools: Vec<String>,
    pub featured: bool,
    pub install_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_questions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitfalls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Value>,
    /// SKILL.md body with the frontmatter stripped — the actual instructions.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// Indented directory tree for display.
    pub structure: String,
    /// `YYYY-MM-DD`, from git history or filesystem mtime.
    pub last_updated: String,
    /// Marketplace-relative path, e.g. `skills/cpi-pce-divergence`.
    pub path: String,
}

impl Default for SkillRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            version: "1.0.0".to_string(),
            author: None,
            tags: Vec::new(),
            category: "general".to_string(),
            data_level: "free-nolimit".to_string(),
            emoji: "🛠️".to_string(),
            tools: Vec::new(),
            featured: false,
            install_count: 0,
            rating: None,
            test_questions: None,
            quality_score: None,
            best_practices: None,
            pitfalls: None,
            faq: None,
            about: None,
            content: String::new(),
            methodology: None,
            structure: String::new(),
            last_updated: String::new(),
            path: String::new(),
        }
    }
}
