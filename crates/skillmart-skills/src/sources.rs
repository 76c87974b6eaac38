//! Fail-soft loaders for the optional per-skill files
//!
//! A file that is absent returns `None` silently; a file that is present
//! but unreadable or malformed logs a warning and returns `None`. Optional
//! sources are never fatal for a skill.

use std::{fs, path::Path};

use tracing::warn;

use skillmart_types::{SkillManifest, SkillYaml};

/// Load `manifest.json` from a skill directory, if present and valid.
pub fn load_manifest(dir: &Path) -> Option<SkillManifest> {
    let path = dir.join("manifest.json");
    let content = read_optional(&path)?;
    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!("Malformed manifest.json at {:?}, ignoring: {}", path, e);
            None
        }
    }
}

/// Load `skill.yaml` from a skill directory, if present and valid.
pub fn load_skill_yaml(dir: &Path) -> Option<SkillYaml> {
    let path = dir.join("skill.yaml");
    let content = read_optional(&path)?;
    match serde_yaml::from_str(&content) {
        Ok(yaml) => Some(yaml),
        Err(e) => {
            warn!("Malformed skill.yaml at {:?}, ignoring: {}", path, e);
            None
        }
    }
}

/// Load `references/methodology.md` as raw markdown, if present.
pub fn load_methodology(dir: &Path) -> Option<String> {
    read_optional(&dir.join("references").join("methodology.md"))
}

/// Read an optional file: `None` if absent, warn-and-`None` on read error.
fn read_optional(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Failed to read {:?}, ignoring: {}", path, e);
            None
        }
    }
}
