//! Source precedence merge
//!
//! Pure function combining the three optional sources into one record.
//! Per field group the precedence is:
//!
//! - id/name: manifest > frontmatter > directory name
//! - displayName: skill.yaml > manifest > frontmatter > name
//! - description, tags, category, dataLevel, version, author:
//!   manifest > frontmatter > default
//! - cosmetics and documentation content: skill.yaml only

use tracing::warn;

use skillmart_types::{Frontmatter, SkillManifest, SkillRecord, SkillYaml};

use crate::frontmatter::validate_name;

/// Merge the parsed sources for one skill directory into a [`SkillRecord`].
///
/// `structure`, `last_updated` and `path` are left at their defaults; the
/// loader fills them in. A name override that fails validation is ignored
/// with a warning and the directory name is used instead.
pub fn merge_sources(
    dir_name: &str,
    frontmatter: &Frontmatter,
    manifest: Option<&SkillManifest>,
    yaml: Option<&SkillYaml>,
    body: &str,
) -> SkillRecord {
    let mut record = SkillRecord::default();

    let name = resolve_name(dir_name, frontmatter, manifest);
    record.id = name.clone();
    record.name = name;

    // manifest > frontmatter for the shared descriptive fields
    if let Some(description) = first_str(manifest.and_then(|m| m.description.as_deref()), frontmatter.description.as_deref()) {
        record.description = description;
    }
    if let Some(version) = first_str(manifest.and_then(|m| m.version.as_deref()), frontmatter.version.as_deref()) {
        record.version = version;
    }
    record.author = manifest
        .and_then(|m| m.author.clone())
        .or_else(|| frontmatter.author.clone());
    if let Some(tags) = manifest
        .and_then(|m| m.tags.clone())
        .or_else(|| frontmatter.tags.clone())
    {
        record.tags = tags;
    }
    if let Some(category) = first_str(manifest.and_then(|m| m.category.as_deref()), frontmatter.category.as_deref()) {
        record.category = category;
    }
    if let Some(data_level) = first_str(manifest.and_then(|m| m.data_level.as_deref()), frontmatter.data_level.as_deref()) {
        record.data_level = data_level;
    }

    // displayName: skill.yaml > manifest > frontmatter > name
    record.display_name = yaml
        .and_then(|y| y.display_name.clone())
        .or_else(|| manifest.and_then(|m| m.display_name.clone()))
        .or_else(|| frontmatter.display_name.clone())
        .unwrap_or_else(|| record.name.clone());

    // skill.yaml-only cosmetics and documentation content
    if let Some(yaml) = yaml {
        if let Some(emoji) = yaml.emoji.clone() {
            record.emoji = emoji;
        }
        if let Some(tools) = yaml.tools.clone() {
            record.tools = tools;
        }
        if let Some(featured) = yaml.featured {
            record.featured = featured;
        }
        if let Some(install_count) = yaml.install_count {
            record.install_count = install_count;
        }
        record.rating = yaml.rating;
        record.test_questions = yaml.test_questions.clone();
        record.quality_score = yaml.quality_score.clone();
        record.best_practices = yaml.best_practices.clone();
        record.pitfalls = yaml.pitfalls.clone();
        record.faq = yaml.faq.clone();
        record.about = yaml.about.clone();
    }

    record.content = body.to_string();
    record
}

/// id/name resolution: manifest > frontmatter > directory name, with
/// invalid overrides discarded.
fn resolve_name(dir_name: &str, frontmatter: &Frontmatter, manifest: Option<&SkillManifest>) -> String {
    let override_name = manifest
        .and_then(|m| m.name.clone())
        .or_else(|| frontmatter.name.clone());

    match override_name {
        Some(name) if validate_name(&name) => name,
        Some(name) => {
            warn!(
                "Invalid skill name override '{}', using directory name '{}'",
                name, dir_name
            );
            dir_name.to_string()
        }
        None => dir_name.to_string(),
    }
}

fn first_str(a: Option<&str>, b: Option<&str>) -> Option<String> {
    a.or(b).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only() {
        // Frontmatter {name: foo, description: "does x"}, no manifest,
        // no yaml: everything else comes from defaults.
        let fm = Frontmatter {
            name: Some("foo".into()),
            description: Some("does x".into()),
            ..Frontmatter::default()
        };
        let record = merge_sources("foo", &fm, None, None, "body");
        assert_eq!(record.id, "foo");
        assert_eq!(record.name, "foo");
        assert_eq!(record.display_name, "foo");
        assert_eq!(record.description, "does x");
        assert_eq!(record.emoji, "🛠️");
        assert_eq!(record.data_level, "free-nolimit");
        assert_eq!(record.content, "body");
    }

    #[test]
    fn test_manifest_beats_frontmatter() {
        let fm = Frontmatter {
            name: Some("fm-name".into()),
            description: Some("fm description".into()),
            tags: Some(vec!["fm".into()]),
            ..Frontmatter::default()
        };
        let manifest = SkillManifest {
            name: Some("manifest-name".into()),
            description: Some("manifest description".into()),
            tags: Some(vec!["manifest".into()]),
            ..SkillManifest::default()
        };
        let record = merge_sources("dir-name", &fm, Some(&manifest), None, "");
        assert_eq!(record.id, "manifest-name");
        assert_eq!(record.description, "manifest description");
        assert_eq!(record.tags, vec!["manifest".to_string()]);
    }

    #[test]
    fn test_yaml_display_name_beats_manifest() {
        let fm = Frontmatter {
            display_name: Some("From Frontmatter".into()),
            ..Frontmatter::default()
        };
        let manifest = SkillManifest {
            display_name: Some("From Manifest".into()),
            ..SkillManifest::default()
        };
        let yaml = SkillYaml {
            display_name: Some("From Yaml".into()),
            ..SkillYaml::default()
        };
        let record = merge_sources("foo", &fm, Some(&manifest), Some(&yaml), "");
        assert_eq!(record.display_name, "From Yaml");

        let record = merge_sources("foo", &fm, Some(&manifest), None, "");
        assert_eq!(record.display_name, "From Manifest");

        let record = merge_sources("foo", &fm, None, None, "");
        assert_eq!(record.display_name, "From Frontmatter");
    }

    #[test]
    fn test_yaml_cosmetics_applied() {
        let yaml = SkillYaml {
            emoji: Some("📈".into()),
            featured: Some(true),
            install_count: Some(321),
            rating: Some(4.8),
            tools: Some(vec!["WebFetch".into()]),
            ..SkillYaml::default()
        };
        let record = merge_sources("foo", &Frontmatter::default(), None, Some(&yaml), "");
        assert_eq!(record.emoji, "📈");
        assert!(record.featured);
        assert_eq!(record.install_count, 321);
        assert_eq!(record.rating, Some(4.8));
        assert_eq!(record.tools, vec!["WebFetch".to_string()]);
    }

    #[test]
    fn test_invalid_name_override_falls_back_to_dir() {
        let fm = Frontmatter {
            name: Some("Not A Valid Name".into()),
            ..Frontmatter::default()
        };
        let record = merge_sources("actual-dir", &fm, None, None, "");
        assert_eq!(record.id, "actual-dir");
        assert_eq!(record.name, "actual-dir");
    }

    #[test]
    fn test_untyped_docs_pass_through() {
        let yaml = SkillYaml {
            faq: Some(serde_json::json!([{"q": "why", "a": "because"}])),
            quality_score: Some(serde_json::json!("not-a-number")),
            ..SkillYaml::default()
        };
        let record = merge_sources("foo", &Frontmatter::default(), None, Some(&yaml), "");
        // Malformed-but-parseable values flow through unchanged.
        assert_eq!(record.quality_score, Some(serde_json::json!("not-a-number")));
        assert!(record.faq.unwrap().is_array());
    }
}
