//! Per-skill loading
//!
//! `SKILL.md` is the only required file; its absence (or an unparseable
//! frontmatter block) is fatal for that skill and for that skill only.

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};

use skillmart_types::SkillRecord;

use crate::{frontmatter, gitdate, merge, sources, tree};

/// Load one skill directory into a fully merged record.
pub fn load_skill(dir: &Path) -> Result<SkillRecord> {
    let dir_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid skill directory name: {:?}", dir))?;

    let skill_file = dir.join("SKILL.md");
    if !skill_file.exists() {
        return Err(anyhow!("SKILL.md not found in {:?}", dir));
    }

    let content = fs::read_to_string(&skill_file)
        .with_context(|| format!("Failed to read {:?}", skill_file))?;

    let (fm_yaml, body) = frontmatter::split_frontmatter(&content)
        .with_context(|| format!("Failed to parse {:?}", skill_file))?;
    let fm = frontmatter::parse_frontmatter(&fm_yaml)
        .with_context(|| format!("Failed to parse {:?}", skill_file))?;

    // Optional sources are fail-soft; warnings come from the loaders.
    let manifest = sources::load_manifest(dir);
    let skill_yaml = sources::load_skill_yaml(dir);

    let mut record = merge::merge_sources(dir_name, &fm, manifest.as_ref(), skill_yaml.as_ref(), &body);

    record.methodology = sources::load_methodology(dir);
    record.structure = tree::render_tree(dir)
        .with_context(|| format!("Failed to render directory tree for {:?}", dir))?;
    record.last_updated = gitdate::last_updated(dir);
    record.path = format!("skills/{}", dir_name);

    Ok(record)
}
