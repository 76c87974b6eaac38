//! SKILL.md frontmatter handling
//!
//! The frontmatter is a YAML block delimited by `---` lines at the top of
//! the file. A missing or unterminated block is an error — the skill is
//! skipped by the scanner.

use anyhow::{bail, Context, Result};
use regex::Regex;

use skillmart_types::Frontmatter;

/// Maximum allowed skill name length
const MAX_NAME_LENGTH: usize = 64;

/// Split SKILL.md content at `---` delimiters into (frontmatter, body).
pub fn split_frontmatter(content: &str) -> Result<(String, String)> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        bail!("SKILL.md must start with YAML frontmatter delimited by ---");
    }

    // Skip the opening ---
    let after_open = &trimmed[3..];
    let close_pos = after_open
        .find("\n---")
        .context("SKILL.md missing closing --- for frontmatter")?;

    let frontmatter = after_open[..close_pos].trim().to_string();
    let body = after_open[close_pos + 4..].trim().to_string();
    Ok((frontmatter, body))
}

/// Parse the YAML frontmatter block into its typed form.
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter> {
    serde_yaml::from_str(yaml).context("invalid SKILL.md frontmatter")
}

/// Validate a skill name: 1-64 chars, lowercase letters, digits and single
/// interior hyphens only.
pub fn validate_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return false;
    }
    match Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$") {
        Ok(re) => re.is_match(name),
        Err(_) => false,
    }
}
