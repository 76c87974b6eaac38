//! Skillmart skill loading
//!
//! Turns a skill directory (`SKILL.md` plus optional `manifest.json`,
//! `skill.yaml` and `references/methodology.md`) into one merged
//! [`skillmart_types::SkillRecord`].
//!
//! ## Pipeline
//!
//! 1. Scan: list child directories of the skills root in sorted order
//! 2. Load: read `SKILL.md` (the only required file), split and parse the
//!    YAML frontmatter
//! 3. Merge: apply the optional sources with the documented precedence
//!    (skill.yaml > manifest.json > frontmatter > defaults, per field group)
//! 4. Decorate: directory tree, last-updated date, relative path
//!
//! Failures local to one skill never abort the batch; they are collected
//! into the scan outcome and reported by the caller.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod frontmatter;
pub mod gitdate;
pub mod loader;
pub mod merge;
pub mod scan;
pub mod sources;
pub mod tree;

pub use loader::load_skill;
pub use scan::{scan_skills, ScanOutcome, SkippedSkill};
