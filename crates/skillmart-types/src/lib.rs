//! Skillmart Types - Core data model for the marketplace builder
//!
//! Defines the three per-skill metadata sources, the merged skill record,
//! and the output artifacts written by the build.

pub mod artifacts;
pub mod record;
pub mod sources;

pub use artifacts::{IndexEntry, MarketplaceManifest, MarketplaceOwner, MarketplacePlugin};
pub use record::SkillRecord;
pub use sources::{Frontmatter, SkillManifest, SkillYaml};
