//! Directory tree renderer
//!
//! Produces the human-readable `structure` string shown by the frontend.
//! Two-space indentation per level, directories first and suffixed with
//! `/`, entries sorted by name for deterministic output.

use std::{fs, io, path::Path};

/// Render a skill directory as an indented tree, rooted at its own name.
pub fn render_tree(dir: &Path) -> io::Result<String> {
    let root_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());

    let mut out = format!("{}/\n", root_name);
    render_level(dir, 1, &mut out)?;
    Ok(out)
}

fn render_level(dir: &Path, depth: usize, out: &mut String) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    // Directories before files, then by name.
    entries.sort_by_key(|e| (e.path().is_file(), e.file_name()));

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&name);
        if path.is_dir() {
            out.push_str("/\n");
            render_level(&path, depth + 1, out)?;
        } else {
            out.push('\n');
        }
    }
    Ok(())
}
