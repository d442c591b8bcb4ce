use std::fs::{self, File};
use std::io;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

use crate::layout::{self, LAYOUT};

const SUCCESS_MESSAGE: &str = "Project structure created successfully";

/// Run the full pass over the structure table: every folder ends up on disk,
/// every listed file ends up empty. Existing files are truncated; existing
/// folders are left alone.
pub fn create(root: &Utf8Path, dry_run: bool) -> Result<()> {
    for entry in LAYOUT {
        if let Some(dir) = entry.dir() {
            if dry_run {
                println!("[dry-run] would create {}/", dir);
            } else {
                ensure_dir(&root.join(dir))
                    .with_context(|| format!("creating directory {}", dir))?;
            }
        }

        for file in entry.files {
            let rel = entry.file_path(file);
            if dry_run {
                println!("[dry-run] would create {}", rel);
                continue;
            }
            File::create(root.join(&rel)).with_context(|| format!("creating {}", rel))?;
            println!("  created {}", rel);
        }
    }

    if !dry_run {
        println!("{SUCCESS_MESSAGE}");
    }
    Ok(())
}

/// Print the structure table as an indented tree without touching disk.
pub fn plan() {
    println!("Project layout:");
    for entry in LAYOUT {
        if let Some(dir) = entry.dir() {
            println!("  {}/", dir);
            for file in entry.files {
                println!("    {}", file);
            }
        } else {
            for file in entry.files {
                println!("  {}", file);
            }
        }
    }
}

/// Report which expected paths are present. Creates nothing; fails when any
/// path is missing.
pub fn check(root: &Utf8Path) -> Result<()> {
    let expected = layout::expected_paths();
    let missing: Vec<_> = expected
        .iter()
        .filter(|path| !root.join(path).exists())
        .collect();

    if missing.is_empty() {
        println!("Project structure is complete ({} paths).", expected.len());
        return Ok(());
    }

    for path in &missing {
        println!("  missing {}", path);
    }
    bail!(
        "{} of {} expected paths missing",
        missing.len(),
        expected.len()
    );
}

/// Ensure a directory exists, creating it recursively if needed.
fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
