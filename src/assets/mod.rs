//! Media asset synchronization.
//!
//! Copies media files from a source directory into the assets directory. The
//! copy is one-shot: a non-empty destination is treated as already
//! synchronized and skipped entirely (no merge, no diff).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Image extensions recognized by [`media_file_paths`].
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Copies every regular file from `src_dir` into `dest_dir`.
///
/// Creates `dest_dir` if absent. If `dest_dir` already contains any entry,
/// the whole operation is skipped. Subdirectories of `src_dir` are not
/// descended into. Modified timestamps are preserved on copied files.
///
/// # Errors
///
/// Fails if `src_dir` does not exist or is unreadable, or on any copy
/// failure. Errors propagate to the caller.
pub fn sync_media(src_dir: &Path, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create assets directory {}", dest_dir.display()))?;

    log::info!(
        "Copying media files from {} to {}",
        src_dir.display(),
        dest_dir.display()
    );

    // Only proceed if the destination directory is empty
    let mut existing = fs::read_dir(dest_dir)
        .with_context(|| format!("failed to read assets directory {}", dest_dir.display()))?;
    if existing.next().is_some() {
        log::info!(
            "Assets directory {} is not empty, skipping copy",
            dest_dir.display()
        );
        return Ok(());
    }

    let entries = fs::read_dir(src_dir)
        .with_context(|| format!("failed to read media directory {}", src_dir.display()))?;

    let mut copied = 0usize;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to list media directory {}", src_dir.display()))?;
        let src_path = entry.path();

        // Only copy files, not subdirectories
        if !src_path.is_file() {
            continue;
        }

        let dest_path = dest_dir.join(entry.file_name());
        fs::copy(&src_path, &dest_path).with_context(|| {
            format!(
                "failed to copy {} to {}",
                src_path.display(),
                dest_path.display()
            )
        })?;
        preserve_mtime(&src_path, &dest_path)?;
        copied += 1;
    }

    log::info!("Copied {} media files to {}", copied, dest_dir.display());
    Ok(())
}

/// Lists the image files (`.jpg`, `.jpeg`, `.png`) currently present in the
/// assets directory.
pub fn media_file_paths(assets_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(assets_dir)
        .with_context(|| format!("failed to read assets directory {}", assets_dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to list assets directory {}", assets_dir.display()))?;
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_image {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Carries the source file's modified timestamp over to the copy.
fn preserve_mtime(src: &Path, dest: &Path) -> Result<()> {
    let modified = fs::metadata(src)
        .and_then(|m| m.modified())
        .with_context(|| format!("failed to read metadata for {}", src.display()))?;
    let dest_file = fs::File::options()
        .write(true)
        .open(dest)
        .with_context(|| format!("failed to open {} for timestamp update", dest.display()))?;
    dest_file
        .set_modified(modified)
        .with_context(|| format!("failed to set timestamp on {}", dest.display()))?;
    Ok(())
}
