// src/browser/listing.rs
// Non-recursive directory enumeration with image classification

use std::fs;
use std::path::{Component, Path};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::error::{BrowseError, BrowseResult};
use super::thumbnail::placeholder_data_uri;

/// Extensions recognized as images (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif",
];

/// One filesystem child reported by the lister.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    pub modified: i64,
}

/// Subset view of an entry with a recognized image extension.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    pub name: String,
    pub path: String,
    pub thumbnail: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryListing {
    pub current_path: String,
    pub parent_path: Option<String>,
    pub items: Vec<DirectoryEntry>,
    pub images: Vec<ImageEntry>,
}

/// Whether the name (or path) carries a recognized image extension.
pub fn is_image_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    Path::new(&lower)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Reject relative paths, `..` components, and anything outside the
/// configured root.
pub fn check_path_allowed(path: &Path, root: &Path) -> BrowseResult<()> {
    if !path.is_absolute() {
        return Err(BrowseError::RelativePath);
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        warn!("Blocked directory traversal attempt: {}", path.display());
        return Err(BrowseError::Denied);
    }
    if !path.starts_with(root) {
        warn!("Path outside allowed root: {}", path.display());
        return Err(BrowseError::Denied);
    }
    Ok(())
}

/// List the immediate children of `path`, classifying image files into a
/// parallel sub-list. Names beginning with `.` are skipped, entries are
/// sorted by name ascending, and a child whose metadata cannot be read is
/// dropped rather than failing the whole listing.
pub fn list_directory(path: &Path, root: &Path) -> BrowseResult<DirectoryListing> {
    check_path_allowed(path, root)?;

    let meta = fs::metadata(path).map_err(BrowseError::from_io)?;
    if !meta.is_dir() {
        return Err(BrowseError::NotADirectory);
    }

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(path).map_err(BrowseError::from_io)? {
        match entry {
            Ok(e) => names.push(e.file_name().to_string_lossy().into_owned()),
            Err(e) => warn!("Skipping unreadable entry in {}: {}", path.display(), e),
        }
    }
    names.sort();

    let mut items = Vec::new();
    let mut images = Vec::new();

    for name in names {
        // Skip hidden files
        if name.starts_with('.') {
            continue;
        }

        let child = path.join(&name);
        let child_meta = match fs::metadata(&child) {
            Ok(m) => m,
            Err(e) => {
                warn!("Error accessing {}: {}", child.display(), e);
                continue;
            }
        };

        let is_dir = child_meta.is_dir();
        let size = if is_dir { 0 } else { child_meta.len() };
        let modified = child_meta
            .modified()
            .map(|t| DateTime::<Utc>::from(t).timestamp())
            .unwrap_or(0);

        items.push(DirectoryEntry {
            name: name.clone(),
            path: child.to_string_lossy().into_owned(),
            is_directory: is_dir,
            size,
            modified,
        });

        if !is_dir && is_image_file(&name) {
            images.push(ImageEntry {
                name,
                path: child.to_string_lossy().into_owned(),
                thumbnail: placeholder_data_uri(),
                size,
            });
        }
    }

    Ok(DirectoryListing {
        current_path: path.to_string_lossy().into_owned(),
        parent_path: path.parent().map(|p| p.to_string_lossy().into_owned()),
        items,
        images,
    })
}
