//! Page discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

/// File extensions that produce a page.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx", "markdown", "html", "astro"];

/// A page found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    /// Page path as used in sidebar links (e.g., "en/installing").
    pub url_path: String,
    /// Source file.
    pub source: PathBuf,
}

/// Walks a content directory and collects [`PageRef`]s.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the content directory.
    ///
    /// Returns an empty Vec if the directory doesn't exist.
    pub fn scan(&self) -> Vec<PageRef> {
        let mut pages = Vec::new();
        if self.source_dir.is_dir() {
            scan_directory(&self.source_dir, "", &mut pages);
        }
        pages.sort_by(|a, b| a.url_path.cmp(&b.url_path));
        pages
    }
}

fn scan_directory(dir_path: &Path, url_prefix: &str, pages: &mut Vec<PageRef>) {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir_path.display(), error = %e, "Failed to read content directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        // Hidden files and `_partials` are not routable
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            let child_prefix = join_url(url_prefix, &name);
            scan_directory(&path, &child_prefix, pages);
        } else if let Some(stem) = page_stem(&path) {
            let url_path = if stem == "index" {
                url_prefix.to_owned()
            } else {
                join_url(url_prefix, stem)
            };
            pages.push(PageRef {
                url_path,
                source: path,
            });
        }
    }
}

/// File stem if `path` has a page extension.
fn page_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !PAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    path.file_stem()?.to_str()
}

fn join_url(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
