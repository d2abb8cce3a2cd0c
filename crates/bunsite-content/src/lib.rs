//! Documentation content discovery for bunsite.
//!
//! Scans the page directory of a documentation site and cross-checks sidebar
//! links against the pages that actually exist. Only the path portion of a
//! link (before `#`) is checked; fragments are not resolved.
//!
//! ```no_run
//! use bunsite_config::Preset;
//! use bunsite_content::ContentIndex;
//!
//! let index = ContentIndex::scan("src/pages");
//! for diagnostic in index.check_sidebar(Preset::BunJs.site()) {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod scanner;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use bunsite_config::{Diagnostic, SiteConfig};

pub use scanner::PageRef;
use scanner::Scanner;

/// Pages available in a content directory, keyed by URL path.
#[derive(Debug, Default)]
pub struct ContentIndex {
    source_dir: PathBuf,
    pages: BTreeMap<String, PathBuf>,
}

impl ContentIndex {
    /// Scan `source_dir` for pages.
    ///
    /// A missing directory yields an empty index.
    pub fn scan(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let pages: BTreeMap<_, _> = Scanner::new(source_dir.clone())
            .scan()
            .into_iter()
            .map(|page| (page.url_path, page.source))
            .collect();

        tracing::debug!(
            source_dir = %source_dir.display(),
            page_count = pages.len(),
            "Content scan completed"
        );

        Self { source_dir, pages }
    }

    /// Build an index from known URL paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_dir: PathBuf::new(),
            pages: paths
                .into_iter()
                .map(|p| (p.into(), PathBuf::new()))
                .collect(),
        }
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Whether a page exists at `url_path`. Leading and trailing slashes are ignored.
    #[must_use]
    pub fn contains(&self, url_path: &str) -> bool {
        self.pages.contains_key(url_path.trim_matches('/'))
    }

    /// Source file for `url_path`.
    #[must_use]
    pub fn source_of(&self, url_path: &str) -> Option<&Path> {
        self.pages.get(url_path.trim_matches('/')).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Cross-check every sidebar link against the index.
    ///
    /// Links to missing pages are errors. Pages under a locale directory that
    /// no sidebar entry of that locale points to are warnings.
    #[must_use]
    pub fn check_sidebar(&self, site: &SiteConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (locale, entries) in site.sidebar.iter() {
            let mut linked = BTreeSet::new();
            for (index, entry) in entries.iter().enumerate() {
                let Some(link) = entry.target() else {
                    continue;
                };
                let path = link.path().trim_matches('/');
                linked.insert(path);
                if !self.contains(path) {
                    diagnostics.push(
                        Diagnostic::error(format!(
                            "'{}' links to missing page '{path}'",
                            entry.text()
                        ))
                        .at(locale, index),
                    );
                }
            }

            let prefix = format!("{locale}/");
            for page in self.pages.keys() {
                let in_locale = page == locale || page.starts_with(&prefix);
                if in_locale && !linked.contains(page.as_str()) {
                    diagnostics.push(Diagnostic::warning(format!(
                        "sidebar.{locale} does not link page '{page}'"
                    )));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunsite_config::{Preset, Severity, Sidebar, SidebarEntry};
    use pretty_assertions::assert_eq;

    fn site_with(entries: Vec<SidebarEntry>) -> SiteConfig {
        let mut site = Preset::BunTime.site().clone();
        site.sidebar = Sidebar::new().with_locale("en", entries);
        site
    }

    #[test]
    fn test_contains_ignores_slashes() {
        let index = ContentIndex::from_paths(["en/installing"]);
        assert!(index.contains("en/installing"));
        assert!(index.contains("/en/installing/"));
        assert!(!index.contains("en/using"));
    }

    #[test]
    fn test_missing_page_is_error() {
        let index = ContentIndex::from_paths(["en/installing"]);
        let site = site_with(vec![
            SidebarEntry::header("Basics"),
            SidebarEntry::link("Installing", "en/installing"),
            SidebarEntry::link("Using", "en/using"),
        ]);

        let diagnostics = index.check_sidebar(&site);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::error("'Using' links to missing page 'en/using'").at("en", 2)]
        );
    }

    #[test]
    fn test_fragment_checks_page_only() {
        let index = ContentIndex::from_paths(["en/bun-install"]);
        let site = site_with(vec![
            SidebarEntry::linked_header("Using bun install", "en/bun-install"),
            SidebarEntry::link("Lockfile", "en/bun-install#lockfile"),
        ]);
        assert!(index.check_sidebar(&site).is_empty());
    }

    #[test]
    fn test_linked_header_is_checked() {
        let index = ContentIndex::from_paths(Vec::<String>::new());
        let site = site_with(vec![SidebarEntry::linked_header("Basics", "en/introduction")]);

        let diagnostics = index.check_sidebar(&site);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].index, Some(0));
    }

    #[test]
    fn test_unlinked_page_in_locale_is_warning() {
        let index = ContentIndex::from_paths(["en/installing", "en/credits", "blog/post"]);
        let site = site_with(vec![SidebarEntry::link("Installing", "en/installing")]);

        let diagnostics = index.check_sidebar(&site);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::warning("sidebar.en does not link page 'en/credits'")]
        );
    }

    #[test]
    fn test_scan_bun_time_pages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let en = temp_dir.path().join("en");
        std::fs::create_dir(&en).unwrap();
        let site = Preset::BunTime.site();
        for entry in site.sidebar_for("en").unwrap() {
            if let Some(link) = entry.target() {
                let file = temp_dir.path().join(format!("{}.md", link.path()));
                std::fs::write(file, format!("# {}", entry.text())).unwrap();
            }
        }

        let index = ContentIndex::scan(temp_dir.path());
        assert_eq!(index.len(), 14);
        assert_eq!(index.source_dir(), temp_dir.path());
        assert!(index.source_of("en/ffi").unwrap().ends_with("ffi.md"));
        assert!(index.check_sidebar(site).is_empty());
    }
}
