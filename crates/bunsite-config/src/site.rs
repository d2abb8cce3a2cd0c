//! Site configuration data consumed by the rendering framework.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::languages::LanguageMap;
use crate::sidebar::{Sidebar, SidebarEntry};
use crate::{ConfigError, require_http_url, require_non_empty};

/// Title, description and default language of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Page `<title>` and header branding.
    pub title: String,
    /// Meta description tag.
    pub description: String,
    /// Locale tag used for the `lang` attribute (e.g. `en_US`).
    pub default_language: String,
}

/// Image shown in Open Graph and Twitter cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    /// Absolute image URL.
    pub src: String,
    pub alt: String,
}

/// Social card metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphConfig {
    pub image: OpenGraphImage,
    /// Twitter handle without the leading `@`.
    pub twitter: String,
}

/// Algolia search settings passed through to the framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub index_name: String,
    pub app_id: String,
    pub api_key: String,
}

/// Complete site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Target of the "Join our community" button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_invite_url: Option<String>,
    /// Base URL of the "Edit this page" button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_edit_url: Option<String>,
    pub site: SiteMetadata,
    pub open_graph: OpenGraphConfig,
    pub languages: LanguageMap,
    pub sidebar: Sidebar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

impl SiteConfig {
    /// Sidebar entries for `locale`.
    #[must_use]
    pub fn sidebar_for(&self, locale: &str) -> Option<&[SidebarEntry]> {
        self.sidebar.entries(locale)
    }

    /// Check the invariants of the data.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metadata()?;
        self.validate_open_graph()?;
        self.validate_links()?;
        self.validate_languages()?;
        self.validate_search()?;
        Ok(())
    }

    fn validate_metadata(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.description, "site.description")?;
        require_non_empty(&self.site.default_language, "site.default_language")?;
        Ok(())
    }

    fn validate_open_graph(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.open_graph.image.src, "open_graph.image.src")?;
        require_http_url(&self.open_graph.image.src, "open_graph.image.src")?;
        require_non_empty(&self.open_graph.image.alt, "open_graph.image.alt")?;
        require_non_empty(&self.open_graph.twitter, "open_graph.twitter")?;
        Ok(())
    }

    fn validate_links(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.community_invite_url {
            require_http_url(url, "community_invite_url")?;
        }
        if let Some(url) = &self.github_edit_url {
            require_http_url(url, "github_edit_url")?;
        }
        Ok(())
    }

    fn validate_languages(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "languages must define at least one language".to_owned(),
            ));
        }

        let duplicates = self.languages.duplicate_codes();
        if !duplicates.is_empty() {
            return Err(ConfigError::Validation(format!(
                "languages map several names to the same code: {}",
                duplicates.join(", ")
            )));
        }

        for locale in self.sidebar.locales() {
            if !self.languages.contains_code(locale) {
                return Err(ConfigError::Validation(format!(
                    "sidebar.{locale} uses a locale code missing from languages"
                )));
            }
        }

        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        if let Some(search) = &self.search {
            require_non_empty(&search.index_name, "search.index_name")?;
            require_non_empty(&search.app_id, "search.app_id")?;
            require_non_empty(&search.api_key, "search.api_key")?;
        }
        Ok(())
    }

    /// Collect schema-drift findings that do not break the invariants.
    ///
    /// Reports leaf entries without a link, headers without text, links that are
    /// not relative paths, duplicate links within a locale, empty sidebars and
    /// languages that have no sidebar.
    #[must_use]
    pub fn lint(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (locale, entries) in self.sidebar.iter() {
            if entries.is_empty() {
                diagnostics.push(Diagnostic::warning(format!("sidebar.{locale} has no entries")));
            }
            let mut first_use: HashMap<String, usize> = HashMap::new();
            for (index, entry) in entries.iter().enumerate() {
                lint_entry(entry, locale, index, &mut first_use, &mut diagnostics);
            }
        }

        for (name, code) in self.languages.iter() {
            if self.sidebar.entries(code).is_none() {
                diagnostics.push(Diagnostic::warning(format!(
                    "language '{name}' ({code}) has no sidebar"
                )));
            }
        }

        diagnostics
    }
}

fn lint_entry(
    entry: &SidebarEntry,
    locale: &str,
    index: usize,
    first_use: &mut HashMap<String, usize>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match entry {
        SidebarEntry::Unlinked { text } => {
            diagnostics.push(
                Diagnostic::warning(format!("entry '{text}' is neither a header nor a link"))
                    .at(locale, index),
            );
        }
        SidebarEntry::Header { text } | SidebarEntry::LinkedHeader { text, .. }
            if text.trim().is_empty() =>
        {
            diagnostics.push(Diagnostic::warning("header has no text").at(locale, index));
        }
        SidebarEntry::Link { text, .. } if text.trim().is_empty() => {
            diagnostics.push(Diagnostic::warning("link has no text").at(locale, index));
        }
        _ => {}
    }

    let Some(link) = entry.target() else {
        return;
    };
    if link.path().is_empty() {
        diagnostics.push(
            Diagnostic::warning(format!("link '{link}' has no page path")).at(locale, index),
        );
    }
    if link.as_str().trim() != link.as_str() {
        diagnostics.push(
            Diagnostic::warning(format!("link '{link}' has surrounding whitespace"))
                .at(locale, index),
        );
    }
    if link.path().starts_with('/') || link.path().contains("://") {
        diagnostics.push(
            Diagnostic::warning(format!("link '{link}' is not a relative page path"))
                .at(locale, index),
        );
    }
    let key = link.to_string();
    if let Some(first) = first_use.get(&key) {
        diagnostics.push(
            Diagnostic::warning(format!("link '{key}' already used by entry {first}"))
                .at(locale, index),
        );
    } else {
        first_use.insert(key, index);
    }
}
