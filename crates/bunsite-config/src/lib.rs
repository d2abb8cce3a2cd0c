//! Site configuration for bunsite.
//!
//! Holds the descriptive metadata, Open Graph card, language map and
//! per-locale sidebar that a documentation framework reads at render time.
//!
//! The data comes either from a built-in [`Preset`] or from a `bunsite.toml`
//! file, optionally layered on top of a preset. Config files are discovered in
//! the current directory and its parents; CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `open_graph.image.src`
//! - `community_invite_url`
//! - `github_edit_url`
//! - `search.app_id`
//! - `search.api_key`

mod diagnostics;
mod expand;
mod languages;
mod preset;
mod sidebar;
mod site;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use diagnostics::{Diagnostic, Severity};
pub use languages::LanguageMap;
pub use preset::Preset;
pub use sidebar::{DocLink, Sidebar, SidebarEntry, SidebarSection};
pub use site::{OpenGraphConfig, OpenGraphImage, SearchConfig, SiteConfig, SiteMetadata};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "bunsite.toml";

/// Default content directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "src/pages";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Base preset. Replaces the file's `preset`.
    pub preset: Option<Preset>,
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_API_KEY`} not set").
        message: String,
    },
    /// Preset name not recognized.
    #[error("Unknown preset '{0}' (expected one of: bun-time, bun-js)")]
    UnknownPreset(String),
}

/// Raw `bunsite.toml` as parsed. Every section is optional so a file can
/// override only parts of a preset.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    preset: Option<Preset>,
    content: ContentConfigRaw,
    site: Option<SiteMetadata>,
    open_graph: Option<OpenGraphConfig>,
    languages: Option<LanguageMap>,
    sidebar: Option<Sidebar>,
    community_invite_url: Option<String>,
    github_edit_url: Option<String>,
    search: Option<SearchConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory holding the documentation pages.
    pub source_dir: PathBuf,
}

/// Loaded configuration: the site data plus where it came from.
#[derive(Debug)]
pub struct Config {
    /// Site data handed to the framework.
    pub site: SiteConfig,
    /// Preset the site data is based on, if any.
    pub preset: Option<Preset>,
    /// Content settings with absolute paths.
    pub content: ContentConfig,
    /// Path to the config file (set when loaded from a file).
    pub config_path: Option<PathBuf>,
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to be an absolute http:// or https:// URL.
pub(crate) fn require_http_url(value: &str, field: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(value).map_err(|e| {
        ConfigError::Validation(format!("{field} must be an absolute URL ({e})"))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `bunsite.toml` in the current directory and parents, and finally
    /// falls back to the preset from `cli_settings`.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// validation fails, or neither a config file nor a preset is available.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cli_preset = cli_settings.and_then(|s| s.preset);

        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path, cli_preset)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered, cli_preset)?
        } else if let Some(preset) = cli_preset {
            Self::from_preset(preset, &std::env::current_dir()?)
        } else {
            return Err(ConfigError::Validation(format!(
                "no {CONFIG_FILENAME} found and no preset selected; \
                 pass --preset bun-time|bun-js or create {CONFIG_FILENAME}"
            )));
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Configuration backed only by a preset, with paths relative to `base`.
    #[must_use]
    pub fn from_preset(preset: Preset, base: &Path) -> Self {
        Self {
            site: preset.site().clone(),
            preset: Some(preset),
            content: ContentConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            config_path: None,
        }
    }

    /// Apply CLI settings to the configuration.
    ///
    /// The preset is consumed earlier, while layering the file.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path, cli_preset: Option<Preset>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir, cli_preset)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            preset = ?config.preset,
            title = %config.site.site.title,
            "Loaded site configuration"
        );

        Ok(config)
    }

    /// Parse, layer, expand and validate `bunsite.toml` content.
    ///
    /// Relative paths resolve against `config_dir`.
    fn from_toml(
        content: &str,
        config_dir: &Path,
        cli_preset: Option<Preset>,
    ) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let preset = cli_preset.or(file.preset);
        let source_dir = config_dir.join(
            file.content
                .source_dir
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE_DIR),
        );

        let mut site = file.into_site(preset)?;
        expand_env_vars(&mut site)?;
        site.validate()?;

        Ok(Self {
            site,
            preset,
            content: ContentConfig { source_dir },
            config_path: None,
        })
    }

    /// Validate the site data.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any invariant fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()
    }
}

impl ConfigFile {
    /// Build site data, replacing preset sections with those present in the file.
    fn into_site(self, preset: Option<Preset>) -> Result<SiteConfig, ConfigError> {
        let base = preset.map(Preset::site);

        let site = pick(self.site, base.map(|b| &b.site), "site")?;
        let open_graph = pick(self.open_graph, base.map(|b| &b.open_graph), "open_graph")?;
        let languages = pick(self.languages, base.map(|b| &b.languages), "languages")?;
        let sidebar = pick(self.sidebar, base.map(|b| &b.sidebar), "sidebar")?;

        Ok(SiteConfig {
            site,
            open_graph,
            languages,
            sidebar,
            community_invite_url: self
                .community_invite_url
                .or_else(|| base.and_then(|b| b.community_invite_url.clone())),
            github_edit_url: self
                .github_edit_url
                .or_else(|| base.and_then(|b| b.github_edit_url.clone())),
            search: self.search.or_else(|| base.and_then(|b| b.search.clone())),
        })
    }
}

/// File value if present, else the preset's value, else a missing-section error.
fn pick<T: Clone>(file: Option<T>, preset: Option<&T>, section: &str) -> Result<T, ConfigError> {
    file.or_else(|| preset.cloned()).ok_or_else(|| {
        ConfigError::Validation(format!(
            "[{section}] section required in config when no preset is selected"
        ))
    })
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(site: &mut SiteConfig) -> Result<(), ConfigError> {
    expand::expand_in_place(&mut site.open_graph.image.src, "open_graph.image.src")?;
    expand::expand_opt(site.community_invite_url.as_mut(), "community_invite_url")?;
    expand::expand_opt(site.github_edit_url.as_mut(), "github_edit_url")?;

    if let Some(ref mut search) = site.search {
        expand::expand_in_place(&mut search.app_id, "search.app_id")?;
        expand::expand_in_place(&mut search.api_key, "search.api_key")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_CONFIG: &str = r#"
community_invite_url = "https://example.com/chat"

[content]
source_dir = "docs"

[site]
title = "Example"
description = "Example docs"
default_language = "en_US"

[open_graph]
twitter = "example"

[open_graph.image]
src = "https://example.com/logo.png"
alt = "Example logo"

[languages]
English = "en"

[[sidebar.en]]
text = "Basics"
header = true
link = "en/introduction"

[[sidebar.en]]
text = "Installing"
link = "en/installing"
"#;

    fn load_str(toml: &str, cli_preset: Option<Preset>) -> Result<Config, ConfigError> {
        Config::from_toml(toml, Path::new("/project"), cli_preset)
    }

    #[test]
    fn test_full_config_without_preset() {
        let config = load_str(FULL_CONFIG, None).unwrap();

        assert_eq!(config.preset, None);
        assert_eq!(config.site.site.title, "Example");
        assert_eq!(config.content.source_dir, PathBuf::from("/project/docs"));
        assert_eq!(
            config.site.community_invite_url.as_deref(),
            Some("https://example.com/chat")
        );

        let entries = config.site.sidebar_for("en").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], SidebarEntry::linked_header("Basics", "en/introduction"));
        assert_eq!(entries[1], SidebarEntry::link("Installing", "en/installing"));
    }

    #[test]
    fn test_preset_only_file() {
        let config = load_str("preset = \"bun-time\"", None).unwrap();

        assert_eq!(config.preset, Some(Preset::BunTime));
        assert_eq!(&config.site, Preset::BunTime.site());
        assert_eq!(config.content.source_dir, PathBuf::from("/project/src/pages"));
    }

    #[test]
    fn test_file_section_replaces_preset_section() {
        let toml = r#"
preset = "bun-js"

[site]
title = "Bun docs (staging)"
description = "Staging build"
default_language = "en_US"
"#;
        let config = load_str(toml, None).unwrap();

        assert_eq!(config.site.site.title, "Bun docs (staging)");
        assert_eq!(config.site.sidebar, Preset::BunJs.site().sidebar);
        assert_eq!(config.site.open_graph, Preset::BunJs.site().open_graph);
    }

    #[test]
    fn test_cli_preset_overrides_file_preset() {
        let config = load_str("preset = \"bun-time\"", Some(Preset::BunJs)).unwrap();
        assert_eq!(config.preset, Some(Preset::BunJs));
        assert_eq!(config.site.sidebar_for("en").unwrap().len(), 33);
    }

    #[test]
    fn test_missing_section_without_preset() {
        let toml = r#"
[site]
title = "Example"
description = "Example docs"
default_language = "en"
"#;
        let err = load_str(toml, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[open_graph]"));
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let err = load_str("preset = \"bun-docs\"", None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = load_str("preset = \"bun-js\"\ntitel = \"typo\"", None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_image_url_fails_validation() {
        let toml = FULL_CONFIG.replace("https://example.com/logo.png", "logo.png");
        let err = load_str(&toml, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("open_graph.image.src"));
    }

    #[test]
    fn test_sidebar_locale_must_be_known() {
        let toml = r#"
preset = "bun-time"

[[sidebar.fr]]
text = "Installer"
link = "fr/installing"
"#;
        let err = load_str(toml, None).unwrap_err();
        assert!(err.to_string().contains("sidebar.fr"));
    }

    #[test]
    fn test_expand_env_vars_search() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BUNSITE_TEST_ALGOLIA_KEY", "secret-key");
        }

        let toml = r#"
preset = "bun-js"

[search]
index_name = "bun"
app_id = "${BUNSITE_TEST_ALGOLIA_APP:-APP123}"
api_key = "${BUNSITE_TEST_ALGOLIA_KEY}"
"#;
        let config = load_str(toml, None).unwrap();
        let search = config.site.search.unwrap();
        assert_eq!(search.app_id, "APP123");
        assert_eq!(search.api_key, "secret-key");

        unsafe {
            std::env::remove_var("BUNSITE_TEST_ALGOLIA_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BUNSITE_TEST_MISSING_EDIT_URL");
        }

        let toml = "preset = \"bun-js\"\ngithub_edit_url = \"${BUNSITE_TEST_MISSING_EDIT_URL}\"";
        let err = load_str(toml, None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("github_edit_url"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/bunsite.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "preset = \"bun-js\"\n[content]\nsource_dir = \"pages\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.content.source_dir, dir.path().join("pages"));
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "preset = \"bun-time\"\n").unwrap();

        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/custom/pages")),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.content.source_dir, PathBuf::from("/custom/pages"));
        assert_eq!(config.preset, Some(Preset::BunTime));
    }

    #[test]
    fn test_from_preset_defaults() {
        let config = Config::from_preset(Preset::BunJs, Path::new("/site"));
        assert_eq!(config.content.source_dir, PathBuf::from("/site/src/pages"));
        assert!(config.config_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_require_http_url() {
        assert!(require_http_url("https://bun.sh/logo.svg", "f").is_ok());
        assert!(require_http_url("http://localhost:3000", "f").is_ok());
        assert!(require_http_url("mailto:me@example.com", "f").is_err());
        assert!(require_http_url("bun.sh/logo.svg", "f").is_err());
    }
}
