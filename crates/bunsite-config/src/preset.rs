//! Built-in site configurations.
//!
//! Two variants of the Bun documentation site exist and neither is implied to
//! be canonical; the integrator picks one with `--preset` or `preset = "..."`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::languages::LanguageMap;
use crate::sidebar::{Sidebar, SidebarEntry};
use crate::site::{OpenGraphConfig, OpenGraphImage, SiteConfig, SiteMetadata};

/// Named built-in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Minimal sidebar with generic branding ("Bun Time").
    BunTime,
    /// Expanded sidebar with sub-sections and fragment links ("Bun.js").
    BunJs,
}

impl Preset {
    pub const ALL: [Self; 2] = [Self::BunTime, Self::BunJs];

    /// Identifier used in config files and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BunTime => "bun-time",
            Self::BunJs => "bun-js",
        }
    }

    /// The preset's configuration.
    ///
    /// Built once per process on first access.
    #[must_use]
    pub fn site(self) -> &'static SiteConfig {
        match self {
            Self::BunTime => &BUN_TIME,
            Self::BunJs => &BUN_JS,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_owned()))
    }
}

static BUN_TIME: LazyLock<SiteConfig> = LazyLock::new(bun_time);
static BUN_JS: LazyLock<SiteConfig> = LazyLock::new(bun_js);

fn bun_open_graph() -> OpenGraphConfig {
    OpenGraphConfig {
        image: OpenGraphImage {
            src: "https://bun.sh/logo.svg".to_owned(),
            alt: "Jolly looking bun".to_owned(),
        },
        twitter: "jarredsummer".to_owned(),
    }
}

fn bun_time() -> SiteConfig {
    SiteConfig {
        site: SiteMetadata {
            title: "Bun Time".to_owned(),
            description: "Bun is a fast all-in-one JavaScript runtime.".to_owned(),
            default_language: "en_US".to_owned(),
        },
        open_graph: bun_open_graph(),
        languages: LanguageMap::new().with("English", "en"),
        sidebar: Sidebar::new().with_locale(
            "en",
            vec![
                SidebarEntry::header(""),
                SidebarEntry::header("Basics"),
                SidebarEntry::link("Installing", "en/installing"),
                SidebarEntry::link("Using", "en/using"),
                SidebarEntry::link("Frameworks", "en/frameworks"),
                SidebarEntry::link("Examples", "en/examples"),
                SidebarEntry::link("TroubleShooting", "en/troubleshooting"),
                SidebarEntry::link("Configuration", "en/configuration"),
                SidebarEntry::link("Limitations & intended usage", "en/limitations"),
                SidebarEntry::link("Reference", "en/reference"),
                SidebarEntry::link("bun:sqlite", "en/bun_sqlite"),
                SidebarEntry::link("Bun.serve", "en/bun_serve"),
                SidebarEntry::link("Bun.write", "en/bun_write"),
                SidebarEntry::header("Advanced"),
                SidebarEntry::link("FFI", "en/ffi"),
                SidebarEntry::link("Loaders", "en/loaders"),
                SidebarEntry::link("Transpiler", "en/transpiler"),
            ],
        ),
        community_invite_url: Some("https://bun.sh/discord".to_owned()),
        github_edit_url: None,
        search: None,
    }
}

fn bun_js() -> SiteConfig {
    SiteConfig {
        site: SiteMetadata {
            title: "Bun.js".to_owned(),
            description: "Bun is a fast all-in-one JavaScript runtime.".to_owned(),
            default_language: "en_US".to_owned(),
        },
        open_graph: bun_open_graph(),
        languages: LanguageMap::new().with("English", "en"),
        sidebar: Sidebar::new().with_locale(
            "en",
            vec![
                SidebarEntry::linked_header("Basics", "en/introduction"),
                SidebarEntry::link("Installing", "en/installing"),
                SidebarEntry::link("Quick start", "en/quick-start"),
                SidebarEntry::linked_header("Using bun.js", "en/bun-js"),
                SidebarEntry::link("Types", "en/bun-js#types"),
                SidebarEntry::link("Fast paths for Web APIs", "en/bun-js#fast-paths"),
                SidebarEntry::link("Module resolution", "en/bun-js#module-resolution"),
                SidebarEntry::link("Environment variables", "en/bun-js#environment-variables"),
                SidebarEntry::linked_header("Using bun install", "en/bun-install"),
                SidebarEntry::link("Lockfile", "en/bun-install#lockfile"),
                SidebarEntry::link("Cache", "en/bun-install#cache"),
                SidebarEntry::link(
                    "Platform-specific dependencies",
                    "en/bun-install#platform-specific-dependencies",
                ),
                SidebarEntry::link("Peer dependencies", "en/bun-install#peer-dependencies"),
                SidebarEntry::linked_header("Using bun run", "en/bun-run"),
                SidebarEntry::link("Using bun dev", "en/bun-dev"),
                SidebarEntry::linked_header("Frameworks", "en/frameworks"),
                SidebarEntry::link("Next.js", "en/frameworks#nextjs"),
                SidebarEntry::link("Create React App", "en/frameworks#create-react-app"),
                SidebarEntry::linked_header("Configuration", "en/configuration"),
                SidebarEntry::link("bunfig.toml", "en/configuration#bunfig-toml"),
                SidebarEntry::link("Loaders", "en/loaders"),
                SidebarEntry::link("CSS in JS", "en/loaders#css-in-js"),
                SidebarEntry::linked_header("Reference", "en/reference"),
                SidebarEntry::link("bun:sqlite", "en/bun_sqlite"),
                SidebarEntry::link("Bun.serve", "en/bun_serve"),
                SidebarEntry::link("Bun.write", "en/bun_write"),
                SidebarEntry::link("Bun.Transpiler", "en/transpiler"),
                SidebarEntry::link("FFI", "en/ffi"),
                SidebarEntry::link("Node-API", "en/napi"),
                SidebarEntry::header("Advanced"),
                SidebarEntry::link("Troubleshooting", "en/troubleshooting"),
                SidebarEntry::link("Limitations & intended usage", "en/limitations"),
                SidebarEntry::link("Credits", "en/credits"),
            ],
        ),
        community_invite_url: Some("https://bun.sh/discord".to_owned()),
        github_edit_url: None,
        search: None,
    }
}
