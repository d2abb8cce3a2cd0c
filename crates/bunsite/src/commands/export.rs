//! `bunsite export` command implementation.
//!
//! JSON output mirrors the module exports a documentation framework reads
//! (`SITE`, `OPEN_GRAPH`, `KNOWN_LANGUAGES`, `SIDEBAR`, ...). TOML output is a
//! complete `bunsite.toml` that loads back without a preset.

use std::path::PathBuf;

use bunsite_config::{LanguageMap, OpenGraphConfig, SearchConfig, Sidebar, SiteConfig};
use clap::{Args, ValueEnum};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    #[default]
    Json,
    Toml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or written.
    pub(crate) fn execute(self, config_args: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = config_args.load(None)?;
        let text = render(&config.site, self.format)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &text)?;
                tracing::info!(path = %path.display(), format = ?self.format, "Exported site configuration");
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&text)?,
        }
        Ok(())
    }
}

/// Serialize `site` in the requested format.
pub(crate) fn render(site: &SiteConfig, format: ExportFormat) -> Result<String, CliError> {
    let mut text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&FrameworkExport::from(site))?,
        ExportFormat::Toml => toml::to_string(site)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct FrameworkExport<'a> {
    site: SiteExport<'a>,
    open_graph: &'a OpenGraphConfig,
    known_languages: &'a LanguageMap,
    sidebar: &'a Sidebar,
    #[serde(skip_serializing_if = "Option::is_none")]
    community_invite_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_edit_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algolia: Option<AlgoliaExport<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteExport<'a> {
    title: &'a str,
    description: &'a str,
    default_language: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgoliaExport<'a> {
    index_name: &'a str,
    app_id: &'a str,
    api_key: &'a str,
}

impl<'a> From<&'a SearchConfig> for AlgoliaExport<'a> {
    fn from(search: &'a SearchConfig) -> Self {
        Self {
            index_name: &search.index_name,
            app_id: &search.app_id,
            api_key: &search.api_key,
        }
    }
}

impl<'a> From<&'a SiteConfig> for FrameworkExport<'a> {
    fn from(site: &'a SiteConfig) -> Self {
        Self {
            site: SiteExport {
                title: &site.site.title,
                description: &site.site.description,
                default_language: &site.site.default_language,
            },
            open_graph: &site.open_graph,
            known_languages: &site.languages,
            sidebar: &site.sidebar,
            community_invite_url: site.community_invite_url.as_deref(),
            github_edit_url: site.github_edit_url.as_deref(),
            algolia: site.search.as_ref().map(AlgoliaExport::from),
        }
    }
}
