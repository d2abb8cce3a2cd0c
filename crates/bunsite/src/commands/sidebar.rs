//! `bunsite sidebar` command implementation.

use std::fmt::Write;

use bunsite_config::{SidebarEntry, SiteConfig};
use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Only print this locale (default: all locales).
    #[arg(short, long)]
    locale: Option<String>,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the locale
    /// has no sidebar.
    pub(crate) fn execute(self, config_args: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = config_args.load(None)?;
        let site = &config.site;

        let locales: Vec<&str> = match &self.locale {
            Some(locale) if site.sidebar_for(locale).is_some() => vec![locale.as_str()],
            Some(locale) => {
                return Err(CliError::Validation(format!(
                    "no sidebar for locale '{locale}'"
                )));
            }
            None => site.sidebar.locales().collect(),
        };

        for locale in locales {
            let name = site.languages.name_of(locale).unwrap_or(locale);
            output.highlight(&format!("{name} ({locale})"));
            output.data(&render_tree(site, locale))?;
        }
        Ok(())
    }
}

/// Render the sidebar of `locale` as an indented tree.
///
/// Headers sit at the first level with their entries indented beneath them.
/// Navigable entries show their target after an arrow.
pub(crate) fn render_tree(site: &SiteConfig, locale: &str) -> String {
    let mut out = String::new();
    for section in site.sidebar.sections(locale) {
        let indent = if let Some(header) = section.header {
            let _ = writeln!(out, "{}", label(header));
            "  "
        } else {
            ""
        };
        for item in section.items {
            let _ = writeln!(out, "{indent}{}", label(item));
        }
    }
    out
}

fn label(entry: &SidebarEntry) -> String {
    let text = match entry.text() {
        "" => "(untitled)",
        text => text,
    };
    match entry {
        SidebarEntry::Header { .. } => format!("[{text}]"),
        SidebarEntry::LinkedHeader { link, .. } => format!("[{text}] -> {link}"),
        SidebarEntry::Link { link, .. } => format!("{text} -> {link}"),
        SidebarEntry::Unlinked { .. } => format!("{text} (no link)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunsite_config::{Preset, Sidebar};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_tree_nested_sections() {
        let mut site = Preset::BunJs.site().clone();
        site.sidebar = Sidebar::new().with_locale(
            "en",
            vec![
                SidebarEntry::linked_header("Basics", "en/introduction"),
                SidebarEntry::link("Installing", "en/installing"),
                SidebarEntry::header("Advanced"),
                SidebarEntry::link("Lockfile", "en/bun-install#lockfile"),
                SidebarEntry::link("Dead", ""),
            ],
        );

        assert_eq!(
            render_tree(&site, "en"),
            "[Basics] -> en/introduction\n  Installing -> en/installing\n[Advanced]\n  Lockfile -> en/bun-install#lockfile\n  Dead (no link)\n"
        );
    }

    #[test]
    fn test_render_tree_untitled_header() {
        let tree = render_tree(Preset::BunTime.site(), "en");
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "[(untitled)]");
        assert_eq!(lines[1], "[Basics]");
        assert_eq!(lines[2], "  Installing -> en/installing");
    }

    #[test]
    fn test_render_tree_unknown_locale() {
        assert_eq!(render_tree(Preset::BunTime.site(), "fr"), "");
    }
}
