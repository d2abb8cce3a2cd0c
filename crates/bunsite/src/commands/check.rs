//! `bunsite check` command implementation.

use std::path::PathBuf;

use bunsite_config::{Config, Diagnostic};
use bunsite_content::ContentIndex;
use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Content directory holding the pages (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Skip the cross-check of sidebar links against the content directory.
    #[arg(long)]
    skip_links: bool,

    /// Treat warnings as failures.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, violates an
    /// invariant, or the check reports errors (warnings too with `--strict`).
    pub(crate) fn execute(self, config_args: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = config_args.load(self.source_dir)?;

        describe_source(&output, &config);

        let diagnostics = collect_diagnostics(&config, self.skip_links, &output);
        for diagnostic in &diagnostics {
            output.diagnostic(diagnostic);
        }

        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics.len() - errors;

        if errors > 0 || (self.strict && warnings > 0) {
            return Err(CliError::Check { errors, warnings });
        }

        if warnings > 0 {
            output.warning(&format!("Configuration OK with {warnings} warning(s)"));
        } else {
            output.success("Configuration OK");
        }
        Ok(())
    }
}

fn describe_source(output: &Output, config: &Config) {
    match (&config.config_path, config.preset) {
        (Some(path), Some(preset)) => output.info(&format!(
            "Config: {} (preset {preset})",
            path.display()
        )),
        (Some(path), None) => output.info(&format!("Config: {}", path.display())),
        (None, Some(preset)) => output.info(&format!("Config: preset {preset}")),
        (None, None) => {}
    }
    output.info(&format!("Site: {}", config.site.site.title));
}

/// Lint the data and, unless skipped, check links against the content directory.
fn collect_diagnostics(config: &Config, skip_links: bool, output: &Output) -> Vec<Diagnostic> {
    let mut diagnostics = config.site.lint();
    if skip_links {
        return diagnostics;
    }

    let source_dir = &config.content.source_dir;
    if !source_dir.is_dir() {
        diagnostics.push(Diagnostic::warning(format!(
            "content directory {} not found, sidebar links not checked",
            source_dir.display()
        )));
        return diagnostics;
    }

    let index = ContentIndex::scan(source_dir);
    output.info(&format!(
        "Content: {} ({} pages)",
        source_dir.display(),
        index.len()
    ));
    diagnostics.extend(index.check_sidebar(&config.site));
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunsite_config::{Preset, Severity};
    use std::path::Path;

    fn bun_js_config(base: &Path) -> Config {
        Config::from_preset(Preset::BunJs, base)
    }

    #[test]
    fn test_skip_links_only_lints() {
        let config = bun_js_config(Path::new("/nonexistent"));
        let diagnostics = collect_diagnostics(&config, true, &Output::new());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_content_dir_is_warning() {
        let config = bun_js_config(Path::new("/nonexistent"));
        let diagnostics = collect_diagnostics(&config, false, &Output::new());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("not found"));
    }

    #[test]
    fn test_missing_pages_are_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pages = temp_dir.path().join("src/pages/en");
        std::fs::create_dir_all(&pages).unwrap();
        std::fs::write(pages.join("introduction.md"), "# Introduction").unwrap();

        let config = bun_js_config(temp_dir.path());
        let diagnostics = collect_diagnostics(&config, false, &Output::new());

        assert!(diagnostics.iter().all(Diagnostic::is_error));
        assert!(
            diagnostics
                .iter()
                .any(|d| d.message.contains("'en/installing'"))
        );
        assert!(
            !diagnostics
                .iter()
                .any(|d| d.message.contains("'en/introduction'"))
        );
    }
}
