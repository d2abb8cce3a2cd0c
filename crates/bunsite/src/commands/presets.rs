//! `bunsite presets` command implementation.

use bunsite_config::Preset;

use crate::error::CliError;
use crate::output::Output;

/// List built-in presets with their title and sidebar size.
pub(crate) fn execute() -> Result<(), CliError> {
    let mut text = String::new();
    for preset in Preset::ALL {
        text.push_str(&describe(preset));
        text.push('\n');
    }
    Output::new().data(&text)?;
    Ok(())
}

fn describe(preset: Preset) -> String {
    let site = preset.site();
    let counts: Vec<String> = site
        .sidebar
        .iter()
        .map(|(locale, entries)| format!("{locale}: {} entries", entries.len()))
        .collect();
    format!(
        "{:<10} {:<10} {}",
        preset.name(),
        site.site.title,
        counts.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_bun_time() {
        assert_eq!(describe(Preset::BunTime), "bun-time   Bun Time   en: 17 entries");
    }

    #[test]
    fn test_describe_bun_js() {
        assert_eq!(describe(Preset::BunJs), "bun-js     Bun.js     en: 33 entries");
    }
}
