//! `${VAR}` expansion for configuration values.
//!
//! - `${VAR}` expands to the value of VAR and errors if it is unset
//! - `${VAR:-default}` falls back to `default`
//!
//! Bare `$VAR` is left untouched so URLs containing `$` survive.

use crate::ConfigError;

/// Expand `value` in place. `field` names the config key in error messages.
///
/// Only `${...}` spans are handed to `shellexpand`; text between them, bare
/// `$name` included, is copied as is. An unterminated `${` is kept literally.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value.as_str();
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let span = &rest[start..=start + len];
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_span(span, field)?);
        rest = &rest[start + len + 1..];
    }
    expanded.push_str(rest);

    *value = expanded;
    Ok(())
}

/// Expand a single `${VAR}` or `${VAR:-default}` span.
fn expand_span(span: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(span, |name| std::env::var(name).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: Option<&mut String>, field: &str) -> Result<(), ConfigError> {
    match value {
        Some(value) => expand_in_place(value, field),
        None => Ok(()),
    }
}
