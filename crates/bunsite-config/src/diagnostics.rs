//! Findings about the configuration data.
//!
//! Invariant violations are returned as [`ConfigError::Validation`](crate::ConfigError)
//! by `validate`; softer schema drift (dead entries, unlabeled headers, dangling
//! links) is collected as [`Diagnostic`]s so a consumer can decide how strict
//! to be.

use std::fmt;

/// Severity of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A single finding, optionally pinned to a sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Sidebar locale the finding belongs to.
    pub locale: Option<String>,
    /// Entry index within the locale's sidebar.
    pub index: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            locale: None,
            index: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(message)
        }
    }

    /// Attach a sidebar position.
    #[must_use]
    pub fn at(mut self, locale: &str, index: usize) -> Self {
        self.locale = Some(locale.to_owned());
        self.index = Some(index);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity)?;
        match (&self.locale, self.index) {
            (Some(locale), Some(index)) => write!(f, "sidebar.{locale}[{index}]: ")?,
            (Some(locale), None) => write!(f, "sidebar.{locale}: ")?,
            _ => {}
        }
        f.write_str(&self.message)
    }
}
