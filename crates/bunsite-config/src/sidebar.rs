//! Sidebar navigation model.
//!
//! Entries keep the `{ text, link?, header? }` shape on the wire, but in memory
//! each entry is one of four explicit roles (see [`SidebarEntry`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Link target of a sidebar entry: a page path with an optional fragment.
///
/// `"en/bun-js#types"` parses to path `"en/bun-js"` and fragment `"types"`.
/// The original text is kept verbatim and is what [`fmt::Display`] writes back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocLink {
    raw: String,
    /// Byte offset of the first `#`, if any.
    hash: Option<usize>,
}

impl DocLink {
    /// Parse a link string.
    ///
    /// Returns `None` for empty or whitespace-only input; such entries carry
    /// no destination.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_owned(),
            hash: raw.find('#'),
        })
    }

    /// Page path portion (before any `#`).
    #[must_use]
    pub fn path(&self) -> &str {
        match self.hash {
            Some(i) => &self.raw[..i],
            None => &self.raw,
        }
    }

    /// Anchor within the page, if any. A bare trailing `#` has none.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        let i = self.hash?;
        let fragment = &self.raw[i + 1..];
        (!fragment.is_empty()).then_some(fragment)
    }

    /// Link text exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DocLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One row of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSidebarEntry", into = "RawSidebarEntry")]
pub enum SidebarEntry {
    /// Section label without a destination.
    Header { text: String },
    /// Section label that is also a navigable page.
    LinkedHeader { text: String, link: DocLink },
    /// Navigable page.
    Link { text: String, link: DocLink },
    /// Leaf entry with no destination. Renders as a dead link.
    Unlinked { text: String },
}

impl SidebarEntry {
    /// Plain header.
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header { text: text.into() }
    }

    /// Header that also links to `link`.
    ///
    /// Falls back to a plain header if `link` is empty.
    pub fn linked_header(text: impl Into<String>, link: &str) -> Self {
        let text = text.into();
        match DocLink::parse(link) {
            Some(link) => Self::LinkedHeader { text, link },
            None => Self::Header { text },
        }
    }

    /// Navigable leaf.
    ///
    /// Produces [`SidebarEntry::Unlinked`] if `link` is empty.
    pub fn link(text: impl Into<String>, link: &str) -> Self {
        let text = text.into();
        match DocLink::parse(link) {
            Some(link) => Self::Link { text, link },
            None => Self::Unlinked { text },
        }
    }

    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Header { text }
            | Self::LinkedHeader { text, .. }
            | Self::Link { text, .. }
            | Self::Unlinked { text } => text,
        }
    }

    /// Link target, if the entry is navigable.
    #[must_use]
    pub fn target(&self) -> Option<&DocLink> {
        match self {
            Self::LinkedHeader { link, .. } | Self::Link { link, .. } => Some(link),
            Self::Header { .. } | Self::Unlinked { .. } => None,
        }
    }

    /// Whether the entry starts a section.
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. } | Self::LinkedHeader { .. })
    }
}

/// Wire shape of a sidebar entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawSidebarEntry {
    text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    header: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl From<RawSidebarEntry> for SidebarEntry {
    fn from(raw: RawSidebarEntry) -> Self {
        let link = raw.link.as_deref().and_then(DocLink::parse);
        match (raw.header, link) {
            (true, Some(link)) => Self::LinkedHeader {
                text: raw.text,
                link,
            },
            (true, None) => Self::Header { text: raw.text },
            (false, Some(link)) => Self::Link {
                text: raw.text,
                link,
            },
            (false, None) => Self::Unlinked { text: raw.text },
        }
    }
}

impl From<SidebarEntry> for RawSidebarEntry {
    fn from(entry: SidebarEntry) -> Self {
        let header = entry.is_header();
        let link = entry.target().map(ToString::to_string);
        let text = match entry {
            SidebarEntry::Header { text }
            | SidebarEntry::LinkedHeader { text, .. }
            | SidebarEntry::Link { text, .. }
            | SidebarEntry::Unlinked { text } => text,
        };
        Self { text, header, link }
    }
}

/// Ordered sidebar entries per locale code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(BTreeMap<String, Vec<SidebarEntry>>);

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entries for a locale, replacing any existing ones.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>, entries: Vec<SidebarEntry>) -> Self {
        self.0.insert(locale.into(), entries);
        self
    }

    /// Entries for `locale` in render order.
    #[must_use]
    pub fn entries(&self, locale: &str) -> Option<&[SidebarEntry]> {
        self.0.get(locale).map(Vec::as_slice)
    }

    /// Locale codes with a sidebar.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(locale, entries)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarEntry])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether no locale has a sidebar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Group the entries of `locale` into sections.
    ///
    /// Every header opens a new section. Entries before the first header land
    /// in a leading section without a header.
    #[must_use]
    pub fn sections(&self, locale: &str) -> Vec<SidebarSection<'_>> {
        let mut sections: Vec<SidebarSection<'_>> = Vec::new();
        for entry in self.entries(locale).unwrap_or_default() {
            if entry.is_header() {
                sections.push(SidebarSection {
                    header: Some(entry),
                    items: Vec::new(),
                });
                continue;
            }
            match sections.last_mut() {
                Some(section) => section.items.push(entry),
                None => sections.push(SidebarSection {
                    header: None,
                    items: vec![entry],
                }),
            }
        }
        sections
    }
}

/// A header and the entries rendered under it.
#[derive(Debug, PartialEq, Eq)]
pub struct SidebarSection<'a> {
    pub header: Option<&'a SidebarEntry>,
    pub items: Vec<&'a SidebarEntry>,
}
