//! The static list of widget kinds a board can offer, plus the default seed.

use crate::kind::WidgetKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A widget kind offered in the picker, with the title new widgets receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: WidgetKind,
    pub title: String,
}

impl CatalogEntry {
    pub fn new(kind: impl Into<WidgetKind>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
        }
    }
}

/// Errors raised when building a [`Catalog`] from user-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The same kind appears more than once.
    #[error("duplicate catalog kind `{0}`")]
    DuplicateKind(WidgetKind),
    /// An entry has a blank title.
    #[error("catalog entry `{0}` has an empty title")]
    EmptyTitle(WidgetKind),
}

/// Ordered, read-only list of [`CatalogEntry`] values with unique kinds.
///
/// The catalog is fixed once a board is built; nothing mutates it at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate kinds and blank titles.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(entry.kind.clone()));
            }
            if !seen.insert(&entry.kind) {
                return Err(CatalogError::DuplicateKind(entry.kind.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Look up the entry for `kind`.
    pub fn get(&self, kind: &WidgetKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.kind == kind)
    }

    pub fn contains(&self, kind: &WidgetKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    /// The stock picker contents. Overlaps the seed only partially.
    fn default() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(WidgetKind::WIDGET_1, "Widget 1"),
                CatalogEntry::new(WidgetKind::WIDGET_2, "Widget 2"),
                CatalogEntry::new(WidgetKind::CLIENT_ACCOUNTS, "Client Accounts"),
                CatalogEntry::new(WidgetKind::RISK_ASSESSMENT, "Cloud Account Risk Assessment"),
            ],
        }
    }
}

/// The six widgets a fresh board starts with.
pub fn default_seed() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(WidgetKind::CLIENT_ACCOUNTS, "Client Accounts"),
        CatalogEntry::new(WidgetKind::RISK_ASSESSMENT, "Cloud Account Risk Assessment"),
        CatalogEntry::new(WidgetKind::SECURITY_SCORE, "Top 5 Resources Security Score"),
        CatalogEntry::new(WidgetKind::WORKLOAD_ALERTS, "Workload Alerts"),
        CatalogEntry::new(WidgetKind::REGISTRY_SCAN, "Registry Scan"),
        CatalogEntry::new(WidgetKind::SECURITY_ISSUES, "Image Security Issues"),
    ]
}
