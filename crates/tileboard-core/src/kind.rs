use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Tag identifying what content a widget renders.
///
/// The set of kinds is open: anything can be named in a config file, and the
/// renderer registry falls back to a placeholder for kinds it does not know.
/// The kinds shipped with the dashboard are available as associated constants.
///
/// # Example
///
/// ```
/// use tileboard_core::WidgetKind;
///
/// let kind = WidgetKind::new("clientAccounts");
/// assert_eq!(kind, WidgetKind::CLIENT_ACCOUNTS);
/// assert_eq!(kind.as_str(), "clientAccounts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetKind(Cow<'static, str>);

impl WidgetKind {
    pub const CLIENT_ACCOUNTS: WidgetKind = WidgetKind::from_static("clientAccounts");
    pub const RISK_ASSESSMENT: WidgetKind = WidgetKind::from_static("riskAssessment");
    pub const SECURITY_SCORE: WidgetKind = WidgetKind::from_static("securityScore");
    pub const WORKLOAD_ALERTS: WidgetKind = WidgetKind::from_static("workloadAlerts");
    pub const REGISTRY_SCAN: WidgetKind = WidgetKind::from_static("registryScan");
    pub const SECURITY_ISSUES: WidgetKind = WidgetKind::from_static("securityIssues");
    pub const WIDGET_1: WidgetKind = WidgetKind::from_static("widget1");
    pub const WIDGET_2: WidgetKind = WidgetKind::from_static("widget2");

    /// Create a kind from any string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create a kind from a static string in a `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for WidgetKind {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for WidgetKind {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
