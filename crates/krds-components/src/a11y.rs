// ABOUTME: Seam for an external HTML accessibility validator
// ABOUTME: Only the report shape is defined here; rules live with the implementor

use serde::{Deserialize, Serialize};

/// Opaque result of validating one HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub passed: bool,
    #[serde(default)]
    pub issues: Vec<String>,
}

impl AccessibilityReport {
    pub fn pass() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    pub fn fail<I, S>(issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            passed: false,
            issues: issues.into_iter().map(Into::into).collect(),
        }
    }
}

pub trait AccessibilityValidator: Send + Sync {
    fn validate(&self, html: &str) -> AccessibilityReport;
}

impl<F> AccessibilityValidator for F
where
    F: Fn(&str) -> AccessibilityReport + Send + Sync,
{
    fn validate(&self, html: &str) -> AccessibilityReport {
        self(html)
    }
}
