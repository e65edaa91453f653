//! Notification severity and its visual style.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

/// Font Awesome icon class and accent color for a severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl Severity {
    /// Parse a severity name. Unrecognized names fall back to [`Severity::Info`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => {
                log::debug!("unknown severity {other:?}; using info");
                Self::Info
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn style(self) -> SeverityStyle {
        match self {
            Self::Success => SeverityStyle { icon: "fa-check-circle", color: "#10b981" },
            Self::Error => SeverityStyle { icon: "fa-times-circle", color: "#ef4444" },
            Self::Warning => SeverityStyle { icon: "fa-exclamation-circle", color: "#f59e0b" },
            Self::Info => SeverityStyle { icon: "fa-info-circle", color: "#3b82f6" },
        }
    }
}
