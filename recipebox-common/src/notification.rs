//! Modal notification surface
//!
//! Presentation only: the caller decides message and severity, the
//! severity decides the visual treatment. A notification stays visible
//! until the user dismisses it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    pub fn background_color(self) -> &'static str {
        match self {
            Severity::Success => "#4caf50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196f3",
            Severity::Warning => "#ff9800",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "checkmark-circle",
            Severity::Error => "close-circle",
            Severity::Info => "information-circle",
            Severity::Warning => "warning",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Severity::Success => "Continue",
            Severity::Error => "Try again",
            Severity::Info => "OK",
            Severity::Warning => "Be careful",
        }
    }
}

/// Notification state owned by a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    visible: bool,
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Explicit user dismissal; the only way a notification goes away
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Rendered form, with the severity treatment resolved
    pub fn view(&self) -> NotificationView<'_> {
        NotificationView {
            visible: self.visible,
            message: &self.message,
            severity: self.severity,
            background_color: self.severity.background_color(),
            icon: self.severity.icon(),
            button_label: self.severity.button_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationView<'a> {
    pub visible: bool,
    pub message: &'a str,
    pub severity: Severity,
    pub background_color: &'static str,
    pub icon: &'static str,
    pub button_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden_info() {
        let n = Notification::default();
        assert!(!n.is_visible());
        assert_eq!(n.severity(), Severity::Info);
    }

    #[test]
    fn test_severity_treatment() {
        assert_eq!(Severity::Success.button_label(), "Continue");
        assert_eq!(Severity::Error.button_label(), "Try again");
        assert_eq!(Severity::Warning.button_label(), "Be careful");
        assert_eq!(Severity::Info.button_label(), "OK");
        assert_ne!(Severity::Success.background_color(), Severity::Error.background_color());
    }

    #[test]
    fn test_dismiss_keeps_message() {
        let mut n = Notification::error("Failed");
        assert!(n.is_visible());
        n.dismiss();
        assert!(!n.is_visible());
        assert_eq!(n.message(), "Failed");
    }

    #[test]
    fn test_view_serializes_treatment() {
        let n = Notification::warning("Careful");
        let json = serde_json::to_value(n.view()).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["button_label"], "Be careful");
        assert_eq!(json["icon"], "warning");
        assert_eq!(json["visible"], true);
    }
}
