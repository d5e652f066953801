use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message shown after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}
