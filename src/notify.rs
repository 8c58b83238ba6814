//! Toast-style notifications
//!
//! The presentation layer reports outcomes through a `Notifier`: a title,
//! a message and a severity. Nothing reads a result back from it.

use std::io::{self, IsTerminal, Write};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Error,
}

impl Severity {
    /// ANSI color code for this severity
    fn ansi_color(&self) -> &'static str {
        match self {
            Self::Normal => "\x1b[32m",
            Self::Error => "\x1b[31m",
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// "Success" notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message, Severity::Normal)
    }

    /// "Error" notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, Severity::Error)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Surface that shows notifications to the user
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Prints normal notifications to stdout and errors to stderr
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    color: bool,
}

impl TerminalNotifier {
    /// Colorize only when both output streams are terminals
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal() && io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Render a notification as a single line
    pub fn render(&self, notification: &Notification) -> String {
        if self.color {
            format!(
                "{}{}\x1b[0m: {}",
                notification.severity.ansi_color(),
                notification.title,
                notification.message
            )
        } else {
            format!("{}: {}", notification.title, notification.message)
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: &Notification) {
        let line = self.render(notification);
        // Output failures (closed pipe) have nowhere to be reported
        let _ = match notification.severity {
            Severity::Normal => writeln!(io::stdout(), "{}", line),
            Severity::Error => writeln!(io::stderr(), "{}", line),
        };
    }
}

/// Collects notifications in memory
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest notification still queued
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
