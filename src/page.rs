//! Display model handed to the renderer.
//!
//! Every type here is `Serialize`, so the page can be fed to any template
//! engine or shipped as JSON. Values are recomputed on every render and never
//! stored.

use serde::Serialize;

/// Status class of a successful update notification.
pub const SUCCESS: &str = "success";
/// Status class of a failed update notification.
pub const DANGER: &str = "danger";

/// One form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub icon: String,
    pub status: String,
    pub help: String,
    pub readonly: bool,
}

impl Field {
    /// Checkbox state: whether the current value renders as ticked.
    pub fn checked(&self) -> bool {
        self.value == "true"
    }
}

/// One form with one submit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub action: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub status: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, SUCCESS)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, DANGER)
    }
}

/// Sink for messages shown on the next render.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Everything a renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub notifications: Vec<Notification>,
    pub sections: Vec<Section>,
    /// Custom favicon and icon are available.
    pub has_assets: bool,
    /// A theme stylesheet should be linked.
    pub has_theme: bool,
}

impl Page {
    pub fn section(&self, action: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.action == action)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
