use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::WebcfgError;
use crate::lifecycle;
use crate::options::{Options, Theme};
use crate::page::{Notification, Notifier, Page, Section};
use crate::schema::Settings;
use crate::types::{FormData, Submission};
use crate::update;
use crate::walk;

/// Message queued after a successful [`WebCfg::submit`].
pub const UPDATE_SUCCEEDED: &str = "Section updated successfully";

/// Engine handle: owns the settings object, the page options and the
/// notification queue.
///
/// Every mutating method takes `&mut self`, so there is at most one writer at
/// a time. To serve the handle from several threads, put it behind a
/// `Mutex` or `RwLock`; a render then never observes a half-applied update.
pub struct WebCfg<R: Settings> {
    root: R,
    options: Options,
    notifications: Vec<Notification>,
}

impl<R: Settings> WebCfg<R> {
    /// Take ownership of `root` and run its initializers, with default options.
    pub fn new(root: R) -> Result<Self, WebcfgError> {
        Self::builder(root).build()
    }

    pub fn builder(root: R) -> WebCfgBuilder<R> {
        WebCfgBuilder::new(root)
    }

    pub fn config(&self) -> &R {
        &self.root
    }

    /// Mutable access for out-of-band changes. The next render shows them.
    pub fn config_mut(&mut self) -> &mut R {
        &mut self.root
    }

    pub fn into_inner(self) -> R {
        self.root
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current display schema, without touching the notification queue.
    pub fn sections(&self) -> Vec<Section> {
        walk::build_sections(&self.root)
    }

    /// Build the page and hand it the queued notifications.
    pub fn render(&mut self) -> Page {
        let notifications = std::mem::take(&mut self.notifications);
        debug!(notifications = notifications.len(), "Rendering page");
        walk::build_page(&self.root, &self.options, notifications)
    }

    /// Apply one submission to `section`.
    ///
    /// Hooks may queue notifications. On error the section can be partially
    /// updated, see [`update`](crate::update).
    pub fn apply(&mut self, section: &str, data: &dyn FormData) -> Result<(), WebcfgError> {
        update::apply_update(&mut self.root, section, data, &mut self.notifications)
    }

    /// Like [`apply`](Self::apply), and also queue the outcome for the next
    /// render.
    pub fn submit(&mut self, section: &str, data: &dyn FormData) -> Result<(), WebcfgError> {
        let result = self.apply(section, data);
        match &result {
            Ok(()) => {
                debug!(section, "Section updated");
                self.notifications.push(Notification::success(UPDATE_SUCCEEDED));
            }
            Err(e) => {
                warn!(section, error = %e, "Section update failed");
                self.notifications
                    .push(Notification::danger(format!("Update failed: {e}")));
            }
        }
        result
    }

    /// [`submit`](Self::submit) a bundled [`Submission`].
    pub fn submit_all(&mut self, submission: &Submission) -> Result<(), WebcfgError> {
        self.submit(&submission.section, &submission.values)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

impl<R: Settings> Notifier for WebCfg<R> {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Builder for [`WebCfg`].
///
/// Start from [`Options`] (loaded from a file or built by hand) and adjust
/// single values on top.
pub struct WebCfgBuilder<R: Settings> {
    root: R,
    options: Options,
}

impl<R: Settings> WebCfgBuilder<R> {
    fn new(root: R) -> Self {
        Self {
            root,
            options: Options::default(),
        }
    }

    /// Replace all options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Directory holding a custom favicon and icon.
    pub fn assets(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.assets = Some(dir.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.options.title = Some(title.to_string());
        self
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.options.subtitle = Some(subtitle.to_string());
        self
    }

    /// Run the initializers and return the handle.
    ///
    /// Fails with the first initializer error. Notifications queued by
    /// initializers show on the first render.
    pub fn build(self) -> Result<WebCfg<R>, WebcfgError> {
        let mut root = self.root;
        let mut notifications = Vec::new();
        lifecycle::run_initializers(&mut root, &mut notifications)?;
        debug!(
            title = R::TITLE,
            sections = R::SECTIONS.len(),
            "Settings engine ready"
        );
        Ok(WebCfg {
            root,
            options: self.options,
            notifications,
        })
    }
}
