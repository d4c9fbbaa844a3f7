//! Cosmetic options of the rendered page.
//!
//! Nothing here affects how values are read or written. Options are a
//! [confique](https://docs.rs/confique) struct, so they can come from a TOML
//! file, a TOML string or `WEBCFG_*` environment variables, and a commented
//! template can be generated from the doc comments below.

use std::path::{Path, PathBuf};

use confique::Config;

use crate::error::WebcfgError;

#[derive(Config, Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Page title. Defaults to the settings type name.
    #[config(env = "WEBCFG_TITLE")]
    pub title: Option<String>,

    /// Line shown under the title.
    #[config(env = "WEBCFG_SUBTITLE")]
    pub subtitle: Option<String>,

    /// Directory holding a custom favicon and icon.
    #[config(env = "WEBCFG_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Theme colors. Any color set switches the page to a custom stylesheet.
    #[config(nested)]
    pub theme: Theme,
}

/// Theme colors as CSS color strings.
#[derive(Config, Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub primary: Option<String>,
    pub link: Option<String>,
    pub info: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub danger: Option<String>,
    pub dark: Option<String>,
    pub text: Option<String>,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        [
            &self.primary,
            &self.link,
            &self.info,
            &self.success,
            &self.warning,
            &self.danger,
            &self.dark,
            &self.text,
        ]
        .iter()
        .all(|color| color.is_none())
    }
}

impl Options {
    /// Load options from the environment, then from `path` if given.
    ///
    /// Environment variables win over the file. A missing file is not an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, WebcfgError> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, WebcfgError> {
        let layer: <Self as Config>::Layer = toml::from_str(content)?;
        Ok(Self::builder().preloaded(layer).load()?)
    }

    /// A commented TOML template listing every option.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
