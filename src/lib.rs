//! Edit a live configuration object through a web form. Describe your
//! structs once, hand the object to the engine, and go.
//!
//! webcfg turns a nested settings object into a display schema (sections of
//! fields with their current values) and writes submitted form values back
//! into the same object. Behavior comes from a per-field metadata string and
//! a few optional hooks; there is no per-type form code.
//!
//! ```ignore
//! let mut engine = WebCfg::builder(AppConfig::default())
//!     .title("My Service")
//!     .build()?;
//!
//! let page = engine.render();                  // hand to your templates
//! engine.submit("database", &form_values)?;    // from your POST handler
//! ```
//!
//! HTTP routing, template rendering, asset serving and theme CSS are left to
//! the caller. The engine produces a serializable [`Page`] and consumes
//! anything that implements [`FormData`].
//!
//! # Design: registry instead of reflection
//!
//! Each settings type describes itself at compile time:
//!
//! - **[`section!`]** implements [`SettingsSection`] for a struct: the
//!   ordered list of its leaf fields, each with an optional metadata string
//!   and an optional `(readonly)` flag.
//! - **[`settings!`]** implements [`Settings`] for the root struct: the
//!   ordered list of its sections, each with optional `initialize` and
//!   `updated` hooks. Hooks are methods of the root and receive the whole
//!   object, so an update to one section can consult or adjust another.
//!
//! ```ignore
//! #[derive(Default)]
//! struct DatabaseConfig {
//!     host: String,
//!     port: u16,
//!     password: String,
//! }
//!
//! webcfg::section! {
//!     DatabaseConfig {
//!         host => "host,Host Name,text,server",
//!         port => "port,Port,number,hashtag",
//!         password => "password,Password,password,key",
//!     }
//! }
//!
//! #[derive(Default)]
//! struct AppConfig {
//!     database: DatabaseConfig,
//! }
//!
//! impl AppConfig {
//!     fn database_updated(&mut self, n: &mut dyn Notifier) -> Result<(), HookError> {
//!         n.notify(Notification::success(format!("Using {}", self.database.host)));
//!         Ok(())
//!     }
//! }
//!
//! webcfg::settings! {
//!     AppConfig { database (updated = AppConfig::database_updated) }
//! }
//! ```
//!
//! Members left out of a list do not exist as far as the engine is
//! concerned. Only two levels are interpreted: root → section → field. A
//! field whose value is itself a composite is a leaf rendered as text.
//! The registry is static; values are read fresh on every render, so the
//! page always shows the live object including out-of-band changes.
//!
//! # Field metadata
//!
//! ```text
//! name,label,type,icon,status,help
//! ```
//!
//! Comma-separated, any suffix may be omitted, empty positions keep their
//! defaults. The name defaults to the member name and becomes the form key;
//! the label defaults to the name; the type defaults to `checkbox` for
//! `bool` and `text` otherwise. A name of `-` excludes the field from both
//! rendering and update. See [`tag`].
//!
//! # Values
//!
//! Booleans, every integer and float width, and `String` work out of the
//! box. A checkbox submits `on` when ticked and nothing otherwise, so only
//! `on` or `true` decode to `true`. Empty numeric input decodes to zero.
//! Types with their own text format implement [`TextCodec`] and register
//! with [`custom_codec!`]; the codec then replaces the built-in rules in both
//! directions. Anything else is displayed on a best-effort basis and ignored
//! on update. See [`value`].
//!
//! # Updates are fail-fast
//!
//! Fields are decoded in declaration order directly into the live object.
//! The first failure stops the update: earlier fields keep their new values,
//! later fields are untouched, and the `updated` hook does not run. A failing
//! `updated` hook does not undo the field changes either. Treat every update
//! as possibly partially applied, and snapshot the object yourself if you
//! need all-or-nothing behavior.
//!
//! # Concurrency
//!
//! [`WebCfg`] owns the settings object and every mutation takes `&mut self`.
//! Wrap the handle in a `Mutex` or `RwLock` to share it between request
//! handlers.
//!
//! # Options
//!
//! Page title, subtitle, asset directory and theme colors live in
//! [`Options`], a [confique](https://docs.rs/confique) struct. Load them from
//! a TOML file with `WEBCFG_*` environment variables on top, or generate a
//! commented template with [`Options::template()`].
//!
//! # Optional features
//!
//! - **`urlencoded`** (default): [`form::parse_urlencoded`] decodes
//!   `application/x-www-form-urlencoded` bodies into [`FormValues`].
//! - **`clap`** (default): [`SubmitArgs`] accepts `SECTION NAME=VALUE...`
//!   from the command line.
//!
//! # Error handling
//!
//! All fallible operations return [`WebcfgError`]. A field decode failure is
//! a [`ParseError`] carrying the field name, a short message and the
//! underlying cause; [`ParseError::cause_is`] tells a custom codec's own
//! error apart from a plain integer parse failure.

pub mod error;
pub mod lifecycle;
pub mod options;
pub mod page;
pub mod schema;
pub mod tag;
pub mod types;
pub mod update;
pub mod value;
pub mod walk;

mod builder;
#[cfg(feature = "clap")]
mod cli;
#[cfg(feature = "urlencoded")]
pub mod form;

#[cfg(test)]
mod fixtures;

pub use builder::{UPDATE_SUCCEEDED, WebCfg, WebCfgBuilder};
#[cfg(feature = "clap")]
pub use cli::SubmitArgs;
pub use error::{HookError, ParseError, WebcfgError};
pub use options::{Options, Theme};
pub use page::{Field, Notification, Notifier, Page, Section};
pub use schema::{DynSection, FieldDef, HookFn, SectionDef, Settings, SettingsSection};
pub use tag::FieldTag;
pub use types::{FormData, FormValues, Submission};
pub use value::{CodecError, FloatSlot, FormValue, IntSlot, Slot, TextCodec, UintSlot, View};
