//! Error types returned by the engine.
//!
//! [`WebcfgError`] is the single error type of every fallible operation.
//! Field decode failures carry a [`ParseError`] that keeps the underlying
//! cause, so callers can tell a custom codec's domain error apart from a
//! plain integer parse failure.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Error produced by a lifecycle hook. Opaque to the engine.
pub type HookError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum WebcfgError {
    #[error("section {0} not found")]
    SectionNotFound(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{source}")]
    Initialize { section: String, source: HookError },

    #[error("{source}")]
    Hook { section: String, source: HookError },

    #[error("Failed to load options: {0}")]
    Options(#[from] confique::Error),

    #[error("Failed to parse options: {0}")]
    OptionsToml(#[from] toml::de::Error),
}

impl WebcfgError {
    /// The field decode failure behind this error, if it is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            WebcfgError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// A single field failed to decode from its submitted text.
#[derive(Debug)]
pub struct ParseError {
    /// Short tag describing the failure, e.g. `"invalid integer"`.
    pub message: &'static str,
    /// Resolved form name of the field.
    pub field: String,
    source: Box<dyn StdError + Send + Sync>,
}

impl ParseError {
    pub fn new(
        message: &'static str,
        field: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message,
            field: field.into(),
            source: source.into(),
        }
    }

    /// Walk the cause chain and return the first error of type `E`.
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        let mut current: Option<&(dyn StdError + 'static)> = Some(&*self.source);
        while let Some(err) = current {
            if let Some(found) = err.downcast_ref::<E>() {
                return Some(found);
            }
            current = err.source();
        }
        None
    }

    /// Whether an error of type `E` appears in the cause chain.
    pub fn cause_is<E: StdError + 'static>(&self) -> bool {
        self.cause::<E>().is_some()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field {}: {}", self.message, self.field, self.source)
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source)
    }
}
