//! Section lifecycle hooks.
//!
//! Hooks are registered per section on the root type and receive the whole
//! root object mutably plus the notifier.

use crate::error::WebcfgError;
use crate::page::Notifier;
use crate::schema::{SectionDef, Settings};

/// Run every section's `initialize` hook in declaration order.
///
/// Stops at the first failure. Hooks that ran before it keep their effects.
pub fn run_initializers<R: Settings>(
    root: &mut R,
    notifier: &mut dyn Notifier,
) -> Result<(), WebcfgError> {
    for def in R::SECTIONS {
        if let Some(hook) = def.initialize {
            hook(root, notifier).map_err(|source| WebcfgError::Initialize {
                section: def.name.to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Run the `updated` hook of the section described by `def`, if it has one.
pub fn run_update_hook<R: Settings>(
    root: &mut R,
    def: &SectionDef<R>,
    notifier: &mut dyn Notifier,
) -> Result<(), WebcfgError> {
    match def.updated {
        Some(hook) => hook(root, notifier).map_err(|source| WebcfgError::Hook {
            section: def.name.to_string(),
            source,
        }),
        None => Ok(()),
    }
}
