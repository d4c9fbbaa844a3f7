//! Apply one submission to one section.
//!
//! Updates are fail-fast and not transactional. Fields are decoded in
//! declaration order straight into the live object and the first failure
//! stops the loop: fields before it keep their new values, fields after it
//! are untouched. The section's `updated` hook runs only when every field
//! decoded. It receives the whole root object, and when it fails the field
//! mutations stay in place. Callers that need all-or-nothing semantics
//! snapshot and restore the object themselves.

use crate::error::{ParseError, WebcfgError};
use crate::lifecycle;
use crate::page::Notifier;
use crate::schema::{Settings, SettingsSection};
use crate::tag::FieldTag;
use crate::types::FormData;
use crate::value;

/// Apply `data` to the section of `root` called `section`.
///
/// An unknown section name fails with [`WebcfgError::SectionNotFound`]
/// before anything is touched.
pub fn apply_update<R: Settings>(
    root: &mut R,
    section: &str,
    data: &dyn FormData,
    notifier: &mut dyn Notifier,
) -> Result<(), WebcfgError> {
    let def = R::section(section).ok_or_else(|| WebcfgError::SectionNotFound(section.into()))?;
    (def.get_mut)(root).apply(data)?;
    lifecycle::run_update_hook(root, def, notifier)
}

/// Decode `data` into the fields of one section, stopping at the first
/// failure.
pub(crate) fn apply_section<S: SettingsSection>(
    section: &mut S,
    data: &dyn FormData,
) -> Result<(), ParseError> {
    for def in S::FIELDS {
        if def.readonly {
            continue;
        }
        let field = (def.get_mut)(section);
        let Some(tag) = FieldTag::parse(def.member, field.view().is_bool(), def.tag) else {
            continue;
        };
        let text = data.value(&tag.name).unwrap_or_default();
        value::decode(field, &tag.name, text)?;
    }
    Ok(())
}
