//! Build the display schema from a live settings object.
//!
//! The walk is shallow: root → sections → leaf fields. A leaf that is itself
//! a composite is rendered through its own text encoding, never recursed
//! into. Nothing is cached; every call reflects the current values.

use crate::options::Options;
use crate::page::{Field, Notification, Page, Section};
use crate::schema::{Settings, SettingsSection};
use crate::tag::FieldTag;
use crate::value;

/// Describe every registered section of `root`, in declaration order.
pub fn build_sections<R: Settings>(root: &R) -> Vec<Section> {
    R::SECTIONS
        .iter()
        .map(|def| (def.get)(root).describe(def.name))
        .collect()
}

/// Describe one section. Fields excluded with `-` are left out.
pub fn build_section<S: SettingsSection>(name: &str, section: &S) -> Section {
    let fields = S::FIELDS
        .iter()
        .filter_map(|def| {
            let current = (def.get)(section);
            let tag = FieldTag::parse(def.member, current.view().is_bool(), def.tag)?;
            Some(Field {
                name: tag.name,
                label: tag.label,
                value: value::encode(current),
                input_type: tag.input_type,
                icon: tag.icon,
                status: tag.status,
                help: tag.help,
                readonly: def.readonly,
            })
        })
        .collect();

    Section {
        title: name.to_string(),
        action: name.to_string(),
        fields,
    }
}

/// Assemble a full page for `root`.
pub fn build_page<R: Settings>(
    root: &R,
    options: &Options,
    notifications: Vec<Notification>,
) -> Page {
    Page {
        title: options.title.as_deref().unwrap_or(R::TITLE).to_string(),
        subtitle: options.subtitle.clone().unwrap_or_default(),
        notifications,
        sections: build_sections(root),
        has_assets: options.assets.is_some(),
        has_theme: !options.theme.is_empty(),
    }
}
