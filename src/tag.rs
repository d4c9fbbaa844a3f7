//! Declarative field metadata.
//!
//! A field may carry one metadata string of comma-separated positions:
//!
//! ```text
//! name,label,type,icon,status,help
//! ```
//!
//! Any suffix may be omitted and empty positions keep their defaults. A name
//! of `-` removes the field from both rendering and update. Parsing never
//! fails: short or malformed strings degrade to defaults.

/// Name that excludes a field entirely.
pub const SKIP: &str = "-";

/// Display descriptor parsed from a field's metadata string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub icon: String,
    pub status: String,
    pub help: String,
}

impl FieldTag {
    /// Parse `metadata` for the member called `member`.
    ///
    /// `is_bool` selects the default input type (`checkbox` instead of
    /// `text`). Returns `None` when the field is excluded with `-`.
    pub fn parse(member: &str, is_bool: bool, metadata: Option<&str>) -> Option<Self> {
        let mut tag = Self {
            name: member.to_string(),
            label: member.to_string(),
            input_type: if is_bool { "checkbox" } else { "text" }.to_string(),
            icon: String::new(),
            status: String::new(),
            help: String::new(),
        };

        let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
            return Some(tag);
        };

        for (i, part) in metadata.split(',').enumerate() {
            if part.is_empty() {
                continue;
            }
            match i {
                0 => {
                    if part == SKIP {
                        return None;
                    }
                    tag.name = part.to_string();
                    tag.label = part.to_string();
                }
                1 => tag.label = part.to_string(),
                2 => tag.input_type = part.to_string(),
                3 => tag.icon = part.to_string(),
                4 => tag.status = part.to_string(),
                5 => tag.help = part.to_string(),
                _ => break,
            }
        }

        Some(tag)
    }
}
