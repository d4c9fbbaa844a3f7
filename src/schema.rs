//! Static description of a settings type.
//!
//! Rust has no runtime field reflection, so each type describes itself once,
//! at compile time:
//!
//! - each section type implements [`SettingsSection`], listing its leaf
//!   fields in declaration order together with their metadata strings;
//! - a root type implements [`Settings`], listing its sections in
//!   declaration order, each with its optional lifecycle hooks.
//!
//! Hooks are functions of the root type. They receive the whole root object,
//! so a hook can read or adjust sibling sections as well as its own.
//!
//! The [`section!`](crate::section) and [`settings!`](crate::settings)
//! macros generate both impls from a member list. Members left out of the
//! list are invisible to the engine.

use crate::error::{HookError, ParseError};
use crate::page::{Notifier, Section};
use crate::types::FormData;
use crate::value::FormValue;
use crate::{update, walk};

/// Signature of a lifecycle hook registered on a root type `R`.
pub type HookFn<R> = fn(&mut R, &mut dyn Notifier) -> Result<(), HookError>;

/// One registered leaf field of a section type `S`.
pub struct FieldDef<S> {
    /// Member name; the default form name and label.
    pub member: &'static str,
    /// Declarative metadata string, see [`tag`](crate::tag).
    pub tag: Option<&'static str>,
    /// Displayed but never written by an update.
    pub readonly: bool,
    pub get: fn(&S) -> &dyn FormValue,
    pub get_mut: fn(&mut S) -> &mut dyn FormValue,
}

/// A composite type rendered as one form.
pub trait SettingsSection: Sized + 'static {
    const FIELDS: &'static [FieldDef<Self>];
}

/// One registered section of a root type `R`.
pub struct SectionDef<R> {
    /// Member name; doubles as the section title and action.
    pub name: &'static str,
    pub get: fn(&R) -> &dyn DynSection,
    pub get_mut: fn(&mut R) -> &mut dyn DynSection,
    /// Runs once when the engine is constructed.
    pub initialize: Option<HookFn<R>>,
    /// Runs after every successful field update of the section.
    pub updated: Option<HookFn<R>>,
}

/// A root configuration type made of sections.
pub trait Settings: Sized + 'static {
    /// Default page title.
    const TITLE: &'static str;
    const SECTIONS: &'static [SectionDef<Self>];

    /// Look up a registered section by name.
    fn section(name: &str) -> Option<&'static SectionDef<Self>> {
        Self::SECTIONS.iter().find(|def| def.name == name)
    }
}

/// Object-safe view of a [`SettingsSection`], so one root can hold
/// sections of different types.
pub trait DynSection {
    fn describe(&self, name: &str) -> Section;
    fn apply(&mut self, data: &dyn FormData) -> Result<(), ParseError>;
}

impl<S: SettingsSection> DynSection for S {
    fn describe(&self, name: &str) -> Section {
        walk::build_section(name, self)
    }

    fn apply(&mut self, data: &dyn FormData) -> Result<(), ParseError> {
        update::apply_section(self, data)
    }
}

/// Implement [`SettingsSection`] for a struct.
///
/// Fields are listed in declaration order, each optionally followed by
/// `(readonly)` and `=> "metadata"`.
///
/// ```ignore
/// webcfg::section! {
///     DatabaseConfig {
///         host => "host,Host Name,text,server",
///         port => "port,Port Number,number,hashtag",
///         version (readonly),
///         password => "password,Password,password,key",
///     }
/// }
/// ```
#[macro_export]
macro_rules! section {
    (@tag) => { ::core::option::Option::None };
    (@tag $tag:literal) => { ::core::option::Option::Some($tag) };
    (@readonly) => { false };
    (@readonly readonly) => { true };
    (
        $ty:ty {
            $( $member:ident $( ( $flag:ident ) )? $( => $tag:literal )? ),* $(,)?
        }
    ) => {
        impl $crate::SettingsSection for $ty {
            const FIELDS: &'static [$crate::FieldDef<Self>] = &[
                $(
                    $crate::FieldDef {
                        member: ::core::stringify!($member),
                        tag: $crate::section!(@tag $($tag)?),
                        readonly: $crate::section!(@readonly $($flag)?),
                        get: {
                            fn get(s: &$ty) -> &dyn $crate::FormValue {
                                &s.$member
                            }
                            get
                        },
                        get_mut: {
                            fn get_mut(s: &mut $ty) -> &mut dyn $crate::FormValue {
                                &mut s.$member
                            }
                            get_mut
                        },
                    },
                )*
            ];
        }
    };
}

/// Implement [`Settings`] for a root struct whose listed members are
/// sections.
///
/// A section may be followed by its hooks in parentheses. Hooks are
/// functions of the root type, so they see every section.
///
/// ```ignore
/// impl AppConfig {
///     fn database_updated(&mut self, n: &mut dyn Notifier) -> Result<(), HookError> {
///         /* reconnect with self.database, honoring self.features */
///     }
/// }
///
/// webcfg::settings! {
///     AppConfig {
///         database (updated = AppConfig::database_updated),
///         features,
///         advanced (initialize = AppConfig::advanced_initialize),
///     }
/// }
/// ```
#[macro_export]
macro_rules! settings {
    (@hook $want:ident) => { ::core::option::Option::None };
    (@hook initialize initialize = $hook:path $(, $($rest:tt)*)?) => {
        ::core::option::Option::Some($hook)
    };
    (@hook updated updated = $hook:path $(, $($rest:tt)*)?) => {
        ::core::option::Option::Some($hook)
    };
    (@hook $want:ident initialize = $hook:path $(, $($rest:tt)*)?) => {
        $crate::settings!(@hook $want $($($rest)*)?)
    };
    (@hook $want:ident updated = $hook:path $(, $($rest:tt)*)?) => {
        $crate::settings!(@hook $want $($($rest)*)?)
    };
    (
        $ty:ty {
            $( $member:ident $( ( $( $kind:ident = $hook:path ),+ $(,)? ) )? ),* $(,)?
        }
    ) => {
        impl $crate::Settings for $ty {
            const TITLE: &'static str = ::core::stringify!($ty);
            const SECTIONS: &'static [$crate::SectionDef<Self>] = &[
                $(
                    $crate::SectionDef {
                        name: ::core::stringify!($member),
                        get: {
                            fn get(r: &$ty) -> &dyn $crate::DynSection {
                                &r.$member
                            }
                            get
                        },
                        get_mut: {
                            fn get_mut(r: &mut $ty) -> &mut dyn $crate::DynSection {
                                &mut r.$member
                            }
                            get_mut
                        },
                        initialize: $crate::settings!(
                            @hook initialize $( $( $kind = $hook ),+ )?
                        ),
                        updated: $crate::settings!(
                            @hook updated $( $( $kind = $hook ),+ )?
                        ),
                    },
                )*
            ];
        }
    };
}
