//! Conversion between field values and their form text.
//!
//! Every leaf type implements [`FormValue`], which exposes the value as a
//! closed set of kinds: a read-only [`View`] for rendering and a mutable
//! [`Slot`] for decoding. The built-in kinds are booleans, signed and
//! unsigned integers of every width, floats and strings. A type with its own
//! text format implements [`TextCodec`] and reports the `Custom` kind, which
//! replaces the built-in rules in both directions. Anything else reports
//! `Other`: it is displayed on a best-effort basis and ignored on update.

use std::error::Error as StdError;
use std::fmt;

use crate::error::ParseError;

/// Error returned by a [`TextCodec`].
pub type CodecError = Box<dyn StdError + Send + Sync>;

pub const INVALID_INTEGER: &str = "invalid integer";
pub const INVALID_NUMBER: &str = "invalid number";
pub const FAILED_TO_UNMARSHAL: &str = "failed to unmarshal";

/// A value with its own textual form.
pub trait TextCodec {
    fn encode_text(&self) -> Result<String, CodecError>;
    fn decode_text(&mut self, text: &str) -> Result<(), CodecError>;
}

/// A leaf field value that can be rendered into and decoded from a form.
pub trait FormValue {
    fn view(&self) -> View<'_>;
    fn slot(&mut self) -> Slot<'_>;
}

/// Read-only view of a leaf value, tagged by kind.
pub enum View<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// Kept at its own width so it prints as the shortest `f32` decimal.
    F32(f32),
    F64(f64),
    Text(&'a str),
    Custom(&'a dyn TextCodec),
    Other(String),
}

impl View<'_> {
    pub fn is_bool(&self) -> bool {
        matches!(self, View::Bool(_))
    }
}

/// Mutable access to a leaf value, tagged by kind.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Float(FloatSlot<'a>),
    Text(&'a mut String),
    Custom(&'a mut dyn TextCodec),
    Other,
}

pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

pub enum UintSlot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

pub enum FloatSlot<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl IntSlot<'_> {
    /// Parse `text` at this slot's width and store it.
    fn set(self, text: &str) -> Result<(), std::num::ParseIntError> {
        match self {
            IntSlot::I8(v) => *v = text.parse()?,
            IntSlot::I16(v) => *v = text.parse()?,
            IntSlot::I32(v) => *v = text.parse()?,
            IntSlot::I64(v) => *v = text.parse()?,
            IntSlot::Isize(v) => *v = text.parse()?,
        }
        Ok(())
    }
}

impl UintSlot<'_> {
    fn set(self, text: &str) -> Result<(), std::num::ParseIntError> {
        match self {
            UintSlot::U8(v) => *v = text.parse()?,
            UintSlot::U16(v) => *v = text.parse()?,
            UintSlot::U32(v) => *v = text.parse()?,
            UintSlot::U64(v) => *v = text.parse()?,
            UintSlot::Usize(v) => *v = text.parse()?,
        }
        Ok(())
    }
}

impl FloatSlot<'_> {
    fn set(self, text: &str) -> Result<(), std::num::ParseFloatError> {
        match self {
            FloatSlot::F32(v) => *v = text.parse()?,
            FloatSlot::F64(v) => *v = text.parse()?,
        }
        Ok(())
    }
}

/// Render a value as form text.
///
/// A failing custom codec renders as an empty string so one broken field
/// does not take down the whole page.
pub fn encode(value: &dyn FormValue) -> String {
    match value.view() {
        View::Bool(b) => b.to_string(),
        View::Int(i) => i.to_string(),
        View::Uint(u) => u.to_string(),
        View::F32(f) => f.to_string(),
        View::F64(f) => f.to_string(),
        View::Text(s) => s.to_string(),
        View::Custom(codec) => codec.encode_text().unwrap_or_default(),
        View::Other(s) => s,
    }
}

/// Decode submitted `text` into `value`. `field` names the field in errors.
pub fn decode(value: &mut dyn FormValue, field: &str, text: &str) -> Result<(), ParseError> {
    match value.slot() {
        // Checkboxes submit "on" when ticked and nothing otherwise.
        Slot::Bool(b) => *b = text == "on" || text == "true",
        Slot::Custom(codec) => codec
            .decode_text(text)
            .map_err(|e| ParseError::new(FAILED_TO_UNMARSHAL, field, e))?,
        Slot::Int(slot) => slot
            .set(zero_if_empty(text))
            .map_err(|e| ParseError::new(INVALID_INTEGER, field, e))?,
        Slot::Uint(slot) => slot
            .set(zero_if_empty(text))
            .map_err(|e| ParseError::new(INVALID_INTEGER, field, e))?,
        Slot::Float(slot) => slot
            .set(zero_if_empty(text))
            .map_err(|e| ParseError::new(INVALID_NUMBER, field, e))?,
        Slot::Text(s) => text.clone_into(s),
        Slot::Other => {}
    }
    Ok(())
}

fn zero_if_empty(text: &str) -> &str {
    if text.is_empty() { "0" } else { text }
}

impl FormValue for bool {
    fn view(&self) -> View<'_> {
        View::Bool(*self)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl FormValue for String {
    fn view(&self) -> View<'_> {
        View::Text(self)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

macro_rules! impl_numeric {
    ($($ty:ty => $view:ident($wide:ty), $kind:ident($slot:ident::$variant:ident);)*) => {
        $(
            impl FormValue for $ty {
                fn view(&self) -> View<'_> {
                    View::$view(*self as $wide)
                }

                fn slot(&mut self) -> Slot<'_> {
                    Slot::$kind($slot::$variant(self))
                }
            }
        )*
    };
}

impl_numeric! {
    i8 => Int(i64), Int(IntSlot::I8);
    i16 => Int(i64), Int(IntSlot::I16);
    i32 => Int(i64), Int(IntSlot::I32);
    i64 => Int(i64), Int(IntSlot::I64);
    isize => Int(i64), Int(IntSlot::Isize);
    u8 => Uint(u64), Uint(UintSlot::U8);
    u16 => Uint(u64), Uint(UintSlot::U16);
    u32 => Uint(u64), Uint(UintSlot::U32);
    u64 => Uint(u64), Uint(UintSlot::U64);
    usize => Uint(u64), Uint(UintSlot::Usize);
    f32 => F32(f32), Float(FloatSlot::F32);
    f64 => F64(f64), Float(FloatSlot::F64);
}

/// Lists are shown as text and left alone on update.
impl<T: fmt::Debug> FormValue for Vec<T> {
    fn view(&self) -> View<'_> {
        View::Other(format!("{self:?}"))
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other
    }
}

/// Implement [`FormValue`] for a type through its [`TextCodec`].
///
/// ```ignore
/// impl TextCodec for Interval { /* ... */ }
/// webcfg::custom_codec!(Interval);
/// ```
#[macro_export]
macro_rules! custom_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FormValue for $ty {
                fn view(&self) -> $crate::View<'_> {
                    $crate::View::Custom(self)
                }

                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Custom(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{CustomValue, UnmarshalError};

    #[test]
    fn encode_builtin_kinds() {
        assert_eq!(encode(&42i32), "42");
        assert_eq!(encode(&-7i8), "-7");
        assert_eq!(encode(&3u64), "3");
        assert_eq!(encode(&0.95f64), "0.95");
        assert_eq!(encode(&1.5f32), "1.5");
    }

    #[test]
    fn encode_floats_at_their_own_width() {
        assert_eq!(encode(&0.1f32), "0.1");
        assert_eq!(encode(&0.95f32), "0.95");
        assert_eq!(encode(&-2.7f32), "-2.7");
        assert_eq!(encode(&0.1f64), "0.1");
        assert_eq!(encode(&0f32), "0");
    }

    #[test]
    fn decoded_f32_displays_as_submitted() {
        let mut f = 0f32;
        decode(&mut f, "ratio", "0.3").unwrap();
        assert_eq!(encode(&f), "0.3");
    }

    #[test]
    fn encode_text_kinds() {
        assert_eq!(encode(&"localhost".to_string()), "localhost");
        assert_eq!(encode(&true), "true");
        assert_eq!(encode(&false), "false");
    }

    #[test]
    fn encode_other_kind_is_best_effort() {
        assert_eq!(encode(&vec!["a", "b"]), r#"["a", "b"]"#);
    }

    #[test]
    fn encode_custom_codec() {
        let v = CustomValue::new("custom val");
        assert_eq!(encode(&v), "custom val");
    }

    #[test]
    fn encode_custom_failure_is_empty() {
        let v = CustomValue::new("marshal_error");
        assert_eq!(encode(&v), "");
    }

    #[test]
    fn decode_bool_on_and_true() {
        let mut b = false;
        decode(&mut b, "f", "on").unwrap();
        assert!(b);
        b = false;
        decode(&mut b, "f", "true").unwrap();
        assert!(b);
    }

    #[test]
    fn decode_bool_anything_else_is_false() {
        for text in ["", "off", "false", "1", "ON", "yes"] {
            let mut b = true;
            decode(&mut b, "f", text).unwrap();
            assert!(!b, "{text:?} should decode to false");
        }
    }

    #[test]
    fn decode_integers_of_every_width() {
        let mut a = 0i8;
        let mut b = 0i16;
        let mut c = 0i32;
        let mut d = 0i64;
        let mut e = 0isize;
        decode(&mut a, "a", "12").unwrap();
        decode(&mut b, "b", "-12").unwrap();
        decode(&mut c, "c", "12").unwrap();
        decode(&mut d, "d", "12").unwrap();
        decode(&mut e, "e", "12").unwrap();
        assert_eq!((a, b, c, d, e), (12, -12, 12, 12, 12));

        let mut f = 0u8;
        let mut g = 0u16;
        let mut h = 0u32;
        let mut i = 0u64;
        let mut j = 0usize;
        decode(&mut f, "f", "12").unwrap();
        decode(&mut g, "g", "12").unwrap();
        decode(&mut h, "h", "12").unwrap();
        decode(&mut i, "i", "12").unwrap();
        decode(&mut j, "j", "12").unwrap();
        assert_eq!((f, g, h, i, j), (12, 12, 12, 12, 12));
    }

    #[test]
    fn decode_empty_numeric_is_zero() {
        let mut i = 5i32;
        let mut u = 5u16;
        let mut f = 5.0f64;
        decode(&mut i, "i", "").unwrap();
        decode(&mut u, "u", "").unwrap();
        decode(&mut f, "f", "").unwrap();
        assert_eq!(i, 0);
        assert_eq!(u, 0);
        assert_eq!(f, 0.0);
    }

    #[test]
    fn decode_invalid_integer() {
        let mut i = 5i32;
        let err = decode(&mut i, "IntField", "abc").unwrap_err();
        assert_eq!(err.message, INVALID_INTEGER);
        assert_eq!(err.field, "IntField");
        assert!(err.cause_is::<std::num::ParseIntError>());
        assert_eq!(i, 5);
    }

    #[test]
    fn decode_negative_into_unsigned_fails() {
        let mut u = 3u32;
        let err = decode(&mut u, "Retries", "-1").unwrap_err();
        assert_eq!(err.message, INVALID_INTEGER);
        assert!(err.cause_is::<std::num::ParseIntError>());
        assert_eq!(u, 3);
    }

    #[test]
    fn decode_out_of_range_for_width_fails() {
        let mut i = 1i8;
        let err = decode(&mut i, "small", "300").unwrap_err();
        assert_eq!(err.message, INVALID_INTEGER);
        assert_eq!(i, 1);
    }

    #[test]
    fn float_failure_is_tagged_invalid_number_not_invalid_integer() {
        let mut f = 0.5f64;
        let err = decode(&mut f, "threshold", "abc").unwrap_err();
        assert_eq!(err.message, INVALID_NUMBER);
        assert_ne!(err.message, INVALID_INTEGER);
        assert!(err.cause_is::<std::num::ParseFloatError>());
        assert_eq!(f, 0.5);
    }

    #[test]
    fn decode_float32() {
        let mut f = 0f32;
        decode(&mut f, "f", "12.5").unwrap();
        assert_eq!(f, 12.5);
    }

    #[test]
    fn decode_string_verbatim() {
        let mut s = String::from("old");
        decode(&mut s, "s", "  new value ").unwrap();
        assert_eq!(s, "  new value ");
    }

    #[test]
    fn decode_other_kind_is_ignored() {
        let mut v = vec![1, 2];
        decode(&mut v, "list", "garbage").unwrap();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn decode_custom_codec() {
        let mut v = CustomValue::new("");
        decode(&mut v, "custom_field", "custom val").unwrap();
        assert_eq!(v.value, "custom val");
    }

    #[test]
    fn decode_custom_failure_wraps_domain_error() {
        let mut v = CustomValue::new("before");
        let err = decode(&mut v, "custom_field", "error").unwrap_err();
        assert_eq!(err.message, FAILED_TO_UNMARSHAL);
        assert_eq!(err.field, "custom_field");
        assert!(err.cause_is::<UnmarshalError>());
        assert!(!err.cause_is::<std::num::ParseIntError>());
        assert_eq!(v.value, "before");
    }

    #[test]
    fn custom_codec_round_trips() {
        for text in ["", "a", "custom val", "with,comma"] {
            let original = CustomValue::new(text);
            let mut decoded = CustomValue::new("seed");
            decode(&mut decoded, "f", &encode(&original)).unwrap();
            assert_eq!(decoded, original);
        }
    }
}
