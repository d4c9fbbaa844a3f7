use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Submitted form values, looked up by field name.
///
/// An absent name is not an error: the update treats it as an empty
/// submission, which is how an unticked checkbox arrives.
pub trait FormData {
    fn value(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> FormData for HashMap<String, String, S> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FormData for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FormData for [(String, String)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl FormData for Vec<(String, String)> {
    fn value(&self, name: &str) -> Option<&str> {
        self.as_slice().value(name)
    }
}

impl FormData for [(&str, &str)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> FormData for [(&str, &str); N] {
    fn value(&self, name: &str) -> Option<&str> {
        self.as_slice().value(name)
    }
}

impl<T: FormData + ?Sized> FormData for &T {
    fn value(&self, name: &str) -> Option<&str> {
        (**self).value(name)
    }
}

/// Ordered name/value pairs as they arrive from a form body.
///
/// Repeated names are kept; lookups return the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.as_slice().value(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FormData for FormValues {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Vec<(String, String)>> for FormValues {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// One submit action: the target section and its form values.
/// Transport layers convert their request into this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub section: String,
    pub values: FormValues,
}

impl Submission {
    pub fn new(section: impl Into<String>, values: FormValues) -> Self {
        Self {
            section: section.into(),
            values,
        }
    }
}
