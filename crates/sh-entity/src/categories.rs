//! Category tags used for sensing and target matching.

use std::collections::BTreeMap;
use std::fmt;

/// The value half of a category pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Flag(bool),
    Text(String),
}

impl From<bool> for Tag {
    fn from(b: bool) -> Self {
        Tag::Flag(b)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::Text(s.to_owned())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::Text(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Flag(b) => write!(f, "{b}"),
            Tag::Text(s) => f.write_str(s),
        }
    }
}

/// A fixed set of string-keyed tags, e.g. `organic = true`,
/// `exterior = "fleshy"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Categories(BTreeMap<String, Tag>);

impl Categories {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Tag>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of key/value pairs present in both `self` and `wanted`.
    pub fn matching(&self, wanted: &Categories) -> usize {
        self.0
            .iter()
            .filter(|(key, value)| wanted.0.get(*key) == Some(*value))
            .count()
    }
}

impl<K: Into<String>, V: Into<Tag>> FromIterator<(K, V)> for Categories {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Target categories per task, e.g. `"hunt" → {organic: true, exterior: fleshy}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracking(BTreeMap<String, Categories>);

impl Tracking {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, task: impl Into<String>, targets: Categories) -> Self {
        self.0.insert(task.into(), targets);
        self
    }

    pub fn task(&self, task: &str) -> Option<&Categories> {
        self.0.get(task)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Categories)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
