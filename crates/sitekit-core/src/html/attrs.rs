//! HTML attribute serialization.
//!
//! Attributes render to a leading-space-separated `name="value"` list. Boolean
//! `true` renders the bare name (`defer`, not `defer="true"`); boolean `false`
//! drops the attribute entirely.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::Write;

/// A single attribute value: a string, or a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// An ordered set of HTML attributes.
///
/// Insertion order is preserved and used verbatim when serializing, so the
/// emitted markup is stable across runs. Deserializing from JSON keeps the
/// object's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, AttrValue)>,
}

/// One `<meta>` tag: the same ordered name/value representation as attributes.
pub type MetaEntry = AttributeSet;

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, keeping insertion order.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serialize to an attribute fragment, one leading space per attribute.
    ///
    /// Empty sets serialize to the empty string, so tags without attributes
    /// come out as `<script src="...">` with no trailing space.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Text(v) => {
                    let _ = write!(out, " {name}=\"{v}\"");
                }
            }
        }
        out
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = AttributeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to string or boolean values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, AttrValue>()? {
                    entries.push((name, value));
                }
                Ok(AttributeSet { entries })
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
