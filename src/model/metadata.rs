//! Open, order-preserving metadata attached to entities by the build passes.

use indexmap::IndexMap;

/// Entity metadata: string keys (see [`meta`](crate::base::constants::meta)) to values.
pub type Metadata = IndexMap<String, MetadataValue>;

/// A metadata value.
///
/// Moniker and package lists are common enough to get their own variant;
/// free-form overlay values use the general ones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(untagged))]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Strings(Vec<String>),
    List(Vec<MetadataValue>),
    Map(IndexMap<String, MetadataValue>),
}

impl MetadataValue {
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::Strings(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, MetadataValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(values: Vec<String>) -> Self {
        Self::Strings(values)
    }
}

impl From<IndexMap<String, Vec<String>>> for MetadataValue {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        Self::Map(
            map.into_iter()
                .map(|(k, v)| (k, MetadataValue::Strings(v)))
                .collect(),
        )
    }
}
