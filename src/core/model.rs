//! Unified Result Model
//!
//! Every command maps its findings to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A resolved user header in the dependency closure
    Header,
    /// A quote-delimited include target as written in a file
    Include,
    /// An angle-bracket include target as written in a file
    System,
    /// The newest modification time among a closure
    Timestamp,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Modification time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_ms: Option<i64>,
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Absolute path, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Text shown instead of the path in line output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Structured data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Metadata
    #[serde(default)]
    pub meta: Meta,
}

impl ResultItem {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            path: None,
            text: None,
            data: None,
            meta: Meta::default(),
        }
    }

    /// Create a resolved header result
    pub fn header(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(Kind::Header)
        }
    }

    /// Create a user include target result
    pub fn include(target: impl Into<String>) -> Self {
        Self {
            text: Some(target.into()),
            ..Self::new(Kind::Include)
        }
    }

    /// Create a system include target result
    pub fn system(target: impl Into<String>) -> Self {
        Self {
            text: Some(target.into()),
            ..Self::new(Kind::System)
        }
    }

    /// Create a timestamp result pointing at the newest file
    pub fn timestamp(path: impl Into<String>, rendered: impl Into<String>, mtime_ms: i64) -> Self {
        Self {
            path: Some(path.into()),
            text: Some(rendered.into()),
            meta: Meta {
                mtime_ms: Some(mtime_ms),
            },
            ..Self::new(Kind::Timestamp)
        }
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// What a line-oriented renderer prints for this item
    pub fn display_line(&self) -> Option<&str> {
        self.text.as_deref().or(self.path.as_deref())
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Sort items by kind, path and text for stable output
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.path.cmp(&b.path))
                .then_with(|| a.text.cmp(&b.text))
        });
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
