use serde::{Deserialize, Deserializer, Serialize};

/// One library entry.
///
/// The serialized field names (`check` for the read flag in particular) are
/// the stored layout and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_pages")]
    pub pages: u32,
    #[serde(rename = "check")]
    pub read: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32, read: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            read,
        }
    }

    pub fn key(&self) -> BookKey {
        BookKey::new(&self.title, &self.author)
    }

    /// Case-sensitive comparison on the trimmed title and author.
    pub fn matches(&self, title: &str, author: &str) -> bool {
        self.title.trim() == title.trim() && self.author.trim() == author.trim()
    }
}

/// Identity of a book inside a library: its trimmed title and author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    pub title: String,
    pub author: String,
}

impl BookKey {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        }
    }
}

/// Books shown on a first launch with nothing stored.
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new("Robinson Crusoe", "Daniel Defoe", 252, true),
        Book::new("The Old Man and the Sea", "Ernest Hemingway", 127, true),
    ]
}

// Older script versions stored the raw form text, so a numeric string is
// accepted alongside integral JSON numbers.
fn deserialize_pages<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPages {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let value = match RawPages::deserialize(deserializer)? {
        RawPages::Int(n) => Some(n as f64),
        RawPages::Float(n) => Some(n),
        RawPages::Text(s) => s.trim().parse::<f64>().ok(),
    };
    value
        .and_then(whole_positive_u32)
        .ok_or_else(|| serde::de::Error::custom("pages must be a positive whole number"))
}

pub(crate) fn whole_positive_u32(value: f64) -> Option<u32> {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
