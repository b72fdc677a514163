//! The `project.json` schema.
//!
//! ```json
//! {
//!   "title": "Night Walks",
//!   "medium": "Video installation",
//!   "year": 2021,
//!   "duration": "12 min",
//!   "collective": "North Shore",
//!   "curator": "A. Curator",
//!   "description": "A series of...",
//!   "link": "https://example.com/night-walks",
//!   "images": ["001.jpg", {"name": "002.jpg", "border": true}],
//!   "layout": {
//!     "pages": [
//!       {"type": "info", "content": ["title", "medium", "year", "description", "001.jpg"]},
//!       {"type": "gallery", "content": ["001.jpg", "002.jpg", "003.jpg"]},
//!       {"type": "full", "content": ["004.jpg"]}
//!     ]
//!   }
//! }
//! ```
//!
//! Layout content tokens are resolved against the project's images by
//! filename at render time, so the same image may appear on several pages.

use serde::{Deserialize, Deserializer, Serialize};

/// One project folder's descriptor. Immutable once loaded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Folder name, filled in by the scanner (not part of the JSON).
    #[serde(skip)]
    pub dir_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub collective: Option<String>,
    #[serde(default)]
    pub curator: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub layout: Option<Layout>,
}

impl Project {
    /// Credit lines for the present collective/curator/publisher fields.
    pub fn credit_lines(&self) -> Vec<String> {
        [
            ("Collective", &self.collective),
            ("Curator", &self.curator),
            ("Publisher", &self.publisher),
        ]
        .into_iter()
        .filter_map(|(label, value)| match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(format!("{label}: {v}")),
            _ => None,
        })
        .collect()
    }

    /// Year line, with the duration appended when present.
    pub fn year_line(&self) -> String {
        match self.duration.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() && !self.year.is_empty() => format!("{}, {}", self.year, d),
            Some(d) if !d.is_empty() => d.to_string(),
            _ => self.year.clone(),
        }
    }
}

/// An entry of the `images` array: a bare filename or `{name|file, border}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ImageRef {
    Name(String),
    Detailed {
        #[serde(alias = "file")]
        name: String,
        #[serde(default)]
        border: bool,
    },
}

impl ImageRef {
    pub fn name(&self) -> &str {
        match self {
            ImageRef::Name(name) => name,
            ImageRef::Detailed { name, .. } => name,
        }
    }

    pub fn border_override(&self) -> bool {
        match self {
            ImageRef::Name(_) => false,
            ImageRef::Detailed { border, .. } => *border,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Layout {
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

/// One layout instruction. Each variant becomes exactly one output page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageSpec {
    Info {
        #[serde(default)]
        content: Vec<ContentToken>,
    },
    Gallery {
        #[serde(default)]
        content: Vec<ContentToken>,
    },
    Full {
        #[serde(default)]
        content: Vec<ContentToken>,
    },
    /// Any other `type` value. Logged and skipped by the planner.
    #[serde(other)]
    Unsupported,
}

/// Semantic text tokens usable on info pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Title,
    Medium,
    Year,
    Credits,
    Description,
    Link,
}

impl Keyword {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Keyword::Title),
            "medium" => Some(Keyword::Medium),
            "year" => Some(Keyword::Year),
            "credits" => Some(Keyword::Credits),
            "description" => Some(Keyword::Description),
            "link" => Some(Keyword::Link),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Title => "title",
            Keyword::Medium => "medium",
            Keyword::Year => "year",
            Keyword::Credits => "credits",
            Keyword::Description => "description",
            Keyword::Link => "link",
        }
    }
}

/// A layout content token: a keyword or an image filename.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ContentToken {
    Keyword(Keyword),
    Image(String),
}

impl From<String> for ContentToken {
    fn from(token: String) -> Self {
        match Keyword::parse(&token) {
            Some(keyword) => ContentToken::Keyword(keyword),
            None => ContentToken::Image(token),
        }
    }
}

impl ContentToken {
    /// The filename, if this token names a raster image. Non-keyword words
    /// without an image extension yield `None`.
    pub fn image_name(&self) -> Option<&str> {
        match self {
            ContentToken::Image(name) if has_image_suffix(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for ContentToken {
    fn from(token: &str) -> Self {
        ContentToken::from(token.to_string())
    }
}

impl From<ContentToken> for String {
    fn from(token: ContentToken) -> Self {
        match token {
            ContentToken::Keyword(keyword) => keyword.as_str().to_string(),
            ContentToken::Image(name) => name,
        }
    }
}

const IMAGE_SUFFIXES: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "tif", "tiff", "bmp"];

/// True if the token ends in a raster image extension.
pub fn has_image_suffix(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_SUFFIXES.contains(&ext.to_ascii_lowercase().as_str()))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}
