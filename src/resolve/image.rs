use serde_json::Value;
use tracing::debug;

use super::{field::Record, is_truthy};
use crate::config::{Settings, DEFAULT_PLACEHOLDER_IMAGE};

/// Keys scanned, in order, when an image reference is itself an object
pub const IMAGE_RECORD_KEYS: [&str; 8] = [
    "url",
    "image",
    "imageUrl",
    "image_url",
    "img",
    "src",
    "path",
    "photo",
];

/// Nesting beyond this is treated as unusable
const MAX_IMAGE_DEPTH: usize = 16;

/// Borrowed view over whatever the API put in an image slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageRef<'a> {
    Absent,
    Text(&'a str),
    /// Only the first element is meaningful
    List(&'a [Value]),
    Fields(&'a Record),
    /// Numbers and booleans
    Other,
}

impl<'a> From<&'a Value> for ImageRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => ImageRef::Absent,
            Value::String(s) => ImageRef::Text(s),
            Value::Array(items) => ImageRef::List(items),
            Value::Object(map) => ImageRef::Fields(map),
            Value::Bool(_) | Value::Number(_) => ImageRef::Other,
        }
    }
}

impl<'a> From<Option<&'a Value>> for ImageRef<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map(ImageRef::from).unwrap_or(ImageRef::Absent)
    }
}

/// Turns image references into a URL that can be used as-is for display
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let placeholder = placeholder.into();
        let placeholder = if placeholder.trim().is_empty() {
            DEFAULT_PLACEHOLDER_IMAGE.to_string()
        } else {
            placeholder
        };

        Self {
            base_url,
            placeholder,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.upstream.base_url.clone(),
            settings.display.placeholder_image.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Resolve an image reference. Never fails and never returns an empty string.
    pub fn resolve(&self, image: ImageRef<'_>) -> String {
        self.resolve_at(image, 0)
    }

    pub fn resolve_value(&self, value: Option<&Value>) -> String {
        self.resolve(ImageRef::from(value))
    }

    fn resolve_at(&self, image: ImageRef<'_>, depth: usize) -> String {
        if depth > MAX_IMAGE_DEPTH {
            debug!("Image reference nested deeper than {}", MAX_IMAGE_DEPTH);
            return self.placeholder.clone();
        }

        match image {
            ImageRef::Text(text) => self.resolve_text(text),
            ImageRef::List(items) => match items.first() {
                Some(first) => self.resolve_at(ImageRef::from(first), depth + 1),
                None => self.placeholder.clone(),
            },
            ImageRef::Fields(record) => IMAGE_RECORD_KEYS
                .iter()
                .find_map(|key| record.get(*key).filter(|value| is_truthy(value)))
                .map(|value| self.resolve_at(ImageRef::from(value), depth + 1))
                .unwrap_or_else(|| self.placeholder.clone()),
            ImageRef::Absent | ImageRef::Other => self.placeholder.clone(),
        }
    }

    fn resolve_text(&self, text: &str) -> String {
        let s = text.trim();

        if s.is_empty() {
            return self.placeholder.clone();
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return s.to_string();
        }
        // Already resolved
        if s == self.placeholder {
            return s.to_string();
        }
        if s.starts_with('/') {
            return format!("{}{}", self.base_url, s);
        }

        format!("{}/{}", self.base_url, s)
    }
}
