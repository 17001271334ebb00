//! Typed image reference stored as a JSON document on goals and collections.

use crate::schema::{FieldRule, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const URL_FIELD: &str = "image url";

/// Reference to an externally stored image.
///
/// Only `url` is required. Attributes the application does not model yet are
/// preserved in [`ImageRef::extra`]. Stored documents are read back as
/// written; only [`ImageRef::new`] trims the URL it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImageRef")]
pub struct ImageRef {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_key: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawImageRef {
    url: String,
    #[serde(default)]
    alt_text: Option<String>,
    #[serde(default)]
    storage_key: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawImageRef> for ImageRef {
    type Error = ValidationError;

    fn try_from(raw: RawImageRef) -> Result<Self, Self::Error> {
        FieldRule::NotEmpty.check(URL_FIELD, raw.url.trim())?;
        Ok(Self {
            url: raw.url,
            alt_text: raw.alt_text,
            storage_key: raw.storage_key,
            extra: raw.extra,
        })
    }
}

impl ImageRef {
    /// Creates an image reference.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] when `url` is blank.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = url.into();
        let url = raw.trim();
        FieldRule::NotEmpty.check(URL_FIELD, url)?;
        Ok(Self {
            url: url.to_owned(),
            alt_text: None,
            storage_key: None,
            extra: Map::new(),
        })
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Sets the key of the stored object in the image store.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = Some(storage_key.into());
        self
    }

    /// Adds an attribute the application does not model explicitly.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns the image URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the alternative text, if any.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Returns the storage key, if any.
    #[must_use]
    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    /// Returns attributes preserved verbatim from the stored document.
    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::ImageRef;
    use crate::schema::ValidationError;
    use serde_json::json;

    #[test]
    fn blank_url_is_rejected() {
        assert_eq!(
            ImageRef::new("   "),
            Err(ValidationError::Empty { field: "image url" })
        );
    }

    #[test]
    fn unknown_attributes_survive_deserialization() {
        let stored = json!({
            "url": "https://cdn.example.com/goal.png",
            "alt_text": "Bike",
            "width": 640
        });

        let image: ImageRef = serde_json::from_value(stored.clone()).expect("valid image");

        assert_eq!(image.url(), "https://cdn.example.com/goal.png");
        assert_eq!(image.alt_text(), Some("Bike"));
        assert_eq!(image.extra().get("width"), Some(&json!(640)));
        assert_eq!(serde_json::to_value(&image).expect("serializable"), stored);
    }

    #[test]
    fn stored_document_without_url_is_rejected() {
        let result = serde_json::from_value::<ImageRef>(json!({ "url": "" }));
        assert!(result.is_err());
    }

    #[test]
    fn stored_url_is_read_back_verbatim() {
        let stored = json!({ "url": "  https://cdn.example.com/a.png  " });

        let image: ImageRef = serde_json::from_value(stored.clone()).expect("valid image");

        assert_eq!(image.url(), "  https://cdn.example.com/a.png  ");
        assert_eq!(serde_json::to_value(&image).expect("serializable"), stored);
    }

    #[test]
    fn constructor_trims_the_url() {
        let image = ImageRef::new(" https://cdn.example.com/a.png\n").expect("valid image");

        assert_eq!(image.url(), "https://cdn.example.com/a.png");
    }
}
