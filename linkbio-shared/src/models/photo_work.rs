use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Identifier of a photo work as sent by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoWorkId {
    Text(String),
    Number(Number),
}

impl fmt::Display for PhotoWorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

/// Image attached to a photo work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "string_or_default")]
    pub url: String,
}

/// One gallery entry from the content API.
///
/// Deserialization is lenient: a missing, null or mistyped field yields an
/// empty or absent value and the card simply leaves that part out. One odd
/// entry never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoWork {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<PhotoWorkId>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub subtitle: Option<String>,
    /// Outbound link of the card.
    #[serde(rename = "URL", default, deserialize_with = "string_or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_photo")]
    pub photo: Option<Photo>,
}

fn optional_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

fn string_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    optional_string(deserializer).map(Option::unwrap_or_default)
}

fn lenient_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PhotoWorkId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(PhotoWorkId::Text(id)),
        Value::Number(id) => Some(PhotoWorkId::Number(id)),
        _ => None,
    })
}

fn lenient_photo<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Photo>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

impl PhotoWork {
    /// Stable render key: the identifier if present, else the position in the
    /// fetched list.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        self.id
            .as_ref()
            .map_or_else(|| index.to_string(), ToString::to_string)
    }

    /// Subtitle, treating an empty string as absent.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|value| !value.is_empty())
    }

    /// URL of the attached image, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.photo
            .as_ref()
            .map(|photo| photo.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// List response of the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoWorksResponse {
    pub contents: Vec<PhotoWork>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}
