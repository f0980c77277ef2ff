use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A place returned by the recommendation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(deserialize_with = "deserialize_place_id")]
    pub id: String,
    pub name: String,
    pub address: String,
}

impl Place {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

// The backend hands out numeric ids for some datasets and string ids for
// others. Any other JSON value keeps its textual form; `null` becomes empty.
fn deserialize_place_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

/// One row of the chat transcript. Never mutated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub origin: Origin,
    pub recommendations: Option<Vec<Place>>,
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Origin::User, None)
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), Origin::Bot, None)
    }

    pub fn with_recommendations(text: impl Into<String>, places: Vec<Place>) -> Self {
        Self::new(text.into(), Origin::Bot, Some(places))
    }

    fn new(text: String, origin: Origin, recommendations: Option<Vec<Place>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            origin,
            recommendations,
            created_at: Local::now(),
        }
    }
}

/// Correlates a fetch command with the event that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);
