use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::plan::StoredPlan;
use crate::models::profile::{FormDetails, QuizAnswers};

/// Keys owned by the store. Incoming field sets never overwrite them.
pub const RESERVED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// The single persisted record: a user's quiz answers, form details and generated plan.
///
/// Everything except the identity/timestamp columns lives in `fields`, a flat map
/// that grows as later steps merge their output in. Typed access goes through
/// `view::<T>()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl QuizResponse {
    pub fn new(id: String, fields: Map<String, Value>) -> Self {
        let mut response = QuizResponse {
            id,
            created_at: Utc::now(),
            updated_at: None,
            fields: Map::new(),
        };
        response.absorb(fields);
        response
    }

    /// Shallow merge: every incoming key replaces the stored one.
    pub fn merge(&mut self, updates: Map<String, Value>) {
        self.absorb(updates);
        self.updated_at = Some(Utc::now());
    }

    fn absorb(&mut self, updates: Map<String, Value>) {
        for (key, value) in updates {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Deserializes the flat field map into a typed view.
    /// A view that does not fit the stored data falls back to its default.
    pub fn view<T: DeserializeOwned + Default>(&self) -> T {
        match serde_json::from_value(Value::Object(self.fields.clone())) {
            Ok(view) => view,
            Err(e) => {
                warn!(
                    "Quiz response {} does not match {}: {e}",
                    self.id,
                    std::any::type_name::<T>()
                );
                T::default()
            }
        }
    }

    pub fn quiz(&self) -> QuizAnswers {
        self.view()
    }

    pub fn form(&self) -> FormDetails {
        self.view()
    }

    pub fn plan(&self) -> StoredPlan {
        self.view()
    }
}

/// Serializes a typed struct into a field map suitable for `merge`.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            Ok(map)
        }
    }
}
