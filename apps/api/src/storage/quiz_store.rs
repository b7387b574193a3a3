//! QuizResponse entity store over a single local-storage key.
//!
//! All records live in one JSON blob `{ "quizResponses": [...] }` under `STORAGE_KEY`.
//! Every operation reloads the blob, so edits made by another process are picked up,
//! but concurrent writers across processes are last-write-wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::quiz_response::QuizResponse;
use crate::storage::local::LocalStorage;
use crate::storage::StorageError;

pub const STORAGE_KEY: &str = "finstart_data";

/// The blob as stored. Records stay raw JSON so entries written by other
/// clients in shapes `QuizResponse` does not accept are carried through
/// every rewrite untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredData {
    #[serde(default)]
    quiz_responses: Vec<Value>,
}

impl StoredData {
    /// Records that parse as `QuizResponse`, paired with their index in the blob.
    fn records(&self) -> impl Iterator<Item = (usize, QuizResponse)> + '_ {
        self.quiz_responses
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value(raw.clone()) {
                Ok(record) => Some((index, record)),
                Err(e) => {
                    warn!("Skipping stored quiz response at index {index}: {e}");
                    None
                }
            })
    }
}

/// Criteria for `QuizStore::filter`. An empty filter matches every record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizFilter {
    pub id: Option<String>,
}

pub struct QuizStore {
    storage: LocalStorage,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl QuizStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage,
            lock: Mutex::new(()),
        }
    }

    /// Creates a record with a fresh id and `created_at`.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<QuizResponse, StorageError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await;

        let response = QuizResponse::new(generate_id(), fields);
        data.quiz_responses.push(serde_json::to_value(&response)?);
        self.save(data).await?;

        info!("Created quiz response {}", response.id);
        Ok(response)
    }

    pub async fn filter(&self, criteria: &QuizFilter) -> Vec<QuizResponse> {
        let _guard = self.lock.lock().await;
        let data = self.load().await;
        let matching: Vec<QuizResponse> = data
            .records()
            .map(|(_, record)| record)
            .filter(|r| criteria.id.as_ref().map_or(true, |id| &r.id == id))
            .collect();
        matching
    }

    pub async fn get(&self, id: &str) -> Option<QuizResponse> {
        let _guard = self.lock.lock().await;
        let data = self.load().await;
        let found = data.records().find(|(_, r)| r.id == id);
        found.map(|(_, record)| record)
    }

    /// Merges `updates` into the record. Returns `Ok(None)` when the id is unknown.
    pub async fn update(
        &self,
        id: &str,
        updates: Map<String, Value>,
    ) -> Result<Option<QuizResponse>, StorageError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await;

        let found = data.records().find(|(_, r)| r.id == id);
        let Some((index, mut record)) = found else {
            return Ok(None);
        };
        record.merge(updates);
        data.quiz_responses[index] = serde_json::to_value(&record)?;

        self.save(data).await?;
        info!("Updated quiz response {id}");
        Ok(Some(record))
    }

    /// Unreadable data is logged and treated as an empty dataset.
    async fn load(&self) -> StoredData {
        let storage = self.storage.clone();
        let raw = match tokio::task::spawn_blocking(move || storage.get_item(STORAGE_KEY)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => return StoredData::default(),
            Ok(Err(e)) => {
                error!("Error reading from local storage: {e}");
                return StoredData::default();
            }
            Err(e) => {
                error!("Local storage read task failed: {e}");
                return StoredData::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            error!("Error parsing stored quiz responses: {e}");
            StoredData::default()
        })
    }

    async fn save(&self, data: StoredData) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&data)?;
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || storage.set_item(STORAGE_KEY, &raw)).await?
    }
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
