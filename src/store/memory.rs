//! In-memory FAQ store.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::store::record::{FaqPatch, FaqRecord};

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Required input missing or empty.
    #[error("validation error: {0}")]
    Validation(&'static str),

    /// No record with the given id.
    #[error("FAQ {0} not found")]
    NotFound(u64),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A thread-safe, insertion-ordered collection of FAQ records.
///
/// Every operation holds a single lock for its whole scan-then-mutate sequence,
/// so concurrent creates never observe the same maximum id.
#[derive(Clone, Default)]
pub struct FaqStore {
    inner: Arc<Mutex<Vec<FaqRecord>>>,
}

impl FaqStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<FaqRecord>> {
        // A panic while holding the lock cannot leave a half-written record behind.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all records in creation order.
    pub fn list_all(&self) -> Vec<FaqRecord> {
        self.records().clone()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> StoreResult<FaqRecord> {
        self.records()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: u64) -> bool {
        self.records().iter().any(|r| r.id == id)
    }

    /// Append a new record. The id is one past the current maximum, or 1 when empty,
    /// so deleting the newest record lets its id be handed out again.
    pub fn create(
        &self,
        question: String,
        answer: Option<String>,
        image: Option<String>,
    ) -> StoreResult<FaqRecord> {
        if question.is_empty() {
            return Err(StoreError::Validation("'question' is required"));
        }

        let mut records = self.records();
        let id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        let record = FaqRecord {
            id,
            question,
            answer: answer.unwrap_or_default(),
            image,
        };
        records.push(record.clone());

        tracing::info!(id, "FAQ created");
        Ok(record)
    }

    /// Apply a partial update to an existing record and return the result.
    pub fn update(&self, id: u64, patch: FaqPatch) -> StoreResult<FaqRecord> {
        let mut records = self.records();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(record);

        tracing::info!(id, "FAQ updated");
        Ok(record.clone())
    }

    /// Remove the record with `id`.
    pub fn delete(&self, id: u64) -> StoreResult<bool> {
        let mut records = self.records();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        records.remove(index);

        tracing::info!(id, "FAQ deleted");
        Ok(true)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
