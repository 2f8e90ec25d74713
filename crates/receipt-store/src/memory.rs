//! # In-Memory Score Store
//!
//! Volatile `ScoreStore` backend: everything is lost on restart.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One RwLock over one HashMap                                           │
//! │                                                                         │
//! │  save_points ──► write lock (exclusive) ──► insert if id is free       │
//! │  get_points  ──► read lock  (shared)    ──► copy value out             │
//! │  len         ──► read lock  (shared)                                   │
//! │                                                                         │
//! │  No lock is held across anything but the map operation itself.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use receipt_core::Points;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{ReceiptId, ScoreStore};

type IdGenerator = Box<dyn Fn() -> ReceiptId + Send + Sync>;

/// Score store backed by a `HashMap` in process memory.
pub struct InMemoryScoreStore {
    points: RwLock<HashMap<String, Points>>,
    generate_id: IdGenerator,
}

impl InMemoryScoreStore {
    /// Creates an empty store that issues random UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(ReceiptId::generate)
    }

    /// Creates an empty store with a custom id source.
    pub fn with_id_generator<F>(generate_id: F) -> Self
    where
        F: Fn() -> ReceiptId + Send + Sync + 'static,
    {
        InMemoryScoreStore {
            points: RwLock::new(HashMap::new()),
            generate_id: Box::new(generate_id),
        }
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryScoreStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryScoreStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn save_points(&self, points: Points) -> StoreResult<ReceiptId> {
        let id = (self.generate_id)();

        let mut records = self.points.write().await;
        match records.entry(id.as_str().to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId {
                id: id.into_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(points);
                debug!(id = %id, points, "Stored points");
                Ok(id)
            }
        }
    }

    async fn get_points(&self, id: &str) -> StoreResult<Points> {
        self.points
            .read()
            .await
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn len(&self) -> usize {
        self.points.read().await.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
