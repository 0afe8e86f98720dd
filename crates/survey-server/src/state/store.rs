//! Application state: database handle plus a write-through estate cache.

use anyhow::Result;
use dashmap::DashMap;
use sqlx::SqlitePool;
use survey_core::{Estate, Tree};
use uuid::Uuid;

use crate::config::Config;
use crate::persistence::estates::{self, StoredEstate};
use crate::persistence::trees::{self, InsertTreeOutcome};
use crate::persistence::Database;

/// Thread-safe state shared by all request handlers.
pub struct AppState {
    db: Database,
    config: Config,
    /// Estates are immutable once created, so cached entries never go stale.
    estates: DashMap<Uuid, StoredEstate>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            db,
            config,
            estates: DashMap::new(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Persist a new estate and cache it.
    pub async fn create_estate(&self, estate: Estate) -> Result<StoredEstate> {
        let stored = estates::insert_estate(self.pool(), estate).await?;
        self.estates.insert(stored.id, stored.clone());
        Ok(stored)
    }

    /// Look up an estate, falling back to the database on a cache miss.
    pub async fn get_estate(&self, id: &Uuid) -> Result<Option<StoredEstate>> {
        if let Some(cached) = self.estates.get(id) {
            return Ok(Some(cached.value().clone()));
        }

        let loaded = estates::get_estate(self.pool(), id).await?;
        if let Some(stored) = &loaded {
            self.estates.insert(stored.id, stored.clone());
        }
        Ok(loaded)
    }

    pub async fn plant_tree(&self, estate_id: &Uuid, tree: &Tree) -> Result<InsertTreeOutcome> {
        trees::insert_tree(self.pool(), estate_id, tree).await
    }

    /// Fresh snapshot of an estate's trees; never cached.
    pub async fn trees(&self, estate_id: &Uuid) -> Result<Vec<Tree>> {
        trees::trees_for_estate(self.pool(), estate_id).await
    }

    pub async fn tree_heights(&self, estate_id: &Uuid) -> Result<Vec<u32>> {
        trees::tree_heights_for_estate(self.pool(), estate_id).await
    }

    pub fn cached_estates(&self) -> usize {
        self.estates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::db::test_database;

    #[tokio::test]
    async fn created_estates_are_served_from_cache() {
        let state = AppState::new(test_database().await, Config::default());
        let stored = state.create_estate(Estate::new(4, 6)).await.unwrap();
        assert_eq!(state.cached_estates(), 1);

        let loaded = state.get_estate(&stored.id).await.unwrap().unwrap();
        assert_eq!(loaded, stored);
    }

    #[tokio::test]
    async fn cache_miss_loads_from_database() {
        let db = test_database().await;
        let stored = estates::insert_estate(db.pool(), Estate::new(3, 3)).await.unwrap();

        let state = AppState::new(db, Config::default());
        assert_eq!(state.cached_estates(), 0);

        let loaded = state.get_estate(&stored.id).await.unwrap().unwrap();
        assert_eq!(loaded.estate, Estate::new(3, 3));
        assert_eq!(state.cached_estates(), 1);
    }

    #[tokio::test]
    async fn unknown_estate_is_not_cached() {
        let state = AppState::new(test_database().await, Config::default());
        assert!(state.get_estate(&Uuid::new_v4()).await.unwrap().is_none());
        assert_eq!(state.cached_estates(), 0);
    }
}
