//! Estate persistence operations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use survey_core::Estate;
use uuid::Uuid;

/// An estate as stored, with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEstate {
    pub id: Uuid,
    pub estate: Estate,
    pub created_at: DateTime<Utc>,
}

/// Insert a new estate and return it with a fresh identifier.
pub async fn insert_estate(pool: &SqlitePool, estate: Estate) -> Result<StoredEstate> {
    let stored = StoredEstate {
        id: Uuid::new_v4(),
        estate,
        created_at: Utc::now(),
    };

    sqlx::query("INSERT INTO estates (id, length, width, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(stored.id.to_string())
        .bind(i64::from(estate.length))
        .bind(i64::from(estate.width))
        .bind(stored.created_at.to_rfc3339())
        .execute(pool)
        .await?;

    Ok(stored)
}

/// Load one estate by ID.
pub async fn get_estate(pool: &SqlitePool, id: &Uuid) -> Result<Option<StoredEstate>> {
    let row = sqlx::query_as::<_, EstateRow>(
        "SELECT id, length, width, created_at FROM estates WHERE id = ?1",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(StoredEstate::try_from).transpose()
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct EstateRow {
    id: String,
    length: i64,
    width: i64,
    created_at: String,
}

impl TryFrom<EstateRow> for StoredEstate {
    type Error = anyhow::Error;

    fn try_from(row: EstateRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(StoredEstate {
            id: Uuid::parse_str(&row.id)?,
            estate: Estate::new(u32::try_from(row.length)?, u32::try_from(row.width)?),
            created_at,
        })
    }
}
