//! Tree persistence operations.

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use survey_core::Tree;
use uuid::Uuid;

/// Result of planting a tree on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTreeOutcome {
    Inserted(Uuid),
    /// Another tree already stands on the plot.
    PlotOccupied,
}

/// Insert a tree for an estate. The caller checks bounds and that the
/// estate exists.
pub async fn insert_tree(
    pool: &SqlitePool,
    estate_id: &Uuid,
    tree: &Tree,
) -> Result<InsertTreeOutcome> {
    let id = Uuid::new_v4();
    let result = sqlx::query(
        r#"
        INSERT INTO trees (id, estate_id, x, y, height, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(id.to_string())
    .bind(estate_id.to_string())
    .bind(i64::from(tree.x))
    .bind(i64::from(tree.y))
    .bind(i64::from(tree.height))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(InsertTreeOutcome::Inserted(id)),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            Ok(InsertTreeOutcome::PlotOccupied)
        }
        Err(err) => Err(err.into()),
    }
}

/// Load every tree of an estate in insertion order.
pub async fn trees_for_estate(pool: &SqlitePool, estate_id: &Uuid) -> Result<Vec<Tree>> {
    let rows = sqlx::query_as::<_, TreeRow>(
        "SELECT x, y, height FROM trees WHERE estate_id = ?1 ORDER BY rowid",
    )
    .bind(estate_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Tree::try_from).collect()
}

/// Heights of every tree of an estate.
pub async fn tree_heights_for_estate(pool: &SqlitePool, estate_id: &Uuid) -> Result<Vec<u32>> {
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT height FROM trees WHERE estate_id = ?1")
        .bind(estate_id.to_string())
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|(height,)| u32::try_from(height).map_err(anyhow::Error::from))
        .collect()
}

#[derive(sqlx::FromRow)]
struct TreeRow {
    x: i64,
    y: i64,
    height: i64,
}

impl TryFrom<TreeRow> for Tree {
    type Error = anyhow::Error;

    fn try_from(row: TreeRow) -> Result<Self> {
        Ok(Tree::new(
            u32::try_from(row.x)?,
            u32::try_from(row.y)?,
            u32::try_from(row.height)?,
        ))
    }
}
