use serde::Serialize;
use sqlx::FromRow;

/// Region row. `row_version` is the optimistic concurrency token maintained
/// by the store; it is bumped on every successful update.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Region {
    pub region_id: i32,
    pub region_description: String,
    pub row_version: i64,
}
