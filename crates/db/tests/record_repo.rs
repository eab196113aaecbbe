//! Integration tests for the read-only records listing.

use dcx_db::repositories::RecordRepo;
use serde_json::json;
use sqlx::SqlitePool;

/// Create and fill a small stand-in for the ingested `clients` table.
async fn seed_clients(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE clients (
            id INTEGER,
            master_id TEXT,
            order_num_total REAL,
            note TEXT,
            thumbnail BLOB
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    for (id, master, total, note) in [
        (1, "cc294423", 5.0, Some("first")),
        (2, "f431bd5a", 21.5, None),
        (3, "69b69676", 5.0, Some("third")),
    ] {
        sqlx::query(
            "INSERT INTO clients (id, master_id, order_num_total, note) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(id)
        .bind(master)
        .bind(total)
        .bind(note)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_rows_in_insertion_order(pool: SqlitePool) {
    seed_clients(&pool).await;

    let rows = RecordRepo::list(&pool, "clients", 0, 100).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_maps_sql_types_to_json(pool: SqlitePool) {
    seed_clients(&pool).await;

    let rows = RecordRepo::list(&pool, "clients", 1, 1).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["id"], json!(2));
    assert_eq!(row["master_id"], json!("f431bd5a"));
    assert_eq!(row["order_num_total"], json!(21.5));
    assert_eq!(row["note"], json!(null));
    assert_eq!(row["thumbnail"], json!(null));
    assert_eq!(row.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_applies_skip_and_limit(pool: SqlitePool) {
    seed_clients(&pool).await;

    let rows = RecordRepo::list(&pool, "clients", 1, 5).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], json!(2));

    let rows = RecordRepo::list(&pool, "clients", 10, 5).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_missing_table_is_an_error(pool: SqlitePool) {
    let result = RecordRepo::list(&pool, "clients", 0, 10).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Opening the records database
// ---------------------------------------------------------------------------

fn scratch_db_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("dcx-records-{}.db", dcx_core::types::new_project_id()))
}

#[tokio::test]
async fn test_open_existing_pool_rejects_missing_database() {
    let path = scratch_db_path();
    let url = format!("sqlite://{}", path.display());

    let result = dcx_db::open_existing_pool(&url, 1).await;
    assert!(result.is_err());
    assert!(!path.exists(), "no database file may be created");
}

#[tokio::test]
async fn test_open_existing_pool_reads_existing_database() {
    let path = scratch_db_path();
    let url = format!("sqlite://{}", path.display());

    let writer = dcx_db::create_pool(&url, 1).await.unwrap();
    seed_clients(&writer).await;
    writer.close().await;

    let reader = dcx_db::open_existing_pool(&url, 1).await.unwrap();
    let rows = RecordRepo::list(&reader, "clients", 0, 10).await.unwrap();
    assert_eq!(rows.len(), 3);
    reader.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
