use roster_db::Database;
use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn test_full_bootstrap(pool: SqlitePool) {
    let db = Database::from_pool(pool);
    db.health_check().await.unwrap();

    for table in ["fighters", "divisions", "countries"] {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )
        .bind(table)
        .fetch_one(db.pool())
        .await
        .unwrap_or_else(|e| panic!("{table} lookup failed: {e}"));
        assert_eq!(count.0, 1, "{table} should exist after migrations");
    }
}

/// Indexed columns carry the expected indexes.
#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn test_indexes_exist(pool: SqlitePool) {
    let names: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'ix_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    let names: Vec<String> = names.into_iter().map(|(n,)| n).collect();

    assert_eq!(
        names,
        vec![
            "ix_countries_name",
            "ix_divisions_weight",
            "ix_fighters_age",
            "ix_fighters_name",
        ]
    );
}

/// Running migrations a second time (a process restart) changes nothing.
#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn test_migrations_are_idempotent(pool: SqlitePool) {
    sqlx::query("INSERT INTO countries (name) VALUES ('Brazil')")
        .execute(&pool)
        .await
        .unwrap();

    let db = Database::from_pool(pool);
    db.run_migrations().await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM countries")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn test_pool_status_counts_checked_out_sessions(pool: SqlitePool) {
    let db = Database::from_pool(pool);

    let session = db.acquire().await.unwrap();
    let status = db.pool_status();
    assert!(status.size >= 1);
    assert!(status.in_use() >= 1);

    drop(session);
}
