#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Whether a reachable database was found and migrated, decided once per
// test process.
static DB_READY: OnceCell<bool> = OnceCell::const_new();

/// Connection for store tests, or `None` when no database is reachable in
/// this environment (callers then skip).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let ready = DB_READY
        .get_or_init(|| async {
            let db = match models::db::connect().await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            if let Err(e) = migration::Migrator::up(&db, None).await {
                eprintln!("skip: migrate up failed: {}", e);
                return false;
            }
            true
        })
        .await;
    if !*ready {
        return Ok(None);
    }
    let db = models::db::connect().await?;
    Ok(Some(db))
}
