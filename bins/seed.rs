use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

use service::store::seaorm::SeaOrmStore;

/// Migrate the database and load the starter fixtures.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let store = SeaOrmStore::new(db);
    let report = service::seed::run(&store).await?;
    info!(categories = report.categories, questions = report.questions, "seed finished");
    println!("seeded {} categories and {} questions", report.categories, report.questions);
    Ok(())
}
