use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `user_data` table on startup if it does not exist yet.
/// Skill and course lists are stored as comma-joined strings; serialization
/// is a caller concern, the analysis core only hands over structured values.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_data (
            id                  UUID PRIMARY KEY,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL,
            resume_score        INT NOT NULL,
            created_at          TIMESTAMPTZ NOT NULL,
            page_no             INT NOT NULL,
            predicted_field     TEXT NOT NULL,
            user_level          TEXT NOT NULL,
            actual_skills       TEXT NOT NULL,
            recommended_skills  TEXT NOT NULL,
            recommended_courses TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("user_data table ready");
    Ok(())
}
