use sqlx::PgPool;

use crate::error::DatabaseError;

pub async fn get_guild_config(pool: &PgPool, id: i64) -> Result<Option<serde_json::Value>, DatabaseError> {
    let row: Option<(serde_json::Value,)> = sqlx::query_as("SELECT config from guildconfig where id=$1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(value,)| value))
}

pub async fn create_guild_config(pool: &PgPool, id: i64, config: serde_json::Value) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO guildconfig (id, config) VALUES ($1, $2)")
        .bind(id)
        .bind(config)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_guild_config(pool: &PgPool, id: i64, config: serde_json::Value) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO guildconfig (id, config) VALUES ($1, $2) ON CONFLICT (id) DO UPDATE SET config=$2")
        .bind(id)
        .bind(config)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn get_all_guild_configs(pool: &PgPool) -> Result<Vec<(i64, serde_json::Value)>, DatabaseError> {
    Ok(sqlx::query_as("SELECT id, config from guildconfig")
        .fetch_all(pool)
        .await?)
}
