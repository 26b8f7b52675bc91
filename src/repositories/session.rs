//! Session repository for database operations.

use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::session_entry;

/// Repository for session key/value entries.
pub struct SessionRepository;

impl SessionRepository {
    /// Get the value stored under `key`.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<String>>
    where
        C: ConnectionTrait,
    {
        Ok(session_entry::Entity::find_by_id(key.to_string())
            .one(conn)
            .await?
            .map(|entry| entry.value))
    }

    /// Insert or replace the value stored under `key`.
    pub async fn set<C>(conn: &C, key: &str, value: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let entry = session_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        session_entry::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(session_entry::Column::Key)
                    .update_columns([session_entry::Column::Value, session_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Remove `key`. Returns whether an entry existed.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = session_entry::Entity::delete_by_id(key.to_string())
            .exec(conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
