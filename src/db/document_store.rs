use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::Collection,
};

/// Key under which a document's identifier is exposed.
pub const ID_FIELD: &str = "id";

/// Document store for the supplier, product and order collections.
///
/// Documents are schemaless JSON objects. The identifier lives in its own
/// column and is injected into the document on every read; it is never part
/// of the stored body, so a body can't rewrite it.
#[derive(Clone)]
pub struct DocumentStore {
    pool: DbPool,
}

impl DocumentStore {
    /// Create a new DocumentStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Every document of a collection, in insertion order
    pub async fn list(&self, collection: Collection) -> Result<Vec<Value>> {
        let rows: Vec<(String, String)> = sqlx::query_as(&format!(
            "SELECT id, body FROM {} ORDER BY seq",
            collection.table_name()
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        rows.into_iter()
            .map(|(id, body)| to_document(id, &body))
            .collect()
    }

    /// A single document, or None if no document has this id
    pub async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>> {
        let row: Option<(String, String)> = sqlx::query_as(&format!(
            "SELECT id, body FROM {} WHERE id = ?",
            collection.table_name()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        row.map(|(id, body)| to_document(id, &body)).transpose()
    }

    /// Store a new document under a freshly generated id and return it
    pub async fn insert(&self, collection: Collection, mut fields: Map<String, Value>) -> Result<Value> {
        fields.remove(ID_FIELD);

        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(&fields)?;

        sqlx::query(&format!(
            "INSERT INTO {} (id, body) VALUES (?, ?)",
            collection.table_name()
        ))
        .bind(&id)
        .bind(&body)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::debug!("Inserted {} {}", collection.label(), id);

        fields.insert(ID_FIELD.to_string(), Value::String(id));
        Ok(Value::Object(fields))
    }

    /// Overwrite the given fields of a document, leaving the others untouched.
    ///
    /// Returns false when no document has this id. The write lock is taken
    /// before reading, so concurrent merges on one document queue up instead
    /// of failing to upgrade a read lock.
    pub async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(AppError::Database)?;

        let stored: Option<(String,)> = sqlx::query_as(&format!(
            "SELECT body FROM {} WHERE id = ?",
            collection.table_name()
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let Some((body,)) = stored else {
            return Ok(false);
        };

        let mut document = parse_body(&body)?;
        for (key, value) in fields {
            if key != ID_FIELD {
                document.insert(key, value);
            }
        }

        sqlx::query(&format!(
            "UPDATE {} SET body = ? WHERE id = ?",
            collection.table_name()
        ))
        .bind(serde_json::to_string(&document)?)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::debug!("Updated {} {}", collection.label(), id);
        Ok(true)
    }

    /// Delete a document by id. Returns whether a document was removed.
    pub async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = ?",
            collection.table_name()
        ))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}

fn parse_body(body: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Internal("stored document is not an object".into())),
    }
}

fn to_document(id: String, body: &str) -> Result<Value> {
    let mut document = parse_body(body)?;
    document.insert(ID_FIELD.to_string(), Value::String(id));
    Ok(Value::Object(document))
}
