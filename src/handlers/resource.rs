use axum::{
    Extension,
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, MessageResponse, Result},
    handlers::AppState,
    models::Collection,
};

/// `?id=` parameter shared by every resource route
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The id if one was given; an empty value counts as absent.
    fn present(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// List all records, or fetch one when `id` is given (`null` if absent)
pub async fn get_records(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse> {
    let body = match query.present() {
        Some(raw) => {
            let id = parse_id(collection, raw)?;
            state.store.get(collection, &id).await?.unwrap_or(Value::Null)
        }
        None => Value::Array(state.store.list(collection).await?),
    };

    Ok((StatusCode::OK, Json(body)))
}

/// Create handler
pub async fn create_record(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    let fields = into_fields(body)?;
    let created = state.store.insert(collection, fields).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partial update handler; only the fields present in the body change
pub async fn update_record(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Query(query): Query<IdQuery>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    let id = required_id(collection, &query)?;
    let fields = into_fields(body)?;

    if !state.store.update(collection, &id, fields).await? {
        return Err(AppError::NotFound(collection.label()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("{} updated", collection.label()),
        }),
    ))
}

/// Delete handler. Deleting an id that matches nothing still succeeds.
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse> {
    let id = required_id(collection, &query)?;

    if !state.store.delete(collection, &id).await? {
        tracing::debug!("Delete of {} {} matched nothing", collection.label(), id);
    }

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("{} deleted", collection.label()),
        }),
    ))
}

fn required_id(collection: Collection, query: &IdQuery) -> Result<String> {
    let raw = query.present().ok_or_else(|| {
        AppError::BadRequest(format!("Missing {} id", collection.label().to_lowercase()))
    })?;
    parse_id(collection, raw)
}

/// Ids are UUIDs; anything else is a client error, not a miss.
fn parse_id(collection: Collection, raw: &str) -> Result<String> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid {} id format",
                collection.label().to_lowercase()
            ))
        })
}

fn into_fields(body: Value) -> Result<Map<String, Value>> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".into(),
        )),
    }
}
