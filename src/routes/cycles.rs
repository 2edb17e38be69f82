use axum::{Router, routing::get, Json, extract::{State, Query}};
use sqlx::PgPool;
use uuid::Uuid;
use serde::Deserialize;
use axum::http::StatusCode;

use crate::domain::validate::validate_new_cycle;
use crate::models::{CycleRecord, NewCycleRecord};
use crate::repo;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/cycles", get(list_cycles).post(create_cycle))
        .with_state(pool)
}

async fn create_cycle(
    State(pool): State<PgPool>,
    Json(body): Json<NewCycleRecord>,
) -> Result<StatusCode, (StatusCode, String)> {
    if let Err(e) = validate_new_cycle(&body) {
        tracing::warn!("🚫 Rejected cycle record: {}", e);
        return Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()));
    }

    repo::insert_cycle_record(&pool, &body).await.map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            tracing::error!("❌ DB insert failed: {}", db_err.message());

            if let Some(constraint) = db_err.constraint() {
                tracing::info!("🔒 Constraint violated: {}", constraint);
            }
        } else {
            tracing::error!("❌ Unknown DB error: {}", e);
        }

        (StatusCode::UNPROCESSABLE_ENTITY, "could not store cycle record".to_string())
    })?;

    Ok(StatusCode::CREATED)
}

async fn list_cycles(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> Result<Json<Vec<CycleRecord>>, StatusCode> {
    let records = repo::fetch_cycle_records(&pool, params.user_id)
        .await
        .map_err(|e| {
            tracing::error!("❌ Failed to fetch cycle records: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(records))
}
