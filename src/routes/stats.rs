use axum::{Router, routing::get, Json, extract::{State, Query}};
use sqlx::PgPool;
use uuid::Uuid;
use serde::Deserialize;
use axum::http::StatusCode;

use crate::domain::stats::{summarize, CycleStats};
use crate::repo;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/cycle-stats", get(get_cycle_stats))
        .with_state(pool)
}

async fn get_cycle_stats(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> Result<Json<CycleStats>, StatusCode> {
    let records = repo::fetch_cycle_records(&pool, params.user_id)
        .await
        .map_err(|e| {
            tracing::error!("❌ DB error in get_cycle_stats: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(summarize(&records)))
}
