use axum::{Router, routing::get, Json, extract::{State, Query}};
use sqlx::PgPool;
use uuid::Uuid;
use serde::Deserialize;
use axum::http::StatusCode;

use crate::domain::predictor::{predict, CyclePrediction};
use crate::repo;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/cycle-prediction", get(get_prediction))
        .with_state(pool)
}

/// Predicts from the single most recent record. A user with no logged
/// cycles gets a 200 with all-null dates, not an error.
async fn get_prediction(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> Result<Json<CyclePrediction>, StatusCode> {
    let latest = repo::fetch_latest_cycle(&pool, params.user_id)
        .await
        .map_err(|e| {
            tracing::error!("❌ Failed to fetch latest cycle: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(predict(latest.as_ref())))
}
