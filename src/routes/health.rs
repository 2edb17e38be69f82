use axum::{Router, routing::get, Json, extract::{State, Query}};
use sqlx::PgPool;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::health_score::{score, HealthStatus};
use crate::repo;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

/// Ephemeral view assembled per request; nothing here is persisted.
#[derive(Serialize)]
pub struct HealthSnapshot {
    pub total_appointments: u32,
    pub completed_appointments: u32,
    pub upcoming_appointments: u32,
    pub symptom_check_count: u32,
    pub community_engagement_count: u32,
    pub average_mood: Option<f64>,
    pub health_score: u8,
    pub status: HealthStatus,
    pub insights: Vec<String>,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health-score", get(get_health_snapshot))
        .with_state(pool)
}

/// Unreachable signal sources already degraded to zero in the repo layer,
/// so this handler always produces a snapshot.
async fn get_health_snapshot(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> Json<HealthSnapshot> {
    let signals = repo::fetch_signal_bundle(&pool, params.user_id).await;
    let report = score(&signals);

    Json(HealthSnapshot {
        total_appointments: signals.total_appointments,
        completed_appointments: signals.completed_appointments,
        upcoming_appointments: signals.upcoming_appointments,
        symptom_check_count: signals.symptom_check_count,
        community_engagement_count: signals.community_engagement_count,
        average_mood: signals.average_mood,
        health_score: report.health_score,
        status: report.status,
        insights: report.insights,
    })
}
