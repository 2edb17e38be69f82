use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::health_score::SignalBundle;
use crate::models::{CycleRecord, CycleRow, NewCycleRecord};

fn decode(row: CycleRow) -> Result<CycleRecord, sqlx::Error> {
    CycleRecord::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

pub async fn fetch_cycle_records(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<CycleRecord>, sqlx::Error> {
    let rows: Vec<CycleRow> = sqlx::query_as(
        r#"
        SELECT id, user_id, cycle_start_date, cycle_length, period_length,
               symptoms, mood, flow_intensity, notes, created_at
        FROM cycle_records
        WHERE user_id = $1
        ORDER BY cycle_start_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(decode).collect()
}

pub async fn fetch_latest_cycle(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CycleRecord>, sqlx::Error> {
    let row: Option<CycleRow> = sqlx::query_as(
        r#"
        SELECT id, user_id, cycle_start_date, cycle_length, period_length,
               symptoms, mood, flow_intensity, notes, created_at
        FROM cycle_records
        WHERE user_id = $1
        ORDER BY cycle_start_date DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(decode).transpose()
}

pub async fn insert_cycle_record(
    pool: &PgPool,
    record: &NewCycleRecord,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO cycle_records
            (id, user_id, cycle_start_date, cycle_length, period_length,
             symptoms, mood, flow_intensity, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(record.user_id)
    .bind(record.cycle_start_date)
    .bind(record.cycle_length)
    .bind(record.period_length)
    .bind(&record.symptoms)
    .bind(record.mood.as_str())
    .bind(record.flow_intensity.as_str())
    .bind(&record.notes)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Gathers the health-score signal bundle. Each source degrades to zero on
/// failure so one broken collaborator never takes down the whole snapshot.
pub async fn fetch_signal_bundle(pool: &PgPool, user_id: Uuid) -> SignalBundle {
    let total_appointments = count_or_zero(
        pool,
        "SELECT COUNT(*) FROM appointments WHERE user_id = $1",
        user_id,
        "appointments",
    )
    .await;

    let completed_appointments = count_or_zero(
        pool,
        "SELECT COUNT(*) FROM appointments WHERE user_id = $1 AND status = 'completed'",
        user_id,
        "completed appointments",
    )
    .await;

    let upcoming_appointments = count_or_zero(
        pool,
        "SELECT COUNT(*) FROM appointments WHERE user_id = $1 AND status = 'scheduled' AND scheduled_for >= NOW()",
        user_id,
        "upcoming appointments",
    )
    .await;

    let symptom_check_count = count_or_zero(
        pool,
        "SELECT COUNT(*) FROM symptom_checks WHERE user_id = $1",
        user_id,
        "symptom checks",
    )
    .await;

    let community_engagement_count = count_or_zero(
        pool,
        "SELECT COUNT(*) FROM community_posts WHERE user_id = $1",
        user_id,
        "community posts",
    )
    .await;

    let average_mood = match sqlx::query_scalar::<_, Option<f64>>(
        "SELECT AVG(mood_value::float8) FROM mood_samples WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    {
        Ok(avg) => avg,
        Err(e) => {
            tracing::warn!("⚠️ mood samples unavailable, scoring without mood: {}", e);
            None
        }
    };

    SignalBundle {
        total_appointments,
        completed_appointments,
        upcoming_appointments,
        symptom_check_count,
        community_engagement_count,
        average_mood,
    }
}

async fn count_or_zero(pool: &PgPool, sql: &str, user_id: Uuid, source: &str) -> u32 {
    match sqlx::query_scalar::<_, i64>(sql)
        .bind(user_id)
        .fetch_one(pool)
        .await
    {
        Ok(n) => n.max(0) as u32,
        Err(e) => {
            tracing::warn!("⚠️ {} unavailable, treating as zero: {}", source, e);
            0
        }
    }
}
