use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted analysis, mirroring the `user_data` table. Skill and course
/// lists are stored as comma-joined strings; the analysis core itself only
/// ever deals in structured values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserDataRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_score: i32,
    pub created_at: DateTime<Utc>,
    pub page_no: i32,
    pub predicted_field: String,
    pub user_level: String,
    pub actual_skills: String,
    pub recommended_skills: String,
    pub recommended_courses: String,
}
