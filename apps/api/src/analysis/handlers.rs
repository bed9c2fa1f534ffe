use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::courses::{Course, DEFAULT_COURSE_COUNT, INTERVIEW_VIDEOS, RESUME_VIDEOS};
use crate::analysis::pipeline::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Number of course recommendations to return, clamped to 1..=10.
    pub courses: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub courses: Vec<Course>,
    pub resume_video: Option<&'static str>,
    pub interview_video: Option<&'static str>,
}

/// POST /api/v1/resumes
///
/// Accepts a multipart form with a `file` part holding the PDF. Runs the
/// analysis pipeline, persists one `user_data` row (timestamp assigned here,
/// not in the core) and returns the full analysis with a randomized course
/// subset and bonus video links.
pub async fn handle_upload(
    State(state): State<AppState>,
    Query(params): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut file_bytes: Option<bytes::Bytes> = None;
    let mut filename = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            file_bytes = Some(bytes);
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| AppError::Validation("missing 'file' part in multipart body".to_string()))?;
    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "upload of {} bytes exceeds the {} byte limit",
            bytes.len(),
            state.config.max_upload_bytes
        )));
    }

    let analysis = analyze(&bytes, state.config.max_pages)?;
    info!(
        %filename,
        track = %analysis.track,
        score = analysis.completeness.score,
        pages = analysis.profile.page_count,
        "resume analysed"
    );

    let requested = params.courses.unwrap_or(DEFAULT_COURSE_COUNT);
    let courses = state
        .recommender
        .pick_courses(analysis.track.courses(), requested);
    let resume_video = state.recommender.pick_video(RESUME_VIDEOS);
    let interview_video = state.recommender.pick_video(INTERVIEW_VIDEOS);

    let id = Uuid::new_v4();
    let course_names: Vec<&str> = courses.iter().map(|c| c.name).collect();
    sqlx::query(
        r#"
        INSERT INTO user_data
            (id, name, email, resume_score, created_at, page_no,
             predicted_field, user_level, actual_skills,
             recommended_skills, recommended_courses)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(id)
    .bind(&analysis.profile.name)
    .bind(&analysis.profile.email)
    .bind(analysis.completeness.score as i32)
    .bind(Utc::now())
    .bind(analysis.profile.page_count as i32)
    .bind(analysis.track.label())
    .bind(analysis.experience_level.label())
    .bind(analysis.profile.skills.join(", "))
    .bind(analysis.recommended_skills.join(", "))
    .bind(course_names.join(", "))
    .execute(&state.db)
    .await?;

    Ok(Json(AnalysisResponse {
        id,
        analysis,
        courses,
        resume_video,
        interview_video,
    }))
}

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    pub resume_video: Option<&'static str>,
    pub interview_video: Option<&'static str>,
}

/// GET /api/v1/videos — one random pick from each bonus-video list.
pub async fn handle_videos(State(state): State<AppState>) -> Json<VideosResponse> {
    Json(VideosResponse {
        resume_video: state.recommender.pick_video(RESUME_VIDEOS),
        interview_video: state.recommender.pick_video(INTERVIEW_VIDEOS),
    })
}
