//! Admin surface: credential check, stored-analysis listing, CSV export and
//! the aggregate counts behind the dashboard charts.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::analysis::UserDataRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/v1/admin/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<StatusCode, AppError> {
    if req.username == state.config.admin_username && req.password == state.config.admin_password {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Checks the admin credential headers on data endpoints.
fn require_admin(headers: &HeaderMap, config: &Config) -> Result<(), AppError> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    match (header("x-admin-username"), header("x-admin-password")) {
        (Some(u), Some(p)) if u == config.admin_username && p == config.admin_password => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

async fn fetch_all_rows(state: &AppState) -> Result<Vec<UserDataRow>, AppError> {
    let rows: Vec<UserDataRow> =
        sqlx::query_as("SELECT * FROM user_data ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(rows)
}

/// GET /api/v1/admin/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserDataRow>>, AppError> {
    require_admin(&headers, &state.config)?;
    Ok(Json(fetch_all_rows(&state).await?))
}

/// GET /api/v1/admin/analyses.csv — the "Download Report" export.
pub async fn handle_export_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<([(&'static str, &'static str); 2], String), AppError> {
    require_admin(&headers, &state.config)?;
    let rows = fetch_all_rows(&state).await?;
    let csv = rows_to_csv(&rows);
    Ok((
        [
            ("content-type", "text/csv"),
            ("content-disposition", "attachment; filename=\"user_data.csv\""),
        ],
        csv,
    ))
}

#[derive(Debug, Serialize)]
pub struct CountEntry {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub by_predicted_field: Vec<CountEntry>,
    pub by_user_level: Vec<CountEntry>,
}

/// GET /api/v1/admin/stats — counts grouped by track and experience level.
pub async fn handle_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    require_admin(&headers, &state.config)?;

    let by_field: Vec<(String, i64)> = sqlx::query_as(
        "SELECT predicted_field, COUNT(*) FROM user_data GROUP BY predicted_field ORDER BY 2 DESC",
    )
    .fetch_all(&state.db)
    .await?;
    let by_level: Vec<(String, i64)> = sqlx::query_as(
        "SELECT user_level, COUNT(*) FROM user_data GROUP BY user_level ORDER BY 2 DESC",
    )
    .fetch_all(&state.db)
    .await?;

    let to_entries = |pairs: Vec<(String, i64)>| {
        pairs
            .into_iter()
            .map(|(label, count)| CountEntry { label, count })
            .collect()
    };

    Ok(Json(StatsResponse {
        by_predicted_field: to_entries(by_field),
        by_user_level: to_entries(by_level),
    }))
}

fn rows_to_csv(rows: &[UserDataRow]) -> String {
    let mut csv = String::from(
        "id,name,email,resume_score,created_at,page_no,predicted_field,\
         user_level,actual_skills,recommended_skills,recommended_courses\n",
    );
    for row in rows {
        let fields = [
            row.id.to_string(),
            row.name.clone(),
            row.email.clone(),
            row.resume_score.to_string(),
            row.created_at.to_rfc3339(),
            row.page_no.to_string(),
            row.predicted_field.clone(),
            row.user_level.clone(),
            row.actual_skills.clone(),
            row.recommended_skills.clone(),
            row.recommended_courses.clone(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }
    csv
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;
    use uuid::Uuid;

    fn admin_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "hunter2".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            max_pages: 50,
        }
    }

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_matching_credentials_pass() {
        let config = admin_config();
        let headers = headers(&[
            ("x-admin-username", "admin"),
            ("x-admin-password", "hunter2"),
        ]);
        assert!(require_admin(&headers, &config).is_ok());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let config = admin_config();
        let headers = headers(&[
            ("x-admin-username", "admin"),
            ("x-admin-password", "wrong"),
        ]);
        let err = require_admin(&headers, &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_wrong_username_is_rejected() {
        let config = admin_config();
        let headers = headers(&[
            ("x-admin-username", "intruder"),
            ("x-admin-password", "hunter2"),
        ]);
        let err = require_admin(&headers, &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_missing_headers_are_rejected() {
        let config = admin_config();
        let err = require_admin(&HeaderMap::new(), &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));

        // One header alone is not enough either.
        let only_user = headers(&[("x-admin-username", "admin")]);
        assert!(require_admin(&only_user, &config).is_err());
    }

    fn sample_row() -> UserDataRow {
        UserDataRow {
            id: Uuid::nil(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            resume_score: 60,
            created_at: Utc::now(),
            page_no: 2,
            predicted_field: "Data Science".to_string(),
            user_level: "Intermediate".to_string(),
            actual_skills: "python, tensorflow".to_string(),
            recommended_skills: "Keras, Pytorch".to_string(),
            recommended_courses: "Machine Learning by Andrew NG".to_string(),
        }
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let csv = rows_to_csv(&[sample_row(), sample_row()]);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("id,name,email"));
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let csv = rows_to_csv(&[sample_row()]);
        assert!(csv.contains("\"python, tensorflow\""));
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
