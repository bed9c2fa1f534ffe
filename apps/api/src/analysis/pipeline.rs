//! Analysis orchestration — sequences extraction, field parsing,
//! classification and completeness scoring into one immutable result.

use serde::Serialize;

use crate::analysis::completeness::{score_resume, CompletenessReport};
use crate::analysis::fields::{extract_profile, CandidateProfile};
use crate::analysis::text::extract;
use crate::analysis::tracks::{classify, Track};
use crate::errors::AppError;

/// Candidate experience level derived from page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Fresher,
    Intermediate,
    Experienced,
    /// Explicit fallback for documents with zero extractable pages.
    Unknown,
}

impl ExperienceLevel {
    pub fn from_page_count(page_count: usize) -> Self {
        match page_count {
            0 => ExperienceLevel::Unknown,
            1 => ExperienceLevel::Fresher,
            2 => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Experienced,
        }
    }

    /// Label stored in the `user_level` column.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Experienced => "Experienced",
            ExperienceLevel::Unknown => "Unknown",
        }
    }
}

/// Everything one analysis produced. Created once per uploaded document and
/// handed to the presentation/persistence layer; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub profile: CandidateProfile,
    pub track: Track,
    pub recommended_skills: Vec<String>,
    pub completeness: CompletenessReport,
    pub experience_level: ExperienceLevel,
}

/// Runs the full pipeline on uploaded PDF bytes.
///
/// Deterministic: the same bytes always yield the same result. The only
/// fatal condition is an unparseable document; every extraction miss degrades
/// to an empty field and the pipeline runs to completion. Course selection is
/// deliberately not part of this function — it is randomized presentation,
/// applied by the caller through a `Recommender`.
pub fn analyze(bytes: &[u8], max_pages: usize) -> Result<AnalysisResult, AppError> {
    let text = extract(bytes, max_pages)?;
    let profile = extract_profile(&text);
    let classification = classify(&profile.skills);
    let completeness = score_resume(&text.full_text);
    let experience_level = ExperienceLevel::from_page_count(profile.page_count);

    Ok(AnalysisResult {
        profile,
        track: classification.track,
        recommended_skills: classification.recommended_skills,
        completeness,
        experience_level,
    })
}
