//! Completeness scoring — checks the raw text for five expected résumé
//! sections and adds 20 points per hit.
//!
//! Matching is a case-sensitive literal substring search against the exact
//! headers "Objective", "Declaration", "Hobbies"/"Interests", "Achievements"
//! and "Projects". A lowercase "objective" therefore scores nothing; the
//! quirk is deliberate and pinned by a test.

use serde::Serialize;

pub const POINTS_PER_SECTION: u32 = 20;

/// Presence flags for the five checklist sections, plus the additive score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub has_objective: bool,
    pub has_declaration: bool,
    pub has_hobbies_or_interests: bool,
    pub has_achievements: bool,
    pub has_projects: bool,
    /// Always `20 × (number of true flags)`, so one of {0,20,40,60,80,100}.
    pub score: u32,
    /// One advice line per section, "[+]" when present, "[-]" when missing.
    pub tips: Vec<String>,
}

pub fn score_resume(full_text: &str) -> CompletenessReport {
    let has_objective = full_text.contains("Objective");
    let has_declaration = full_text.contains("Declaration");
    let has_hobbies_or_interests =
        full_text.contains("Hobbies") || full_text.contains("Interests");
    let has_achievements = full_text.contains("Achievements");
    let has_projects = full_text.contains("Projects");

    let flags = [
        has_objective,
        has_declaration,
        has_hobbies_or_interests,
        has_achievements,
        has_projects,
    ];
    let score = POINTS_PER_SECTION * flags.iter().filter(|f| **f).count() as u32;

    let tips = vec![
        tip(
            has_objective,
            "You have added an Objective",
            "Add a career objective to state your intention to recruiters",
        ),
        tip(
            has_declaration,
            "You have added a Declaration",
            "Add a Declaration to affirm that everything on the resume is true",
        ),
        tip(
            has_hobbies_or_interests,
            "You have added your Hobbies",
            "Add Hobbies or Interests to show your personality to recruiters",
        ),
        tip(
            has_achievements,
            "You have added your Achievements",
            "Add Achievements to show you are capable of the required position",
        ),
        tip(
            has_projects,
            "You have added your Projects",
            "Add Projects to show work related to the required position",
        ),
    ];

    CompletenessReport {
        has_objective,
        has_declaration,
        has_hobbies_or_interests,
        has_achievements,
        has_projects,
        score,
        tips,
    }
}

fn tip(present: bool, praise: &str, advice: &str) -> String {
    if present {
        format!("[+] {praise}")
    } else {
        format!("[-] {advice}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_present_scores_100() {
        let text = "Objective\nDeclaration\nHobbies\nAchievements\nProjects";
        let report = score_resume(text);
        assert_eq!(report.score, 100);
        assert!(report.tips.iter().all(|t| t.starts_with("[+]")));
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let report = score_resume("");
        assert_eq!(report.score, 0);
        assert!(!report.has_objective);
        assert!(report.tips.iter().all(|t| t.starts_with("[-]")));
    }

    #[test]
    fn test_objective_and_projects_score_40() {
        let report = score_resume("Objective: ship things\n...\nProjects: many");
        assert_eq!(report.score, 40);
        assert!(report.has_objective);
        assert!(report.has_projects);
        assert!(!report.has_declaration);
    }

    #[test]
    fn test_interests_counts_for_hobbies_flag() {
        let report = score_resume("Interests: chess, climbing");
        assert!(report.has_hobbies_or_interests);
        assert_eq!(report.score, 20);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // Known quirk: lowercase headers are not detected.
        let report = score_resume("objective declaration hobbies achievements projects");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_score_is_multiple_of_20_and_bounded() {
        for text in ["", "Objective", "Objective Declaration Hobbies", "x"] {
            let report = score_resume(text);
            assert_eq!(report.score % 20, 0);
            assert!(report.score <= 100);
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let text = "Objective\nHobbies";
        assert_eq!(score_resume(text), score_resume(text));
    }
}
