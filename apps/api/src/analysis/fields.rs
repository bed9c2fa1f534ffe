//! Field extraction — derives structured candidate fields from raw résumé
//! text with regexes and a fixed skill vocabulary. Misses are never errors:
//! every field degrades to an empty value and the pipeline keeps going.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::text::ExtractedText;

/// Structured candidate information extracted from one résumé.
/// Fields default to empty when nothing matched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Matched skills in vocabulary order, deduplicated.
    pub skills: Vec<String>,
    pub page_count: usize,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Lines containing any of these tokens are skipped by the name heuristic.
const NAME_STOPWORDS: &[&str] = &["resume", "cv", "curriculum", "email", "phone", "address"];

/// Fixed skill vocabulary: general skills first, then the per-track keyword
/// terms so every classifier keyword is extractable. Single-word terms match
/// by exact lowercase token; multi-word phrases match by substring against
/// the lowercased full text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "react",
    "angular",
    "node",
    "sql",
    "mongodb",
    "django",
    "flask",
    "machine learning",
    "ai",
    "data science",
    "excel",
    "powerpoint",
    "word",
    "adobe",
    "photoshop",
    "c++",
    "c#",
    "php",
    "kubernetes",
    "docker",
    "aws",
    "azure",
    "gcp",
    "linux",
    "bash",
    "git",
    "agile",
    "scrum",
    "project management",
    "leadership",
    // Data science track terms
    "tensorflow",
    "keras",
    "pytorch",
    "deep learning",
    "streamlit",
    // Web track terms
    "node js",
    "react js",
    "laravel",
    "magento",
    "wordpress",
    "angular js",
    // Android track terms
    "android",
    "android development",
    "flutter",
    "kotlin",
    "xml",
    "kivy",
    // iOS track terms
    "ios",
    "ios development",
    "swift",
    "cocoa",
    "cocoa touch",
    "xcode",
    // UI/UX track terms
    "ux",
    "ui",
    "adobe xd",
    "figma",
    "zeplin",
    "balsamiq",
    "prototyping",
    "wireframes",
    "storyframes",
    "adobe photoshop",
    "adobe illustrator",
    "illustrator",
    "adobe after effects",
    "after effects",
    "adobe premier pro",
    "premier pro",
    "adobe indesign",
    "indesign",
    "wireframe",
    "editing",
    "solid",
    "grasp",
    "user research",
    "user experience",
];

/// Extracts a [`CandidateProfile`] from extracted text.
pub fn extract_profile(text: &ExtractedText) -> CandidateProfile {
    CandidateProfile {
        name: extract_name(&text.full_text),
        email: extract_email(&text.full_text),
        phone_number: extract_phone(&text.full_text),
        skills: extract_skills(&text.full_text),
        page_count: text.page_count,
    }
}

/// First email-shaped substring in document order, or empty.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped substring (optional country code and area-code
/// parentheses, digit groups separated by `-`, `.` or space), or empty.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Best-effort name heuristic: the first non-empty line among the first five
/// that carries none of the stopword tokens. Known-weak by design — it
/// guesses, it does not guarantee. A résumé opening with an address block or
/// a job title will fool it.
pub fn extract_name(text: &str) -> String {
    for line in text.lines().take(5) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if NAME_STOPWORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }
        return trimmed.to_string();
    }
    String::new()
}

/// Matches the fixed vocabulary against the text. The result keeps
/// vocabulary order and holds no duplicates (one vocabulary pass).
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);

    let mut skills = Vec::new();
    for skill in SKILL_VOCABULARY {
        let matched = if skill.contains(' ') {
            // Phrases cannot be found via single-token matching.
            lowered.contains(skill)
        } else {
            tokens.iter().any(|t| t == skill)
        };
        if matched {
            skills.push((*skill).to_string());
        }
    }
    skills
}

/// Splits on whitespace and punctuation. `+` and `#` stay inside tokens so
/// "c++" and "c#" survive tokenization.
fn tokenize(lowered: &str) -> Vec<&str> {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_in_document_order() {
        let text = "Contact: jane.doe@example.com or fallback j.d@backup.org";
        assert_eq!(extract_email(text), "jane.doe@example.com");
    }

    #[test]
    fn test_no_email_yields_empty_string() {
        assert_eq!(extract_email("no contact details here"), "");
        assert_eq!(extract_email("half an address: foo@bar"), "");
    }

    #[test]
    fn test_phone_with_country_code() {
        let text = "Mobile: +1 555-123-4567, available after 6pm";
        assert_eq!(extract_phone(text), "+1 555-123-4567");
    }

    #[test]
    fn test_phone_with_parenthesized_area_code() {
        let text = "(555) 123-4567";
        assert_eq!(extract_phone(text), "(555) 123-4567");
    }

    #[test]
    fn test_no_phone_yields_empty_string() {
        assert_eq!(extract_phone("call me maybe"), "");
    }

    #[test]
    fn test_name_is_first_qualifying_line() {
        let text = "Curriculum Vitae\nJane Doe\njane@example.com";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_skips_blank_lines() {
        let text = "\n\nJane Doe\n";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_gives_up_after_five_lines() {
        let text = "Resume\nCV\nEmail: x@y.com\nPhone: 123\nAddress: here\nJane Doe";
        assert_eq!(extract_name(text), "");
    }

    #[test]
    fn test_name_stopwords_are_case_insensitive() {
        let text = "MY RESUME\nJane Doe";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_single_word_skills_match_exact_tokens() {
        let skills = extract_skills("Built services in Python and Java, deployed on AWS.");
        assert_eq!(skills, vec!["python", "java", "aws"]);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = extract_skills("Frontend work in JavaScript only");
        assert_eq!(skills, vec!["javascript"]);
    }

    #[test]
    fn test_symbol_skills_survive_tokenization() {
        let skills = extract_skills("Systems programming: C++ and C# (games).");
        assert_eq!(skills, vec!["c++", "c#"]);
    }

    #[test]
    fn test_multi_word_skills_match_as_substring() {
        let skills = extract_skills("Two years of machine learning and data science work");
        assert_eq!(skills, vec!["machine learning", "data science"]);
    }

    #[test]
    fn test_track_keywords_are_extractable() {
        let skills = extract_skills("I build android apps in swift");
        assert_eq!(skills, vec!["android", "swift"]);
    }

    #[test]
    fn test_skills_are_deduplicated() {
        let skills = extract_skills("python python python");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn test_no_skills_yields_empty_vec() {
        assert!(extract_skills("I enjoy gardening and hiking").is_empty());
    }

    #[test]
    fn test_full_profile_extraction_degrades_gracefully() {
        let text = crate::analysis::text::ExtractedText {
            pages: vec![String::new()],
            full_text: String::new(),
            page_count: 1,
        };
        let profile = extract_profile(&text);
        assert_eq!(profile.name, "");
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone_number, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.page_count, 1);
    }
}
