//! Track classification — maps extracted skills to a career track via
//! first-match-wins keyword lookup against static per-track vocabularies.

use serde::Serialize;

use crate::analysis::courses::Course;

/// Career-field classification bucket. `Unclassified` is a valid terminal
/// state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Track {
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Android Development")]
    AndroidDevelopment,
    #[serde(rename = "IOS Development")]
    IosDevelopment,
    #[serde(rename = "UI-UX Development")]
    UiUxDevelopment,
    Unclassified,
}

/// Fixed priority order for the per-skill keyword scan.
const TRACK_PRIORITY: &[Track] = &[
    Track::DataScience,
    Track::WebDevelopment,
    Track::AndroidDevelopment,
    Track::IosDevelopment,
    Track::UiUxDevelopment,
];

const DS_KEYWORDS: &[&str] = &[
    "tensorflow",
    "keras",
    "pytorch",
    "machine learning",
    "deep learning",
    "flask",
    "streamlit",
];

const WEB_KEYWORDS: &[&str] = &[
    "react",
    "django",
    "node js",
    "react js",
    "php",
    "laravel",
    "magento",
    "wordpress",
    "javascript",
    "angular js",
    "c#",
    "flask",
];

const ANDROID_KEYWORDS: &[&str] = &[
    "android",
    "android development",
    "flutter",
    "kotlin",
    "xml",
    "kivy",
];

const IOS_KEYWORDS: &[&str] = &[
    "ios",
    "ios development",
    "swift",
    "cocoa",
    "cocoa touch",
    "xcode",
];

const UIUX_KEYWORDS: &[&str] = &[
    "ux",
    "adobe xd",
    "figma",
    "zeplin",
    "balsamiq",
    "ui",
    "prototyping",
    "wireframes",
    "storyframes",
    "adobe photoshop",
    "photoshop",
    "editing",
    "adobe illustrator",
    "illustrator",
    "adobe after effects",
    "after effects",
    "adobe premier pro",
    "premier pro",
    "adobe indesign",
    "indesign",
    "wireframe",
    "solid",
    "grasp",
    "user research",
    "user experience",
];

const DS_RECOMMENDED: &[&str] = &[
    "Data Visualization",
    "Predictive Analysis",
    "Statistical Modeling",
    "Data Mining",
    "Clustering & Classification",
    "Data Analytics",
    "Quantitative Analysis",
    "Web Scraping",
    "ML Algorithms",
    "Keras",
    "Pytorch",
    "Probability",
    "Scikit-learn",
    "Tensorflow",
    "Flask",
    "Streamlit",
];

const WEB_RECOMMENDED: &[&str] = &[
    "React",
    "Django",
    "Node JS",
    "React JS",
    "php",
    "laravel",
    "Magento",
    "wordpress",
    "Javascript",
    "Angular JS",
    "c#",
    "Flask",
    "SDK",
];

const ANDROID_RECOMMENDED: &[&str] = &[
    "Android",
    "Android development",
    "Flutter",
    "Kotlin",
    "XML",
    "Java",
    "Kivy",
    "GIT",
    "SDK",
    "SQLite",
];

const IOS_RECOMMENDED: &[&str] = &[
    "IOS",
    "IOS Development",
    "Swift",
    "Cocoa",
    "Cocoa Touch",
    "Xcode",
    "Objective-C",
    "SQLite",
    "Plist",
    "StoreKit",
    "UI-Kit",
    "AV Foundation",
    "Auto-Layout",
];

const UIUX_RECOMMENDED: &[&str] = &[
    "UI",
    "User Experience",
    "Adobe XD",
    "Figma",
    "Zeplin",
    "Balsamiq",
    "Prototyping",
    "Wireframes",
    "Storyframes",
    "Adobe Photoshop",
    "Editing",
    "Illustrator",
    "After Effects",
    "Premier Pro",
    "Indesign",
    "Wireframe",
    "Solid",
    "Grasp",
    "User Research",
];

impl Track {
    /// Human-readable label, also the value stored in `predicted_field`.
    pub fn label(&self) -> &'static str {
        match self {
            Track::DataScience => "Data Science",
            Track::WebDevelopment => "Web Development",
            Track::AndroidDevelopment => "Android Development",
            Track::IosDevelopment => "IOS Development",
            Track::UiUxDevelopment => "UI-UX Development",
            Track::Unclassified => "Unclassified",
        }
    }

    /// Lowercase keyword set used for classification. Empty for Unclassified.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Track::DataScience => DS_KEYWORDS,
            Track::WebDevelopment => WEB_KEYWORDS,
            Track::AndroidDevelopment => ANDROID_KEYWORDS,
            Track::IosDevelopment => IOS_KEYWORDS,
            Track::UiUxDevelopment => UIUX_KEYWORDS,
            Track::Unclassified => &[],
        }
    }

    /// Static recommended-skill list attached on classification.
    pub fn recommended_skills(&self) -> &'static [&'static str] {
        match self {
            Track::DataScience => DS_RECOMMENDED,
            Track::WebDevelopment => WEB_RECOMMENDED,
            Track::AndroidDevelopment => ANDROID_RECOMMENDED,
            Track::IosDevelopment => IOS_RECOMMENDED,
            Track::UiUxDevelopment => UIUX_RECOMMENDED,
            Track::Unclassified => &[],
        }
    }

    /// Static course catalog for the track. Empty for Unclassified.
    pub fn courses(&self) -> &'static [Course] {
        crate::analysis::courses::catalog_for(*self)
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one candidate's skill list.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub track: Track,
    pub recommended_skills: Vec<String>,
}

/// Classifies by scanning skills in their collected order; for each skill the
/// tracks are checked in fixed priority order and the first hit wins.
///
/// The short-circuit is a behavioral contract: once any skill matches any
/// track, later skills are never considered. A résumé holding both
/// data-science and web skills lands on whichever skill comes first. Do not
/// replace this with a most-matches scheme; that changes observable results.
pub fn classify(skills: &[String]) -> Classification {
    for skill in skills {
        let skill_lower = skill.to_lowercase();
        for track in TRACK_PRIORITY {
            if track.keywords().contains(&skill_lower.as_str()) {
                return Classification {
                    track: *track,
                    recommended_skills: track
                        .recommended_skills()
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                };
            }
        }
    }

    Classification {
        track: Track::Unclassified,
        recommended_skills: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tensorflow_classifies_data_science() {
        let c = classify(&skills(&["tensorflow"]));
        assert_eq!(c.track, Track::DataScience);
        assert!(c.recommended_skills.contains(&"Keras".to_string()));
        assert!(c.recommended_skills.contains(&"Pytorch".to_string()));
    }

    #[test]
    fn test_first_skill_wins_over_later_skills() {
        // "android" matches AndroidDevelopment during the scan of the first
        // skill; "swift" (IosDevelopment) is never considered.
        let c = classify(&skills(&["android", "swift"]));
        assert_eq!(c.track, Track::AndroidDevelopment);
    }

    #[test]
    fn test_priority_order_breaks_ties_per_skill() {
        // "flask" belongs to both DS and Web keyword sets; DS is checked first.
        let c = classify(&skills(&["flask"]));
        assert_eq!(c.track, Track::DataScience);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let c = classify(&skills(&["Kotlin"]));
        assert_eq!(c.track, Track::AndroidDevelopment);
    }

    #[test]
    fn test_non_matching_skills_are_skipped() {
        // "excel" belongs to no track; the scan continues to "figma".
        let c = classify(&skills(&["excel", "figma"]));
        assert_eq!(c.track, Track::UiUxDevelopment);
    }

    #[test]
    fn test_no_match_is_unclassified() {
        let c = classify(&skills(&["excel", "leadership"]));
        assert_eq!(c.track, Track::Unclassified);
        assert!(c.recommended_skills.is_empty());
    }

    #[test]
    fn test_empty_skill_list_is_unclassified() {
        let c = classify(&[]);
        assert_eq!(c.track, Track::Unclassified);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let input = skills(&["react", "kotlin"]);
        let first = classify(&input);
        let second = classify(&input);
        assert_eq!(first.track, second.track);
        assert_eq!(first.recommended_skills, second.recommended_skills);
    }

    #[test]
    fn test_every_track_has_nonempty_catalog() {
        for track in TRACK_PRIORITY {
            assert!(!track.courses().is_empty(), "{track} catalog is empty");
            assert!(!track.recommended_skills().is_empty());
            assert!(!track.keywords().is_empty());
        }
        assert!(Track::Unclassified.courses().is_empty());
    }

    #[test]
    fn test_track_labels() {
        assert_eq!(Track::DataScience.label(), "Data Science");
        assert_eq!(Track::IosDevelopment.label(), "IOS Development");
        assert_eq!(Track::Unclassified.label(), "Unclassified");
    }

    #[test]
    fn test_track_serializes_to_label() {
        let json = serde_json::to_string(&Track::UiUxDevelopment).unwrap();
        assert_eq!(json, r#""UI-UX Development""#);
    }
}
