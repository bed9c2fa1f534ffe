//! Course catalogs, bonus-video lists, and the randomized selection behind
//! them. Selection is a presentation concern: the deterministic analysis
//! pipeline never calls into this module, the HTTP layer does, through the
//! `Recommender` trait object carried in `AppState`.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use serde::Serialize;

use crate::analysis::tracks::Track;

/// One course offering: display name plus link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub name: &'static str,
    pub link: &'static str,
}

pub const DEFAULT_COURSE_COUNT: usize = 4;
pub const MAX_COURSE_COUNT: usize = 10;

macro_rules! course {
    ($name:expr, $link:expr) => {
        Course {
            name: $name,
            link: $link,
        }
    };
}

const DS_COURSES: &[Course] = &[
    course!(
        "Machine Learning Crash Course by Google [Free]",
        "https://developers.google.com/machine-learning/crash-course"
    ),
    course!(
        "Machine Learning A-Z by Udemy",
        "https://www.udemy.com/course/machinelearning/"
    ),
    course!(
        "Machine Learning by Andrew NG",
        "https://www.coursera.org/learn/machine-learning"
    ),
    course!(
        "Data Scientist Master Program of Simplilearn (IBM)",
        "https://www.simplilearn.com/big-data-and-analytics/senior-data-scientist-masters-program-training"
    ),
    course!(
        "Data Science Foundations: Fundamentals by LinkedIn",
        "https://www.linkedin.com/learning/data-science-foundations-fundamentals-5"
    ),
    course!(
        "Data Scientist with Python",
        "https://www.datacamp.com/tracks/data-scientist-with-python"
    ),
    course!(
        "Programming for Data Science with Python",
        "https://www.udacity.com/course/programming-for-data-science-nanodegree--nd104"
    ),
    course!(
        "Programming for Data Science with R",
        "https://www.udacity.com/course/programming-for-data-science-nanodegree-with-R--nd118"
    ),
    course!(
        "Introduction to Data Science",
        "https://www.udacity.com/course/introduction-to-data-science--cd0017"
    ),
    course!(
        "Intro to Machine Learning with TensorFlow",
        "https://www.udacity.com/course/intro-to-machine-learning-with-tensorflow-nanodegree--nd230"
    ),
];

const WEB_COURSES: &[Course] = &[
    course!("Django Crash Course [Free]", "https://youtu.be/e1IyzVyrLSU"),
    course!(
        "Python and Django Full Stack Web Developer Bootcamp",
        "https://www.udemy.com/course/python-and-django-full-stack-web-developer-bootcamp"
    ),
    course!("React Crash Course [Free]", "https://youtu.be/Dorf8i6lCuk"),
    course!(
        "ReactJS Project Development Training",
        "https://www.dotnettricks.com/training/masters-program/reactjs-certification-training"
    ),
    course!(
        "Full Stack Web Developer - MEAN Stack",
        "https://www.simplilearn.com/full-stack-web-developer-mean-stack-certification-training"
    ),
    course!(
        "Node.js and Express.js [Free]",
        "https://youtu.be/Oe421EPjeBE"
    ),
    course!(
        "Flask: Develop Web Applications in Python",
        "https://www.educative.io/courses/flask-develop-web-applications-in-python"
    ),
    course!(
        "Full Stack Web Developer by Udacity",
        "https://www.udacity.com/course/full-stack-web-developer-nanodegree--nd0044"
    ),
    course!(
        "Front End Web Developer by Udacity",
        "https://www.udacity.com/course/front-end-web-developer-nanodegree--nd0011"
    ),
    course!(
        "Become a React Developer by Udacity",
        "https://www.udacity.com/course/react-nanodegree--nd019"
    ),
];

const ANDROID_COURSES: &[Course] = &[
    course!(
        "Android Development for Beginners [Free]",
        "https://youtu.be/fis26HvvDII"
    ),
    course!(
        "Android App Development Specialization",
        "https://www.coursera.org/specializations/android-app-development"
    ),
    course!(
        "Associate Android Developer Certification",
        "https://grow.google/androiddev/#?modal_active=none"
    ),
    course!(
        "Become an Android Kotlin Developer by Udacity",
        "https://www.udacity.com/course/android-kotlin-developer-nanodegree--nd940"
    ),
    course!(
        "Android Basics by Google",
        "https://www.udacity.com/course/android-basics-nanodegree-by-google--nd803"
    ),
    course!(
        "The Complete Android Developer Course",
        "https://www.udemy.com/course/complete-android-n-developer-course/"
    ),
    course!(
        "Building an Android App with Architecture Components",
        "https://www.linkedin.com/learning/building-an-android-app-with-architecture-components"
    ),
    course!(
        "Android App Development Masterclass using Kotlin",
        "https://www.udemy.com/course/android-oreo-kotlin-app-masterclass/"
    ),
    course!(
        "Flutter & Dart - The Complete Flutter App Development Course",
        "https://www.udemy.com/course/flutter-dart-the-complete-flutter-app-development-course/"
    ),
    course!(
        "Flutter App Development Course [Free]",
        "https://youtu.be/rZLR5olMR64"
    ),
];

const IOS_COURSES: &[Course] = &[
    course!(
        "IOS App Development by LinkedIn",
        "https://www.linkedin.com/learning/subscription/topics/ios"
    ),
    course!(
        "iOS & Swift - The Complete iOS App Development Bootcamp",
        "https://www.udemy.com/course/ios-13-app-development-bootcamp/"
    ),
    course!(
        "Become an iOS Developer",
        "https://www.udacity.com/course/ios-developer-nanodegree--nd003"
    ),
    course!(
        "iOS App Development with Swift Specialization",
        "https://www.coursera.org/specializations/app-development"
    ),
    course!(
        "Mobile App Development with Swift",
        "https://www.edx.org/professional-certificate/curtinx-mobile-app-development-with-swift"
    ),
    course!(
        "Swift Course by LinkedIn",
        "https://www.linkedin.com/learning/subscription/topics/swift-2"
    ),
    course!(
        "Objective-C Crash Course for Swift Developers",
        "https://www.udemy.com/course/objectivec/"
    ),
    course!(
        "Learn Swift by Codecademy",
        "https://www.codecademy.com/learn/learn-swift"
    ),
    course!(
        "Swift Tutorial - Full Course for Beginners [Free]",
        "https://youtu.be/comQ1-x2a1Q"
    ),
    course!("Learn Swift Fast [Free]", "https://youtu.be/FcsY1YPBwzQ"),
];

const UIUX_COURSES: &[Course] = &[
    course!(
        "Google UX Design Professional Certificate",
        "https://www.coursera.org/professional-certificates/google-ux-design"
    ),
    course!(
        "UI / UX Design Specialization",
        "https://www.coursera.org/specializations/ui-ux-design"
    ),
    course!(
        "The Complete App Design Course - UX, UI and Design Thinking",
        "https://www.udemy.com/course/the-complete-app-design-course-ux-and-ui-design/"
    ),
    course!(
        "UX & Web Design Master Course: Strategy, Design, Development",
        "https://www.udemy.com/course/ux-web-design-master-course-strategy-design-development/"
    ),
    course!(
        "DESIGN RULES: Principles + Practices for Great UI Design",
        "https://www.udemy.com/course/design-rules/"
    ),
    course!(
        "Become a UX Designer by Udacity",
        "https://www.udacity.com/course/ux-designer-nanodegree--nd578"
    ),
    course!(
        "Adobe XD Tutorial: User Experience Design Course [Free]",
        "https://youtu.be/68w2VwalD5w"
    ),
    course!(
        "Adobe XD for Beginners [Free]",
        "https://youtu.be/WEljsc2jorI"
    ),
    course!(
        "Adobe XD in Simple Way",
        "https://learnux.io/course/adobe-xd"
    ),
];

/// Bonus résumé-writing video links shown after every analysis.
pub const RESUME_VIDEOS: &[&str] = &[
    "https://youtu.be/y8YH0Qbu5h4",
    "https://youtu.be/J-4Fv8nq1iA",
    "https://youtu.be/yp693O87GmM",
    "https://youtu.be/UeMmCex9uTU",
    "https://youtu.be/dQ7Q8ZdnuN0",
    "https://youtu.be/HQqqQx5BCFY",
    "https://youtu.be/CLUsplI4xMU",
    "https://youtu.be/pbczsLkv7Cc",
];

/// Bonus interview-tips video links shown after every analysis.
pub const INTERVIEW_VIDEOS: &[&str] = &[
    "https://youtu.be/Ji46s5BHdr0",
    "https://youtu.be/seVxXHi2YMs",
    "https://youtu.be/9FgfsLa_SmY",
    "https://youtu.be/2HQmjLu-6RQ",
    "https://youtu.be/DQd_AlIvHUw",
    "https://youtu.be/oVVdezJ0e7w",
    "https://youtu.be/JZK1MZwUyUU",
    "https://youtu.be/CyXLhHQS3KY",
];

/// Static course catalog per track, loaded once at process start.
pub fn catalog_for(track: Track) -> &'static [Course] {
    match track {
        Track::DataScience => DS_COURSES,
        Track::WebDevelopment => WEB_COURSES,
        Track::AndroidDevelopment => ANDROID_COURSES,
        Track::IosDevelopment => IOS_COURSES,
        Track::UiUxDevelopment => UIUX_COURSES,
        Track::Unclassified => &[],
    }
}

/// Clamps a requested course count to 1..=10, then to the catalog size.
pub fn clamp_course_count(requested: usize, catalog_len: usize) -> usize {
    requested.clamp(1, MAX_COURSE_COUNT).min(catalog_len)
}

/// Random source for presentation-layer picks. Implementations must be cheap
/// to call per request; the pipeline itself never uses one.
pub trait Recommender: Send + Sync {
    /// Returns a random subset of `catalog`, sized by `clamp_course_count`.
    fn pick_courses(&self, catalog: &'static [Course], requested: usize) -> Vec<Course>;

    /// Returns one random entry from `videos`, or None when the list is empty.
    fn pick_video(&self, videos: &'static [&'static str]) -> Option<&'static str>;
}

/// Production recommender: shuffles with the thread-local RNG.
pub struct ShuffleRecommender;

impl Recommender for ShuffleRecommender {
    fn pick_courses(&self, catalog: &'static [Course], requested: usize) -> Vec<Course> {
        let mut rng = thread_rng();
        let mut picks: Vec<Course> = catalog.to_vec();
        picks.shuffle(&mut rng);
        picks.truncate(clamp_course_count(requested, catalog.len()));
        picks
    }

    fn pick_video(&self, videos: &'static [&'static str]) -> Option<&'static str> {
        videos.choose(&mut thread_rng()).copied()
    }
}

/// Deterministic recommender for tests: same seed, same picks.
pub struct SeededRecommender(pub u64);

impl Recommender for SeededRecommender {
    fn pick_courses(&self, catalog: &'static [Course], requested: usize) -> Vec<Course> {
        let mut rng = StdRng::seed_from_u64(self.0);
        let mut picks: Vec<Course> = catalog.to_vec();
        picks.shuffle(&mut rng);
        picks.truncate(clamp_course_count(requested, catalog.len()));
        picks
    }

    fn pick_video(&self, videos: &'static [&'static str]) -> Option<&'static str> {
        let mut rng = StdRng::seed_from_u64(self.0);
        videos.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_course_count_bounds() {
        assert_eq!(clamp_course_count(0, 10), 1);
        assert_eq!(clamp_course_count(4, 10), 4);
        assert_eq!(clamp_course_count(25, 10), 10);
        assert_eq!(clamp_course_count(4, 2), 2);
        assert_eq!(clamp_course_count(4, 0), 0);
    }

    #[test]
    fn test_shuffle_recommender_returns_requested_count() {
        let picks = ShuffleRecommender.pick_courses(DS_COURSES, 4);
        assert_eq!(picks.len(), 4);
        // No duplicates: every pick is a distinct catalog entry.
        for (i, a) in picks.iter().enumerate() {
            assert!(picks.iter().skip(i + 1).all(|b| b.name != a.name));
        }
    }

    #[test]
    fn test_seeded_recommender_is_deterministic() {
        let first = SeededRecommender(42).pick_courses(WEB_COURSES, 5);
        let second = SeededRecommender(42).pick_courses(WEB_COURSES, 5);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_empty_catalog_yields_no_courses() {
        let picks = ShuffleRecommender.pick_courses(catalog_for(Track::Unclassified), 4);
        assert!(picks.is_empty());
    }

    #[test]
    fn test_video_pick_comes_from_list() {
        let video = ShuffleRecommender.pick_video(RESUME_VIDEOS).unwrap();
        assert!(RESUME_VIDEOS.contains(&video));
    }

    #[test]
    fn test_video_pick_on_empty_list_is_none() {
        assert!(ShuffleRecommender.pick_video(&[]).is_none());
    }
}
