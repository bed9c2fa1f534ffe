//! Résumé analysis core: text extraction → field extraction → track
//! classification → completeness scoring. Every stage is a pure function of
//! its input; the only non-deterministic piece (course/video selection) lives
//! behind the `Recommender` trait and is applied by the HTTP layer, never here.

pub mod completeness;
pub mod courses;
pub mod fields;
pub mod handlers;
pub mod pipeline;
pub mod text;
pub mod tracks;
