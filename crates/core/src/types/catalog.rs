//! Course metadata types shared between the catalog and persisted cart items.

use serde::{Deserialize, Serialize};

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// French display label for the level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Débutant",
            Self::Intermediate => "Intermédiaire",
            Self::Advanced => "Avancé",
        }
    }
}

/// Display metadata attached to a course.
///
/// Stored alongside cart items since schema version 2 so the cart page can
/// render category badges and placeholder art without consulting the catalog.
/// `rating` stays a pre-formatted string (`"4.8"`); it is display data, not a
/// number anything computes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMeta {
    /// Category name, e.g. `"Programmation"`.
    pub category: String,
    /// Accent color as a CSS hex code, e.g. `"#3776ab"`.
    pub color: String,
    /// Emoji used as placeholder art.
    pub icon: String,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Average rating shown next to the course name.
    pub rating: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_snake_case() {
        let json = serde_json::to_string(&CourseLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let back: CourseLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(back, CourseLevel::Advanced);
    }

    #[test]
    fn test_level_labels_are_french() {
        assert_eq!(CourseLevel::Beginner.label(), "Débutant");
        assert_eq!(CourseLevel::Intermediate.label(), "Intermédiaire");
        assert_eq!(CourseLevel::Advanced.label(), "Avancé");
    }

    #[test]
    fn test_meta_roundtrip() {
        let meta = CourseMeta {
            category: "Programmation".to_owned(),
            color: "#3776ab".to_owned(),
            icon: "🐍".to_owned(),
            level: CourseLevel::Beginner,
            rating: "4.8".to_owned(),
        };
        let json = serde_json::to_string(&meta).unwrap();
        let back: CourseMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
