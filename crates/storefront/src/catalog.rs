//! Static course catalog.
//!
//! The storefront sells a fixed set of courses, so the catalog is plain
//! in-code data. It backs three things: enriching items as they enter the
//! cart, back-filling metadata on records written before metadata existed,
//! and resolving display defaults for ids the catalog does not know.

use std::sync::LazyLock;

use chouette_core::{CourseId, CourseLevel, CourseMeta, Price};

/// A course as sold on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub price: Price,
    pub meta: CourseMeta,
}

/// Accent colors for courses without catalog metadata.
const PLACEHOLDER_PALETTE: [&str; 7] = [
    "#3498db", "#2ecc71", "#e74c3c", "#9b59b6", "#f39c12", "#1abc9c", "#e67e22",
];

static COURSES: LazyLock<Vec<Course>> = LazyLock::new(|| {
    vec![
        course(
            "python",
            "Python : les fondamentaux",
            4999,
            "Programmation",
            "#3776ab",
            "🐍",
            CourseLevel::Beginner,
            "4.8",
        ),
        course(
            "ux-ui-design",
            "UX/UI Design",
            5999,
            "Design",
            "#9b59b6",
            "🎨",
            CourseLevel::Intermediate,
            "4.7",
        ),
        course(
            "javascript",
            "JavaScript moderne",
            4499,
            "Programmation",
            "#f7df1e",
            "⚡",
            CourseLevel::Beginner,
            "4.6",
        ),
        course(
            "agile",
            "Méthodes agiles",
            2999,
            "Gestion de projet",
            "#2ecc71",
            "🔄",
            CourseLevel::Beginner,
            "4.5",
        ),
        course(
            "ia",
            "Introduction à l'IA",
            6999,
            "Intelligence artificielle",
            "#e74c3c",
            "🤖",
            CourseLevel::Advanced,
            "4.9",
        ),
        course(
            "react",
            "React.js en pratique",
            5499,
            "Programmation",
            "#61dafb",
            "⚛️",
            CourseLevel::Intermediate,
            "4.7",
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    name: &str,
    cents: u32,
    category: &str,
    color: &str,
    icon: &str,
    level: CourseLevel,
    rating: &str,
) -> Course {
    Course {
        id: CourseId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        meta: CourseMeta {
            category: category.to_owned(),
            color: color.to_owned(),
            icon: icon.to_owned(),
            level,
            rating: rating.to_owned(),
        },
    }
}

/// Every course in the catalog, in display order.
#[must_use]
pub fn all() -> &'static [Course] {
    &COURSES
}

/// Look up a course by id.
#[must_use]
pub fn find(id: &CourseId) -> Option<&'static Course> {
    COURSES.iter().find(|c| &c.id == id)
}

/// Catalog metadata for `id`, if the course is known.
#[must_use]
pub fn meta_for(id: &CourseId) -> Option<CourseMeta> {
    find(id).map(|c| c.meta.clone())
}

/// Generic metadata for a course the catalog does not know.
///
/// The accent color is still deterministic per id, so the same unknown course
/// renders the same on every visit.
#[must_use]
pub fn fallback_meta(id: &CourseId) -> CourseMeta {
    CourseMeta {
        category: "Formation".to_owned(),
        color: placeholder_color(id).to_owned(),
        icon: "🎓".to_owned(),
        level: CourseLevel::Beginner,
        rating: "4.5".to_owned(),
    }
}

/// Pick a palette color from a stable hash of the id.
#[must_use]
pub fn placeholder_color(id: &CourseId) -> &'static str {
    let mut hash: i32 = 0;
    for c in id.as_str().chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let index = hash.unsigned_abs() as usize % PLACEHOLDER_PALETTE.len();
    PLACEHOLDER_PALETTE.get(index).copied().unwrap_or("#3498db")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_six_courses() {
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn test_find_known_course() {
        let course = find(&CourseId::new("python")).unwrap();
        assert_eq!(course.name, "Python : les fondamentaux");
        assert_eq!(course.price, Price::from_cents(4999));
        assert_eq!(course.meta.category, "Programmation");
        assert_eq!(course.meta.level, CourseLevel::Beginner);
    }

    #[test]
    fn test_find_unknown_course() {
        assert!(find(&CourseId::new("cobol")).is_none());
    }

    #[test]
    fn test_cheapest_course_is_agile() {
        let cheapest = all().iter().map(|c| c.price).min_by_key(|p| p.amount());
        assert_eq!(cheapest, Some(Price::from_cents(2999)));
    }

    #[test]
    fn test_fallback_meta_is_generic() {
        let meta = fallback_meta(&CourseId::new("cobol"));
        assert_eq!(meta.category, "Formation");
        assert_eq!(meta.icon, "🎓");
        assert_eq!(meta.level, CourseLevel::Beginner);
        assert_eq!(meta.rating, "4.5");
        assert!(PLACEHOLDER_PALETTE.contains(&meta.color.as_str()));
    }

    #[test]
    fn test_placeholder_color_is_stable_per_id() {
        let id = CourseId::new("python");
        assert_eq!(placeholder_color(&id), "#3498db");
        assert_eq!(placeholder_color(&id), placeholder_color(&CourseId::new("python")));

        // Different ids can share a color, but each id maps to one color.
        for course in all() {
            assert!(PLACEHOLDER_PALETTE.contains(&placeholder_color(&course.id)));
        }
    }
}
