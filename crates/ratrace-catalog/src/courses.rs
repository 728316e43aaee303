//! The education tree: eleven courses from middle school to executive MBA.
//!
//! Standard courses require every listed prerequisite. Two courses accept
//! alternatives instead: the MBA takes any bachelor degree, and the PhD
//! takes either master degree.

use std::collections::BTreeSet;

use serde::Serialize;

/// Prerequisite rule for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "courses")]
pub enum Prerequisites {
    /// No prerequisites; anyone can enroll.
    None,
    /// Every listed course must be completed.
    AllOf(&'static [&'static str]),
    /// At least one listed course must be completed.
    AnyOf(&'static [&'static str]),
}

impl Prerequisites {
    /// Whether the given completed-course set satisfies this rule.
    pub fn satisfied_by(&self, completed: &BTreeSet<String>) -> bool {
        match self {
            Self::None => true,
            Self::AllOf(required) => required.iter().all(|id| completed.contains(*id)),
            Self::AnyOf(options) => options.iter().any(|id| completed.contains(*id)),
        }
    }

    /// The course ids named by this rule (empty for [`Prerequisites::None`]).
    pub const fn courses(&self) -> &'static [&'static str] {
        match *self {
            Self::None => &[],
            Self::AllOf(ids) | Self::AnyOf(ids) => ids,
        }
    }
}

/// One course in the university catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Stable identifier used in the state document and the API.
    pub id: &'static str,
    /// Display name; becomes the player's qualification on completion.
    pub name: &'static str,
    /// Fee charged per attended lecture.
    pub cost_per_lecture: i64,
    /// Lectures needed to complete the course.
    pub lectures_required: u32,
    /// Enrollment prerequisites.
    pub prerequisites: Prerequisites,
}

/// The full course catalogue, ordered roughly by academic level.
pub const COURSES: [Course; 11] = [
    Course {
        id: "middle_school",
        name: "Middle School",
        cost_per_lecture: 10,
        lectures_required: 5,
        prerequisites: Prerequisites::None,
    },
    Course {
        id: "high_school",
        name: "High School",
        cost_per_lecture: 15,
        lectures_required: 8,
        prerequisites: Prerequisites::AllOf(&["middle_school"]),
    },
    Course {
        id: "vocational",
        name: "Vocational Training",
        cost_per_lecture: 20,
        lectures_required: 6,
        prerequisites: Prerequisites::AllOf(&["middle_school"]),
    },
    Course {
        id: "bachelor_arts",
        name: "Bachelor of Arts",
        cost_per_lecture: 30,
        lectures_required: 12,
        prerequisites: Prerequisites::AllOf(&["high_school"]),
    },
    Course {
        id: "bachelor_science",
        name: "Bachelor of Science",
        cost_per_lecture: 35,
        lectures_required: 12,
        prerequisites: Prerequisites::AllOf(&["high_school"]),
    },
    Course {
        id: "bachelor_business",
        name: "Bachelor of Business",
        cost_per_lecture: 35,
        lectures_required: 12,
        prerequisites: Prerequisites::AllOf(&["high_school"]),
    },
    Course {
        id: "master_arts",
        name: "Master of Arts",
        cost_per_lecture: 50,
        lectures_required: 10,
        prerequisites: Prerequisites::AllOf(&["bachelor_arts"]),
    },
    Course {
        id: "master_science",
        name: "Master of Science",
        cost_per_lecture: 55,
        lectures_required: 10,
        prerequisites: Prerequisites::AllOf(&["bachelor_science"]),
    },
    Course {
        id: "mba",
        name: "MBA",
        cost_per_lecture: 70,
        lectures_required: 10,
        prerequisites: Prerequisites::AnyOf(&[
            "bachelor_arts",
            "bachelor_science",
            "bachelor_business",
        ]),
    },
    Course {
        id: "phd",
        name: "PhD",
        cost_per_lecture: 60,
        lectures_required: 15,
        prerequisites: Prerequisites::AnyOf(&["master_arts", "master_science"]),
    },
    Course {
        id: "executive_mba",
        name: "Executive MBA",
        cost_per_lecture: 100,
        lectures_required: 8,
        prerequisites: Prerequisites::AllOf(&["mba"]),
    },
];

/// Look up a course by its id.
pub fn course_by_id(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.id == id)
}

/// Whether the player can enroll: prerequisites satisfied and the course
/// not already completed.
pub fn is_eligible(course: &Course, completed: &BTreeSet<String>) -> bool {
    !completed.contains(course.id) && course.prerequisites.satisfied_by(completed)
}

/// The catalogue with per-course eligibility for the given transcript,
/// as served by the university catalogue endpoint.
pub fn available_courses(completed: &BTreeSet<String>) -> Vec<serde_json::Value> {
    COURSES
        .iter()
        .map(|course| {
            serde_json::json!({
                "id": course.id,
                "name": course.name,
                "cost_per_lecture": course.cost_per_lecture,
                "lectures_required": course.lectures_required,
                "prerequisites": course.prerequisites.courses(),
                "completed": completed.contains(course.id),
                "eligible": is_eligible(course, completed),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn middle_school_has_no_prerequisites() {
        let Some(course) = course_by_id("middle_school") else {
            panic!("middle_school missing from catalogue");
        };
        assert!(is_eligible(course, &BTreeSet::new()));
    }

    #[test]
    fn bachelor_requires_high_school() {
        let Some(course) = course_by_id("bachelor_arts") else {
            panic!("bachelor_arts missing from catalogue");
        };
        assert!(!is_eligible(course, &completed(&["middle_school"])));
        assert!(is_eligible(course, &completed(&["middle_school", "high_school"])));
    }

    #[test]
    fn phd_accepts_either_master() {
        let Some(phd) = course_by_id("phd") else {
            panic!("phd missing from catalogue");
        };
        assert!(is_eligible(phd, &completed(&["master_arts"])));
        assert!(is_eligible(phd, &completed(&["master_science"])));
        assert!(!is_eligible(phd, &completed(&["bachelor_science"])));
    }

    #[test]
    fn mba_accepts_any_bachelor() {
        let Some(mba) = course_by_id("mba") else {
            panic!("mba missing from catalogue");
        };
        assert!(is_eligible(mba, &completed(&["bachelor_business"])));
        assert!(is_eligible(mba, &completed(&["bachelor_arts"])));
        assert!(!is_eligible(mba, &completed(&["high_school"])));
    }

    #[test]
    fn completed_courses_are_not_eligible() {
        let Some(course) = course_by_id("middle_school") else {
            panic!("middle_school missing from catalogue");
        };
        assert!(!is_eligible(course, &completed(&["middle_school"])));
    }

    #[test]
    fn unknown_course_is_none() {
        assert!(course_by_id("astrology").is_none());
    }

    #[test]
    fn catalogue_listing_flags_eligibility() {
        let listing = available_courses(&completed(&["middle_school"]));
        assert_eq!(listing.len(), COURSES.len());
        let high_school = listing
            .iter()
            .find(|entry| entry["id"] == "high_school")
            .cloned()
            .unwrap_or_default();
        assert_eq!(high_school["eligible"], true);
        let phd = listing
            .iter()
            .find(|entry| entry["id"] == "phd")
            .cloned()
            .unwrap_or_default();
        assert_eq!(phd["eligible"], false);
    }
}
