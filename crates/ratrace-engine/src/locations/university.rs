//! University rules: course enrollment and lecture attendance.
//!
//! Enrollment is free but gated by prerequisites; each lecture charges the
//! course's fee. Completing the final lecture records the course, updates
//! the displayed qualification, and clears the enrollment.

use ratrace_catalog::courses;
use ratrace_types::{PlayerState, RuleOutcome};

/// Enroll in a course by id.
///
/// Fails on an unknown id, an already-completed course, a repeat
/// enrollment, or unmet prerequisites (any-of prerequisites name the
/// alternatives). Switching from another course discards the lecture
/// progress made there.
pub fn enroll_course(state: &mut PlayerState, course_id: &str) -> RuleOutcome {
    let Some(course) = courses::course_by_id(course_id) else {
        return RuleOutcome::failure(format!("Unknown course: {course_id}."));
    };

    if state.completed_courses.contains(course.id) {
        return RuleOutcome::failure(format!("You've already completed {}!", course.name));
    }

    if state.enrolled_course.as_deref() == Some(course.id) {
        return RuleOutcome::failure(format!("You're already enrolled in {}!", course.name));
    }

    if !course.prerequisites.satisfied_by(&state.completed_courses) {
        return RuleOutcome::failure(prerequisite_message(course));
    }

    let switched_from = state.enrolled_course.take();
    let discarded = state.lectures_completed;
    state.enrolled_course = Some(course.id.to_owned());
    state.lectures_completed = 0;

    let message = match switched_from.and_then(|id| courses::course_by_id(&id)) {
        Some(previous) if discarded > 0 => format!(
            "You've enrolled in {}! Your {} progress ({} lectures) is lost. {} lectures at £{} each to complete.",
            course.name, previous.name, discarded, course.lectures_required, course.cost_per_lecture
        ),
        Some(previous) => format!(
            "You've switched from {} to {}! {} lectures at £{} each to complete.",
            previous.name, course.name, course.lectures_required, course.cost_per_lecture
        ),
        None => format!(
            "You've enrolled in {}! {} lectures at £{} each to complete.",
            course.name, course.lectures_required, course.cost_per_lecture
        ),
    };

    RuleOutcome::success(message)
}

/// Attend one lecture of the enrolled course (the default university
/// visit).
///
/// Fails with guidance when not enrolled, and on insufficient funds for
/// the lecture fee. The final lecture completes the course.
pub fn attend_lecture(state: &mut PlayerState) -> RuleOutcome {
    let Some(course) = state
        .enrolled_course
        .as_deref()
        .and_then(courses::course_by_id)
    else {
        return RuleOutcome::failure(
            "You're not enrolled in any course. Enroll first to attend lectures!",
        );
    };

    if !state.try_spend(course.cost_per_lecture) {
        return RuleOutcome::failure(format!(
            "Not enough money! A {} lecture costs £{}.",
            course.name, course.cost_per_lecture
        ));
    }

    state.lectures_completed = state.lectures_completed.saturating_add(1);

    if state.lectures_completed >= course.lectures_required {
        state.completed_courses.insert(course.id.to_owned());
        state.qualification = course.name.to_owned();
        state.enrolled_course = None;
        state.lectures_completed = 0;
        return RuleOutcome::success(format!(
            "Congratulations! You've completed {} and earned the qualification!",
            course.name
        ));
    }

    RuleOutcome::success(format!(
        "You attended a {} lecture ({}/{}). (-£{})",
        course.name, state.lectures_completed, course.lectures_required, course.cost_per_lecture
    ))
}

/// Failure message naming what blocks an enrollment.
fn prerequisite_message(course: &courses::Course) -> String {
    let names: Vec<&str> = course
        .prerequisites
        .courses()
        .iter()
        .filter_map(|id| courses::course_by_id(id).map(|c| c.name))
        .collect();

    match course.prerequisites {
        courses::Prerequisites::AnyOf(_) => format!(
            "You can't enroll in {} yet. It requires one of: {}.",
            course.name,
            names.join(", ")
        ),
        _ => format!(
            "You can't enroll in {} yet. It requires: {}.",
            course.name,
            names.join(", ")
        ),
    }
}
