//! Job office rules: automatic placement and targeted applications.
//!
//! The office always offers the best job the player's education *and*
//! appearance allow. When a better-paid role is blocked only by
//! appearance, the messages say so -- appearance is the lever players
//! most often miss.

use ratrace_catalog::jobs;
use ratrace_types::{PlayerState, RuleOutcome};

/// Take the best job currently available (the default job office visit).
///
/// Fails with guidance when the office has nothing better than the
/// player's current job.
pub fn visit_job_office(state: &mut PlayerState) -> RuleOutcome {
    let best = jobs::best_fully_eligible(&state.completed_courses, state.look);
    let best_by_education = jobs::best_by_education(&state.completed_courses);

    if state.current_job == best.title {
        if best_by_education.wage > best.wage {
            return RuleOutcome::failure(format!(
                "No new offers. {} would pay £{} per day, but it needs appearance level {} and you're at {}.",
                best_by_education.title,
                best_by_education.wage,
                jobs::look_required(best_by_education.wage),
                state.look
            ));
        }
        return RuleOutcome::failure(
            "You already have the best job available to you!",
        );
    }

    state.current_job = best.title.to_owned();
    state.job_wage = best.wage;

    let mut message = format!(
        "You secured a job as {} earning £{} per day!",
        best.title, best.wage
    );
    if best_by_education.wage > best.wage {
        message.push_str(&format!(
            " With a sharper look you could be a {}.",
            best_by_education.title
        ));
    }

    RuleOutcome::success(message)
}

/// Apply for a specific job by title.
///
/// Education and appearance are validated independently so the failure
/// message names whichever factor blocks the application.
pub fn apply_for_job(state: &mut PlayerState, job_title: &str) -> RuleOutcome {
    let Some(job) = jobs::job_by_title(job_title) else {
        return RuleOutcome::failure(format!("There's no opening for '{job_title}'."));
    };

    if !jobs::education_qualifies(job, &state.completed_courses) {
        let course_name = job
            .required_course
            .and_then(ratrace_catalog::courses::course_by_id)
            .map_or("a qualification", |course| course.name);
        return RuleOutcome::failure(format!(
            "The {} role requires {course_name}. Hit the books first!",
            job.title
        ));
    }

    let needed_look = jobs::look_required(job.wage);
    if needed_look > state.look {
        return RuleOutcome::failure(format!(
            "You don't look the part for {}. Appearance level {} required, you're at {}.",
            job.title, needed_look, state.look
        ));
    }

    if state.current_job == job.title {
        return RuleOutcome::failure(format!("You already work as {}!", job.title));
    }

    state.current_job = job.title.to_owned();
    state.job_wage = job.wage;

    RuleOutcome::success(format!(
        "You got the job! You're now a {} earning £{} per day.",
        job.title, job.wage
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_gets_a_bottom_band_job() {
        let mut state = PlayerState::new();
        let outcome = visit_job_office(&mut state);
        assert!(outcome.success);
        assert_eq!(state.current_job, "Shelf Stacker");
        assert_eq!(state.job_wage, 30);
    }

    #[test]
    fn office_hints_at_appearance_blocked_roles() {
        let mut state = PlayerState::new();
        state.completed_courses.insert(String::from("middle_school"));
        state.completed_courses.insert(String::from("high_school"));
        // Look 1: Office Worker (£60, look 2) is out of reach.
        let outcome = visit_job_office(&mut state);
        assert!(outcome.success);
        assert_eq!(state.current_job, "Shelf Stacker");
        assert!(outcome.message.contains("Office Worker"));
    }

    #[test]
    fn repeat_visit_with_nothing_better_fails_with_guidance() {
        let mut state = PlayerState::new();
        state.completed_courses.insert(String::from("middle_school"));
        state.completed_courses.insert(String::from("high_school"));
        let _ = visit_job_office(&mut state);
        assert_eq!(state.current_job, "Shelf Stacker");
        // Still look 1: the better offers are appearance-blocked.
        let outcome = visit_job_office(&mut state);
        assert!(!outcome.success);
        assert!(outcome.message.contains("appearance level"));
    }

    #[test]
    fn repeat_visit_at_the_ceiling_fails_plainly() {
        let mut state = PlayerState::new();
        state.look = 5;
        let _ = visit_job_office(&mut state);
        assert_eq!(state.current_job, "Shelf Stacker");
        let outcome = visit_job_office(&mut state);
        assert!(!outcome.success);
        assert!(outcome.message.contains("best job"));
    }

    #[test]
    fn application_blocked_by_education_names_the_course() {
        let mut state = PlayerState::new();
        state.look = 5;
        let outcome = apply_for_job(&mut state, "Junior Developer");
        assert!(!outcome.success);
        assert!(outcome.message.contains("Bachelor of Science"));
        assert_eq!(state.current_job, "Unemployed");
    }

    #[test]
    fn application_blocked_by_appearance_names_the_level() {
        let mut state = PlayerState::new();
        state.completed_courses.insert(String::from("middle_school"));
        let outcome = apply_for_job(&mut state, "Cashier");
        assert!(!outcome.success);
        assert!(outcome.message.contains("Appearance level 2"));
    }

    #[test]
    fn successful_application_sets_job_and_wage() {
        let mut state = PlayerState::new();
        state.completed_courses.insert(String::from("middle_school"));
        state.look = 2;
        let outcome = apply_for_job(&mut state, "Cashier");
        assert!(outcome.success);
        assert_eq!(state.current_job, "Cashier");
        assert_eq!(state.job_wage, 35);
    }

    #[test]
    fn applying_for_the_current_job_fails() {
        let mut state = PlayerState::new();
        state.completed_courses.insert(String::from("middle_school"));
        state.look = 2;
        let _ = apply_for_job(&mut state, "Cashier");
        let outcome = apply_for_job(&mut state, "Cashier");
        assert!(!outcome.success);
        assert!(outcome.message.contains("already work"));
    }

    #[test]
    fn unknown_title_fails() {
        let mut state = PlayerState::new();
        let outcome = apply_for_job(&mut state, "Wizard");
        assert!(!outcome.success);
        assert!(outcome.message.contains("no opening"));
    }
}
