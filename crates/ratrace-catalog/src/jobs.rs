//! The job market: seventeen jobs gated by education and appearance.
//!
//! Each job names the course that unlocks it (or none) and a nominal
//! full-day wage. The appearance requirement is not stored per job -- it is
//! derived from the wage band, so better-paid roles always demand a
//! sharper look.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::courses;

/// One job in the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Job {
    /// Job title as shown to the player and stored in the state.
    pub title: &'static str,
    /// Nominal full-day wage in pounds. A single shift pays a quarter.
    pub wage: i64,
    /// Course id required to qualify, if any.
    pub required_course: Option<&'static str>,
}

/// The full job market, ordered by wage.
pub const JOBS: [Job; 17] = [
    Job { title: "Janitor", wage: 20, required_course: None },
    Job { title: "Shelf Stacker", wage: 30, required_course: None },
    Job { title: "Cashier", wage: 35, required_course: Some("middle_school") },
    Job { title: "Delivery Driver", wage: 45, required_course: Some("middle_school") },
    Job { title: "Receptionist", wage: 50, required_course: Some("high_school") },
    Job { title: "Office Worker", wage: 60, required_course: Some("high_school") },
    Job { title: "Electrician", wage: 75, required_course: Some("vocational") },
    Job { title: "Copywriter", wage: 80, required_course: Some("bachelor_arts") },
    Job { title: "Lab Technician", wage: 85, required_course: Some("bachelor_science") },
    Job { title: "Accountant", wage: 90, required_course: Some("bachelor_business") },
    Job { title: "Junior Developer", wage: 95, required_course: Some("bachelor_science") },
    Job { title: "Curator", wage: 105, required_course: Some("master_arts") },
    Job { title: "Research Scientist", wage: 110, required_course: Some("master_science") },
    Job { title: "Marketing Manager", wage: 130, required_course: Some("mba") },
    Job { title: "University Lecturer", wage: 150, required_course: Some("phd") },
    Job { title: "Operations Director", wage: 170, required_course: Some("executive_mba") },
    Job { title: "Executive", wage: 200, required_course: Some("executive_mba") },
];

/// Appearance level required for a given wage.
///
/// Wage bands: up to £30 needs look 1, up to £60 look 2, up to £100
/// look 3, up to £150 look 4, anything above look 5.
pub const fn look_required(wage: i64) -> u8 {
    match wage {
        i64::MIN..=30 => 1,
        31..=60 => 2,
        61..=100 => 3,
        101..=150 => 4,
        _ => 5,
    }
}

/// Look up a job by its exact title.
pub fn job_by_title(title: &str) -> Option<&'static Job> {
    JOBS.iter().find(|job| job.title == title)
}

/// Whether the player's transcript satisfies a job's education requirement.
pub fn education_qualifies(job: &Job, completed: &BTreeSet<String>) -> bool {
    job.required_course
        .is_none_or(|course| completed.contains(course))
}

/// The highest-wage job the player's education allows, ignoring appearance.
///
/// Always exists: the bottom of the market requires no qualifications.
pub fn best_by_education(completed: &BTreeSet<String>) -> &'static Job {
    JOBS.iter()
        .filter(|job| education_qualifies(job, completed))
        .max_by_key(|job| job.wage)
        .unwrap_or(&JOBS[0])
}

/// The highest-wage job the player qualifies for on both education and
/// appearance.
pub fn best_fully_eligible(completed: &BTreeSet<String>, look: u8) -> &'static Job {
    JOBS.iter()
        .filter(|job| education_qualifies(job, completed) && look_required(job.wage) <= look)
        .max_by_key(|job| job.wage)
        .unwrap_or(&JOBS[0])
}

/// The job market with per-job requirement flags for the given player,
/// as served by the job office listing endpoint.
pub fn available_jobs(completed: &BTreeSet<String>, look: u8) -> Vec<serde_json::Value> {
    JOBS.iter()
        .map(|job| {
            let education_ok = education_qualifies(job, completed);
            let needed_look = look_required(job.wage);
            serde_json::json!({
                "title": job.title,
                "wage": job.wage,
                "required_course": job.required_course,
                "look_required": needed_look,
                "education_ok": education_ok,
                "look_ok": needed_look <= look,
                "eligible": education_ok && needed_look <= look,
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
    fn wage_bands_map_to_look_levels() {
        assert_eq!(look_required(20), 1);
        assert_eq!(look_required(30), 1);
        assert_eq!(look_required(31), 2);
        assert_eq!(look_required(60), 2);
        assert_eq!(look_required(100), 3);
        assert_eq!(look_required(150), 4);
        assert_eq!(look_required(200), 5);
    }

    #[test]
    fn unqualified_shabby_player_stays_in_the_bottom_band() {
        let best = best_fully_eligible(&BTreeSet::new(), 1);
        assert_eq!(best.title, "Shelf Stacker");
    }

    #[test]
    fn education_unlocks_better_jobs() {
        let transcript = completed(&["middle_school", "high_school"]);
        let best = best_by_education(&transcript);
        assert_eq!(best.title, "Office Worker");
    }

    #[test]
    fn appearance_caps_the_offer() {
        // Office Worker (£60) needs look 2; at look 1 only the bottom
        // band is reachable.
        let transcript = completed(&["middle_school", "high_school"]);
        let best = best_fully_eligible(&transcript, 1);
        assert_eq!(best.title, "Shelf Stacker");
        let best = best_fully_eligible(&transcript, 2);
        assert_eq!(best.title, "Office Worker");
    }

    #[test]
    fn executive_requires_the_full_ladder() {
        let transcript = completed(&[
            "middle_school",
            "high_school",
            "bachelor_business",
            "mba",
            "executive_mba",
        ]);
        assert_eq!(best_by_education(&transcript).title, "Executive");
        // Even fully qualified, an Executive must be very well groomed.
        assert_eq!(best_fully_eligible(&transcript, 4).title, "Marketing Manager");
        assert_eq!(best_fully_eligible(&transcript, 5).title, "Executive");
    }

    #[test]
    fn listing_reports_blocking_factors() {
        let listing = available_jobs(&completed(&["middle_school"]), 1);
        let cashier = listing
            .iter()
            .find(|entry| entry["title"] == "Cashier")
            .cloned()
            .unwrap_or_default();
        assert_eq!(cashier["education_ok"], true);
        assert_eq!(cashier["look_ok"], false);
        assert_eq!(cashier["eligible"], false);
    }

    #[test]
    fn unknown_title_is_none() {
        assert!(job_by_title("Astronaut").is_none());
    }
}
