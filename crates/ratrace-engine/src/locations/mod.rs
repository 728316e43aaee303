//! One rule module per location, plus opening hours and visit dispatch.
//!
//! Every rule has the same contract: it validates first, mutates only on
//! success, and returns a [`RuleOutcome`](ratrace_types::RuleOutcome) with
//! a player-facing message. None of them panic or return errors.
//!
//! # Submodules
//!
//! - [`estate_agent`] -- Flat browsing and rentals
//! - [`home`] -- Rest, scaled by flat tier
//! - [`job_office`] -- Job search and applications
//! - [`john_lewis`] -- Clothing and furniture purchases
//! - [`shop`] -- Food purchases (consumed immediately)
//! - [`university`] -- Enrollment and lectures
//! - [`workplace`] -- Working a shift

pub mod estate_agent;
pub mod home;
pub mod job_office;
pub mod john_lewis;
pub mod shop;
pub mod university;
pub mod workplace;

use ratrace_types::{Location, PlayerState, RuleOutcome};

use crate::config::GameConfig;

/// Opening hours for a location, as `(open_hour, close_hour)` in 24-hour
/// format. `None` means always open.
///
/// A location is open iff `open_hour <= current_hour < close_hour`.
pub const fn opening_hours(location: Location) -> Option<(u32, u32)> {
    match location {
        Location::Home | Location::Shop | Location::JohnLewis => None,
        Location::Workplace => Some((6, 22)),
        Location::University => Some((6, 21)),
        Location::JobOffice => Some((6, 18)),
        Location::EstateAgent => Some((6, 20)),
    }
}

/// The default visit rule for a location, used by the generic action
/// route and resolved at compile time.
pub fn visit(state: &mut PlayerState, config: &GameConfig, location: Location) -> RuleOutcome {
    match location {
        Location::Home => home::visit_home(state),
        Location::Workplace => workplace::visit_workplace(state, config),
        Location::University => university::attend_lecture(state),
        Location::Shop => shop::visit_shop(state),
        Location::JohnLewis => john_lewis::visit_john_lewis(state, config),
        Location::JobOffice => job_office::visit_job_office(state),
        Location::EstateAgent => estate_agent::visit_estate_agent(state),
    }
}
