//! Enumeration types shared across the Ratrace workspace.

use serde::{Deserialize, Serialize};

/// The seven places a player can visit.
///
/// Serialized in `snake_case` so wire values match the route and document
/// keys used by the HTTP layer (`"john_lewis"`, `"estate_agent"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// The player's home (or a spot on the streets at flat tier 0).
    Home,
    /// The player's place of employment.
    Workplace,
    /// The university: enrollment and lectures.
    University,
    /// The food shop.
    Shop,
    /// The John Lewis department store (clothing and furniture).
    JohnLewis,
    /// The job office: job search and applications.
    JobOffice,
    /// The estate agent: flat rentals.
    EstateAgent,
}

impl Location {
    /// Every location, in display order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Workplace,
        Self::University,
        Self::Shop,
        Self::JohnLewis,
        Self::JobOffice,
        Self::EstateAgent,
    ];

    /// The wire identifier for this location (`snake_case`).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Workplace => "workplace",
            Self::University => "university",
            Self::Shop => "shop",
            Self::JohnLewis => "john_lewis",
            Self::JobOffice => "job_office",
            Self::EstateAgent => "estate_agent",
        }
    }

    /// The name used when talking about this location in player messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Workplace => "The workplace",
            Self::University => "The university",
            Self::Shop => "The corner shop",
            Self::JohnLewis => "John Lewis",
            Self::JobOffice => "The job office",
            Self::EstateAgent => "The estate agent",
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl core::str::FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.id() == s)
            .ok_or_else(|| UnknownLocation(s.to_owned()))
    }
}

/// Error returned when parsing an unrecognized location identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocation(pub String);

impl core::fmt::Display for UnknownLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown location: {}", self.0)
    }
}

impl core::error::Error for UnknownLocation {}

/// The speaker of a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The player.
    User,
    /// The location's NPC.
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_ids_round_trip_through_parse() {
        for location in Location::ALL {
            let parsed: Location = location.id().parse().unwrap_or(Location::Home);
            assert_eq!(parsed, location);
        }
    }

    #[test]
    fn unknown_location_is_rejected() {
        let result: Result<Location, _> = "moon_base".parse();
        assert!(result.is_err());
    }

    #[test]
    fn location_serde_uses_snake_case() {
        let json = serde_json::to_string(&Location::JohnLewis).unwrap_or_default();
        assert_eq!(json, "\"john_lewis\"");
        let back: Result<Location, _> = serde_json::from_str("\"estate_agent\"");
        assert_eq!(back.ok(), Some(Location::EstateAgent));
    }

    #[test]
    fn chat_role_serde_is_lowercase() {
        let json = serde_json::to_string(&ChatRole::Assistant).unwrap_or_default();
        assert_eq!(json, "\"assistant\"");
    }
}
