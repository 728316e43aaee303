//! The six housing tiers, from the streets to a penthouse.
//!
//! Tier 0 is homelessness: no rent, but rest barely works. Rent is charged
//! once per day at rollover; the engine keeps `rent` on the player state in
//! lockstep with this table.

use serde::Serialize;

/// One rentable flat tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flat {
    /// Housing tier, 0--5.
    pub tier: u8,
    /// Display name.
    pub name: &'static str,
    /// Rent charged per day.
    pub rent: i64,
    /// Listing description shown by the estate agent.
    pub description: &'static str,
}

/// The estate agent's full listing, ordered by tier.
pub const FLATS: [Flat; 6] = [
    Flat {
        tier: 0,
        name: "Homeless",
        rent: 0,
        description: "Give up your flat and live on the streets. No rent to pay, but rest is much less effective.",
    },
    Flat {
        tier: 1,
        name: "Dingy Bedsit",
        rent: 10,
        description: "A cramped, damp bedsit with peeling wallpaper and a shared bathroom down the hall.",
    },
    Flat {
        tier: 2,
        name: "Basic Studio",
        rent: 25,
        description: "A small but functional studio flat. Nothing fancy, but it keeps the rain out.",
    },
    Flat {
        tier: 3,
        name: "Comfortable Flat",
        rent: 50,
        description: "A decent one-bedroom flat with modern amenities and a proper kitchen.",
    },
    Flat {
        tier: 4,
        name: "Stylish Apartment",
        rent: 100,
        description: "A spacious two-bedroom apartment with high ceilings and quality furnishings.",
    },
    Flat {
        tier: 5,
        name: "Luxury Penthouse",
        rent: 200,
        description: "An exquisite penthouse with panoramic city views, designer interiors, and a private terrace.",
    },
];

/// Look up a flat by tier.
pub fn flat_by_tier(tier: u8) -> Option<&'static Flat> {
    FLATS.iter().find(|flat| flat.tier == tier)
}

/// Display label for a flat tier. Unknown tiers read as `Homeless`.
pub fn flat_label(tier: u8) -> &'static str {
    flat_by_tier(tier).map_or("Homeless", |flat| flat.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_contiguous() {
        for (index, flat) in FLATS.iter().enumerate() {
            assert_eq!(usize::from(flat.tier), index);
        }
    }

    #[test]
    fn homeless_pays_no_rent() {
        let Some(flat) = flat_by_tier(0) else {
            panic!("tier 0 missing from catalogue");
        };
        assert_eq!(flat.rent, 0);
        assert_eq!(flat.name, "Homeless");
    }

    #[test]
    fn comfortable_flat_matches_listing() {
        let Some(flat) = flat_by_tier(3) else {
            panic!("tier 3 missing from catalogue");
        };
        assert_eq!(flat.name, "Comfortable Flat");
        assert_eq!(flat.rent, 50);
    }

    #[test]
    fn unknown_tier_is_none() {
        assert!(flat_by_tier(6).is_none());
        assert_eq!(flat_label(6), "Homeless");
    }
}
