//! Human-readable tier labels for player stats.
//!
//! The UI never shows raw numbers for appearance, tiredness, happiness, or
//! hunger -- it shows the band label. Bands cover 0--100 in steps of 20;
//! out-of-range values saturate at the extreme label (hunger can exceed 100
//! immediately after a day rollover).

/// Appearance labels indexed by look level 1--5.
const LOOK_LABELS: [&str; 5] = [
    "Shabby",
    "Scruffy",
    "Presentable",
    "Smart",
    "Very well groomed",
];

/// Tiredness bands: lower values mean well rested.
const TIREDNESS_BANDS: [(u32, u32, &str); 5] = [
    (0, 20, "Well rested"),
    (21, 40, "Slightly tired"),
    (41, 60, "Tired"),
    (61, 80, "Very tired"),
    (81, 100, "Exhausted"),
];

/// Happiness bands: higher values mean happier.
const HAPPINESS_BANDS: [(u32, u32, &str); 5] = [
    (0, 20, "Miserable"),
    (21, 40, "Unhappy"),
    (41, 60, "Content"),
    (61, 80, "Happy"),
    (81, 100, "Ecstatic"),
];

/// Hunger bands: lower values mean well fed.
const HUNGER_BANDS: [(u32, u32, &str); 5] = [
    (0, 20, "Full"),
    (21, 40, "Satisfied"),
    (41, 60, "Peckish"),
    (61, 80, "Hungry"),
    (81, 100, "Starving"),
];

/// Look up a value in a band table, saturating at the given fallback.
fn band_label(bands: &[(u32, u32, &'static str)], value: u32, fallback: &'static str) -> &'static str {
    bands
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&value))
        .map_or(fallback, |&(_, _, label)| label)
}

/// Label for a look level (1--5). Out-of-range levels read as `Shabby`.
pub fn look_label(look: u8) -> &'static str {
    match look {
        1..=5 => LOOK_LABELS[usize::from(look) - 1],
        _ => "Shabby",
    }
}

/// Label for a tiredness value. Values above 100 read as `Exhausted`.
pub fn tiredness_label(tiredness: u32) -> &'static str {
    band_label(&TIREDNESS_BANDS, tiredness, "Exhausted")
}

/// Label for a happiness value. Out-of-range values read as `Miserable`.
pub fn happiness_label(happiness: u32) -> &'static str {
    band_label(&HAPPINESS_BANDS, happiness, "Miserable")
}

/// Label for a hunger value. Values above 100 read as `Starving`.
pub fn hunger_label(hunger: u32) -> &'static str {
    band_label(&HUNGER_BANDS, hunger, "Starving")
}
