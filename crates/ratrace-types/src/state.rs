//! The per-player state document and its invariant-preserving helpers.
//!
//! [`PlayerState`] is the single mutable aggregate of the game. It is
//! persisted as a JSON document, mutated only by the engine's rule
//! functions and day clock, and passed explicitly -- there are no global
//! singletons.
//!
//! Every field carries a serde default, so documents written by older
//! builds (with missing keys) deserialize cleanly; that is the upgrade
//! path for old saves.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::{ChatRole, Location};
use crate::labels;

/// Current schema version of the state document.
pub const STATE_VERSION: u32 = 1;

/// Minutes in one in-game day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Starting money for a new player.
pub const DEFAULT_MONEY: i64 = 100;

/// Starting happiness for a new player.
pub const DEFAULT_HAPPINESS: u32 = 50;

/// Starting tiredness for a new player.
pub const DEFAULT_TIREDNESS: u32 = 0;

/// Starting hunger for a new player.
pub const DEFAULT_HUNGER: u32 = 0;

/// Job sentinel for a player without employment.
pub const UNEMPLOYED: &str = "Unemployed";

/// Maximum conversation entries kept per location.
pub const MAX_CONVERSATION_ENTRIES: usize = 10;

/// One entry in a location's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Who spoke.
    pub role: ChatRole,
    /// What they said.
    pub content: String,
}

/// A player's complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Schema version of this document.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Money in pounds. May go negative transiently; bankruptcy triggers
    /// at anything below zero.
    #[serde(default = "default_money")]
    pub money: i64,

    /// Minutes left in the current day, in `0..=1440`.
    #[serde(default = "default_time_remaining")]
    pub time_remaining: u32,

    /// Day counter. Monotonically increasing, preserved across endgame
    /// resets.
    #[serde(default = "default_turn")]
    pub turn: u32,

    /// Where the player currently is.
    #[serde(default = "default_location")]
    pub current_location: Location,

    /// Hunger, normally `0..=100`. The overnight increment is uncapped,
    /// so values above 100 can be observed until the next clamped update.
    #[serde(default = "default_hunger")]
    pub hunger: u32,

    /// Tiredness, clamped to `0..=100`.
    #[serde(default = "default_tiredness")]
    pub tiredness: u32,

    /// Happiness, clamped to `0..=100`.
    #[serde(default = "default_happiness")]
    pub happiness: u32,

    /// Appearance level 1--5, derived from owned clothing.
    #[serde(default = "default_look")]
    pub look: u8,

    /// Display name of the highest completed course (`"None"` initially).
    #[serde(default = "default_qualification")]
    pub qualification: String,

    /// Course ids the player has completed.
    #[serde(default)]
    pub completed_courses: BTreeSet<String>,

    /// Course id of the active enrollment, if any. Never a completed course.
    #[serde(default)]
    pub enrolled_course: Option<String>,

    /// Lectures attended toward the active enrollment.
    #[serde(default)]
    pub lectures_completed: u32,

    /// Current job title (`"Unemployed"` when out of work).
    #[serde(default = "default_job")]
    pub current_job: String,

    /// Nominal full-day wage of the current job.
    #[serde(default)]
    pub job_wage: i64,

    /// Housing tier 0--5 (0 = homeless).
    #[serde(default)]
    pub flat_tier: u8,

    /// Rent charged per day, always the catalogue rent for `flat_tier`.
    #[serde(default)]
    pub rent: i64,

    /// Inventory, in purchase order. Duplicates are allowed.
    #[serde(default)]
    pub items: Vec<String>,

    /// Per-location NPC conversation history, capped at
    /// [`MAX_CONVERSATION_ENTRIES`] entries each.
    #[serde(default)]
    pub conversation_history: BTreeMap<Location, Vec<ChatEntry>>,
}

fn default_version() -> u32 {
    STATE_VERSION
}

fn default_money() -> i64 {
    DEFAULT_MONEY
}

fn default_time_remaining() -> u32 {
    MINUTES_PER_DAY
}

fn default_turn() -> u32 {
    1
}

fn default_location() -> Location {
    Location::Home
}

fn default_hunger() -> u32 {
    DEFAULT_HUNGER
}

fn default_tiredness() -> u32 {
    DEFAULT_TIREDNESS
}

fn default_happiness() -> u32 {
    DEFAULT_HAPPINESS
}

fn default_look() -> u8 {
    1
}

fn default_qualification() -> String {
    String::from("None")
}

fn default_job() -> String {
    String::from(UNEMPLOYED)
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            version: default_version(),
            money: default_money(),
            time_remaining: default_time_remaining(),
            turn: default_turn(),
            current_location: default_location(),
            hunger: default_hunger(),
            tiredness: default_tiredness(),
            happiness: default_happiness(),
            look: default_look(),
            qualification: default_qualification(),
            completed_courses: BTreeSet::new(),
            enrolled_course: None,
            lectures_completed: 0,
            current_job: default_job(),
            job_wage: 0,
            flat_tier: 0,
            rent: 0,
            items: Vec::new(),
            conversation_history: BTreeMap::new(),
        }
    }
}

impl PlayerState {
    /// Create a fresh state with the standard starting values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the player currently holds a job.
    pub fn is_employed(&self) -> bool {
        self.current_job != UNEMPLOYED
    }

    /// Add money to the balance.
    pub const fn add_money(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Spend money if the balance covers it. Returns `false` (without
    /// mutating) when funds are insufficient.
    pub const fn try_spend(&mut self, amount: i64) -> bool {
        if self.money >= amount {
            self.money -= amount;
            true
        } else {
            false
        }
    }

    /// Adjust happiness by a signed delta, clamped to `0..=100`.
    pub fn update_happiness(&mut self, delta: i64) {
        self.happiness = clamped_stat(self.happiness, delta);
    }

    /// Adjust tiredness by a signed delta, clamped to `0..=100`.
    pub fn update_tiredness(&mut self, delta: i64) {
        self.tiredness = clamped_stat(self.tiredness, delta);
    }

    /// Adjust hunger by a signed delta, clamped to `0..=100`.
    ///
    /// The overnight hunger increment bypasses this helper on purpose --
    /// it is the one uncapped path.
    pub fn update_hunger(&mut self, delta: i64) {
        self.hunger = clamped_stat(self.hunger, delta);
    }

    /// Whether the inventory contains the named item.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|owned| owned == item)
    }

    /// Append an item to the inventory. Duplicates are kept -- the look
    /// computation counts them.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Record one conversation exchange at a location, trimming history to
    /// the most recent [`MAX_CONVERSATION_ENTRIES`] entries.
    pub fn record_conversation(&mut self, location: Location, user: &str, assistant: &str) {
        let history = self.conversation_history.entry(location).or_default();
        history.push(ChatEntry {
            role: ChatRole::User,
            content: user.to_owned(),
        });
        history.push(ChatEntry {
            role: ChatRole::Assistant,
            content: assistant.to_owned(),
        });
        if history.len() > MAX_CONVERSATION_ENTRIES {
            let excess = history.len() - MAX_CONVERSATION_ENTRIES;
            history.drain(..excess);
        }
    }

    /// Conversation history for a location (empty when none exists).
    pub fn conversation_at(&self, location: Location) -> &[ChatEntry] {
        self.conversation_history
            .get(&location)
            .map_or(&[], Vec::as_slice)
    }

    /// The UI-facing JSON document: every serde field plus the derived
    /// `*_label` fields the frontend renders.
    pub fn to_document(&self) -> serde_json::Value {
        let mut document = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = document.as_object_mut() {
            map.insert(
                "look_label".to_owned(),
                serde_json::Value::from(labels::look_label(self.look)),
            );
            map.insert(
                "tiredness_label".to_owned(),
                serde_json::Value::from(labels::tiredness_label(self.tiredness)),
            );
            map.insert(
                "happiness_label".to_owned(),
                serde_json::Value::from(labels::happiness_label(self.happiness)),
            );
            map.insert(
                "hunger_label".to_owned(),
                serde_json::Value::from(labels::hunger_label(self.hunger)),
            );
        }
        document
    }
}

/// Apply a signed delta to a 0--100 stat, clamping the result.
fn clamped_stat(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta).clamp(0, 100);
    u32::try_from(next).unwrap_or(0)
}
