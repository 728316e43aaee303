//! Tunable game parameters, loadable from a YAML file.
//!
//! All tuning lives in one [`GameConfig`] value that callers construct
//! explicitly and pass into the engine functions -- there is no global
//! config singleton. Every field has a default matching the standard
//! game balance, so an empty YAML document (or no file at all) yields a
//! playable configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use ratrace_types::{
    Location, DEFAULT_HAPPINESS, DEFAULT_HUNGER, DEFAULT_MONEY, DEFAULT_TIREDNESS,
    MINUTES_PER_DAY,
};

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration values are inconsistent.
    #[error("invalid game configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Travel/action minutes override for a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimeOverride {
    /// Minutes spent travelling to the location.
    pub travel: u32,
    /// Minutes spent on the activity itself.
    pub action: u32,
}

/// Complete game tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Starting (and post-reset) money.
    #[serde(default = "default_initial_money")]
    pub initial_money: i64,

    /// Starting (and post-reset) happiness.
    #[serde(default = "default_initial_happiness")]
    pub initial_happiness: u32,

    /// Starting (and post-reset) tiredness.
    #[serde(default = "default_initial_tiredness")]
    pub initial_tiredness: u32,

    /// Starting (and post-reset) hunger.
    #[serde(default = "default_initial_hunger")]
    pub initial_hunger: u32,

    /// Minutes in one in-game day.
    #[serde(default = "default_minutes_per_day")]
    pub minutes_per_day: u32,

    /// Wall-clock hour at which a day begins (a full day starts at 06:00).
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    /// When `time_remaining` drops below this, the day rolls over.
    #[serde(default = "default_new_day_threshold")]
    pub new_day_threshold: u32,

    /// Default minutes of travel for any visit.
    #[serde(default = "default_travel_minutes")]
    pub travel_minutes: u32,

    /// Default minutes the activity itself takes.
    #[serde(default = "default_action_minutes")]
    pub action_minutes: u32,

    /// Per-location overrides of the travel/action pair.
    #[serde(default)]
    pub time_overrides: BTreeMap<Location, TimeOverride>,

    /// Hunger added at every day rollover. Deliberately applied without
    /// clamping.
    #[serde(default = "default_hunger_per_turn")]
    pub hunger_per_turn: u32,

    /// Tiredness added by one shift at the workplace.
    #[serde(default = "default_work_tiredness")]
    pub work_tiredness: u32,

    /// Happiness gained from a John Lewis purchase.
    #[serde(default = "default_shopping_happiness")]
    pub shopping_happiness: u32,

    /// Tiredness *and* hunger must both reach this level for a burnout.
    #[serde(default = "default_burnout_threshold")]
    pub burnout_threshold: u32,
}

fn default_initial_money() -> i64 {
    DEFAULT_MONEY
}

fn default_initial_happiness() -> u32 {
    DEFAULT_HAPPINESS
}

fn default_initial_tiredness() -> u32 {
    DEFAULT_TIREDNESS
}

fn default_initial_hunger() -> u32 {
    DEFAULT_HUNGER
}

fn default_minutes_per_day() -> u32 {
    MINUTES_PER_DAY
}

fn default_day_start_hour() -> u32 {
    6
}

fn default_new_day_threshold() -> u32 {
    15
}

fn default_travel_minutes() -> u32 {
    60
}

fn default_action_minutes() -> u32 {
    120
}

fn default_hunger_per_turn() -> u32 {
    25
}

fn default_work_tiredness() -> u32 {
    10
}

fn default_shopping_happiness() -> u32 {
    10
}

fn default_burnout_threshold() -> u32 {
    81
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_money: default_initial_money(),
            initial_happiness: default_initial_happiness(),
            initial_tiredness: default_initial_tiredness(),
            initial_hunger: default_initial_hunger(),
            minutes_per_day: default_minutes_per_day(),
            day_start_hour: default_day_start_hour(),
            new_day_threshold: default_new_day_threshold(),
            travel_minutes: default_travel_minutes(),
            action_minutes: default_action_minutes(),
            time_overrides: BTreeMap::new(),
            hunger_per_turn: default_hunger_per_turn(),
            work_tiredness: default_work_tiredness(),
            shopping_happiness: default_shopping_happiness(),
            burnout_threshold: default_burnout_threshold(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values are inconsistent.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on a parse failure or
    /// [`ConfigError::Invalid`] if the values are inconsistent.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// A single visit must never consume a whole day: the clock guarantees
    /// at most one rollover per visit, and that only holds while every
    /// travel+action total stays below `minutes_per_day`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any invariant is broken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minutes_per_day == 0 {
            return Err(ConfigError::Invalid {
                reason: "minutes_per_day must be at least 1".to_owned(),
            });
        }
        if self.day_start_hour >= 24 {
            return Err(ConfigError::Invalid {
                reason: format!("day_start_hour {} is not a valid hour", self.day_start_hour),
            });
        }
        if self.new_day_threshold > self.minutes_per_day {
            return Err(ConfigError::Invalid {
                reason: "new_day_threshold cannot exceed minutes_per_day".to_owned(),
            });
        }

        let default_total = self.travel_minutes.saturating_add(self.action_minutes);
        if default_total >= self.minutes_per_day {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "default visit cost {default_total} must stay below minutes_per_day {}",
                    self.minutes_per_day
                ),
            });
        }
        for (location, cost) in &self.time_overrides {
            let total = cost.travel.saturating_add(cost.action);
            if total >= self.minutes_per_day {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "visit cost {total} for {location} must stay below minutes_per_day {}",
                        self.minutes_per_day
                    ),
                });
            }
        }

        Ok(())
    }
}
