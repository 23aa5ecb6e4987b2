//! Tunable thresholds for the decision ladder.
use std::env;

/// Thresholds the decision ladder compares the observation against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    /// Health at or below which the bot abandons everything to seek refuge.
    pub critical_health: u32,
}

impl BotConfig {
    pub const DEFAULT_CRITICAL_HEALTH: u32 = 51;

    pub const fn new() -> Self {
        Self {
            critical_health: Self::DEFAULT_CRITICAL_HEALTH,
        }
    }

    pub const fn with_critical_health(mut self, critical_health: u32) -> Self {
        self.critical_health = critical_health;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_CRITICAL_HEALTH` - Critical health threshold (default: 51)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BotConfig::from_env`] with an arbitrary variable source.
    ///
    /// Unparsable values are ignored and leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(health) = parse(&lookup, "BOT_CRITICAL_HEALTH") {
            config.critical_health = health;
        }

        config
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tuned_threshold() {
        assert_eq!(BotConfig::default().critical_health, 51);
    }

    #[test]
    fn lookup_overrides_the_threshold() {
        let config = BotConfig::from_lookup(|key| match key {
            "BOT_CRITICAL_HEALTH" => Some(" 30 ".to_owned()),
            _ => None,
        });
        assert_eq!(config.critical_health, 30);
    }

    #[test]
    fn garbage_leaves_the_default() {
        let config =
            BotConfig::from_lookup(|key| (key == "BOT_CRITICAL_HEALTH").then(|| "low".to_owned()));
        assert_eq!(config, BotConfig::default());
    }
}
