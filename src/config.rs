use tracing::warn;

/// Self-play configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Stop after this many half-moves even if nobody is mated.
    pub max_plies: u32,
    /// RNG seed for reproducible games; random when unset.
    pub seed: Option<u64>,
    /// Log the board after every move.
    pub show_board: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        AppConfig {
            max_plies: parse_or(&lookup, "CHESS_MAX_PLIES", defaults.max_plies),
            seed: lookup("CHESS_SEED").and_then(|v| match v.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!(value = %v, "ignoring unparsable CHESS_SEED");
                    None
                }
            }),
            show_board: parse_or(&lookup, "CHESS_SHOW_BOARD", defaults.show_board),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => default,
        Some(v) => v.parse().unwrap_or_else(|_| {
            warn!(key, value = %v, "ignoring unparsable setting");
            default
        }),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_plies: 200,
            seed: None,
            show_board: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_plies, 200);
        assert_eq!(config.seed, None);
        assert!(config.show_board);
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CHESS_MAX_PLIES", "40"),
            ("CHESS_SEED", "1234"),
            ("CHESS_SHOW_BOARD", "false"),
        ]));
        assert_eq!(config.max_plies, 40);
        assert_eq!(config.seed, Some(1234));
        assert!(!config.show_board);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CHESS_MAX_PLIES", "lots"),
            ("CHESS_SEED", "-5"),
        ]));
        assert_eq!(config.max_plies, 200);
        assert_eq!(config.seed, None);
    }
}
