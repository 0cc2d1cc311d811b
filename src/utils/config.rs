// Centralized configuration for the Escada bot

use anyhow::{anyhow, Context as _, Result};

/// Default number of rows on the leaderboard
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Discord caps embed descriptions, keep leaderboards readable
pub const MAX_LEADERBOARD_SIZE: usize = 25;

/// Runtime settings, read once at startup
#[derive(Clone)]
pub struct Settings {
    pub discord_token: String,
    pub supabase_url: String,
    pub supabase_key: String,
    pub command_prefix: String,
    pub leaderboard_size: usize,
}

// Keep secrets out of logs
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("discord_token", &"***")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"***")
            .field("command_prefix", &self.command_prefix)
            .field("leaderboard_size", &self.leaderboard_size)
            .finish()
    }
}

impl Settings {
    /// Load from the process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{} must be set", key))
        };

        let leaderboard_size = match lookup("LEADERBOARD_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("LEADERBOARD_SIZE is not a number: {}", raw))?,
            None => DEFAULT_LEADERBOARD_SIZE,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_KEY")?,
            command_prefix: lookup("COMMAND_PREFIX").unwrap_or_else(|| "e!".to_string()),
            leaderboard_size: leaderboard_size.clamp(1, MAX_LEADERBOARD_SIZE),
        })
    }
}

/// Discord embed colors
pub mod colors {
    pub const PRIMARY: u32 = 0x7c3aed;
    pub const SUCCESS: u32 = 0x2ecc71;
    pub const INFO: u32 = 0x3498db;
}

/// Parse a "#RRGGBB" level color into an embed color
pub fn parse_hex_color(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("DISCORD_TOKEN", "token"),
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_KEY", "key"),
    ];

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&BASE)).unwrap();
        assert_eq!(settings.command_prefix, "e!");
        assert_eq!(settings.leaderboard_size, DEFAULT_LEADERBOARD_SIZE);
    }

    #[test]
    fn test_missing_required() {
        let err = Settings::from_lookup(lookup_from(&BASE[..2])).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_KEY"));
    }

    #[test]
    fn test_leaderboard_size_is_clamped() {
        let mut pairs = BASE.to_vec();
        pairs.push(("LEADERBOARD_SIZE", "500"));
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(settings.leaderboard_size, MAX_LEADERBOARD_SIZE);

        let mut pairs = BASE.to_vec();
        pairs.push(("LEADERBOARD_SIZE", "ten"));
        assert!(Settings::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let settings = Settings::from_lookup(lookup_from(&BASE)).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("token\""));
        assert!(printed.contains("***"));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#7C3AED"), Some(0x7c3aed));
        assert_eq!(parse_hex_color("60A5FA"), Some(0x60a5fa));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
