//! Per-instance configuration read from the carousel region's `data-*`
//! attributes.

use core_types::Millis;

pub const DEFAULT_INTERVAL_MS: Millis = 5000;
pub const CONTROLS_HIDE_DELAY_MS: Millis = 2500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Auto-advance period.
    pub interval: Millis,
    /// Stop automatically once playback reaches the last slide.
    pub play_once: bool,
    /// Prepend a `"n / total"` counter to each visited slide.
    pub image_counter: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL_MS,
            play_once: false,
            image_counter: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidInterval { raw: String },
    ZeroInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidInterval { raw } => {
                write!(f, "data-interval is not a number of milliseconds: {raw:?}")
            }
            ConfigError::ZeroInterval => write!(f, "data-interval must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl CarouselConfig {
    /// Build a config from a dataset lookup (`interval`, `playOnce`,
    /// `imageCounter`).
    ///
    /// Only the literal `"true"` enables `playOnce` and only the literal
    /// `"false"` disables the counter; every other value keeps the default.
    /// A malformed interval is logged and replaced by the default.
    pub fn from_dataset<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let interval = match lookup("interval").filter(|raw| !raw.is_empty()) {
            None => DEFAULT_INTERVAL_MS,
            Some(raw) => parse_interval(raw).unwrap_or_else(|err| {
                log::warn!(target: "carousel", "{err}; using {DEFAULT_INTERVAL_MS} ms");
                DEFAULT_INTERVAL_MS
            }),
        };

        Self {
            interval,
            play_once: lookup("playOnce") == Some("true"),
            image_counter: lookup("imageCounter") != Some("false"),
        }
    }
}

/// Parse a `data-interval` value. Fractional milliseconds are truncated.
pub fn parse_interval(raw: &str) -> Result<Millis, ConfigError> {
    let trimmed = raw.trim();
    let ms = match trimmed.parse::<Millis>() {
        Ok(ms) => ms,
        Err(_) => match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 => f as Millis,
            _ => {
                return Err(ConfigError::InvalidInterval {
                    raw: raw.to_string(),
                });
            }
        },
    };
    if ms == 0 {
        return Err(ConfigError::ZeroInterval);
    }
    Ok(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> CarouselConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CarouselConfig::from_dataset(|key| map.get(key).map(String::as_str))
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config(&[]), CarouselConfig::default());
        assert_eq!(CarouselConfig::default().interval, 5000);
    }

    #[test]
    fn interval_is_read_in_milliseconds() {
        assert_eq!(config(&[("interval", "3000")]).interval, 3000);
        assert_eq!(config(&[("interval", " 1200 ")]).interval, 1200);
        assert_eq!(config(&[("interval", "750.9")]).interval, 750);
    }

    #[test]
    fn bad_interval_falls_back_to_default() {
        assert_eq!(config(&[("interval", "")]).interval, DEFAULT_INTERVAL_MS);
        assert_eq!(config(&[("interval", "soon")]).interval, DEFAULT_INTERVAL_MS);
        assert_eq!(config(&[("interval", "0")]).interval, DEFAULT_INTERVAL_MS);
        assert_eq!(config(&[("interval", "-5")]).interval, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn parse_interval_reports_the_reason() {
        assert_eq!(parse_interval("0"), Err(ConfigError::ZeroInterval));
        assert_eq!(
            parse_interval("abc"),
            Err(ConfigError::InvalidInterval {
                raw: "abc".to_string()
            })
        );
    }

    #[test]
    fn play_once_requires_literal_true() {
        assert!(config(&[("playOnce", "true")]).play_once);
        assert!(!config(&[("playOnce", "yes")]).play_once);
        assert!(!config(&[("playOnce", "")]).play_once);
    }

    #[test]
    fn only_literal_false_disables_the_counter() {
        assert!(!config(&[("imageCounter", "false")]).image_counter);
        assert!(config(&[("imageCounter", "true")]).image_counter);
        assert!(config(&[("imageCounter", "FALSE")]).image_counter);
        assert!(config(&[("imageCounter", "0")]).image_counter);
        assert!(config(&[("imageCounter", "")]).image_counter);
    }
}
