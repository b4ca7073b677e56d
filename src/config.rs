//! Runtime configuration from environment variables
//!
//! - `DROPBLOX_LOG`: log level (`off|error|warn|info|debug|trace`, default `warn`)
//! - `DROPBLOX_RENDER`: render mode (`emoji|ansi|plain`, default `emoji`)
//! - `NO_COLOR`: when set to anything non-empty, forces `plain`
//!
//! Command line flags override these.

use std::env;

use log::LevelFilter;

use crate::term::ColorMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub render: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            render: ColorMode::Emoji,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("DROPBLOX_LOG")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        let no_color = lookup("NO_COLOR")
            .map(|s| !s.is_empty())
            .unwrap_or(false);

        let render = if no_color {
            ColorMode::Plain
        } else {
            lookup("DROPBLOX_RENDER")
                .and_then(|s| ColorMode::from_str(s.trim()))
                .unwrap_or(defaults.render)
        };

        Self { log_level, render }
    }

    /// Raise the log level by `verbosity` steps above the configured one
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        for _ in 0..verbosity {
            self.log_level = match self.log_level {
                LevelFilter::Off => LevelFilter::Error,
                LevelFilter::Error => LevelFilter::Warn,
                LevelFilter::Warn => LevelFilter::Info,
                LevelFilter::Info => LevelFilter::Debug,
                LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
            };
        }
        self
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
    fn defaults_without_env() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_level_and_render() {
        let config = Config::from_lookup(lookup(&[("DROPBLOX_LOG", "debug"), ("DROPBLOX_RENDER", "ansi")]));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.render, ColorMode::Ansi);
    }

    #[test]
    fn no_color_forces_plain() {
        let config = Config::from_lookup(lookup(&[("DROPBLOX_RENDER", "ansi"), ("NO_COLOR", "1")]));
        assert_eq!(config.render, ColorMode::Plain);
    }

    #[test]
    fn garbage_falls_back() {
        let config = Config::from_lookup(lookup(&[("DROPBLOX_LOG", "loud"), ("DROPBLOX_RENDER", "sixel")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn verbosity_steps_up_and_saturates() {
        let config = Config::default().with_verbosity(1);
        assert_eq!(config.log_level, LevelFilter::Info);
        let config = Config::default().with_verbosity(9);
        assert_eq!(config.log_level, LevelFilter::Trace);
    }
}
