use std::num::NonZeroUsize;

use thiserror::Error;

use crate::modules::event_requests::adapters::mock::mock_event_requests::DEFAULT_MOCK_EVENT_COUNT;
use crate::modules::event_requests::use_cases::list_event_requests::query::DEFAULT_PAGE_SIZE;

pub const PAGE_SIZE_VAR: &str = "EVENT_REQUESTS_PAGE_SIZE";
pub const MOCK_COUNT_VAR: &str = "EVENT_REQUESTS_MOCK_COUNT";
pub const SEED_VAR: &str = "EVENT_REQUESTS_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub page_size: NonZeroUsize,
    pub mock_event_count: usize,
    /// Fixed seed for the mock collection; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            mock_event_count: DEFAULT_MOCK_EVENT_COUNT,
            seed: None,
        }
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                key,
                value,
                expected,
            }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            page_size: parse(&lookup, PAGE_SIZE_VAR, "a positive integer")?
                .unwrap_or(defaults.page_size),
            mock_event_count: parse(&lookup, MOCK_COUNT_VAR, "a non-negative integer")?
                .unwrap_or(defaults.mock_event_count),
            seed: parse(&lookup, SEED_VAR, "an unsigned 64-bit integer")?,
        })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_the_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.page_size.get(), 15);
        assert_eq!(config.mock_event_count, 50);
        assert_eq!(config.seed, None);
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (PAGE_SIZE_VAR, "10"),
            (MOCK_COUNT_VAR, " 120 "),
            (SEED_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.mock_event_count, 120);
        assert_eq!(config.seed, Some(42));
    }

    #[rstest]
    #[case(PAGE_SIZE_VAR, "0")]
    #[case(PAGE_SIZE_VAR, "-3")]
    #[case(MOCK_COUNT_VAR, "many")]
    #[case(SEED_VAR, "0x2a")]
    fn it_should_reject_invalid_values(#[case] key: &'static str, #[case] value: &str) {
        let result = Config::from_lookup(lookup(&[(key, value)]));
        assert!(matches!(result, Err(ConfigError::Invalid { key: k, .. }) if k == key));
    }

    #[rstest]
    fn it_should_name_the_variable_in_the_error() {
        let error = Config::from_lookup(lookup(&[(PAGE_SIZE_VAR, "0")])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "EVENT_REQUESTS_PAGE_SIZE must be a positive integer, got \"0\""
        );
    }
}
