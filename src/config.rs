use serde::Deserialize;
use serde_json::Value;

use crate::counter::{COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::error::Result;
use crate::typing::TypingTimings;

pub const CONFIG_ELEMENT_ID: &str = "effects-config";

const DEFAULT_TYPING_START_MS: u32 = 1_000;
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
const DEFAULT_CONTACT_EMAIL: &str = "contact@ittahad.site";
const DEFAULT_CONTACT_URL: &str = "https://www.linkedin.com/in/ittahad";
const DEFAULT_PHRASES: &[&str] = &[
    "Senior Software Engineer",
    ".NET Microservices Expert",
    "Cloud Architecture Specialist",
    "CQRS & DDD Enthusiast",
    "Tech Lead & Mentor",
];

const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (10, 1_000);
const HOLD_MS_BOUNDS: (u32, u32) = (0, 10_000);
const TYPING_START_MS_BOUNDS: (u32, u32) = (0, 10_000);
const COUNTER_DURATION_MS_BOUNDS: (u32, u32) = (100, 10_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 200);

/// Raw JSON shape of the inline config block. Every key is optional.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEffectsConfig {
    phrases: Option<Vec<String>>,
    typing_delay_ms: Option<Value>,
    deleting_delay_ms: Option<Value>,
    hold_full_ms: Option<Value>,
    hold_empty_ms: Option<Value>,
    typing_start_ms: Option<Value>,
    counter_duration_ms: Option<Value>,
    counter_steps: Option<Value>,
    log_level: Option<String>,
    contact_email: Option<String>,
    contact_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub phrases: Vec<String>,
    pub typing: TypingTimings,
    pub typing_start_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub log_level: log::Level,
    pub contact_email: Option<String>,
    pub contact_url: Option<String>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|phrase| phrase.to_string()).collect(),
            typing: TypingTimings::default(),
            typing_start_ms: DEFAULT_TYPING_START_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_steps: COUNTER_STEPS,
            log_level: DEFAULT_LOG_LEVEL,
            contact_email: Some(DEFAULT_CONTACT_EMAIL.to_string()),
            contact_url: Some(DEFAULT_CONTACT_URL.to_string()),
        }
    }
}

impl EffectsConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        let raw: RawEffectsConfig = serde_json::from_str(source)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawEffectsConfig) -> Self {
        let defaults = Self::default();
        let typing_defaults = defaults.typing;

        let phrases: Vec<String> = raw
            .phrases
            .unwrap_or_default()
            .into_iter()
            .map(|phrase| phrase.trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        Self {
            phrases: if phrases.is_empty() { defaults.phrases } else { phrases },
            typing: TypingTimings {
                typing_ms: within(raw.typing_delay_ms, typing_defaults.typing_ms, TYPING_DELAY_MS_BOUNDS),
                deleting_ms: within(raw.deleting_delay_ms, typing_defaults.deleting_ms, TYPING_DELAY_MS_BOUNDS),
                hold_full_ms: within(raw.hold_full_ms, typing_defaults.hold_full_ms, HOLD_MS_BOUNDS),
                hold_empty_ms: within(raw.hold_empty_ms, typing_defaults.hold_empty_ms, HOLD_MS_BOUNDS),
            },
            typing_start_ms: within(raw.typing_start_ms, defaults.typing_start_ms, TYPING_START_MS_BOUNDS),
            counter_duration_ms: within(
                raw.counter_duration_ms,
                defaults.counter_duration_ms,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            counter_steps: within(raw.counter_steps, defaults.counter_steps, COUNTER_STEPS_BOUNDS),
            log_level: raw
                .log_level
                .and_then(|value| value.trim().parse::<log::Level>().ok())
                .unwrap_or(defaults.log_level),
            contact_email: contact(raw.contact_email, defaults.contact_email),
            contact_url: contact(raw.contact_url, defaults.contact_url),
        }
    }
}

/// Any value that is not an integer inside `bounds` falls back to `default`
/// without affecting the other keys.
fn within(value: Option<Value>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.as_u64())
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

/// An empty string hides the line; a missing key keeps the default.
fn contact(value: Option<String>, default: Option<String>) -> Option<String> {
    match value {
        Some(value) => Some(value.trim().to_string()).filter(|value| !value.is_empty()),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = EffectsConfig::from_json("{}").expect("valid json");

        assert_eq!(config, EffectsConfig::default());
        assert_eq!(config.phrases.len(), DEFAULT_PHRASES.len());
    }

    #[test]
    fn overrides_are_applied() {
        let config = EffectsConfig::from_json(
            r#"{"phrases":["Rustacean"," "],"typingDelayMs":80,"counterSteps":20,"logLevel":"debug"}"#,
        )
        .expect("valid json");

        assert_eq!(config.phrases, ["Rustacean"]);
        assert_eq!(config.typing.typing_ms, 80);
        assert_eq!(config.typing.deleting_ms, 50);
        assert_eq!(config.counter_steps, 20);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = EffectsConfig::from_json(
            r#"{"typingDelayMs":0,"counterSteps":5000,"counterDurationMs":1,"logLevel":"loud"}"#,
        )
        .expect("valid json");

        assert_eq!(config.typing.typing_ms, 100);
        assert_eq!(config.counter_steps, COUNTER_STEPS);
        assert_eq!(config.counter_duration_ms, COUNTER_DURATION_MS);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn bad_numeric_value_only_resets_its_own_key() {
        let config = EffectsConfig::from_json(
            r#"{"phrases":["Rustacean"],"typingDelayMs":-5,"counterDurationMs":5000000000,"holdFullMs":1.5,"logLevel":"warn"}"#,
        )
        .expect("valid json");

        assert_eq!(config.phrases, ["Rustacean"]);
        assert_eq!(config.typing.typing_ms, 100);
        assert_eq!(config.typing.hold_full_ms, 2_000);
        assert_eq!(config.counter_duration_ms, COUNTER_DURATION_MS);
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn contact_lines_can_be_replaced_or_hidden() {
        let config = EffectsConfig::from_json(r#"{"contactEmail":"me@example.com","contactUrl":""}"#)
            .expect("valid json");

        assert_eq!(config.contact_email.as_deref(), Some("me@example.com"));
        assert_eq!(config.contact_url, None);
        assert!(EffectsConfig::default().contact_url.is_some());
    }

    #[test]
    fn blank_phrase_list_keeps_default_phrases() {
        let config = EffectsConfig::from_json(r#"{"phrases":[]}"#).expect("valid json");

        assert_eq!(config.phrases[0], "Senior Software Engineer");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EffectsConfig::from_json("{phrases:").is_err());
    }
}
