use serde_json::{Map, Value};
use swiper::Settings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings overrides: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings overrides must be a JSON object")]
    NotAnObject,

    #[error("invalid value for setting {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Merges a JSON object of overrides onto [`Settings::default`].
///
/// Keys use camelCase (`"animationSpeed"`, `"visiblePortion"`, ...); the `swiper*` names of the
/// class and content keys (`"swiperPrevClass"`, ...) are accepted too. Missing keys keep their
/// defaults. Any ill-typed key fails the whole merge; see [`merge_settings_json`] for the
/// forgiving variant.
pub fn settings_from_json(json: &str) -> Result<Settings, ConfigError> {
    let settings = serde_json::from_str(json)?;
    Ok(settings)
}

/// Merges a JSON object of overrides onto [`Settings::default`] one key at a time.
///
/// A key whose value does not fit its setting is skipped and reported; every other key still
/// applies. Fails only when `json` is not a JSON object.
pub fn merge_settings_json(json: &str) -> Result<(Settings, Vec<ConfigError>), ConfigError> {
    let Value::Object(overrides) = serde_json::from_str::<Value>(json)? else {
        return Err(ConfigError::NotAnObject);
    };

    let mut accepted = Map::new();
    let mut settings = Settings::default();
    let mut rejected = Vec::new();
    for (key, value) in overrides {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value(Value::Object(candidate.clone())) {
            Ok(merged) => {
                settings = merged;
                accepted = candidate;
            }
            Err(source) => rejected.push(ConfigError::InvalidKey { key, source }),
        }
    }
    Ok((settings, rejected))
}
