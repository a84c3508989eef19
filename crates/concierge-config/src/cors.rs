use std::time::Duration;

use serde::Deserialize;

/// Cross-origin resource sharing configuration
///
/// The permitted frontend origin is the main tenant here; browsers
/// send the session cookie cross-origin, so `credentials` is on by
/// default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins: "*" or an explicit list
    #[serde(default)]
    pub origins: OriginSet,
    /// Allowed methods: "*" or an explicit list
    #[serde(default)]
    pub methods: OriginSet,
    /// Allowed request headers: "*" or an explicit list
    #[serde(default)]
    pub headers: OriginSet,
    /// Allow cookies and Authorization headers cross-origin
    #[serde(default = "default_credentials")]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

const fn default_credentials() -> bool {
    true
}

impl CorsConfig {
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either the wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Default)]
pub enum OriginSet {
    /// Match anything
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for OriginSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(value) if value == "*" => Self::Any,
            Raw::One(value) => Self::List(vec![value]),
            Raw::Many(values) if values.iter().any(|v| v == "*") => Self::Any,
            Raw::Many(values) => Self::List(values),
        })
    }
}
