use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

/// The literal question asked before reading the person type.
pub const DEFAULT_PROMPT: &str = "What type of person do you want to create?\n";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // must be declared after Deserialize!
pub struct RunConfig {
    /// Text written to the output before the single line is read.
    /// Written as-is, so it should carry its own line break.
    ///
    /// Default: [DEFAULT_PROMPT]
    pub prompt: String,
    /// Filter handed to `env_logger` when `RUST_LOG` is not set.
    /// Logs go to stderr, so this never changes what lands on stdout.
    ///
    /// Default: "warn"
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl RunConfig {
    /// Reads a config out of a json object; absent fields keep their defaults.
    /// ```
    /// use person_factory::common::config::{RunConfig, DEFAULT_PROMPT};
    ///
    /// let conf = RunConfig::from_value(serde_json::json!({"log_filter": "debug"})).unwrap();
    /// assert_eq!(conf.prompt, DEFAULT_PROMPT);
    /// assert_eq!(conf.log_filter, "debug");
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, SimpleError> {
        serde_json::from_value(value)
            .map_err(|err| SimpleError::new(format!("Invalid run config: {err}")))
    }
}
