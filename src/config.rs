use crate::display_width::AmbiguousWidth;
use crate::error::Error;
use serde::{Deserialize, Serialize};

const AMBIGUOUS_WIDTH_VAR: &str = "RUNETEXT_AMBIGUOUS_WIDTH";
const EMBEDDED_NULLS_VAR: &str = "RUNETEXT_ALLOW_EMBEDDED_NULLS";

/// Settings of an [`Engine`](crate::Engine).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How ambiguous-width codepoints are measured.
    pub ambiguous_width: AmbiguousWidth,
    /// Decode U+0000 as a codepoint instead of treating it as end of text.
    pub allow_embedded_nulls: bool,
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig {
            key,
            value: value.to_owned(),
        }),
    }
}

impl Config {
    /// The defaults: automatic ambiguous width, NUL ends text.
    pub fn new() -> Self {
        Config::default()
    }

    /// Sets [`ambiguous_width`](Self::ambiguous_width).
    pub fn with_ambiguous_width(mut self, policy: AmbiguousWidth) -> Self {
        self.ambiguous_width = policy;
        self
    }

    /// Sets [`allow_embedded_nulls`](Self::allow_embedded_nulls).
    pub fn with_embedded_nulls(mut self, allow: bool) -> Self {
        self.allow_embedded_nulls = allow;
        self
    }

    /// Reads `RUNETEXT_AMBIGUOUS_WIDTH` and `RUNETEXT_ALLOW_EMBEDDED_NULLS`.
    ///
    /// Unset variables keep their defaults. So do values that don't parse,
    /// after a warning.
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Config::default();
        if let Some(value) = lookup(AMBIGUOUS_WIDTH_VAR) {
            match value.parse() {
                Ok(policy) => config.ambiguous_width = policy,
                Err(err) => tracing::warn!(var = AMBIGUOUS_WIDTH_VAR, %err, "ignoring"),
            }
        }
        if let Some(value) = lookup(EMBEDDED_NULLS_VAR) {
            match parse_bool("allow_embedded_nulls", &value) {
                Ok(allow) => config.allow_embedded_nulls = allow,
                Err(err) => tracing::warn!(var = EMBEDDED_NULLS_VAR, %err, "ignoring"),
            }
        }
        config
    }
}
