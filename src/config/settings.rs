use crate::core::{Codec, PrefixPolicy};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const STRICT_PREFIX_KEY: &str = "STRICT_PREFIX";

/// Environment variable that turns on strict prefix checking for decode
pub const STRICT_PREFIX_ENV: &str = "VLX_STRICT_PREFIX";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut map = HashMap::new();
        if let Ok(value) = env::var(STRICT_PREFIX_ENV) {
            map.insert(String::from(STRICT_PREFIX_KEY), value);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Config that ignores the environment
    pub fn empty() -> Config {
        Config {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn prefix_policy(&self) -> PrefixPolicy {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        match inner.get(STRICT_PREFIX_KEY) {
            Some(value) if is_truthy(value) => PrefixPolicy::Strict,
            _ => PrefixPolicy::Lenient,
        }
    }

    pub fn set_prefix_policy(&self, policy: PrefixPolicy) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        let value = match policy {
            PrefixPolicy::Strict => "true",
            PrefixPolicy::Lenient => "false",
        };
        inner.insert(String::from(STRICT_PREFIX_KEY), String::from(value));
    }

    pub fn codec(&self) -> Codec {
        Codec::new(self.prefix_policy())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
