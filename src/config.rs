use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use crate::error::{Error, Result};
use crate::utils::string;

/// Delimiter set used when none is configured: comma, semicolon, space, tab, newline
pub const DEFAULT_DELIMITERS: &str = ",; \t\n";

/// Options controlling how tokens are post-processed after splitting
///
/// Both flags default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeOptions {
    /// Strip characters at or below U+0020 from both ends of each token
    #[serde(default = "default_trim_tokens")]
    pub trim_tokens: bool,

    /// Drop tokens that are empty after trimming
    #[serde(default = "default_ignore_empty_tokens")]
    pub ignore_empty_tokens: bool,
}

/// Text helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default = "default_delimiters")]
    pub delimiters: String,

    #[serde(default)]
    pub tokenize: TokenizeOptions,
}

fn default_trim_tokens() -> bool {
    true
}

fn default_ignore_empty_tokens() -> bool {
    true
}

fn default_delimiters() -> String {
    DEFAULT_DELIMITERS.to_string()
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            trim_tokens: default_trim_tokens(),
            ignore_empty_tokens: default_ignore_empty_tokens(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            tokenize: TokenizeOptions::default(),
        }
    }
}

impl TokenizeOptions {
    pub fn trim_tokens(mut self, trim: bool) -> Self {
        self.trim_tokens = trim;
        self
    }

    pub fn ignore_empty_tokens(mut self, ignore: bool) -> Self {
        self.ignore_empty_tokens = ignore;
        self
    }

    /// Tokenize `text` at any of `delimiters` using these options
    ///
    /// # Example
    /// ```rust,ignore
    /// let opts = TokenizeOptions::default().ignore_empty_tokens(false);
    /// assert_eq!(opts.tokenize(Some("a, ,b"), ","), vec!["a", "", "b"]);
    /// ```
    pub fn tokenize(&self, text: Option<&str>, delimiters: &str) -> Vec<String> {
        string::tokenize_with(
            text,
            delimiters,
            self.trim_tokens,
            self.ignore_empty_tokens,
        )
    }
}

impl TextConfig {
    /// Split text with the configured delimiters and tokenize options
    pub fn split(&self, text: Option<&str>) -> Vec<String> {
        self.tokenize.tokenize(text, &self.delimiters)
    }
}

#[cfg(feature = "config")]
impl TextConfig {
    /// Parse configuration from a TOML document
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TextConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading text configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply environment variable overrides
    ///
    /// Recognized variables:
    /// - `TEXT_UTILS_DELIMITERS`
    /// - `TEXT_UTILS_TRIM_TOKENS`
    /// - `TEXT_UTILS_IGNORE_EMPTY_TOKENS`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(delimiters) = lookup("TEXT_UTILS_DELIMITERS") {
            log::debug!("Overriding delimiters from environment");
            self.delimiters = delimiters;
        }
        if let Some(value) = lookup("TEXT_UTILS_TRIM_TOKENS") {
            self.tokenize.trim_tokens =
                parse_flag("TEXT_UTILS_TRIM_TOKENS", &value, self.tokenize.trim_tokens);
        }
        if let Some(value) = lookup("TEXT_UTILS_IGNORE_EMPTY_TOKENS") {
            self.tokenize.ignore_empty_tokens = parse_flag(
                "TEXT_UTILS_IGNORE_EMPTY_TOKENS",
                &value,
                self.tokenize.ignore_empty_tokens,
            );
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if !string::has_length(Some(self.delimiters.as_str())) {
            return Err(Error::validation("delimiters must not be empty"));
        }
        Ok(())
    }
}

#[cfg(feature = "config")]
fn parse_flag(key: &str, value: &str, current: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            log::warn!("Ignoring invalid boolean for {}: {:?}", key, value);
            current
        }
    }
}
