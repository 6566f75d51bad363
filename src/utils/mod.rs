//! Global utilities module
//!
//! The string helpers are accessible directly from [`string`] or through the
//! `U` namespace.
//!
//! # Usage
//! ```rust
//! use text_utils::U;
//!
//! assert!(U::has_text(Some(" a ")));
//! assert_eq!(U::tokenize(Some("a, b"), ","), vec!["a", "b"]);
//! assert_eq!(U::String::join(["a", "b"], "-"), "a-b");
//! ```

pub mod string;

/// Global utilities namespace
///
/// Frequently used helpers are exposed as direct functions; every string
/// helper is available under `U::String`.
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use std::borrow::Cow;
    use std::string::String as StdString;

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Check that a string is present and not empty
    ///
    /// # Example
    /// ```rust,ignore
    /// assert!(U::has_length(Some(" ")));
    /// assert!(!U::has_length(None));
    /// ```
    pub fn has_length(text: Option<&str>) -> bool {
        string::has_length(text)
    }

    /// Check that a string contains at least one non-whitespace character
    ///
    /// # Example
    /// ```rust,ignore
    /// assert!(!U::has_text(Some("  ")));
    /// ```
    pub fn has_text(text: Option<&str>) -> bool {
        string::has_text(text)
    }

    /// Replace every occurrence of `old_pattern` in `text`
    ///
    /// # Arguments
    /// * `text` - String to examine
    /// * `old_pattern` - Substring to replace
    /// * `new_pattern` - Replacement, `None` leaves the text unchanged
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::replace("banana", "an", Some("XY")), "bXYXYa");
    /// ```
    pub fn replace<'a>(text: &'a str, old_pattern: &str, new_pattern: Option<&str>) -> Cow<'a, str> {
        string::replace(text, old_pattern, new_pattern)
    }

    /// Tokenize a string at any of the delimiter characters
    ///
    /// Tokens are trimmed and empty tokens are dropped.
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::tokenize(Some("a;b, c"), ",;"), vec!["a", "b", "c"]);
    /// ```
    pub fn tokenize(text: Option<&str>, delimiters: &str) -> Vec<StdString> {
        string::tokenize(text, delimiters)
    }
}

/// Alias for the global utilities module
pub use U as Utils;
