//! text-utils - stateless string helpers
//!
//! Provides the small set of string helpers a framework keeps in its
//! utility namespace:
//! - presence checks (`has_length`, `has_text`)
//! - literal, non-overlapping substring replacement
//! - delimiter-character tokenization with optional trimming
//! - delimited lists and joining
//!
//! All helpers are reachable either directly from [`utils::string`] or
//! through the global `U` namespace.

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod error;
pub mod utils;

pub use config::{TextConfig, TokenizeOptions};
pub use error::{Error, Result};
pub use utils::{Utils, U};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{TextConfig, TokenizeOptions};
    pub use crate::error::{Error, Result};
    pub use crate::utils::string::{
        has_length, has_text, replace, tokenize, tokenize_with,
    };
    pub use crate::utils::{Utils, U};
}
