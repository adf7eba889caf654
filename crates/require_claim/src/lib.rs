//! Constraint requiring a named claim to be present on a token.
//!
//! [`RequireClaim`] is configured with a claim name and checks any
//! [`ClaimSource`]. The claim's value and type are irrelevant; only its
//! presence is checked.
//!
//! ```
//! use require_claim::RequireClaim;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let token = HashMap::from([("sub".to_owned(), json!("alice"))]);
//!
//! assert!(RequireClaim::new("sub").is_valid(&token));
//! assert!(!RequireClaim::new("aud").is_valid(&token));
//! ```

mod source;

pub use source::ClaimSource;

use thiserror::Error;

/// Message template used when no custom message is configured.
pub const DEFAULT_MESSAGE: &str = "The '{value}' claim is required";

/// A required claim was absent from the token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MissingClaim {
    /// Name of the missing claim.
    pub claim: String,
    /// Rendered violation message.
    pub message: String,
}

/// Requires the configured claim to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireClaim {
    claim: String,
    message: String,
}

impl RequireClaim {
    /// Require the claim called `claim`, reporting [`DEFAULT_MESSAGE`].
    #[must_use]
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            message: DEFAULT_MESSAGE.to_owned(),
        }
    }

    /// Replace the violation message template. `{value}` is replaced with
    /// the claim name.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = template.into();
        self
    }

    /// The violation message with the claim name interpolated.
    #[must_use]
    pub fn message(&self) -> String {
        self.message.replace("{value}", &self.claim)
    }

    /// Returns true iff `token` carries the claim.
    #[must_use]
    pub fn is_valid<T: ClaimSource + ?Sized>(&self, token: &T) -> bool {
        token.claim(&self.claim).is_some()
    }

    /// Check `token`, describing the violation on failure.
    ///
    /// # Errors
    ///
    /// Returns [`MissingClaim`] when the claim is absent.
    pub fn validate<T: ClaimSource + ?Sized>(&self, token: &T) -> Result<(), MissingClaim> {
        if self.is_valid(token) {
            return Ok(());
        }
        Err(MissingClaim {
            claim: self.claim.clone(),
            message: self.message(),
        })
    }
}
