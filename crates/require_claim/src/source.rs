//! Named-claim lookup for token-like values.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A token that exposes its claims by name.
///
/// Only presence matters to [`crate::RequireClaim`]; implementors decide how
/// claims are stored and parsed.
pub trait ClaimSource {
    /// Look up the claim called `name`.
    fn claim(&self, name: &str) -> Option<&Value>;
}

impl<S: BuildHasher> ClaimSource for HashMap<String, Value, S> {
    fn claim(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl ClaimSource for BTreeMap<String, Value> {
    fn claim(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl ClaimSource for Map<String, Value> {
    fn claim(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<T: ClaimSource + ?Sized> ClaimSource for &T {
    fn claim(&self, name: &str) -> Option<&Value> {
        (**self).claim(name)
    }
}
