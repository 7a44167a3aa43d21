use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SafeValueError;

/// Schemes a URL may carry and still flow into a navigable binding.
/// Everything else, notably `javascript:` and `data:`, is refused.
pub const ALLOWED_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// A string proven safe to use as a navigable URL.
///
/// An instance can only exist if the string passed [`ValidatedUrl::parse`];
/// the wrapped string is kept exactly as supplied, with no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    /// Returns an instance of `ValidatedUrl` if the scheme is allowlisted.
    ///
    /// Scheme-less references (relative paths, `//host/...`, `#fragment`,
    /// `?query`) are always accepted; whether an empty string is meaningful
    /// is the caller's call.
    pub fn parse(s: String) -> Result<Self, SafeValueError> {
        match scheme_of(&s) {
            Some(scheme) if !is_allowed_scheme(scheme) => {
                Err(SafeValueError::InvalidUrlScheme(scheme.to_string()))
            }
            _ => Ok(Self(s)),
        }
    }

    /// Consumes the wrapper, handing the underlying string to the binding
    /// that is about to commit it.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The scheme is the substring before the first `:`, but only when that `:`
/// comes before any `/`, `?` or `#`; `/a:b`, `?q=a:b` and `#f:g` are
/// scheme-less references.
fn scheme_of(s: &str) -> Option<&str> {
    let colon = s.find(':')?;
    match s.find(['/', '?', '#']) {
        Some(stop) if stop < colon => None,
        _ => Some(&s[..colon]),
    }
}

fn is_allowed_scheme(scheme: &str) -> bool {
    ALLOWED_URL_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}

impl AsRef<str> for ValidatedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ValidatedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Forward to the Display implementation of the wrapped String.
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
