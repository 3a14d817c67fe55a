//! Explicit per-request context: display locale and the signed-in user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used when nothing else is known
pub const DEFAULT_LOCALE: &str = "en";

/// Primary language subtag of the active display language, lowercased.
///
/// The API only honors the first two characters of `Accept-Language`, so
/// region suffixes are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if primary.is_empty() {
            Self(DEFAULT_LOCALE.to_string())
        } else {
            Self(primary)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two ASCII letters, the only shape the API recognizes
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 2 && self.0.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// The authenticated user as seen by the data layer
#[derive(Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: String,
    pub access_token: String,
}

impl CurrentUser {
    pub fn new<S: Into<String>>(id: S, display_name: S, access_token: S) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            access_token: access_token.into(),
        }
    }
}

// Keep bearer tokens out of logs.
impl fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentUser")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Context handed to every load; a change here re-triggers fetching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub locale: Locale,
    pub user: Option<CurrentUser>,
}

impl RequestContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale, user: None }
    }

    #[must_use]
    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_keeps_primary_subtag() {
        assert_eq!(Locale::new("de-DE").as_str(), "de");
        assert_eq!(Locale::new("PT_br").as_str(), "pt");
        assert_eq!(Locale::new("").as_str(), "en");
        assert!(Locale::new("fr").is_well_formed());
        assert!(!Locale::new("deu").is_well_formed());
    }

    #[test]
    fn test_current_user_debug_redacts_token() {
        let user = CurrentUser::new("42", "Mara", "secret-token");
        let rendered = format!("{:?}", user);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_context_equality_tracks_locale_and_user() {
        let english = RequestContext::new(Locale::new("en"));
        let german = RequestContext::new(Locale::new("de"));
        assert_ne!(english, german);

        let signed_in = english.clone().with_user(CurrentUser::new("1", "A", "t"));
        assert!(signed_in.is_authenticated());
        assert_ne!(english, signed_in);
    }
}
