use std::fmt::{self, Debug, Display};

use serde::Deserialize;

/// Holds a credential (the JWT signing secret, the Stripe secret key) so that it cannot leak through logs: both
/// `Debug` and `Display` render `****`, even when an enclosing config struct derives `Debug`. Reading the value is
/// a deliberate act via [`Secret::reveal`].
///
/// Deserializes transparently, so a secret can sit directly in a configuration field. There is deliberately no
/// `Serialize` impl; the one place that persists a secret writes it out by hand.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Secret<T>(T);

impl<T> Secret<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn reveal(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl Secret<String> {
    /// An empty secret is a misconfiguration wherever one is used; callers check this before accepting env input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn never_prints_its_value() {
        let secret = Secret::new("hunter2".to_string());
        assert_eq!(format!("{secret}"), "****");
        assert_eq!(format!("{secret:?}"), "****");
        assert_eq!(secret.reveal(), "hunter2");
    }

    #[test]
    fn deserializes_from_a_bare_value() {
        let secret: Secret<String> = serde_json::from_str(r#""sk_test_123""#).unwrap();
        assert_eq!(secret.reveal(), "sk_test_123");
    }

    #[test]
    fn empty_string_secrets_are_detectable() {
        assert!(Secret::new(String::new()).is_empty());
        assert!(!Secret::from("x".to_string()).is_empty());
    }
}
