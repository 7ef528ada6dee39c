//! EmailJS configuration.
//!
//! The server loads it with `EmailJsConfig::from_env()` after calling
//! `dotenvy::dotenv()` and renders it into the page head as `<meta>` tags.
//! The hydrated page reads the same values back with `EmailJsConfig::from_page()`.

/// Environment variable holding the EmailJS public key
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
/// Environment variable holding the EmailJS service identifier
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
/// Environment variable holding the EmailJS template identifier
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
/// Environment variable holding the `source` template parameter
pub const ENV_SIGNUP_SOURCE: &str = "SIGNUP_SOURCE";
/// Environment variable overriding the EmailJS send endpoint
pub const ENV_API_URL: &str = "EMAILJS_API_URL";

pub const DEFAULT_SIGNUP_SOURCE: &str = "Early Access Landing Page";
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const ALL_KEYS: [&str; 5] = [
    ENV_PUBLIC_KEY,
    ENV_SERVICE_ID,
    ENV_TEMPLATE_ID,
    ENV_SIGNUP_SOURCE,
    ENV_API_URL,
];

/// EmailJS settings shared by the server and the hydrated page.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsConfig {
    /// Public key, sent as `user_id`
    pub public_key: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    /// Label sent as the `source` template parameter
    pub source: String,
    /// Send endpoint
    pub api_url: String,
}

/// Borrowed view of the three identifiers a send call needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmailJsCredentials<'a> {
    pub public_key: &'a str,
    pub service_id: &'a str,
    pub template_id: &'a str,
}

impl EmailJsConfig {
    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            public_key: get(ENV_PUBLIC_KEY),
            service_id: get(ENV_SERVICE_ID),
            template_id: get(ENV_TEMPLATE_ID),
            source: get(ENV_SIGNUP_SOURCE).unwrap_or_else(|| DEFAULT_SIGNUP_SOURCE.to_string()),
            api_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration the server rendered into the document head.
    #[cfg(not(feature = "ssr"))]
    pub fn from_page() -> Self {
        let document = web_sys::window().and_then(|window| window.document());

        Self::from_lookup(|key| {
            let selector = format!("meta[name=\"{}\"]", meta_name(key));
            document
                .as_ref()?
                .query_selector(&selector)
                .ok()
                .flatten()?
                .get_attribute("content")
        })
    }

    /// The server never dispatches, so it has nothing to read back.
    #[cfg(feature = "ssr")]
    pub fn from_page() -> Self {
        Self::default()
    }

    /// Check if all three EmailJS identifiers are present
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    pub fn credentials(&self) -> Option<EmailJsCredentials<'_>> {
        Some(EmailJsCredentials {
            public_key: self.public_key.as_deref()?,
            service_id: self.service_id.as_deref()?,
            template_id: self.template_id.as_deref()?,
        })
    }

    /// `(meta name, value)` pairs for every value that is set.
    pub fn meta_entries(&self) -> Vec<(String, String)> {
        ALL_KEYS
            .iter()
            .filter_map(|key| self.value_of(key).map(|value| (meta_name(key), value.to_string())))
            .collect()
    }

    fn value_of(&self, key: &str) -> Option<&str> {
        match key {
            ENV_PUBLIC_KEY => self.public_key.as_deref(),
            ENV_SERVICE_ID => self.service_id.as_deref(),
            ENV_TEMPLATE_ID => self.template_id.as_deref(),
            ENV_SIGNUP_SOURCE => Some(&self.source),
            ENV_API_URL => Some(&self.api_url),
            _ => None,
        }
    }
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Meta tag name for a configuration key: `EMAILJS_SERVICE_ID` -> `emailjs:emailjs-service-id`
pub fn meta_name(key: &str) -> String {
    format!("emailjs:{}", key.to_ascii_lowercase().replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn full_config() -> EmailJsConfig {
        EmailJsConfig::from_lookup(lookup_from(&[
            (ENV_PUBLIC_KEY, "pk_test"),
            (ENV_SERVICE_ID, "service_abc"),
            (ENV_TEMPLATE_ID, "template_xyz"),
        ]))
    }

    #[test]
    fn test_config_with_all_identifiers() {
        let config = full_config();

        assert_eq!(config.public_key.as_deref(), Some("pk_test"));
        assert_eq!(config.service_id.as_deref(), Some("service_abc"));
        assert_eq!(config.template_id.as_deref(), Some("template_xyz"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_defaults_for_source_and_endpoint() {
        let config = EmailJsConfig::default();

        assert_eq!(config.source, DEFAULT_SIGNUP_SOURCE);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.is_configured());
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_overrides_for_source_and_endpoint() {
        let config = EmailJsConfig::from_lookup(lookup_from(&[
            (ENV_SIGNUP_SOURCE, "Early Access Landing Page Alternative"),
            (ENV_API_URL, "http://localhost:9999/send"),
        ]));

        assert_eq!(config.source, "Early Access Landing Page Alternative");
        assert_eq!(config.api_url, "http://localhost:9999/send");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = EmailJsConfig::from_lookup(lookup_from(&[
            (ENV_PUBLIC_KEY, ""),
            (ENV_SERVICE_ID, "   "),
            (ENV_TEMPLATE_ID, "template_xyz"),
            (ENV_SIGNUP_SOURCE, ""),
        ]));

        assert!(config.public_key.is_none());
        assert!(config.service_id.is_none());
        assert_eq!(config.source, DEFAULT_SIGNUP_SOURCE);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_partial_config_has_no_credentials() {
        let config = EmailJsConfig::from_lookup(lookup_from(&[
            (ENV_PUBLIC_KEY, "pk_test"),
            (ENV_SERVICE_ID, "service_abc"),
        ]));

        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_credentials_borrow_identifiers() {
        let config = full_config();
        let credentials = config.credentials().unwrap();

        assert_eq!(credentials.public_key, "pk_test");
        assert_eq!(credentials.service_id, "service_abc");
        assert_eq!(credentials.template_id, "template_xyz");
    }

    #[test]
    fn test_meta_name() {
        assert_eq!(meta_name(ENV_SERVICE_ID), "emailjs:emailjs-service-id");
        assert_eq!(meta_name(ENV_SIGNUP_SOURCE), "emailjs:signup-source");
    }

    #[test]
    fn test_meta_entries_read_back_into_same_config() {
        let config = full_config();
        let entries: HashMap<String, String> = config.meta_entries().into_iter().collect();

        let restored = EmailJsConfig::from_lookup(|key| entries.get(&meta_name(key)).cloned());

        assert_eq!(restored, config);
    }

    #[test]
    fn test_meta_entries_skip_unset_values() {
        let entries = EmailJsConfig::default().meta_entries();

        // only source and endpoint have defaults
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|(name, _)| name.starts_with("emailjs:")));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = EmailJsConfig::from_env();

        let _ = config.is_configured();
        assert!(!config.api_url.is_empty());
    }
}
